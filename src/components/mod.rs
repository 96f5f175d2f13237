pub mod layout;
pub mod sidebar;
