//! Route declarations. `app.rs` builds the router tree from the same
//! segment constants, and `config::check_config` walks this table to
//! catch sidebar links with no route behind them.

pub const FLOATS_SEGMENT: &str = "floats";
pub const REMINDERS_SEGMENT: &str = "reminders";

/// A page module that a route can bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Floats,
    Reminders,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Floats => "Floats",
            Page::Reminders => "Reminders",
        }
    }
}

/// Shared visual shell wrapping a group of routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Sidebar,
}

impl Layout {
    pub fn name(self) -> &'static str {
        match self {
            Layout::Sidebar => "sidebar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteNode {
    /// Rendered when the layout's base path is requested directly.
    Index(Page),
    Path { segment: &'static str, page: Page },
}

impl RouteNode {
    pub fn page(&self) -> Page {
        match self {
            RouteNode::Index(page) | RouteNode::Path { page, .. } => *page,
        }
    }

    /// The declared segment, `None` for the index route.
    pub fn segment(&self) -> Option<&'static str> {
        match self {
            RouteNode::Index(_) => None,
            RouteNode::Path { segment, .. } => Some(*segment),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutNode {
    pub layout: Layout,
    pub children: &'static [RouteNode],
}

pub static ROUTES: &[LayoutNode] = &[LayoutNode {
    layout: Layout::Sidebar,
    children: &[
        RouteNode::Index(Page::Home),
        RouteNode::Path {
            segment: FLOATS_SEGMENT,
            page: Page::Floats,
        },
        RouteNode::Path {
            segment: REMINDERS_SEGMENT,
            page: Page::Reminders,
        },
    ],
}];

/// Look up the page a link url points at, with the layout it is nested in.
/// Surrounding slashes are ignored; matching at runtime is left to the
/// router.
pub fn declared_route(routes: &[LayoutNode], url: &str) -> Option<(Layout, Page)> {
    let path = url.trim_matches('/');
    routes.iter().find_map(|node| {
        node.children
            .iter()
            .find(|child| match child.segment() {
                None => path.is_empty(),
                Some(segment) => segment == path,
            })
            .map(|child| (node.layout, child.page()))
    })
}
