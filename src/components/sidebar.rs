use leptos::prelude::*;
use leptos_router::components::A;

use crate::navigation::{NavEntry, NAV_ITEMS};

#[component]
pub fn AppSidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"Floaty"</h1>
            </div>
            <div class="sidebar-content">
                <div class="sidebar-group">
                    <div class="sidebar-group-content">
                        <ul class="sidebar-menu">
                            <For
                                each=|| NAV_ITEMS.iter()
                                key=|entry| entry.title
                                children=|entry| {
                                    view! { <SidebarMenuItem entry=entry /> }
                                }
                            />
                        </ul>
                    </div>
                </div>
            </div>
        </aside>
    }
}

/// `A` marks the current entry with `aria-current="page"`; `exact` keeps
/// "/" from matching every page.
#[component]
fn SidebarMenuItem(entry: &'static NavEntry) -> impl IntoView {
    view! {
        <li class="sidebar-menu-item">
            <div class="sidebar-menu-button">
                <A href=entry.url exact=true>
                    <span class="sidebar-icon" aria-hidden="true">{entry.icon.glyph()}</span>
                    <span class="sidebar-label">{entry.title}</span>
                </A>
            </div>
        </li>
    }
}
