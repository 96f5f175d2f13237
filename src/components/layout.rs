use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::sidebar::AppSidebar;

#[component]
pub fn SidebarLayout() -> impl IntoView {
    view! {
        <div class="app-layout">
            <AppSidebar />
            <main class="content">
                <Outlet />
            </main>
        </div>
    }
}
