use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::{path, StaticSegment};

use crate::components::layout::SidebarLayout;
use crate::pages::floats::FloatsPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::reminders::RemindersPage;
use crate::routes::{FLOATS_SEGMENT, REMINDERS_SEGMENT};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <ParentRoute path=path!("") view=SidebarLayout>
                    <Route path=path!("") view=HomePage />
                    <Route path=(StaticSegment(FLOATS_SEGMENT),) view=FloatsPage />
                    <Route path=(StaticSegment(REMINDERS_SEGMENT),) view=RemindersPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
