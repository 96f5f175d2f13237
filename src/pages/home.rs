use leptos::prelude::*;
use leptos_router::components::A;

use crate::document::set_page_title;
use crate::routes::Page;

#[component]
pub fn HomePage() -> impl IntoView {
    Effect::new(move |_| set_page_title(Page::Home.title()));

    view! {
        <div class="page home-page">
            <h2>"Welcome to Floaty"</h2>
            <p class="page-description">
                "Keep floating notes and timed reminders one click away."
            </p>

            <div class="card-grid">
                <div class="card">
                    <h3>"Floats"</h3>
                    <p>"Small windows that stay on top while you work"</p>
                    <A href="/floats" attr:class="btn btn-primary">"Open Floats"</A>
                </div>
                <div class="card">
                    <h3>"Reminders"</h3>
                    <p>"One-off and recurring notifications"</p>
                    <A href="/reminders" attr:class="btn btn-primary">"Open Reminders"</A>
                </div>
            </div>
        </div>
    }
}
