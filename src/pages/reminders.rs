use leptos::prelude::*;

use crate::document::set_page_title;
use crate::routes::Page;

#[component]
pub fn RemindersPage() -> impl IntoView {
    Effect::new(move |_| set_page_title(Page::Reminders.title()));

    view! {
        <div class="page reminders-page">
            <h2>"Reminders"</h2>
            <p class="page-description">"No reminders scheduled."</p>
        </div>
    }
}
