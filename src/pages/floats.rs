use leptos::prelude::*;

use crate::document::set_page_title;
use crate::routes::Page;

#[component]
pub fn FloatsPage() -> impl IntoView {
    Effect::new(move |_| set_page_title(Page::Floats.title()));

    view! {
        <div class="page floats-page">
            <h2>"Floats"</h2>
            <p class="page-description">"No floats yet."</p>
        </div>
    }
}
