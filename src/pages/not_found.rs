use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::document::set_page_title;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    Effect::new(move |_| {
        if cfg!(debug_assertions) {
            log!("no route for {}", location.pathname.get_untracked());
        }
        set_page_title("Not found");
    });

    view! {
        <div class="page not-found-page">
            <p>"Page not found"</p>
            <A href="/">"Back to Home"</A>
        </div>
    }
}
