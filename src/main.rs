mod app;
mod components;
mod config;
mod document;
mod error;
mod navigation;
mod pages;
mod routes;

use app::App;
use leptos::logging::warn;

fn main() {
    console_error_panic_hook::set_once();

    if cfg!(debug_assertions) {
        if let Err(err) = config::check_config(routes::ROUTES, &navigation::NAV_ITEMS) {
            warn!("navigation config: {err}");
        }
    }

    leptos::mount::mount_to_body(App);
}
