const APP_NAME: &str = "Floaty";

pub fn page_title(title: &str) -> String {
    format!("{title} \u{b7} {APP_NAME}")
}

/// Set `document.title` for the current page. No-op outside a browser.
pub fn set_page_title(title: &str) {
    if let Some(doc) = web_sys::window().and_then(|window| window.document()) {
        doc.set_title(&page_title(title));
    }
}
