//! Transient on-screen notification.
//! Appends a fixed-position message to `<body>` that slides in, stays for a
//! few seconds, slides out and is removed.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::constants::ID_ANIMATION_STYLES;

const NOTIFICATION_CSS: &str = "position:fixed;top:20px;right:20px;background-color:#28a745;color:white;padding:15px 20px;border-radius:5px;z-index:1000;animation:slideIn 0.3s ease;";

const KEYFRAMES_CSS: &str = "
@keyframes slideIn{from{transform:translateX(400px);opacity:0}to{transform:translateX(0);opacity:1}}
@keyframes slideOut{from{transform:translateX(0);opacity:1}to{transform:translateX(400px);opacity:0}}
";

pub fn show(document: &Document, message: &str, show_ms: u32, exit_ms: u32) {
    let body = match document.body() {
        Some(b) => b,
        None => return,
    };
    let notification = match document
        .create_element("div")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        Some(el) => el,
        None => return,
    };

    notification.style().set_css_text(NOTIFICATION_CSS);
    notification.set_text_content(Some(message));
    if body.append_child(&notification).is_err() {
        return;
    }

    Timeout::new(show_ms, move || {
        let _ = notification
            .style()
            .set_property("animation", &format!("slideOut {}ms ease", exit_ms));
        Timeout::new(exit_ms, move || notification.remove()).forget();
    })
    .forget();
}

/// Inject the slide keyframes once per page.
pub fn ensure_styles(document: &Document) {
    if document.get_element_by_id(ID_ANIMATION_STYLES).is_some() {
        return;
    }
    let style = match document.create_element("style") {
        Ok(s) => s,
        Err(_) => return,
    };
    style.set_id(ID_ANIMATION_STYLES);
    style.set_text_content(Some(KEYFRAMES_CSS));

    if let Some(head) = document.head() {
        let _ = head.append_child(&style);
    } else if let Some(body) = document.body() {
        let _ = body.append_child(&style);
    }
}
