//! Page-level handlers that carry no component state: in-page navigation
//! and the contact form.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlFormElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};

use crate::constants::{SEL_CONTACT_FORM, SEL_IN_PAGE_ANCHORS};
use crate::dom_utils::query_all;
use crate::messages::Message;
use crate::state::{dispatch, SharedState};

pub fn setup_ui_event_handlers(document: &Document, app: &SharedState) -> Result<(), JsValue> {
    setup_smooth_scroll(document)?;
    setup_contact_form(document, app)?;
    Ok(())
}

/// `<a href="#section">` links scroll smoothly instead of jumping.
fn setup_smooth_scroll(document: &Document) -> Result<(), JsValue> {
    for anchor in query_all(document, SEL_IN_PAGE_ANCHORS) {
        let document_clone = document.clone();
        let link = anchor.clone();
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(target) = scroll_target(&document_clone, &link) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }));
        anchor.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    Ok(())
}

/// Element referenced by the link's `href` (`"#"` alone matches nothing).
fn scroll_target(document: &Document, link: &Element) -> Option<Element> {
    let href = link.get_attribute("href")?;
    if href.len() < 2 {
        return None;
    }
    document.query_selector(&href).ok().flatten()
}

/// `.contact-form` has no backend: acknowledge and reset.
fn setup_contact_form(document: &Document, app: &SharedState) -> Result<(), JsValue> {
    if let Ok(Some(form)) = document.query_selector(SEL_CONTACT_FORM) {
        let app = app.clone();
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: Event| {
            e.prevent_default();
            dispatch(&app, Message::ContactFormSubmitted);
        }));
        form.add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    Ok(())
}

pub fn reset_contact_form(document: &Document) {
    let form = document
        .query_selector(SEL_CONTACT_FORM)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok());
    if let Some(form) = form {
        form.reset();
    }
}
