//! Floating chat widget: open/close controls, input handling and the
//! message list.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, KeyboardEvent};

use crate::constants::{
    CSS_ACTIVE, CSS_MESSAGE, ID_CHATBOT_MESSAGES, ID_CHATBOT_TOGGLE, ID_CHATBOT_WIDGET,
    ID_CLOSE_CHATBOT, ID_SEND_BTN, ID_USER_INPUT,
};
use crate::dom_utils::{html_input, set_class};
use crate::messages::Message;
use crate::models::ChatSender;
use crate::state::{dispatch, SharedState};

// Setup event handlers for the chat widget
pub fn setup(document: &Document, app: &SharedState) -> Result<(), JsValue> {
    if let Some(toggle) = document.get_element_by_id(ID_CHATBOT_TOGGLE) {
        let app = app.clone();
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: Event| {
            dispatch(&app, Message::ToggleChat);
        }));
        toggle.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    if let Some(close) = document.get_element_by_id(ID_CLOSE_CHATBOT) {
        let app = app.clone();
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: Event| {
            dispatch(&app, Message::CloseChat);
        }));
        close.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    if let Some(send) = document.get_element_by_id(ID_SEND_BTN) {
        let app = app.clone();
        let document_clone = document.clone();
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: Event| {
            send_current_input(&document_clone, &app);
        }));
        send.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    if let Some(input) = document.get_element_by_id(ID_USER_INPUT) {
        let app = app.clone();
        let document_clone = document.clone();
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                send_current_input(&document_clone, &app);
            }
        }));
        input.add_event_listener_with_callback("keypress", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    Ok(())
}

fn send_current_input(document: &Document, app: &SharedState) {
    if let Some(input) = html_input(document, ID_USER_INPUT) {
        dispatch(app, Message::SendChatMessage(input.value()));
    }
}

pub fn set_open(document: &Document, open: bool) {
    if let Some(widget) = document.get_element_by_id(ID_CHATBOT_WIDGET) {
        set_class(&widget, CSS_ACTIVE, open);
    }
}

pub fn clear_input(document: &Document) {
    if let Some(input) = html_input(document, ID_USER_INPUT) {
        input.set_value("");
    }
}

/// Append one message and keep the list scrolled to the newest entry.
pub fn append_message(document: &Document, sender: ChatSender, text: &str) -> Result<(), JsValue> {
    let container = match document.get_element_by_id(ID_CHATBOT_MESSAGES) {
        Some(c) => c,
        None => return Ok(()),
    };

    let message = document.create_element("div")?;
    message.class_list().add_2(CSS_MESSAGE, sender.css_class())?;
    // Plain text: user input must never be interpreted as markup.
    message.set_text_content(Some(text));
    container.append_child(&message)?;

    container.set_scroll_top(container.scroll_height());
    Ok(())
}
