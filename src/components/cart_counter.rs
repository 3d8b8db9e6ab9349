//! Cart badge and the "add to cart" buttons on product cards.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::constants::{
    SEL_ADD_TO_CART, SEL_CART_COUNT, SEL_PRODUCT_CARD, SEL_PRODUCT_NAME, SEL_PRODUCT_PRICE,
};
use crate::dom_utils::{query_all, text_of};
use crate::messages::Message;
use crate::state::{dispatch, SharedState};

pub fn setup(document: &Document, app: &SharedState) -> Result<(), JsValue> {
    for button in query_all(document, SEL_ADD_TO_CART) {
        let app = app.clone();
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: Event| {
            let card = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(SEL_PRODUCT_CARD).ok().flatten());
            if let Some(msg) = card.as_ref().and_then(read_product) {
                dispatch(&app, msg);
            }
        }));
        button.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    Ok(())
}

/// Build the add-to-cart message from a `.product-card`.
pub fn read_product(card: &Element) -> Option<Message> {
    let name = text_of(card, SEL_PRODUCT_NAME)?;
    let price_text = text_of(card, SEL_PRODUCT_PRICE)?;
    Some(Message::AddToCart { name, price_text })
}

pub fn render(document: &Document, count: u32) {
    if let Ok(Some(badge)) = document.query_selector(SEL_CART_COUNT) {
        badge.set_text_content(Some(&count.to_string()));
    }
}
