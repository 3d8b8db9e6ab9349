use std::rc::Rc;

use wasm_bindgen::prelude::*;

mod macros;

pub mod cart;
pub mod chat;
pub mod command_executors;
pub mod components;
pub mod config;
pub mod constants;
pub mod dom_utils;
pub mod messages;
pub mod models;
pub mod notification;
pub mod reducers;
pub mod state;
pub mod storage;
pub mod theme;
pub mod ui;
pub mod update;
pub mod utils;

use chat::ChatResponder;
use config::AppConfig;
use messages::Message;
use storage::{BrowserStorage, KeyValueStore};

// Runs when the WASM module is instantiated
#[wasm_bindgen(start)]
pub fn start() {
    // Initialize better panic messages
    console_error_panic_hook::set_once();
}

/// Bootstrap the storefront page.  Call once the DOM is ready.
///
/// `config` is an optional object, e.g. `mount({ replyDelayMs: 0 })`.
#[wasm_bindgen]
pub fn mount(config: JsValue) -> Result<(), JsValue> {
    let config = AppConfig::from_js(config)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;

    let storage: Rc<dyn KeyValueStore> = Rc::new(BrowserStorage::local());
    let app = state::shared(state::AppState::new(storage, config));

    ui::setup::mount_page(&document, &app)?;
    state::dispatch(&app, Message::PageLoaded);

    debug_log!("Storefront mounted");
    Ok(())
}

/// Canned assistant reply for `input`, without touching the page.
#[wasm_bindgen]
pub fn respond(input: &str) -> String {
    ChatResponder::default().respond(input).to_string()
}
