use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::components::{cart_counter, chat_widget, theme_toggle};
use crate::notification;
use crate::state::SharedState;
use crate::ui::events;

/// Attach every listener the page needs.  Call once per page: listeners are
/// never detached, so a second call would double every handler.
pub fn mount_page(document: &Document, app: &SharedState) -> Result<(), JsValue> {
    notification::ensure_styles(document);

    theme_toggle::setup(document, app)?;
    chat_widget::setup(document, app)?;
    cart_counter::setup(document, app)?;
    events::setup_ui_event_handlers(document, app)?;
    Ok(())
}
