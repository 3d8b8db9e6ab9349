use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, MouseEvent};

use crate::constants::{CSS_DARK_MODE, CSS_LIGHT_MODE, ICON_MOON, ICON_SUN, ID_THEME_TOGGLE};
use crate::dom_utils::set_class;
use crate::messages::Message;
use crate::state::{dispatch, SharedState};
use crate::theme::ThemeMode;

/// Wire `#theme-toggle`.
pub fn setup(document: &Document, app: &SharedState) -> Result<(), JsValue> {
    if let Some(btn) = document.get_element_by_id(ID_THEME_TOGGLE) {
        let app = app.clone();
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: MouseEvent| {
            dispatch(&app, Message::ToggleTheme);
        }));
        btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    Ok(())
}

/// Put the mode class on `<body>` and swap the toggle's icon.
pub fn render(document: &Document, mode: ThemeMode) {
    if let Some(body) = document.body() {
        set_class(&body, CSS_LIGHT_MODE, mode == ThemeMode::Light);
        set_class(&body, CSS_DARK_MODE, mode == ThemeMode::Dark);
    }

    let icon = document
        .get_element_by_id(ID_THEME_TOGGLE)
        .and_then(|btn| btn.query_selector("i").ok().flatten());
    if let Some(icon) = icon {
        set_class(&icon, ICON_MOON, mode.icon_class() == ICON_MOON);
        set_class(&icon, ICON_SUN, mode.icon_class() == ICON_SUN);
    }
}
