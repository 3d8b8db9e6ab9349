use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::components::{cart_counter, chat_widget, theme_toggle};
use crate::messages::{Command, Message};
use crate::state::{dispatch, SharedState};
use crate::{notification, ui, warn_log};

pub fn execute(app: &SharedState, cmd: Command) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return,
    };

    match cmd {
        Command::ApplyTheme(mode) => theme_toggle::render(&document, mode),
        Command::SetChatOpen(open) => chat_widget::set_open(&document, open),
        Command::AppendChatMessage { sender, text } => {
            if let Err(e) = chat_widget::append_message(&document, sender, &text) {
                warn_log!("Failed to render chat message: {:?}", e);
            }
        }
        Command::ClearChatInput => chat_widget::clear_input(&document),
        Command::ScheduleBotReply { reply, delay_ms } => {
            let app = Rc::clone(app);
            spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                dispatch(&app, Message::BotReplyReady(reply));
            });
        }
        Command::RenderCartCount(count) => cart_counter::render(&document, count),
        Command::ShowNotification(text) => {
            let (show_ms, exit_ms) = {
                let state = app.borrow();
                (state.config.notification_ms, state.config.notification_exit_ms)
            };
            notification::show(&document, &text, show_ms, exit_ms);
        }
        Command::ResetContactForm => ui::events::reset_contact_form(&document),
    }
}
