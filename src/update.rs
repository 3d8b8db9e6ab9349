// src/update.rs
//
use crate::constants::CONTACT_THANKS_MESSAGE;
use crate::messages::{Command, Message};
use crate::reducers::chat::post_bot_message;
use crate::state::AppState;

/// Apply a message to the state and return the DOM commands it produced.
///
/// Nothing here touches the DOM; all page work is expressed as commands.
pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    if crate::reducers::theme::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::chat::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::cart::update(state, &msg, &mut commands) {
        return commands;
    }

    match msg {
        Message::PageLoaded => {
            commands.push(Command::ApplyTheme(state.theme.mode()));
            commands.push(Command::RenderCartCount(state.cart.total_quantity()));
            let welcome = state.config.welcome_message.clone();
            post_bot_message(state, &mut commands, &welcome);
        }
        Message::ContactFormSubmitted => {
            commands.push(Command::ShowNotification(CONTACT_THANKS_MESSAGE.to_string()));
            commands.push(Command::ResetContactForm);
        }
        other => {
            crate::warn_log!("Unhandled message: {:?}", other);
        }
    }

    commands
}
