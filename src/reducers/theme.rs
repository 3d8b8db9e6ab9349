use crate::messages::{Command, Message};
use crate::state::AppState;

/// Returns true if the message was handled by this reducer
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::ToggleTheme => {
            let mode = state.theme.toggle();
            commands.push(Command::ApplyTheme(mode));
            true
        }
        _ => false,
    }
}
