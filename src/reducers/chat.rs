//! Chat widget reducer: visibility, user turns and bot replies.

use crate::debug_log;
use crate::messages::{Command, Message};
use crate::models::ChatSender;
use crate::state::AppState;

/// Returns `true` when the message was handled by the chat reducer.
pub fn update(state: &mut AppState, msg: &Message, cmds: &mut Vec<Command>) -> bool {
    match msg {
        Message::ToggleChat => {
            state.chat_open = !state.chat_open;
            cmds.push(Command::SetChatOpen(state.chat_open));
            true
        }
        Message::CloseChat => {
            state.chat_open = false;
            cmds.push(Command::SetChatOpen(false));
            true
        }
        Message::SendChatMessage(raw) => {
            let text = raw.trim();
            if text.is_empty() {
                return true;
            }

            state.transcript.push(ChatSender::User, text);
            cmds.push(Command::user_message(text));
            cmds.push(Command::ClearChatInput);

            let reply = state.responder.respond(text);
            debug_log!("Chat: {:?} -> {:?}", text, reply);
            if state.config.reply_delay_ms == 0 {
                post_bot_message(state, cmds, reply);
            } else {
                cmds.push(Command::ScheduleBotReply {
                    reply: reply.to_string(),
                    delay_ms: state.config.reply_delay_ms,
                });
            }
            true
        }
        Message::BotReplyReady(reply) => {
            post_bot_message(state, cmds, reply);
            true
        }
        _ => false,
    }
}

/// Record a bot turn and display it.
pub fn post_bot_message(state: &mut AppState, cmds: &mut Vec<Command>, text: &str) {
    state.transcript.push(ChatSender::Bot, text);
    cmds.push(Command::bot_message(text));
}
