use crate::messages::{Command, Message};
use crate::reducers::chat::post_bot_message;
use crate::state::AppState;
use crate::utils::{parse_price, strip_currency};
use crate::warn_log;

/// Returns true if the message was handled by this reducer
pub fn update(state: &mut AppState, msg: &Message, cmds: &mut Vec<Command>) -> bool {
    match msg {
        Message::AddToCart { name, price_text } => {
            let price_digits = strip_currency(price_text);
            let price = parse_price(&price_digits).unwrap_or_else(|| {
                warn_log!("Unreadable price {:?} for {:?}, recording 0", price_text, name);
                0.0
            });

            state.cart.add_item(name, price);
            cmds.push(Command::RenderCartCount(state.cart.total_quantity()));

            // Confirm in the chat when the visitor has it open, otherwise
            // fall back to a transient notification.
            if state.chat_open {
                let confirmation =
                    format!("Great! I've added \"{}\" (${}) to your cart!", name, price_digits);
                post_bot_message(state, cmds, &confirmation);
            } else {
                cmds.push(Command::ShowNotification(format!("Added {} to cart", name)));
            }
            true
        }
        _ => false,
    }
}
