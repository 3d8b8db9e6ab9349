// src/messages.rs
//
// Events raised by the page and the side effects the reducers ask for.
//
use crate::models::ChatSender;
use crate::theme::ThemeMode;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Page mounted: paint persisted state and greet the visitor.
    PageLoaded,

    // Theme
    ToggleTheme,

    // Chat widget
    ToggleChat,
    CloseChat,
    SendChatMessage(String),      // Raw input field value
    BotReplyReady(String),        // Delayed reply whose timer fired

    // Cart
    AddToCart {
        name: String,
        price_text: String,           // Displayed price, e.g. "$79.99"
    },

    ContactFormSubmitted,
}

/// DOM work requested by a reducer.  Executed by
/// `command_executors::execute` after the state borrow is released.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ApplyTheme(ThemeMode),
    SetChatOpen(bool),
    AppendChatMessage {
        sender: ChatSender,
        text: String,
    },
    ClearChatInput,
    /// One-shot, uncancellable timer.  Overlapping replies each get their
    /// own timer and land in completion order.
    ScheduleBotReply {
        reply: String,
        delay_ms: u32,
    },
    RenderCartCount(u32),
    ShowNotification(String),
    ResetContactForm,
}

impl Command {
    pub fn bot_message(text: impl Into<String>) -> Self {
        Command::AppendChatMessage { sender: ChatSender::Bot, text: text.into() }
    }

    pub fn user_message(text: impl Into<String>) -> Self {
        Command::AppendChatMessage { sender: ChatSender::User, text: text.into() }
    }
}
