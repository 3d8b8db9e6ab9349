use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// One line of the persisted cart.  Field names match the JSON written to
/// `localStorage["cart"]` by earlier versions of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    /// Older pages stored an unreadable price as `null`; it reads back as 0.
    #[serde(default, deserialize_with = "price_or_zero")]
    pub price: f64,
    pub quantity: u32,
}

fn price_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    User,
    Bot,
}

impl ChatSender {
    /// Modifier class used on the rendered `.message` div.
    pub fn css_class(self) -> &'static str {
        match self {
            ChatSender::User => crate::constants::CSS_USER_MESSAGE,
            ChatSender::Bot => crate::constants::CSS_BOT_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub id: Uuid,
    pub sender: ChatSender,
    pub text: String,
    pub at: DateTime<Utc>,
}

impl ChatEntry {
    pub fn new(sender: ChatSender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            at: Utc::now(),
        }
    }
}
