//! Constants for the storefront frontend
//!
//! Storage keys, DOM hooks and default timings live here so the reducers,
//! components and tests agree on a single spelling.

// Storage keys
pub const STORAGE_KEY_THEME: &str = "theme";
pub const STORAGE_KEY_CART: &str = "cart";

// Theme classes applied to <body> (and persisted verbatim)
pub const CSS_LIGHT_MODE: &str = "light-mode";
pub const CSS_DARK_MODE: &str = "dark-mode";

// Font Awesome icons used by the theme toggle
pub const ICON_MOON: &str = "fa-moon";
pub const ICON_SUN: &str = "fa-sun";

// Element ids
pub const ID_THEME_TOGGLE: &str = "theme-toggle";
pub const ID_CHATBOT_TOGGLE: &str = "chatbot-toggle";
pub const ID_CHATBOT_WIDGET: &str = "chatbot-widget";
pub const ID_CLOSE_CHATBOT: &str = "close-chatbot";
pub const ID_USER_INPUT: &str = "user-input";
pub const ID_SEND_BTN: &str = "send-btn";
pub const ID_CHATBOT_MESSAGES: &str = "chatbot-messages";
pub const ID_ANIMATION_STYLES: &str = "storefront-animations";

// Selectors
pub const SEL_CART_COUNT: &str = ".cart-count";
pub const SEL_ADD_TO_CART: &str = ".add-to-cart";
pub const SEL_PRODUCT_CARD: &str = ".product-card";
pub const SEL_PRODUCT_NAME: &str = "h3";
pub const SEL_PRODUCT_PRICE: &str = ".price";
pub const SEL_IN_PAGE_ANCHORS: &str = "a[href^=\"#\"]";
pub const SEL_CONTACT_FORM: &str = ".contact-form";

// CSS classes
pub const CSS_ACTIVE: &str = "active";
pub const CSS_MESSAGE: &str = "message";
pub const CSS_USER_MESSAGE: &str = "user-message";
pub const CSS_BOT_MESSAGE: &str = "bot-message";

// Timings (milliseconds)
pub const DEFAULT_REPLY_DELAY_MS: u32 = 500;
pub const DEFAULT_NOTIFICATION_MS: u32 = 3000;
pub const DEFAULT_NOTIFICATION_EXIT_MS: u32 = 300;

// Copy
pub const DEFAULT_WELCOME_MESSAGE: &str = "Welcome to ShopHub! How can I help you today? 😊";
pub const CONTACT_THANKS_MESSAGE: &str = "Thank you! Your message has been sent.";
