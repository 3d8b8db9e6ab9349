pub mod cart_counter;
pub mod chat_widget;
pub mod theme_toggle;
