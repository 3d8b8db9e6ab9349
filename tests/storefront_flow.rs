//! End-to-end reducer flows against an in-memory store.
//!
//! These run natively: `update` never touches the DOM, it only returns the
//! commands the executor would perform in the browser.

use std::rc::Rc;

use storefront_frontend::config::AppConfig;
use storefront_frontend::messages::{Command, Message};
use storefront_frontend::models::ChatSender;
use storefront_frontend::state::AppState;
use storefront_frontend::storage::{KeyValueStore, MemoryStorage};
use storefront_frontend::theme::ThemeMode;
use storefront_frontend::update::update;

const HI_REPLY: &str = "Hi there! 👋 How can I help you find the perfect product?";

fn config(reply_delay_ms: u32) -> AppConfig {
    AppConfig {
        reply_delay_ms,
        ..AppConfig::default()
    }
}

fn fresh_state(reply_delay_ms: u32) -> (Rc<MemoryStorage>, AppState) {
    let store = Rc::new(MemoryStorage::new());
    let state = AppState::new(store.clone(), config(reply_delay_ms));
    (store, state)
}

fn add_to_cart(name: &str, price: &str) -> Message {
    Message::AddToCart {
        name: name.to_string(),
        price_text: price.to_string(),
    }
}

#[test]
fn page_load_paints_persisted_state_and_greets() {
    let store = Rc::new(MemoryStorage::new());
    store.set("theme", "dark-mode");
    store.set(
        "cart",
        r#"[{"id":"laptop","name":"Laptop","price":999.99,"quantity":2}]"#,
    );
    let mut state = AppState::new(store, config(500));

    let cmds = update(&mut state, Message::PageLoaded);

    assert_eq!(
        cmds,
        vec![
            Command::ApplyTheme(ThemeMode::Dark),
            Command::RenderCartCount(2),
            Command::bot_message(state.config.welcome_message.clone()),
        ]
    );
    assert_eq!(state.transcript.len(), 1);
    assert_eq!(state.transcript.entries()[0].sender, ChatSender::Bot);
}

#[test]
fn page_load_with_corrupt_cart_shows_zero() {
    let store = Rc::new(MemoryStorage::with_entry("cart", "[{oops"));
    let mut state = AppState::new(store, config(500));

    let cmds = update(&mut state, Message::PageLoaded);
    assert!(cmds.contains(&Command::RenderCartCount(0)));
}

#[test]
fn page_load_survives_oversized_stored_quantities() {
    let store = Rc::new(MemoryStorage::with_entry(
        "cart",
        r#"[{"id":"a","name":"A","price":1,"quantity":3000000000},{"id":"b","name":"B","price":null,"quantity":3000000000}]"#,
    ));
    let mut state = AppState::new(store, config(500));

    let cmds = update(&mut state, Message::PageLoaded);
    assert!(cmds.contains(&Command::RenderCartCount(u32::MAX)));
}

#[test]
fn chat_message_schedules_a_delayed_reply() {
    let (_, mut state) = fresh_state(500);

    let cmds = update(&mut state, Message::SendChatMessage("hi there".into()));
    assert_eq!(
        cmds,
        vec![
            Command::user_message("hi there"),
            Command::ClearChatInput,
            Command::ScheduleBotReply {
                reply: HI_REPLY.to_string(),
                delay_ms: 500,
            },
        ]
    );
    // Only the user turn is recorded until the timer fires.
    assert_eq!(state.transcript.len(), 1);

    let cmds = update(&mut state, Message::BotReplyReady(HI_REPLY.into()));
    assert_eq!(cmds, vec![Command::bot_message(HI_REPLY)]);
    assert_eq!(state.transcript.last().map(|e| e.sender), Some(ChatSender::Bot));
}

#[test]
fn zero_delay_replies_immediately() {
    let (_, mut state) = fresh_state(0);

    let cmds = update(&mut state, Message::SendChatMessage("xyzzy".into()));
    assert_eq!(cmds.len(), 3);
    assert_eq!(
        cmds[2],
        Command::bot_message(
            "Thanks for your question! I didn't quite understand that. Could you ask about our products, shipping, returns, or any other store information?"
        )
    );
    assert_eq!(state.transcript.len(), 2);
}

#[test]
fn blank_input_is_ignored() {
    let (_, mut state) = fresh_state(500);

    assert!(update(&mut state, Message::SendChatMessage("   ".into())).is_empty());
    assert!(update(&mut state, Message::SendChatMessage(String::new())).is_empty());
    assert!(state.transcript.is_empty());
}

#[test]
fn input_is_trimmed_before_display() {
    let (_, mut state) = fresh_state(0);

    let cmds = update(&mut state, Message::SendChatMessage("  I need help  ".into()));
    assert_eq!(cmds[0], Command::user_message("I need help"));
    assert_eq!(state.transcript.entries()[0].text, "I need help");
}

#[test]
fn overlapping_replies_land_in_completion_order() {
    let (_, mut state) = fresh_state(500);

    update(&mut state, Message::SendChatMessage("camera".into()));
    update(&mut state, Message::SendChatMessage("laptop".into()));

    // Second timer fires first.
    update(&mut state, Message::BotReplyReady("laptop reply".into()));
    update(&mut state, Message::BotReplyReady("camera reply".into()));

    let texts: Vec<&str> = state
        .transcript
        .entries()
        .iter()
        .map(|e| e.text.as_str())
        .collect();
    assert_eq!(texts, ["camera", "laptop", "laptop reply", "camera reply"]);
}

#[test]
fn add_to_cart_with_chat_closed_notifies() {
    let (store, mut state) = fresh_state(500);

    let cmds = update(&mut state, add_to_cart("Wireless Headphones", "$79.99"));
    assert_eq!(
        cmds,
        vec![
            Command::RenderCartCount(1),
            Command::ShowNotification("Added Wireless Headphones to cart".into()),
        ]
    );
    assert!(store.get("cart").unwrap().contains("wireless_headphones"));
    assert!(state.transcript.is_empty());
}

#[test]
fn add_to_cart_with_chat_open_confirms_in_chat() {
    let (_, mut state) = fresh_state(500);
    update(&mut state, Message::ToggleChat);

    let cmds = update(&mut state, add_to_cart("Laptop", "$999.99"));
    assert_eq!(
        cmds,
        vec![
            Command::RenderCartCount(1),
            Command::bot_message("Great! I've added \"Laptop\" ($999.99) to your cart!"),
        ]
    );
    assert_eq!(state.transcript.len(), 1);
}

#[test]
fn repeated_adds_share_one_line() {
    let (_, mut state) = fresh_state(500);

    update(&mut state, add_to_cart("Wireless Headphones", "$79.99"));
    let cmds = update(&mut state, add_to_cart("Wireless Headphones", "$79.99"));

    assert_eq!(cmds[0], Command::RenderCartCount(2));
    let item = state.cart.get("wireless_headphones").expect("item in cart");
    assert_eq!(item.quantity, 2);
    assert_eq!(item.price, 79.99);
    assert_eq!(state.cart.items().len(), 1);
}

#[test]
fn unreadable_price_is_recorded_as_zero() {
    let (_, mut state) = fresh_state(500);

    update(&mut state, add_to_cart("Mystery Box", "Call us"));
    assert_eq!(state.cart.get("mystery_box").map(|i| i.price), Some(0.0));
}

#[test]
fn theme_toggles_persist_and_repaint() {
    let (store, mut state) = fresh_state(500);

    assert_eq!(
        update(&mut state, Message::ToggleTheme),
        vec![Command::ApplyTheme(ThemeMode::Dark)]
    );
    assert_eq!(store.get("theme").as_deref(), Some("dark-mode"));

    assert_eq!(
        update(&mut state, Message::ToggleTheme),
        vec![Command::ApplyTheme(ThemeMode::Light)]
    );
    assert_eq!(store.get("theme").as_deref(), Some("light-mode"));
}

#[test]
fn chat_visibility_follows_toggle_and_close() {
    let (_, mut state) = fresh_state(500);

    assert_eq!(update(&mut state, Message::ToggleChat), vec![Command::SetChatOpen(true)]);
    assert!(state.chat_open);
    assert_eq!(update(&mut state, Message::ToggleChat), vec![Command::SetChatOpen(false)]);
    update(&mut state, Message::ToggleChat);
    assert_eq!(update(&mut state, Message::CloseChat), vec![Command::SetChatOpen(false)]);
    assert!(!state.chat_open);
    // Closing an already closed widget is harmless.
    assert_eq!(update(&mut state, Message::CloseChat), vec![Command::SetChatOpen(false)]);
}

#[test]
fn contact_form_acknowledges_and_resets() {
    let (_, mut state) = fresh_state(500);

    assert_eq!(
        update(&mut state, Message::ContactFormSubmitted),
        vec![
            Command::ShowNotification("Thank you! Your message has been sent.".into()),
            Command::ResetContactForm,
        ]
    );
}
