use std::cell::RefCell;
use std::rc::Rc;

use crate::cart::CartStore;
use crate::chat::{ChatResponder, ChatTranscript};
use crate::config::AppConfig;
use crate::messages::Message;
use crate::storage::KeyValueStore;
use crate::theme::ThemeController;
use crate::update::update;

/// Everything a mounted page remembers between events.
pub struct AppState {
    pub config: AppConfig,
    pub theme: ThemeController,
    pub responder: ChatResponder,
    // Append-only conversation log backing the chat widget
    pub transcript: ChatTranscript,
    pub cart: CartStore,
    // Mirrors the `active` class on #chatbot-widget
    pub chat_open: bool,
}

impl AppState {
    /// Theme and cart share one storage backend.
    pub fn new(storage: Rc<dyn KeyValueStore>, config: AppConfig) -> Self {
        Self {
            config,
            theme: ThemeController::load(Rc::clone(&storage)),
            responder: ChatResponder::default(),
            transcript: ChatTranscript::new(),
            cart: CartStore::load(storage),
            chat_open: false,
        }
    }
}

/// Handle shared by every event listener of one mounted page.
pub type SharedState = Rc<RefCell<AppState>>;

pub fn shared(state: AppState) -> SharedState {
    Rc::new(RefCell::new(state))
}

/// Run a message through the reducers, then execute the resulting commands
/// once the mutable borrow has been dropped (commands may dispatch again).
pub fn dispatch(app: &SharedState, msg: Message) {
    let commands = {
        let mut state = app.borrow_mut();
        update(&mut state, msg)
    };

    for cmd in commands {
        crate::command_executors::execute(app, cmd);
    }
}
