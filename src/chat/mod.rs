//! Keyword-matched chat assistant.

pub mod responses;
pub mod transcript;

pub use transcript::ChatTranscript;

use responses::{DEFAULT_RESPONSE, RESPONSES};

/// Maps free text to a canned reply by substring lookup over an ordered
/// keyword table.
#[derive(Debug, Clone, Copy)]
pub struct ChatResponder {
    table: &'static [(&'static str, &'static str)],
    fallback: &'static str,
}

impl Default for ChatResponder {
    fn default() -> Self {
        Self::new(RESPONSES, DEFAULT_RESPONSE)
    }
}

impl ChatResponder {
    /// Keywords must be lowercase; they are matched against the lowercased
    /// input.
    pub const fn new(table: &'static [(&'static str, &'static str)], fallback: &'static str) -> Self {
        Self { table, fallback }
    }

    /// First keyword (in declaration order) contained in the input wins.
    pub fn respond(&self, input: &str) -> &'static str {
        let message = input.to_lowercase();
        self.table
            .iter()
            .find(|(keyword, _)| message.contains(keyword))
            .map(|(_, response)| *response)
            .unwrap_or(self.fallback)
    }
}
