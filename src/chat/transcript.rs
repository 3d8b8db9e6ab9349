use crate::models::{ChatEntry, ChatSender};

/// Append-only record of the conversation shown in the chat widget.
#[derive(Debug, Default)]
pub struct ChatTranscript {
    entries: Vec<ChatEntry>,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sender: ChatSender, text: impl Into<String>) -> &ChatEntry {
        self.entries.push(ChatEntry::new(sender, text));
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&ChatEntry> {
        self.entries.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_entries_in_arrival_order() {
        let mut transcript = ChatTranscript::new();
        transcript.push(ChatSender::User, "hi");
        transcript.push(ChatSender::Bot, "Hi there!");

        let senders: Vec<ChatSender> = transcript.entries().iter().map(|e| e.sender).collect();
        assert_eq!(senders, [ChatSender::User, ChatSender::Bot]);
        assert_eq!(transcript.last().map(|e| e.text.as_str()), Some("Hi there!"));
    }

    #[test]
    fn entries_get_distinct_ids() {
        let mut transcript = ChatTranscript::new();
        let first = transcript.push(ChatSender::User, "a").id;
        let second = transcript.push(ChatSender::User, "a").id;
        assert_ne!(first, second);
    }
}
