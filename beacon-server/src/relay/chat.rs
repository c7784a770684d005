use std::collections::VecDeque;

use beacon_core::ChatMessage;

/// Rolling history of the public chat room. Once the cap is reached the
/// oldest message falls off for every new one appended.
#[derive(Debug)]
pub struct ChatLog {
    messages: VecDeque<ChatMessage>,
    cap: usize,
}

impl ChatLog {
    pub fn new(cap: usize) -> Self {
        Self {
            messages: VecDeque::new(),
            cap,
        }
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push_back(message);
        while self.messages.len() > self.cap {
            self.messages.pop_front();
        }
    }

    /// The current history, oldest first.
    pub fn snapshot(&self) -> Vec<ChatMessage> {
        self.messages.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
