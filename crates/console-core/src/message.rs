//! The shared message slot under the order form.
//!
//! One message at a time. Showing a message replaces the current one and
//! restarts the hide deadline, so an earlier message's deadline can never
//! hide a later one.

use tokio::time::{Duration, Instant};

use crate::render::escape;

pub const AUTO_HIDE: Duration = Duration::from_secs(5);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// CSS class, e.g. `message success`.
    pub fn class(self) -> &'static str {
        match self {
            MessageKind::Success => "message success",
            MessageKind::Error => "message error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct MessageSlot {
    current: Option<Message>,
    hide_at: Option<Instant>,
}

impl MessageSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, kind: MessageKind, text: impl Into<String>, now: Instant) {
        self.current = Some(Message { kind, text: text.into() });
        self.hide_at = Some(now + AUTO_HIDE);
    }

    pub fn visible(&self) -> Option<&Message> {
        self.current.as_ref()
    }

    /// When the visible message is due to disappear.
    pub fn deadline(&self) -> Option<Instant> {
        self.hide_at
    }

    /// Hide the message if its deadline has passed. Returns `true` if
    /// something was hidden.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(at) if now >= at => {
                self.current = None;
                self.hide_at = None;
                true
            }
            _ => false,
        }
    }

    pub fn to_html(&self) -> String {
        match &self.current {
            Some(msg) => format!("<div class=\"{}\">{}</div>", msg.kind.class(), escape(&msg.text)),
            None => String::new(),
        }
    }
}
