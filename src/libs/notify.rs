//! Toast-style notifications raised by the workspace.

use crate::libs::messages::Message;
use crate::{msg_error, msg_info, msg_success, msg_warning};
use std::cell::RefCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: Message,
}

impl Notification {
    pub fn new(level: Level, message: Message) -> Self {
        Self { level, message }
    }
}

pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}

/// Prints through the message macros.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&self, notification: Notification) {
        match notification.level {
            Level::Info => msg_info!(notification.message),
            Level::Success => msg_success!(notification.message),
            Level::Warning => msg_warning!(notification.message),
            Level::Error => msg_error!(notification.message),
        }
    }
}

/// Keeps every notification in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    received: RefCell<Vec<Notification>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.received.borrow().clone()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.received.borrow().iter().map(|n| n.message.clone()).collect()
    }

    pub fn clear(&self) {
        self.received.borrow_mut().clear();
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        self.received.borrow_mut().push(notification);
    }
}
