//! Transient end-of-game notices and the hosts that display them.

use alloc::collections::VecDeque;
use alloc::string::String;

/// How long a notice stays on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeDuration {
    Short,
    Long,
}

/// Action a notice can hand back to the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeAction {
    /// Clear the board and start a new game.
    Reset,
}

/// A message shown to the player, optionally with one action button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub duration: NoticeDuration,
    /// Button label and the action it triggers.
    pub action: Option<(&'static str, NoticeAction)>,
}

impl Notice {
    pub fn new(message: impl Into<String>, duration: NoticeDuration) -> Self {
        Self {
            message: message.into(),
            duration,
            action: None,
        }
    }

    pub fn with_action(mut self, label: &'static str, action: NoticeAction) -> Self {
        self.action = Some((label, action));
        self
    }
}

/// Surface that displays notices.
pub trait Notifier {
    fn show(&mut self, notice: Notice);
}

/// [`Notifier`] that queues notices for the host to display or act on.
#[derive(Debug, Default)]
pub struct NoticeLog {
    shown: VecDeque<Notice>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Oldest notice not yet taken by the host.
    pub fn pop(&mut self) -> Option<Notice> {
        self.shown.pop_front()
    }

    pub fn len(&self) -> usize {
        self.shown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.shown.iter()
    }
}

impl Notifier for NoticeLog {
    fn show(&mut self, notice: Notice) {
        self.shown.push_back(notice);
    }
}
