//! Collaborator interfaces consumed by the session manager
//!
//! The manager never talks to a toolkit directly. Whatever front end hosts
//! it implements these traits and forwards its events to the `on_*`
//! methods of [`crate::session::SessionManager`].

use crate::stats::Stats;
use crate::tab::{Tab, TabId};

/// The single visible text-editing surface.
pub trait BufferView {
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
    /// Cursor position as a char index into [`BufferView::text`]
    fn cursor(&self) -> usize;
}

/// Synchronous yes/no question shown before destructive actions.
pub trait ConfirmPrompt {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Answers every prompt the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAnswer(pub bool);

impl ConfirmPrompt for FixedAnswer {
    fn confirm(&mut self, _message: &str) -> bool {
        self.0
    }
}

/// Redraws the tab labels after the list or the active tab changes.
pub trait TabListRenderer {
    fn render(&mut self, tabs: &[Tab], active: Option<TabId>);
}

/// Receives recomputed statistics for the status bar.
pub trait StatsListener {
    fn stats_changed(&mut self, stats: &Stats);
}

/// Front end that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl TabListRenderer for Headless {
    fn render(&mut self, _tabs: &[Tab], _active: Option<TabId>) {}
}

impl StatsListener for Headless {
    fn stats_changed(&mut self, _stats: &Stats) {}
}
