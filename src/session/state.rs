//! Session-level UI state: save indicator and click outcomes

use chrono::{DateTime, Local};

use crate::tab::TabId;

/// What the save indicator currently reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    /// Edits are waiting for the debounce window to close
    Pending,
    /// Everything in the buffer has been written
    Saved,
}

impl SaveStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SaveStatus::Pending => "Saving...",
            SaveStatus::Saved => "All changes saved",
        }
    }
}

/// Save status plus the time of the last completed flush.
#[derive(Debug, Clone)]
pub struct SaveIndicator {
    status: SaveStatus,
    last_modified: DateTime<Local>,
}

impl SaveIndicator {
    pub fn new() -> Self {
        Self {
            status: SaveStatus::Saved,
            last_modified: Local::now(),
        }
    }

    pub fn status(&self) -> SaveStatus {
        self.status
    }

    pub fn last_modified(&self) -> DateTime<Local> {
        self.last_modified
    }

    pub fn last_modified_label(&self) -> String {
        format!("Last modified: {}", self.last_modified.format("%H:%M:%S"))
    }

    pub(crate) fn mark_pending(&mut self) {
        self.status = SaveStatus::Pending;
    }

    pub(crate) fn mark_saved(&mut self, at: DateTime<Local>) {
        self.status = SaveStatus::Saved;
        self.last_modified = at;
    }
}

impl Default for SaveIndicator {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of clicking a tab label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabClick {
    /// Another tab was clicked and is now active
    Switched(TabId),
    /// The active tab was clicked; the front end should open its name editor
    StartRename(TabId),
    /// The id no longer exists
    Ignored,
}
