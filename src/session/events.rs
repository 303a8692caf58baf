//! Event entry points for the hosting front end

use std::time::Instant;

use chrono::Local;
use tracing::{debug, trace, warn};

use crate::persistence::KeyValueStore;
use crate::tab::TabId;
use crate::view::{BufferView, ConfirmPrompt, StatsListener, TabListRenderer};

use super::{SessionManager, TabClick};

impl<S, B, F> SessionManager<S, B, F>
where
    S: KeyValueStore,
    B: BufferView,
    F: TabListRenderer + StatsListener,
{
    /// The buffer text changed. Stats update now; the save waits for the
    /// debounce window.
    pub fn on_edit(&mut self, now: Instant) {
        self.indicator.mark_pending();
        let timer = self.debouncer.schedule(now);
        trace!(?timer, "save scheduled");
        self.refresh_stats();
    }

    pub fn on_cursor_move(&mut self) {
        self.refresh_stats();
    }

    /// Fire the debounced save if it is due. Returns true when a save
    /// went through. A failed save stays pending and is retried after
    /// another debounce window.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.debouncer.fire_due(now).is_none() {
            return false;
        }
        if !self.save_current_tab() {
            let timer = self.debouncer.schedule(now);
            warn!(?timer, "debounced save failed, retrying");
            return false;
        }
        self.indicator.mark_saved(Local::now());
        debug!("debounced save flushed");
        true
    }

    /// Run any scheduled save immediately, e.g. before shutdown. Returns
    /// true when a scheduled save existed and went through.
    pub fn flush_pending(&mut self) -> bool {
        if self.debouncer.take_pending().is_none() {
            return false;
        }
        if !self.save_current_tab() {
            return false;
        }
        self.indicator.mark_saved(Local::now());
        true
    }

    /// Explicit save request, whether or not a save was scheduled.
    pub fn save_now(&mut self) -> bool {
        self.debouncer.take_pending();
        if self.save_current_tab() {
            self.indicator.mark_saved(Local::now());
            true
        } else {
            self.indicator.mark_pending();
            false
        }
    }

    /// Clicking another tab switches to it; clicking the active one asks
    /// for a rename.
    pub fn on_tab_clicked(&mut self, id: TabId) -> TabClick {
        if self.is_active(id) {
            TabClick::StartRename(id)
        } else if self.switch_tab(id) {
            TabClick::Switched(id)
        } else {
            TabClick::Ignored
        }
    }

    /// Close buttons are inert while only one tab exists.
    pub fn on_close_clicked(&mut self, id: TabId, prompt: &mut dyn ConfirmPrompt) -> bool {
        if self.session.len() <= 1 {
            return false;
        }
        self.delete_tab(id, prompt)
    }

    pub fn on_name_edited(&mut self, id: TabId, name: &str) -> bool {
        self.rename_tab(id, name)
    }

    pub fn on_new_tab_clicked(&mut self) -> TabId {
        self.new_tab()
    }
}
