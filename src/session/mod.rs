//! Session manager: the single authority over the active tab
//!
//! Keeps the tab store, the visible buffer and the persisted records in
//! step. Every mutation follows the same order: change the store, flush it
//! to storage, then refresh the views that depend on it.

mod events;
mod state;
mod tabs;

use chrono::Local;
use tracing::{debug, warn};

use crate::debounce::SaveDebouncer;
use crate::persistence::{KeyValueStore, Persistence};
use crate::stats::Stats;
use crate::store::TabStore;
use crate::tab::{Tab, TabId};
use crate::view::{BufferView, Headless, StatsListener, TabListRenderer};

pub use state::{SaveIndicator, SaveStatus, TabClick};

pub struct SessionManager<S, B, F = Headless> {
    session: TabStore,
    persistence: Persistence<S>,
    buffer: B,
    frontend: F,
    debouncer: SaveDebouncer,
    indicator: SaveIndicator,
    stats: Stats,
}

impl<S, B, F> SessionManager<S, B, F>
where
    S: KeyValueStore,
    B: BufferView,
    F: TabListRenderer + StatsListener,
{
    /// Restore the saved session, or start a fresh one with a single tab
    /// when nothing usable is stored.
    pub fn open(store: S, buffer: B, frontend: F) -> Self {
        Self::with_debouncer(store, buffer, frontend, SaveDebouncer::with_default())
    }

    pub fn with_debouncer(store: S, buffer: B, frontend: F, debouncer: SaveDebouncer) -> Self {
        let persistence = Persistence::new(store);
        let restored = persistence.load();

        let mut manager = Self {
            session: TabStore::new(),
            persistence,
            buffer,
            frontend,
            debouncer,
            indicator: SaveIndicator::new(),
            stats: Stats::default(),
        };

        match restored {
            Some(mut session) => {
                let saved_active = session.active_tab_id();
                let target = saved_active
                    .filter(|id| session.find(*id).is_some())
                    .or_else(|| session.tabs().first().map(|t| t.id));
                if target != saved_active {
                    debug!(?saved_active, ?target, "saved active tab missing, using first tab");
                }
                // The buffer starts out blank; flushing it before the first
                // switch would wipe the restored tab.
                session.set_active_tab_id(None);
                manager.session = session;
                manager.render();
                if let Some(id) = target {
                    manager.switch_tab(id);
                }
                debug!(tabs = manager.session.len(), "session restored");
            }
            None => {
                debug!("no saved session, starting fresh");
                manager.new_tab();
            }
        }

        manager
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn tabs(&self) -> &[Tab] {
        self.session.tabs()
    }

    pub fn session(&self) -> &TabStore {
        &self.session
    }

    pub fn active_tab_id(&self) -> Option<TabId> {
        self.session.active_tab_id()
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.session.active_tab()
    }

    pub fn is_active(&self, id: TabId) -> bool {
        self.session.active_tab_id() == Some(id)
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    /// Mutable access for the host's editing surface. Report changes back
    /// through `on_edit` / `on_cursor_move`.
    pub fn buffer_mut(&mut self) -> &mut B {
        &mut self.buffer
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn frontend_mut(&mut self) -> &mut F {
        &mut self.frontend
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    pub fn save_indicator(&self) -> &SaveIndicator {
        &self.indicator
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn debouncer(&self) -> &SaveDebouncer {
        &self.debouncer
    }

    /// Name and current buffer text of the active tab, for exporting.
    pub fn active_export(&self) -> Option<(String, String)> {
        self.session
            .active_tab()
            .map(|tab| (tab.name.clone(), self.buffer.text()))
    }

    // =========================================================================
    // Internal plumbing
    // =========================================================================

    fn persist(&mut self) -> bool {
        match self.persistence.save(&self.session) {
            Ok(()) => true,
            Err(err) => {
                warn!("failed to persist session: {err}");
                false
            }
        }
    }

    fn render(&mut self) {
        self.frontend
            .render(self.session.tabs(), self.session.active_tab_id());
    }

    fn refresh_stats(&mut self) {
        self.stats = Stats::compute(&self.buffer.text(), self.buffer.cursor());
        self.frontend.stats_changed(&self.stats);
    }

    /// Show the active tab's stored content in the buffer.
    fn load_active(&mut self) {
        let Some(tab) = self.session.active_tab() else {
            return;
        };
        self.buffer.set_text(&tab.content);
        self.refresh_stats();
    }

    /// Drop a scheduled save that no longer has anything to write.
    fn settle_pending_save(&mut self) {
        if self.debouncer.take_pending().is_some() {
            self.indicator.mark_saved(Local::now());
        }
    }
}
