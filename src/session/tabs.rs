//! Tab management operations

use tracing::debug;

use crate::persistence::KeyValueStore;
use crate::tab::TabId;
use crate::view::{BufferView, ConfirmPrompt, StatsListener, TabListRenderer};

use super::SessionManager;

impl<S, B, F> SessionManager<S, B, F>
where
    S: KeyValueStore,
    B: BufferView,
    F: TabListRenderer + StatsListener,
{
    /// Create an untitled tab and make it active.
    pub fn new_tab(&mut self) -> TabId {
        let id = self.session.create(None).id;
        debug!(id, "tab created");
        self.persist();
        self.render();
        self.switch_tab(id);
        id
    }

    /// Delete a tab after the user confirms.
    ///
    /// The last remaining tab is never removed, although the prompt is
    /// still shown. When the active tab goes, the tab just before it takes
    /// over (the new first tab if it was first).
    pub fn delete_tab(&mut self, id: TabId, prompt: &mut dyn ConfirmPrompt) -> bool {
        let Some(tab) = self.session.find(id) else {
            return false;
        };
        let message = format!("Are you sure you want to delete the tab \"{}\"?", tab.name);
        if !prompt.confirm(&message) {
            debug!(id, "tab deletion declined");
            return false;
        }

        let Some(index) = self.session.position(id) else {
            return false;
        };
        if !self.session.remove(id) {
            debug!(id, "refusing to delete the last tab");
            return false;
        }

        let was_active = self.is_active(id);
        if was_active {
            let fallback = self.session.tabs()[index.saturating_sub(1)].id;
            self.session.set_active_tab_id(Some(fallback));
        }
        debug!(id, active = ?self.session.active_tab_id(), "tab deleted");

        let persisted = self.persist();
        self.render();
        if was_active {
            // Pending edits belonged to the deleted tab.
            if persisted {
                self.settle_pending_save();
            }
            self.load_active();
        }
        true
    }

    /// Rename a tab; blank names become "Untitled".
    pub fn rename_tab(&mut self, id: TabId, new_name: &str) -> bool {
        if !self.session.rename(id, new_name) {
            return false;
        }
        debug!(id, "tab renamed");
        self.persist();
        self.render();
        true
    }

    /// Make `id` the active tab.
    ///
    /// The buffer is flushed into the previously active tab first, so
    /// nothing typed since the last save is lost. Unknown ids stop after
    /// that flush and leave the buffer untouched.
    pub fn switch_tab(&mut self, id: TabId) -> bool {
        if self.save_current_tab() {
            self.settle_pending_save();
        }

        let switched = self.session.find(id).is_some();
        if switched {
            self.session.set_active_tab_id(Some(id));
            self.load_active();
            debug!(id, "switched tab");
        }
        self.render();
        switched
    }

    /// Copy the buffer into the active tab and persist.
    pub fn save_current_tab(&mut self) -> bool {
        let text = self.buffer.text();
        let Some(tab) = self.session.active_tab_mut() else {
            return false;
        };
        tab.content = text;
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use crate::persistence::MemoryStore;
    use crate::session::SessionManager;
    use crate::text_buffer::TextBuffer;
    use crate::view::{BufferView, FixedAnswer, Headless};

    fn fresh() -> SessionManager<MemoryStore, TextBuffer> {
        SessionManager::open(MemoryStore::new(), TextBuffer::new(), Headless)
    }

    fn ids(manager: &SessionManager<MemoryStore, TextBuffer>) -> Vec<u64> {
        manager.tabs().iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_fresh_session_has_one_tab() {
        let manager = fresh();
        assert_eq!(ids(&manager), vec![1]);
        assert_eq!(manager.active_tab_id(), Some(1));
        assert_eq!(manager.tabs()[0].name, "Untitled");
    }

    #[test]
    fn test_new_then_delete_returns_to_first() {
        let mut manager = fresh();
        assert_eq!(manager.new_tab(), 2);
        assert_eq!(ids(&manager), vec![1, 2]);
        assert_eq!(manager.active_tab_id(), Some(2));

        assert!(manager.delete_tab(2, &mut FixedAnswer(true)));
        assert_eq!(ids(&manager), vec![1]);
        assert_eq!(manager.active_tab_id(), Some(1));
    }

    #[test]
    fn test_delete_active_middle_falls_back_to_previous() {
        let mut manager = fresh();
        manager.new_tab();
        manager.new_tab();
        manager.switch_tab(2);
        assert!(manager.delete_tab(2, &mut FixedAnswer(true)));
        assert_eq!(ids(&manager), vec![1, 3]);
        assert_eq!(manager.active_tab_id(), Some(1));
    }

    #[test]
    fn test_delete_active_first_falls_back_to_new_first() {
        let mut manager = fresh();
        manager.new_tab();
        manager.switch_tab(1);
        assert!(manager.delete_tab(1, &mut FixedAnswer(true)));
        assert_eq!(manager.active_tab_id(), Some(2));
    }

    #[test]
    fn test_delete_inactive_keeps_active_and_buffer() {
        let mut manager = fresh();
        manager.new_tab();
        manager.buffer_mut().insert_str("typing");
        assert!(manager.delete_tab(1, &mut FixedAnswer(true)));
        assert_eq!(manager.active_tab_id(), Some(2));
        assert_eq!(manager.buffer().text(), "typing");
    }

    #[test]
    fn test_deleting_active_loads_fallback_content() {
        let mut manager = fresh();
        manager.buffer_mut().insert_str("first tab");
        manager.new_tab();
        manager.buffer_mut().insert_str("doomed");
        assert!(manager.delete_tab(2, &mut FixedAnswer(true)));
        assert_eq!(manager.buffer().text(), "first tab");
        assert_eq!(manager.tabs()[0].content, "first tab");
    }

    #[test]
    fn test_declined_delete_changes_nothing() {
        let mut manager = fresh();
        manager.new_tab();
        assert!(!manager.delete_tab(2, &mut FixedAnswer(false)));
        assert_eq!(ids(&manager), vec![1, 2]);
        assert_eq!(manager.active_tab_id(), Some(2));
    }

    #[test]
    fn test_last_tab_cannot_be_deleted() {
        let mut manager = fresh();
        assert!(!manager.delete_tab(1, &mut FixedAnswer(true)));
        assert_eq!(ids(&manager), vec![1]);
    }

    #[test]
    fn test_rename_keeps_buffer_and_active() {
        let mut manager = fresh();
        manager.new_tab();
        manager.buffer_mut().insert_str("draft");
        assert!(manager.rename_tab(1, "Ideas"));
        assert_eq!(manager.tabs()[0].name, "Ideas");
        assert_eq!(manager.active_tab_id(), Some(2));
        assert_eq!(manager.buffer().text(), "draft");

        assert!(manager.rename_tab(1, "   "));
        assert_eq!(manager.tabs()[0].name, "Untitled");
        assert!(!manager.rename_tab(99, "x"));
    }

    #[test]
    fn test_switch_flushes_before_loading() {
        let mut manager = fresh();
        manager.new_tab();
        manager.buffer_mut().insert_str("second");
        manager.switch_tab(1);
        assert_eq!(manager.session().find(2).unwrap().content, "second");
        assert_eq!(manager.buffer().text(), "");
        manager.switch_tab(2);
        assert_eq!(manager.buffer().text(), "second");
    }

    #[test]
    fn test_switch_to_unknown_id_keeps_buffer() {
        let mut manager = fresh();
        manager.buffer_mut().insert_str("keep me");
        assert!(!manager.switch_tab(42));
        assert_eq!(manager.active_tab_id(), Some(1));
        assert_eq!(manager.buffer().text(), "keep me");
        assert_eq!(manager.tabs()[0].content, "keep me");
    }
}
