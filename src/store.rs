//! In-memory tab collection
//!
//! The store never flushes by itself. Callers mutate, then persist, then
//! refresh whatever views depend on the tab list.

use crate::tab::{Tab, TabId, normalize_name};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabStore {
    tabs: Vec<Tab>,
    active_tab_id: Option<TabId>,
    next_tab_id: TabId,
}

impl TabStore {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active_tab_id: None,
            next_tab_id: 1,
        }
    }

    /// Rebuild from persisted tabs. The id counter is recomputed from the
    /// tabs themselves so a lost counter can never cause id reuse. Names
    /// are normalized the same way renames are.
    ///
    /// Returns `None` when the highest id leaves no room for another tab.
    pub fn from_parts(mut tabs: Vec<Tab>, active_tab_id: Option<TabId>) -> Option<Self> {
        let next_tab_id = tabs.iter().map(|t| t.id).max().unwrap_or(0).checked_add(1)?;
        for tab in &mut tabs {
            tab.name = normalize_name(&tab.name);
        }
        Some(Self {
            tabs,
            active_tab_id,
            next_tab_id,
        })
    }

    pub fn create(&mut self, name: Option<&str>) -> &Tab {
        let tab = Tab::new(self.next_tab_id, name);
        self.next_tab_id += 1;
        self.tabs.push(tab);
        &self.tabs[self.tabs.len() - 1]
    }

    pub fn find(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn find_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    pub fn position(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    /// Remove a tab. Refuses unknown ids and the last remaining tab.
    pub fn remove(&mut self, id: TabId) -> bool {
        if self.tabs.len() <= 1 {
            return false;
        }
        match self.position(id) {
            Some(index) => {
                self.tabs.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn rename(&mut self, id: TabId, new_name: &str) -> bool {
        match self.find_mut(id) {
            Some(tab) => {
                tab.set_name(new_name);
                true
            }
            None => false,
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active_tab_id(&self) -> Option<TabId> {
        self.active_tab_id
    }

    pub fn set_active_tab_id(&mut self, id: Option<TabId>) {
        self.active_tab_id = id;
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_tab_id.and_then(|id| self.find(id))
    }

    pub fn active_tab_mut(&mut self) -> Option<&mut Tab> {
        let id = self.active_tab_id?;
        self.find_mut(id)
    }

    pub fn next_tab_id(&self) -> TabId {
        self.next_tab_id
    }
}

impl Default for TabStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(count: usize) -> TabStore {
        let mut store = TabStore::new();
        for _ in 0..count {
            store.create(None);
        }
        store
    }

    #[test]
    fn test_create_assigns_increasing_ids() {
        let mut store = TabStore::new();
        assert_eq!(store.create(None).id, 1);
        assert_eq!(store.create(Some("Second")).id, 2);
        assert_eq!(store.next_tab_id(), 3);
        let names: Vec<_> = store.tabs().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Untitled", "Second"]);
    }

    #[test]
    fn test_ids_never_reused_after_remove() {
        let mut store = store_with(3);
        assert!(store.remove(3));
        assert_eq!(store.create(None).id, 4);
    }

    #[test]
    fn test_remove_refuses_last_tab() {
        let mut store = store_with(1);
        assert!(!store.remove(1));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut store = store_with(2);
        assert!(!store.remove(42));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_rename() {
        let mut store = store_with(1);
        assert!(store.rename(1, "Groceries"));
        assert_eq!(store.find(1).unwrap().name, "Groceries");
        assert!(store.rename(1, ""));
        assert_eq!(store.find(1).unwrap().name, "Untitled");
        assert!(store.rename(1, "   "));
        assert_eq!(store.find(1).unwrap().name, "Untitled");
        assert!(!store.rename(9, "nope"));
    }

    #[test]
    fn test_from_parts_recomputes_counter() {
        let tabs = vec![Tab::new_untitled(4), Tab::new_untitled(2)];
        let mut store = TabStore::from_parts(tabs, Some(2)).unwrap();
        assert_eq!(store.next_tab_id(), 5);
        assert_eq!(store.active_tab().map(|t| t.id), Some(2));
        assert_eq!(store.create(None).id, 5);
    }

    #[test]
    fn test_from_parts_rejects_exhausted_ids() {
        let tabs = vec![Tab::new_untitled(TabId::MAX)];
        assert!(TabStore::from_parts(tabs, None).is_none());
    }

    #[test]
    fn test_from_parts_normalizes_names() {
        let mut blank = Tab::new_untitled(1);
        blank.name = "   ".to_string();
        let mut padded = Tab::new_untitled(2);
        padded.name = " Plan ".to_string();
        let store = TabStore::from_parts(vec![blank, padded], None).unwrap();
        let names: Vec<_> = store.tabs().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Untitled", "Plan"]);
    }
}
