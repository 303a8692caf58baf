//! Shared test fixtures

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use fire_notepad::config::storage::TABS_KEY;
use fire_notepad::view::{BufferView, StatsListener, TabListRenderer};
use fire_notepad::{KeyValueStore, MemoryStore, Result, Stats, Tab, TabId};

/// Memory store that can be inspected while a session manager owns a handle
/// to it, and that counts how many times the tab record was written.
#[derive(Clone, Default)]
pub struct SharedStore {
    inner: Rc<RefCell<MemoryStore>>,
    tab_writes: Rc<RefCell<usize>>,
}

impl SharedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab_writes(&self) -> usize {
        *self.tab_writes.borrow()
    }

    pub fn saved_tabs(&self) -> Vec<Tab> {
        self.inner
            .borrow()
            .get(TABS_KEY)
            .unwrap()
            .map(|raw| serde_json::from_str(&raw).unwrap())
            .unwrap_or_default()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).unwrap()
    }

    pub fn put(&self, key: &str, value: &str) {
        self.inner.borrow_mut().set(key, value).unwrap();
    }
}

impl KeyValueStore for SharedStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if key == TABS_KEY {
            *self.tab_writes.borrow_mut() += 1;
        }
        self.inner.borrow_mut().set(key, value)
    }
}

/// Buffer that snapshots the persisted tabs every time new text is loaded.
pub struct WitnessBuffer {
    text: String,
    store: SharedStore,
    pub loads: Vec<(String, Vec<Tab>)>,
}

impl WitnessBuffer {
    pub fn new(store: SharedStore) -> Self {
        Self {
            text: String::new(),
            store,
            loads: Vec::new(),
        }
    }

    pub fn type_text(&mut self, text: &str) {
        self.text.push_str(text);
    }
}

impl BufferView for WitnessBuffer {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.loads.push((text.to_string(), self.store.saved_tabs()));
        self.text = text.to_string();
    }

    fn cursor(&self) -> usize {
        self.text.chars().count()
    }
}

/// Front end that remembers what it was asked to show.
#[derive(Default)]
pub struct RecordingView {
    pub renders: Vec<(Vec<TabId>, Option<TabId>)>,
    pub stats: Vec<Stats>,
}

impl TabListRenderer for RecordingView {
    fn render(&mut self, tabs: &[Tab], active: Option<TabId>) {
        self.renders
            .push((tabs.iter().map(|t| t.id).collect(), active));
    }
}

impl StatsListener for RecordingView {
    fn stats_changed(&mut self, stats: &Stats) {
        self.stats.push(*stats);
    }
}
