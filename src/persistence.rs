//! Session persistence over a string-keyed local store
//!
//! Two records are kept: the full tab array as JSON and the active tab id
//! as a decimal string. Every save rewrites both; there is no periodic
//! flush and no delta format.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::storage::{
    ACTIVE_TAB_KEY, APP_DIR, DEV_ENV_VAR, RECORD_EXTENSION, TABS_KEY,
};
use crate::error::Result;
use crate::store::TabStore;
use crate::tab::{Tab, TabId};

/// Get the data directory for storing the session
/// - If running from source (binary path contains "target") or FIRE_NOTEPAD_DEV is set: ./tmp/fire-notepad
/// - If installed (binary path elsewhere): ~/.local/share/fire-notepad
pub fn get_data_dir() -> PathBuf {
    let use_local_storage = std::env::var(DEV_ENV_VAR).is_ok()
        || std::env::current_exe()
            .map(|p| p.iter().any(|c| c == "target"))
            .unwrap_or(false);

    if use_local_storage {
        let mut path = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        path.push("tmp");
        path.push(APP_DIR);
        path
    } else {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join(APP_DIR)
    }
}

/// Durable string-keyed storage, the desktop stand-in for browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Volatile store, used by tests and `--ephemeral` sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.records.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One file per key inside a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at [`get_data_dir`].
    pub fn in_data_dir() -> Self {
        Self::new(get_data_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{RECORD_EXTENSION}"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.record_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.record_path(key), value)?;
        Ok(())
    }
}

/// Reads and writes the session through a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct Persistence<S> {
    store: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn save(&mut self, session: &TabStore) -> Result<()> {
        let payload = serde_json::to_string(session.tabs())?;
        self.store.set(TABS_KEY, &payload)?;
        let active = session
            .active_tab_id()
            .map(|id| id.to_string())
            .unwrap_or_default();
        self.store.set(ACTIVE_TAB_KEY, &active)?;
        debug!(tabs = session.len(), active = ?session.active_tab_id(), "session saved");
        Ok(())
    }

    /// Load the saved session. `None` means there is nothing usable and the
    /// caller should bootstrap a fresh one.
    pub fn load(&self) -> Option<TabStore> {
        let payload = match self.store.get(TABS_KEY) {
            Ok(Some(payload)) => payload,
            Ok(None) => return None,
            Err(err) => {
                warn!("failed to read saved tabs: {err}");
                return None;
            }
        };

        let tabs = match serde_json::from_str::<Vec<Tab>>(&payload) {
            Ok(tabs) => dedup_ids(drop_exhausted_ids(tabs)),
            Err(err) => {
                warn!("discarding unparsable saved tabs: {err}");
                return None;
            }
        };
        if tabs.is_empty() {
            return None;
        }

        let active_tab_id = self
            .store
            .get(ACTIVE_TAB_KEY)
            .unwrap_or_else(|err| {
                warn!("failed to read active tab: {err}");
                None
            })
            .and_then(|raw| parse_tab_id(&raw));

        TabStore::from_parts(tabs, active_tab_id)
    }
}

fn parse_tab_id(raw: &str) -> Option<TabId> {
    raw.trim().parse().ok()
}

/// A tab holding the largest id would leave the counter nowhere to go.
fn drop_exhausted_ids(tabs: Vec<Tab>) -> Vec<Tab> {
    let before = tabs.len();
    let tabs: Vec<Tab> = tabs.into_iter().filter(|t| t.id != TabId::MAX).collect();
    if tabs.len() != before {
        warn!(dropped = before - tabs.len(), "dropped saved tabs with exhausted ids");
    }
    tabs
}

/// Keep the first tab for each id so a hand-edited record cannot break
/// id uniqueness.
fn dedup_ids(tabs: Vec<Tab>) -> Vec<Tab> {
    let mut seen = HashSet::new();
    let before = tabs.len();
    let tabs: Vec<Tab> = tabs.into_iter().filter(|t| seen.insert(t.id)).collect();
    if tabs.len() != before {
        warn!(dropped = before - tabs.len(), "dropped saved tabs with duplicate ids");
    }
    tabs
}
