//! Tab state - represents a single document

use serde::{Deserialize, Serialize};

use crate::config::editor::DEFAULT_TAB_NAME;

/// Unique, monotonically assigned tab identifier.
pub type TabId = u64;

/// One document. Serialized as `{id, name, content}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: String,
}

impl Tab {
    pub fn new(id: TabId, name: Option<&str>) -> Self {
        Self {
            id,
            name: normalize_name(name.unwrap_or_default()),
            content: String::new(),
        }
    }

    pub fn new_untitled(id: TabId) -> Self {
        Self::new(id, None)
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = normalize_name(name);
    }
}

/// Trimmed name, or the default name when nothing is left.
pub fn normalize_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        DEFAULT_TAB_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}
