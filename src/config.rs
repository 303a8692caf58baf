//! Centralized configuration constants for Fire Notepad
//!
//! All magic numbers and tunable parameters should be defined here.

/// Local storage layout
pub mod storage {
    /// Key holding the JSON array of tabs
    pub const TABS_KEY: &str = "notepadTabs";
    /// Key holding the active tab id as a decimal string
    pub const ACTIVE_TAB_KEY: &str = "notepadActiveTab";
    /// Directory name under the platform data dir
    pub const APP_DIR: &str = "fire-notepad";
    /// Environment variable forcing the local `./tmp` data dir
    pub const DEV_ENV_VAR: &str = "FIRE_NOTEPAD_DEV";
    /// Extension used for each stored record
    pub const RECORD_EXTENSION: &str = "json";
}

/// Timing constants (in milliseconds)
pub mod timing {
    /// Quiet period after the last edit before the active tab is saved
    pub const SAVE_DEBOUNCE_MS: u64 = 1000;
}

/// Editor defaults
pub mod editor {
    /// Name given to tabs created without one, or renamed to blank
    pub const DEFAULT_TAB_NAME: &str = "Untitled";
}

/// Font size selector
pub mod fonts {
    /// Smallest selectable size (px)
    pub const MIN_FONT_SIZE: u32 = 8;
    /// Largest selectable size (px)
    pub const MAX_FONT_SIZE: u32 = 32;
    /// Step between options (px)
    pub const FONT_SIZE_STEP: u32 = 2;
    /// Initially selected size (px)
    pub const DEFAULT_FONT_SIZE: u32 = 14;
}
