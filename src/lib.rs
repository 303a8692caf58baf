//! Fire Notepad - a tabbed notepad core
//!
//! Several independent documents live in tabs, one of which is shown in a
//! single editing buffer at a time. The session survives restarts through
//! a small string-keyed store, and the buffer feeds live word, character,
//! line and column counts.

pub mod config;
pub mod debounce;
pub mod error;
pub mod export;
pub mod logging;
pub mod persistence;
pub mod session;
pub mod stats;
pub mod store;
pub mod tab;
pub mod text_buffer;
pub mod theme;
pub mod view;

pub use error::{NotepadError, Result};
pub use persistence::{FileStore, KeyValueStore, MemoryStore, Persistence};
pub use session::{SaveStatus, SessionManager, TabClick};
pub use stats::Stats;
pub use store::TabStore;
pub use tab::{Tab, TabId};
pub use text_buffer::TextBuffer;
