//! Typed errors for the notepad core.
//!
//! None of these are fatal to a session: the session manager logs storage
//! failures and keeps working from memory.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotepadError {
    /// Reading or writing a storage record or export file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A tab list could not be encoded to JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A font size outside the selector's options was requested.
    #[error("unsupported font size {0}px (expected an even size between {min} and {max})", min = crate::config::fonts::MIN_FONT_SIZE, max = crate::config::fonts::MAX_FONT_SIZE)]
    UnsupportedFontSize(u32),
}

pub type Result<T> = std::result::Result<T, NotepadError>;
