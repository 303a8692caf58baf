//! Appearance preferences: light/dark theme and editor font size

use crate::config::fonts::{DEFAULT_FONT_SIZE, FONT_SIZE_STEP, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::error::{NotepadError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label of the toggle button, which offers the other theme
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "🌙 Dark Mode",
            Theme::Dark => "☀️ Light Mode",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Editor font size in px, restricted to the selector's options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSize(u32);

impl FontSize {
    pub fn new(px: u32) -> Result<Self> {
        let valid = (MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&px)
            && (px - MIN_FONT_SIZE) % FONT_SIZE_STEP == 0;
        if valid {
            Ok(Self(px))
        } else {
            Err(NotepadError::UnsupportedFontSize(px))
        }
    }

    pub fn px(self) -> u32 {
        self.0
    }

    /// Every selectable size, smallest first
    pub fn options() -> impl Iterator<Item = FontSize> {
        (MIN_FONT_SIZE..=MAX_FONT_SIZE)
            .step_by(FONT_SIZE_STEP as usize)
            .map(FontSize)
    }

    pub fn label(self) -> String {
        format!("{}px", self.0)
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self(DEFAULT_FONT_SIZE)
    }
}
