//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage the glyphs used by the
//! deletion panel, supporting emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub warning: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub bullet: &'static str,
    pub mail: &'static str,
    pub spinner: &'static str,
}

const EMOJI_ICONS: IconSet = IconSet {
    warning: "⚠️",
    success: "✅",
    error: "❌",
    bullet: "•",
    mail: "📧",
    spinner: "⏳",
};

const UNICODE_ICONS: IconSet = IconSet {
    warning: "⚠",
    success: "✓",
    error: "✗",
    bullet: "•",
    mail: "✉",
    spinner: "⟳",
};

const ASCII_ICONS: IconSet = IconSet {
    warning: "!",
    success: "+",
    error: "x",
    bullet: "*",
    mail: "@",
    spinner: "~",
};

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    fn icons(&self) -> &'static IconSet {
        match self.current_theme {
            IconTheme::Emoji => &EMOJI_ICONS,
            IconTheme::Unicode => &UNICODE_ICONS,
            IconTheme::Ascii => &ASCII_ICONS,
        }
    }

    pub fn warning(&self) -> &'static str {
        self.icons().warning
    }

    pub fn success(&self) -> &'static str {
        self.icons().success
    }

    pub fn error(&self) -> &'static str {
        self.icons().error
    }

    pub fn bullet(&self) -> &'static str {
        self.icons().bullet
    }

    pub fn mail(&self) -> &'static str {
        self.icons().mail
    }

    pub fn spinner(&self) -> &'static str {
        self.icons().spinner
    }
}
