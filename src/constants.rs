//! Application-wide constants
//!
//! This module contains all magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Application identity
pub mod app {
    /// Banner title shown at the top of the interactive menu
    pub const NAME: &str = "Draw Idea Generator (CLI)";

    /// Width of the `=` rule printed around the banner
    pub const BANNER_WIDTH: usize = 52;
}

/// Config file locations (relative to the platform config dir)
pub mod config {
    /// Directory under `dirs::config_dir()`
    pub const APP_DIR: &str = "draw-idea";

    /// Persisted generation options
    pub const SETTINGS_FILENAME: &str = "settings.json";

    /// Saved favorite prompts
    pub const FAVORITES_FILENAME: &str = "favorites.json";
}

/// Theme identifiers, in menu order
pub mod themes {
    /// Universal theme, merged into every other theme
    pub const UNIVERSAL: &str = "любой";

    pub const FANTASY: &str = "фэнтези";

    pub const SCI_FI: &str = "sci-fi";

    pub const EVERYDAY: &str = "бытовое";

    pub const HORROR: &str = "хоррор";
}

/// Text used when the merged pool has nothing for a core field
pub mod fallback {
    pub const SUBJECT: &str = "кто-то";

    pub const ACTION: &str = "делает что-то странное";

    pub const SETTING: &str = "в неизвестном месте";
}

/// Prompt formatting
pub mod format {
    /// Separator between fragments of a generated prompt
    pub const FRAGMENT_SEPARATOR: &str = "; ";

    /// Separator between label and value of an optional fragment
    pub const LABEL_SEPARATOR: &str = ": ";
}

/// Logging
pub mod logging {
    /// Environment variable holding the max log level
    pub const LEVEL_ENV: &str = "LOG_LEVEL";

    /// Level used when `LOG_LEVEL` is unset
    pub const DEFAULT_LEVEL: &str = "warn";
}
