// ── Theme Preference ───────────────────────────────────────────────────────
// One persisted client-side key: the chosen UI theme. Read at startup,
// written on toggle; anything missing or unreadable defaults to dark.

use crate::error::ChatResult;
use log::warn;
use std::path::PathBuf;

/// Storage key, kept identical to the site's browser-local key.
pub const THEME_KEY: &str = "portfolio-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// "light" selects light; anything else is dark.
    pub fn parse(value: &str) -> Theme {
        if value.trim() == "light" {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// File-backed store for the theme preference.
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    /// Store under the user config dir (falls back to the working directory
    /// when the platform reports none).
    pub fn open() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        ThemeStore { path: base.join("portfolio-chat").join(THEME_KEY) }
    }

    /// Store at an explicit path. Used by tests.
    pub fn with_path(path: PathBuf) -> Self {
        ThemeStore { path }
    }

    /// Saved preference, or the dark default when absent or unreadable.
    pub fn load(&self) -> Theme {
        match std::fs::read_to_string(&self.path) {
            Ok(value) => Theme::parse(&value),
            Err(_) => Theme::default(),
        }
    }

    pub fn save(&self, theme: Theme) -> ChatResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, theme.as_str())?;
        Ok(())
    }

    /// Flip, persist, and return the new theme. A failed write keeps the
    /// flipped theme for the running session, mirroring the site's behavior
    /// of ignoring storage errors.
    pub fn toggle(&self) -> Theme {
        let next = self.load().toggled();
        if let Err(e) = self.save(next) {
            warn!("[widget] could not persist theme preference: {}", e);
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> ThemeStore {
        let path = std::env::temp_dir()
            .join(format!("portfolio-chat-test-{}-{}", std::process::id(), name))
            .join(THEME_KEY);
        let _ = std::fs::remove_file(&path);
        ThemeStore::with_path(path)
    }

    #[test]
    fn test_missing_file_defaults_to_dark() {
        assert_eq!(temp_store("missing").load(), Theme::Dark);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let store = temp_store("round-trip");
        store.save(Theme::Light).unwrap();
        assert_eq!(store.load(), Theme::Light);
        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load(), Theme::Dark);
    }

    #[test]
    fn test_unknown_value_defaults_to_dark() {
        assert_eq!(Theme::parse("solarized"), Theme::Dark);
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse(" light\n"), Theme::Light);
    }

    #[test]
    fn test_toggle_flips_and_persists() {
        let store = temp_store("toggle");
        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(store.load(), Theme::Light);
        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(store.load(), Theme::Dark);
    }
}
