//! Theme preference, persisted as a single word in a file under the user's
//! config directory. Unreadable or missing state falls back to dark.

use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

fn preference_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(PathBuf::from(home).join(".config").join("coinlens").join("theme"))
}

pub fn load() -> Theme {
    preference_path()
        .map(|path| load_from(&path))
        .unwrap_or_default()
}

/// Written on every toggle. Persistence failure is not worth interrupting
/// the session for; it only costs the preference on the next run.
pub fn store(theme: Theme) {
    if let Some(path) = preference_path() {
        store_to(&path, theme);
    }
}

fn load_from(path: &Path) -> Theme {
    fs::read_to_string(path)
        .ok()
        .and_then(|raw| Theme::parse(&raw))
        .unwrap_or_default()
}

fn store_to(path: &Path, theme: Theme) {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Err(err) = fs::write(path, theme.as_str()) {
        log::warn!("failed to persist theme preference: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_alternates() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
    }

    #[test]
    fn missing_or_garbage_file_defaults_to_dark() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme");
        assert_eq!(load_from(&path), Theme::Dark);

        std::fs::write(&path, "solarized").unwrap();
        assert_eq!(load_from(&path), Theme::Dark);
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("theme");
        store_to(&path, Theme::Light);
        assert_eq!(load_from(&path), Theme::Light);
        store_to(&path, Theme::Dark);
        assert_eq!(load_from(&path), Theme::Dark);
    }
}
