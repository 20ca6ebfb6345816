//! Favorite prompts, persisted as a JSON array
//!
//! Reading is forgiving: a missing, unreadable or malformed file is treated as
//! "no favorites", and entries without a prompt are skipped. Write failures are
//! returned to the caller.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::settings::app_file_path;
use crate::constants::config;

/// One saved prompt with the theme and mode active when it was saved
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FavoriteRecord {
    pub prompt: String,
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub mode: String,
}

impl FavoriteRecord {
    pub fn new(prompt: impl Into<String>, theme: impl Into<String>, mode: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            theme: theme.into(),
            mode: mode.into(),
        }
    }
}

fn or_unknown(s: &str) -> &str {
    if s.is_empty() { "?" } else { s }
}

impl fmt::Display for FavoriteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}/{}] {}", or_unknown(&self.theme), or_unknown(&self.mode), self.prompt)
    }
}

pub fn default_path() -> PathBuf {
    app_file_path(config::FAVORITES_FILENAME)
}

/// Read all favorites from `path`; never fails
pub fn load(path: &Path) -> Vec<FavoriteRecord> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            info!(path = %path.display(), error = %e, "No readable favorites file, starting empty");
            return Vec::new();
        }
    };

    let entries = match serde_json::from_str::<Vec<serde_json::Value>>(&contents) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Favorites file is not a JSON array, starting empty");
            return Vec::new();
        }
    };

    let total = entries.len();
    let records: Vec<FavoriteRecord> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();
    if records.len() != total {
        warn!(path = %path.display(), skipped = total - records.len(), "Skipped malformed favorites entries");
    }
    info!(path = %path.display(), count = records.len(), "Loaded favorites");
    records
}

/// Overwrite `path` with `records`
pub fn save(path: &Path, records: &[FavoriteRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .context(format!("Failed to create favorites directory: {}", parent.display()))?;
    }
    let contents = serde_json::to_string_pretty(records)
        .context("Failed to serialize favorites to JSON")?;
    fs::write(path, contents)
        .context(format!("Failed to write favorites file to {}", path.display()))?;
    Ok(())
}

/// In-memory favorites bound to their file; every change is persisted immediately
#[derive(Debug)]
pub struct FavoritesStore {
    path: PathBuf,
    records: Vec<FavoriteRecord>,
}

impl FavoritesStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = load(&path);
        Self { path, records }
    }

    pub fn records(&self) -> &[FavoriteRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append and persist. The record stays in memory even if the write fails.
    pub fn add(&mut self, record: FavoriteRecord) -> Result<()> {
        info!(theme = %record.theme, mode = %record.mode, "Saving favorite");
        self.records.push(record);
        save(&self.path, &self.records)
            .context("Failed to persist favorites after adding a prompt")
    }

    pub fn clear(&mut self) -> Result<()> {
        info!(count = self.records.len(), "Clearing favorites");
        self.records.clear();
        save(&self.path, &self.records)
            .context("Failed to persist favorites after clearing")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(prompt: &str) -> FavoriteRecord {
        FavoriteRecord::new(prompt, "любой", "стандарт")
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&dir.path().join("favorites.json")).is_empty());
    }

    #[test]
    fn test_load_malformed_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        fs::write(&path, "not json at all").unwrap();
        assert!(load(&path).is_empty());
    }

    #[test]
    fn test_load_non_array_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        fs::write(&path, r#"{"prompt": "x"}"#).unwrap();
        assert!(load(&path).is_empty());
    }

    #[test]
    fn test_load_skips_entries_without_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        fs::write(
            &path,
            r#"[{"prompt": "a", "theme": "хоррор", "mode": "челлендж"}, {"theme": "x"}, 42, {"prompt": "b"}]"#,
        )
        .unwrap();
        let records = load(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], FavoriteRecord::new("a", "хоррор", "челлендж"));
        assert_eq!(records[1], FavoriteRecord::new("b", "", ""));
    }

    #[test]
    fn test_save_then_load_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        let records = vec![record("first"), record("second")];
        save(&path, &records).unwrap();
        assert_eq!(load(&path), records);
    }

    #[test]
    fn test_save_keeps_cyrillic_readable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        save(&path, &[record("кот")]).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("кот"));
    }

    #[test]
    fn test_save_to_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(save(dir.path(), &[record("x")]).is_err());
    }

    #[test]
    fn test_store_add_and_clear_persist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");

        let mut store = FavoritesStore::open(&path);
        assert!(store.is_empty());
        store.add(record("one")).unwrap();
        store.add(record("two")).unwrap();
        assert_eq!(FavoritesStore::open(&path).records().len(), 2);

        store.clear().unwrap();
        assert!(store.is_empty());
        assert!(FavoritesStore::open(&path).is_empty());
    }

    #[test]
    fn test_display_marks_missing_theme_and_mode() {
        assert_eq!(
            FavoriteRecord::new("кот", "", "").to_string(),
            "[?/?] кот"
        );
        assert_eq!(record("кот").to_string(), "[любой/стандарт] кот");
    }
}
