//! Settings document load/save.
//!
//! This is the strict mutation path: a malformed document is an error
//! here, because silently rewriting a broken `settings.json` could lose
//! user data. Contrast with [`crate::scanner`], which degrades to an
//! empty hook list.

use std::path::Path;
use std::path::PathBuf;

use hooksmith_protocol::SettingsDoc;

use crate::error::HooksError;

/// Loads and persists the settings document at a fixed path.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document. A missing file is an empty document; malformed
    /// JSON is fatal.
    pub fn load(&self) -> Result<SettingsDoc, HooksError> {
        if !self.path.exists() {
            return Ok(SettingsDoc::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|source| HooksError::InvalidSettings {
            path: self.path.clone(),
            source,
        })
    }

    /// Persist the document as pretty JSON with a trailing newline.
    ///
    /// When `backup` is set and the file already exists, the previous
    /// content is copied to `<path>.bak` first. Parent directories are
    /// created as needed. Empty `_disabled_hooks` is dropped by the
    /// serde model itself.
    pub fn save(&self, doc: &SettingsDoc, backup: bool) -> Result<(), HooksError> {
        if backup && self.path.exists() {
            let backup_path = self.path.with_extension("json.bak");
            std::fs::copy(&self.path, &backup_path)?;
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut content = serde_json::to_string_pretty(doc).map_err(HooksError::Serialize)?;
        content.push('\n');
        std::fs::write(&self.path, content)?;

        tracing::debug!(path = %self.path.display(), "saved settings document");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hooksmith_protocol::HookDef;

    #[test]
    fn test_load_missing_file_is_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));

        let doc = store.load().unwrap();
        assert_eq!(doc, SettingsDoc::default());
    }

    #[test]
    fn test_load_malformed_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not valid json").unwrap();

        let err = SettingsStore::new(&path).load().unwrap_err();
        assert!(matches!(err, HooksError::InvalidSettings { .. }));
    }

    #[test]
    fn test_save_creates_parents_and_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let store = SettingsStore::new(&path);

        store.save(&SettingsDoc::default(), true).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_save_backs_up_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{\"hooks\": {}}").unwrap();
        let store = SettingsStore::new(&path);

        let mut doc = store.load().unwrap();
        doc.hooks
            .entry("PostToolUse".to_string())
            .or_default()
            .push(HookDef::default());
        store.save(&doc, true).unwrap();

        let backup = std::fs::read_to_string(dir.path().join("settings.json.bak")).unwrap();
        assert_eq!(backup, "{\"hooks\": {}}");
    }

    #[test]
    fn test_save_without_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{}").unwrap();

        SettingsStore::new(&path)
            .save(&SettingsDoc::default(), false)
            .unwrap();

        assert!(!dir.path().join("settings.json.bak").exists());
    }
}
