//! File-backed store.
//!
//! All entries live in one `storage.json` object:
//!
//! ```json
//! {
//!   "theme": "dark",
//!   "bookmark-12": "true"
//! }
//! ```
//!
//! The file is the only copy of the entries. Reads load it, and each
//! mutation re-reads it, applies the one key change and writes it back with
//! write-then-rename. Several stores open on the same directory therefore see
//! each other's writes, and the last write to a key wins. A crash mid-write
//! leaves the previous contents intact.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StorageError};

const STORAGE_FILE: &str = "storage.json";
const STORAGE_TEMP_FILE: &str = "storage.json.tmp";

type Items = BTreeMap<String, String>;

/// Store persisted to `{dir}/storage.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open the store in `dir`, checking that existing entries parse.
    ///
    /// A missing file is an empty store; the directory is created on first write.
    pub fn open(dir: &Path) -> Result<Self, StorageError> {
        let store = Self {
            dir: dir.to_path_buf(),
        };
        store.read_items()?;
        Ok(store)
    }

    /// Path of the backing file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(STORAGE_FILE)
    }

    fn read_items(&self) -> Result<Items, StorageError> {
        let path = self.path();
        if !path.exists() {
            return Ok(Items::new());
        }
        let contents = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_items(&self, items: &Items) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;

        let temp_path = self.dir.join(STORAGE_TEMP_FILE);
        let json = serde_json::to_string_pretty(items)?;
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, self.path())?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        match self.read_items() {
            Ok(mut items) => items.remove(key),
            Err(e) => {
                log::warn!("Failed to read {}: {}", self.path().display(), e);
                None
            }
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.read_items()?;
        items.insert(key.to_string(), value.to_string());
        self.write_items(&items)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        let mut items = self.read_items()?;
        if items.remove(key).is_none() {
            return Ok(());
        }
        self.write_items(&items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn open_missing_is_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        assert!(store.get_item("theme").is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn entries_survive_reopen() {
        let dir = tempdir().unwrap();

        let mut store = FileStore::open(dir.path()).unwrap();
        store.set_item("theme", "dark").unwrap();
        store.set_item("bookmark-3", "true").unwrap();
        drop(store);

        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get_item("theme").as_deref(), Some("dark"));
        assert_eq!(reopened.get_item("bookmark-3").as_deref(), Some("true"));
    }

    #[test]
    fn remove_is_persisted() {
        let dir = tempdir().unwrap();

        let mut store = FileStore::open(dir.path()).unwrap();
        store.set_item("bookmark-3", "true").unwrap();
        store.remove_item("bookmark-3").unwrap();

        let reopened = FileStore::open(dir.path()).unwrap();
        assert!(!reopened.contains_key("bookmark-3"));
    }

    #[test]
    fn no_temp_file_left_behind() {
        let dir = tempdir().unwrap();

        let mut store = FileStore::open(dir.path()).unwrap();
        store.set_item("theme", "light").unwrap();

        assert!(dir.path().join(STORAGE_FILE).exists());
        assert!(!dir.path().join(STORAGE_TEMP_FILE).exists());
    }

    #[test]
    fn creates_missing_directory_on_write() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("state").join("site");

        let mut store = FileStore::open(&nested).unwrap();
        store.set_item("theme", "dark").unwrap();

        assert!(nested.join(STORAGE_FILE).exists());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(STORAGE_FILE), "[1, 2").unwrap();

        let err = FileStore::open(dir.path()).unwrap_err();
        assert!(matches!(err, StorageError::Json(_)));
    }

    #[test]
    fn stores_on_same_dir_keep_each_others_writes() {
        let dir = tempdir().unwrap();
        let mut first = FileStore::open(dir.path()).unwrap();
        let mut second = FileStore::open(dir.path()).unwrap();

        first.set_item("bookmark-1", "true").unwrap();
        assert_eq!(second.get_item("bookmark-1").as_deref(), Some("true"));

        second.set_item("bookmark-2", "true").unwrap();
        let reopened = FileStore::open(dir.path()).unwrap();
        assert!(reopened.contains_key("bookmark-1"));
        assert!(reopened.contains_key("bookmark-2"));

        first.remove_item("bookmark-2").unwrap();
        assert!(!second.contains_key("bookmark-2"));
        assert!(second.contains_key("bookmark-1"));
    }

    #[test]
    fn last_write_to_a_key_wins() {
        let dir = tempdir().unwrap();
        let mut first = FileStore::open(dir.path()).unwrap();
        let mut second = FileStore::open(dir.path()).unwrap();

        first.set_item("theme", "light").unwrap();
        second.set_item("theme", "dark").unwrap();

        assert_eq!(first.get_item("theme").as_deref(), Some("dark"));
    }

    mod write_failure {
        use super::*;

        // A directory in the temp file's place makes every write fail.
        fn blocked_store() -> (tempfile::TempDir, FileStore) {
            let dir = tempdir().unwrap();
            let mut store = FileStore::open(dir.path()).unwrap();
            store.set_item("bookmark-4", "true").unwrap();
            fs::create_dir(dir.path().join(STORAGE_TEMP_FILE)).unwrap();
            (dir, store)
        }

        #[test]
        fn failed_set_keeps_previous_entries() {
            let (_dir, mut store) = blocked_store();

            assert!(matches!(
                store.set_item("bookmark-5", "true"),
                Err(StorageError::Io(_))
            ));
            assert!(!store.contains_key("bookmark-5"));
            assert_eq!(store.get_item("bookmark-4").as_deref(), Some("true"));
        }

        #[test]
        fn failed_remove_keeps_entry() {
            let (_dir, mut store) = blocked_store();

            assert!(store.remove_item("bookmark-4").is_err());
            assert_eq!(store.get_item("bookmark-4").as_deref(), Some("true"));
        }

        #[test]
        fn removing_absent_key_does_not_write() {
            let (_dir, mut store) = blocked_store();
            assert!(store.remove_item("bookmark-9").is_ok());
        }
    }
}
