use std::fs;
use std::path::PathBuf;

use crate::config::AppPaths;
use crate::error::AppResult;

use super::KeyValueStore;

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_paths(paths: &AppPaths) -> Self {
        Self::new(paths.data_dir())
    }

    pub fn slot_file(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.slot_file(key);
        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(path)?;
        Ok(Some(raw))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.slot_file(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&path, value)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    fn delete(&self, key: &str) -> AppResult<()> {
        let path = self.slot_file(key);
        if path.exists() {
            fs::remove_file(path)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_slot_reads_as_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("nothing").expect("get"), None);
    }

    #[test]
    fn set_creates_root_and_get_reads_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path().join("nested"));

        store.set("slot", "[]").expect("set");

        assert!(store.slot_file("slot").exists());
        assert_eq!(store.get("slot").expect("get").as_deref(), Some("[]"));
    }

    #[test]
    fn delete_is_a_noop_for_missing_slot() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path());

        store.delete("slot").expect("delete missing");
        store.set("slot", "x").expect("set");
        store.delete("slot").expect("delete");

        assert!(!store.slot_file("slot").exists());
    }

    #[cfg(unix)]
    #[test]
    fn slot_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path());
        store.set("slot", "[]").expect("set");

        let mode = fs::metadata(store.slot_file("slot"))
            .expect("metadata")
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
