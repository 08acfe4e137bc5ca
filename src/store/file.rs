//! File-backed progression store with checksummed binary entries.
//!
//! Entry format:
//! - Version magic (8 bytes)
//! - Data length (4 bytes)
//! - Serialized progression root (variable length)
//! - SHA256 checksum over the three fields above (32 bytes)

use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;

use directories::ProjectDirs;
use sha2::{Digest, Sha256};

use super::{ProgressionStore, StoreError};
use crate::core::constants::SAVE_VERSION_MAGIC;
use crate::progression::types::ProgressionRoot;

/// Stores each key as `<key>.dat` in a save directory.
pub struct FileStore {
    save_dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at the platform save directory.
    pub fn new() -> Result<Self, StoreError> {
        let project_dirs = ProjectDirs::from("", "", "runefall").ok_or_else(|| {
            StoreError::Corrupt("could not determine platform save directory".to_string())
        })?;
        Self::with_dir(project_dirs.data_dir().to_path_buf())
    }

    /// Creates a store rooted at an explicit directory.
    pub fn with_dir(save_dir: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&save_dir)?;
        Ok(Self { save_dir })
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.save_dir.join(format!("{key}.dat"))
    }
}

impl ProgressionStore for FileStore {
    fn save(&mut self, key: &str, root: &ProgressionRoot) -> Result<(), StoreError> {
        let data = bincode::serialize(root)?;
        let data_len = data.len() as u32;

        // Checksum covers version + length + data
        let mut hasher = Sha256::new();
        hasher.update(SAVE_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(&data);
        let checksum = hasher.finalize();

        let mut file = fs::File::create(self.entry_path(key))?;
        file.write_all(&SAVE_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&data)?;
        file.write_all(&checksum)?;
        Ok(())
    }

    fn load(&self, key: &str) -> Result<ProgressionRoot, StoreError> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Err(StoreError::NotFound(key.to_string()));
        }
        let mut file = fs::File::open(path)?;

        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        let version = u64::from_le_bytes(version_bytes);
        if version != SAVE_VERSION_MAGIC {
            return Err(StoreError::Corrupt(format!(
                "bad version magic: expected 0x{SAVE_VERSION_MAGIC:016X}, got 0x{version:016X}"
            )));
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let data_len = u32::from_le_bytes(length_bytes);

        let mut data = vec![0u8; data_len as usize];
        file.read_exact(&mut data)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(length_bytes);
        hasher.update(&data);
        if stored_checksum != hasher.finalize().as_slice() {
            return Err(StoreError::Corrupt("checksum mismatch".to_string()));
        }

        Ok(bincode::deserialize(&data)?)
    }

    fn exists(&self, key: &str) -> bool {
        self.entry_path(key).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(tag: &str) -> FileStore {
        let dir = std::env::temp_dir().join(format!("runefall-store-{tag}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        FileStore::with_dir(dir).expect("create store dir")
    }

    fn cleanup(store: &FileStore) {
        let _ = fs::remove_dir_all(&store.save_dir);
    }

    #[test]
    fn test_file_store_round_trip() {
        let mut store = temp_store("roundtrip");
        let root = ProgressionRoot::new();

        assert!(!store.exists("progression"));
        store.save("progression", &root).expect("save");
        assert!(store.exists("progression"));
        assert_eq!(store.load("progression").expect("load"), root);

        cleanup(&store);
    }

    #[test]
    fn test_file_store_missing_key() {
        let store = temp_store("missing");
        assert!(matches!(store.load("nope"), Err(StoreError::NotFound(_))));
        cleanup(&store);
    }

    #[test]
    fn test_file_store_rejects_bad_magic() {
        let mut store = temp_store("magic");
        store.save("progression", &ProgressionRoot::new()).expect("save");

        // Flip a byte in the magic
        let path = store.entry_path("progression");
        let mut bytes = fs::read(&path).expect("read");
        bytes[0] ^= 0xFF;
        fs::write(&path, bytes).expect("write");

        assert!(matches!(
            store.load("progression"),
            Err(StoreError::Corrupt(_))
        ));
        cleanup(&store);
    }

    #[test]
    fn test_file_store_rejects_tampered_payload() {
        let mut store = temp_store("tamper");
        store.save("progression", &ProgressionRoot::new()).expect("save");

        let path = store.entry_path("progression");
        let mut bytes = fs::read(&path).expect("read");
        let payload_start = 12; // magic + length
        bytes[payload_start] ^= 0xFF;
        fs::write(&path, bytes).expect("write");

        assert!(matches!(
            store.load("progression"),
            Err(StoreError::Corrupt(_))
        ));
        cleanup(&store);
    }

    #[test]
    fn test_file_store_rejects_truncated_entry() {
        let mut store = temp_store("truncated");
        store.save("progression", &ProgressionRoot::new()).expect("save");

        let path = store.entry_path("progression");
        let bytes = fs::read(&path).expect("read");
        fs::write(&path, &bytes[..bytes.len() - 10]).expect("write");

        assert!(store.load("progression").is_err());
        cleanup(&store);
    }
}
