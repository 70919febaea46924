//! Cache store - read/write cache entry files
//!
//! One entry is one flat file under the base directory. All operations are
//! synchronous, open-and-close filesystem calls; nothing here propagates an
//! error to the caller. A failing cache must look exactly like a cold cache.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::cache::codec;
use crate::core::model::CacheError;

/// Entry file suffix
const FILE_SUFFIX: &str = ".txt";

/// Directory components appended to the host-supplied root
const CACHE_SUBDIR: &str = "files";
const CACHE_DIR_NAME: &str = "CacheUtils";

/// Resolve the cache directory for a given host root
fn cache_dir_for(root: &Path) -> PathBuf {
    root.join(CACHE_SUBDIR).join(CACHE_DIR_NAME)
}

/// On-disk cache handle bound to one base directory.
///
/// The base directory is fixed at construction; independent handles over
/// distinct roots never interact. Cloning is cheap and clones share the
/// same directory.
#[derive(Debug, Clone)]
pub struct FileCache {
    base_dir: PathBuf,
}

impl FileCache {
    /// Configure a cache rooted at `<root>/files/CacheUtils`, creating the
    /// directory (and parents) if absent. Configuring over an existing
    /// directory is a no-op; a creation failure is logged and the handle is
    /// returned anyway, in which case later operations degrade to misses.
    pub fn configure(root: impl AsRef<Path>) -> Self {
        let base_dir = cache_dir_for(root.as_ref());
        match fs::create_dir_all(&base_dir) {
            Ok(()) => debug!("cache dir ready at {:?}", base_dir),
            Err(err) => debug!("failed to create cache dir {:?}: {}", base_dir, err),
        }
        Self { base_dir }
    }

    /// Base directory all entries live under.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path for a cache entry: `<base_dir>/<name>.txt`.
    ///
    /// Pure join, no validation: `name` must not contain path separators or
    /// traversal components, and two distinct names never collide.
    pub fn entry_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(format!("{name}{FILE_SUFFIX}"))
    }

    fn try_read(&self, name: &str) -> Result<String, CacheError> {
        Ok(fs::read_to_string(self.entry_path(name))?)
    }

    fn try_write(&self, name: &str, text: &str) -> Result<(), CacheError> {
        Ok(fs::write(self.entry_path(name), text)?)
    }

    /// Read the raw text of an entry.
    ///
    /// Returns `None` for a missing entry or any I/O error; the two are
    /// indistinguishable by contract.
    pub fn read_text(&self, name: &str) -> Option<String> {
        match self.try_read(name) {
            Ok(text) => Some(text),
            Err(err) => {
                debug!("read cache file failure for {}: {}", name, err);
                None
            }
        }
    }

    /// Overwrite an entry with raw text, creating or truncating the file.
    ///
    /// Best-effort: an I/O error is swallowed. There is no fsync and no
    /// atomic replace, so a crash mid-write can leave a partial file.
    pub fn write_text(&self, name: &str, text: &str) {
        if let Err(err) = self.try_write(name, text) {
            debug!("write cache file failure for {}: {}", name, err);
        }
    }

    /// True iff the entry file exists, regardless of its content.
    pub fn exists(&self, name: &str) -> bool {
        self.entry_path(name).exists()
    }

    /// Quietly delete an entry. A missing entry is not an error, and any
    /// other deletion error is swallowed.
    pub fn delete(&self, name: &str) {
        if let Err(err) = fs::remove_file(self.entry_path(name)) {
            if err.kind() != ErrorKind::NotFound {
                debug!("delete cache file failure for {}: {}", name, err);
            }
        }
    }

    /// Quietly remove the whole base directory and every entry in it.
    /// `configure` over the same root brings the cache back.
    pub fn clear(&self) {
        if let Err(err) = fs::remove_dir_all(&self.base_dir) {
            if err.kind() != ErrorKind::NotFound {
                debug!("clear cache failure for {:?}: {}", self.base_dir, err);
            }
        }
    }

    /// Store a record list as a JSON array of string-keyed objects.
    pub fn write_records<T: Serialize>(&self, name: &str, records: &[HashMap<String, T>]) {
        self.write_text(name, &codec::records_to_json(records));
    }

    /// Read back a record list. A missing, empty or undecodable entry reads
    /// as an empty vector, never an error.
    pub fn read_records<T: DeserializeOwned>(&self, name: &str) -> Vec<HashMap<String, T>> {
        codec::records_from_json(self.read_text(name).as_deref())
    }

    /// Store a single record as one string-keyed JSON object.
    pub fn write_record<T: Serialize>(&self, name: &str, record: &HashMap<String, T>) {
        self.write_text(name, &codec::record_to_json(record));
    }

    /// Read back a single record. A missing, empty or undecodable entry
    /// reads as an empty map.
    pub fn read_record<T: DeserializeOwned>(&self, name: &str) -> HashMap<String, T> {
        codec::record_from_json(self.read_text(name).as_deref())
    }

    /// Store an arbitrary serializable value. If the value fails to encode,
    /// a JSON `null` is stored instead, which reads back as absent.
    pub fn write_object<T: Serialize>(&self, name: &str, value: &T) {
        self.write_text(name, &codec::object_to_json(value));
    }

    /// Read back a value stored with [`FileCache::write_object`]. The type
    /// parameter is the expected shape; a missing entry or a payload that
    /// does not decode into it reads as `None`.
    pub fn read_object<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        codec::object_from_json(self.read_text(name).as_deref())
    }
}
