//! Key/value persistence: a fallible storage medium ([`KvStore`]) and the
//! adapter the rest of the crate talks to ([`Prefs`]), which never fails.

use anyhow::{anyhow, bail, Context};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};
use tracing::{debug, warn};

/// Keys of the four independently persisted entries.
pub mod keys {
    pub const QUOTES: &str = "vibeverse.quotes";
    pub const FAVORITES: &str = "vibeverse.favorites";
    pub const THEME: &str = "vibeverse.theme";
    /// `"video"` or `"image"`.
    pub const BG_MODE: &str = "vibeverse.bgMode";
}

/// Raw storage medium. Implementations may fail on any call (quota, disabled
/// storage, corrupt backing file); callers go through [`Prefs`] which absorbs
/// those failures.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// In-memory store for tests and sessions that should not touch disk.
#[derive(Default)]
pub struct MemStore {
    inner: RwLock<HashMap<String, String>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Pre-populated store, handy for simulating a returning user.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            inner: RwLock::new(map),
        }
    }
}

impl KvStore for MemStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let map = self
            .inner
            .read()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A single JSON object on disk mapping keys to string values.
pub struct FileStore {
    path: PathBuf,
    quota_bytes: Option<usize>,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            quota_bytes: None,
            write_lock: Mutex::new(()),
        }
    }

    /// Reject writes that would grow the file past `bytes`.
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota_bytes = Some(bytes);
        self
    }

    fn read_all(&self) -> anyhow::Result<BTreeMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(s) if s.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(s) => serde_json::from_str(&s)
                .with_context(|| format!("corrupt store file {}", self.path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| anyhow!("file store lock poisoned"))?;
        let mut map = self.read_all().unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "discarding unreadable store file");
            BTreeMap::new()
        });
        map.insert(key.to_string(), value.to_string());
        let body = serde_json::to_string_pretty(&map)?;
        if let Some(quota) = self.quota_bytes {
            if body.len() > quota {
                bail!("storage quota exceeded ({} > {} bytes)", body.len(), quota);
            }
        }
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        // write-then-rename so a crash never leaves a half-written file
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, body)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Best-effort view over a [`KvStore`]. Reads fall back, writes are dropped,
/// nothing here ever returns an error.
#[derive(Clone)]
pub struct Prefs {
    store: Arc<dyn KvStore>,
}

impl Prefs {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub fn get_string(&self, key: &str, fallback: &str) -> String {
        match self.store.get(key) {
            Ok(Some(v)) => v,
            Ok(None) => fallback.to_string(),
            Err(e) => {
                warn!(key, error = %e, "storage read failed, using fallback");
                fallback.to_string()
            }
        }
    }

    pub fn set_string(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            warn!(key, error = %e, "storage write dropped");
        }
    }

    /// Missing, empty and unparsable entries all yield `fallback`.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match self.store.get(key) {
            Ok(Some(raw)) if !raw.is_empty() => match serde_json::from_str(&raw) {
                Ok(v) => v,
                Err(e) => {
                    warn!(key, error = %e, "malformed stored json, using fallback");
                    fallback
                }
            },
            Ok(_) => {
                debug!(key, "no stored value");
                fallback
            }
            Err(e) => {
                warn!(key, error = %e, "storage read failed, using fallback");
                fallback
            }
        }
    }

    pub fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(s) => self.set_string(key, &s),
            Err(e) => warn!(key, error = %e, "could not serialize value, write dropped"),
        }
    }
}
