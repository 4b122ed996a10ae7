//! File-backed container
//!
//! One pretty-printed JSON object of `name -> text` per data store. The
//! document is loaded once per process and rewritten atomically on every `set`.
//! Every open of the same file within a process shares one container, so all
//! facades see the same values.

use crate::contract::SettingsError;
use crate::domain::repository::SettingsContainer;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use parking_lot::{Mutex, RwLock};
use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Weak};
use tempfile::NamedTempFile;
use tokio::runtime::Handle;

type Values = BTreeMap<String, String>;

/// Open containers keyed by canonical path
static OPEN_FILES: Lazy<Mutex<HashMap<PathBuf, Weak<FileContainer>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

#[derive(Debug)]
pub struct FileContainer {
    path: PathBuf,
    values: Arc<RwLock<Values>>,
}

impl FileContainer {
    /// Open the document at `path`; a missing file is an empty container
    ///
    /// Returns the container already open for the same file, if any.
    pub fn open(path: impl Into<PathBuf>) -> Result<Arc<Self>, SettingsError> {
        let path = canonical_path(path.into());

        let mut open_files = OPEN_FILES.lock();
        if let Some(container) = open_files.get(&path).and_then(Weak::upgrade) {
            return Ok(container);
        }

        let container = Arc::new(Self::load(path.clone())?);
        open_files.retain(|_, container| container.strong_count() > 0);
        open_files.insert(path, Arc::downgrade(&container));
        Ok(container)
    }

    fn load(path: PathBuf) -> Result<Self, SettingsError> {
        let values = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
                SettingsError::storage(format!("corrupt settings file {}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Values::new(),
            Err(e) => {
                return Err(SettingsError::storage(format!(
                    "cannot read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        tracing::debug!(path = %path.display(), settings = values.len(), "Opened settings file");
        Ok(Self {
            path,
            values: Arc::new(RwLock::new(values)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Resolve the parent directory so aliases of one file map to one key.
/// The file itself may not exist yet.
fn canonical_path(path: PathBuf) -> PathBuf {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    match (parent.canonicalize(), path.file_name()) {
        (Ok(parent), Some(file_name)) => parent.join(file_name),
        _ => path,
    }
}

fn persist(path: &Path, values: &Values) -> Result<(), SettingsError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(SettingsError::storage)?;
    serde_json::to_writer_pretty(&mut file, values).map_err(SettingsError::storage)?;
    file.as_file().sync_all().map_err(SettingsError::storage)?;
    file.persist(path).map_err(|e| SettingsError::storage(e.error))?;
    Ok(())
}

fn remove_document(path: &Path, values: &RwLock<Values>) -> Result<(), SettingsError> {
    let mut values = values.write();
    match std::fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(SettingsError::storage(format!(
                "cannot remove {}: {}",
                path.display(),
                e
            )))
        }
    }
    values.clear();
    Ok(())
}

#[async_trait]
impl SettingsContainer for FileContainer {
    fn get(&self, name: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.values.read().get(name).cloned())
    }

    fn set(&self, name: &str, value: String) -> Result<(), SettingsError> {
        let mut values = self.values.write();
        let previous = values.insert(name.to_string(), value);

        if let Err(e) = persist(&self.path, &values) {
            // Keep memory in line with what is on disk
            match previous {
                Some(previous) => values.insert(name.to_string(), previous),
                None => values.remove(name),
            };
            return Err(e);
        }
        Ok(())
    }

    fn len(&self) -> Result<usize, SettingsError> {
        Ok(self.values.read().len())
    }

    /// Runs on Tokio's blocking pool when polled inside a Tokio runtime,
    /// inline otherwise.
    async fn clear_all(&self) -> Result<(), SettingsError> {
        if Handle::try_current().is_err() {
            return remove_document(&self.path, &self.values);
        }

        let path = self.path.clone();
        let values = self.values.clone();
        tokio::task::spawn_blocking(move || remove_document(&path, &values))
            .await
            .map_err(SettingsError::storage)?
    }
}
