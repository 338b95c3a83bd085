//! Persisted settings store owned by the host.
//!
//! Holds the last written `ApiConfiguration` in memory and mirrors it to a
//! TOML file. Disk is written first; the in-memory copy only changes once the
//! write succeeded, so a failed update leaves the store untouched.
//!
//! Every method here does blocking file I/O. Async callers go through
//! `spawn_blocking`.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fs2::FileExt;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ApiConfiguration;
use crate::wire::{UpdateApiConfigurationRequest, UpdateSettingsRequest, WireError};

const API_CONFIGURATION_KEY: &str = "api_configuration";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read settings file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to encode settings: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("Failed to write settings file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Settings file is locked by another process ('{path}')")]
    Locked { path: PathBuf },

    #[error("Rejected update: {0}")]
    Wire(#[from] WireError),
}

/// Everything the host persists for the welcome flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostSettings {
    #[serde(default)]
    pub api_configuration: Option<ApiConfiguration>,
}

/// Thread-safe, file-backed settings container.
#[derive(Clone)]
pub struct SettingsStore {
    inner: Arc<RwLock<HostSettings>>,
    path: PathBuf,
}

impl SettingsStore {
    /// Open the store at `path`. A missing file yields empty settings; the
    /// file is created on the first update.
    pub fn open(path: PathBuf) -> Result<Self, StoreError> {
        let settings = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|source| StoreError::Read {
                path: path.clone(),
                source,
            })?;
            toml::from_str(&content).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?
        } else {
            HostSettings::default()
        };

        Ok(Self {
            inner: Arc::new(RwLock::new(settings)),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Clone of the currently stored API configuration.
    pub fn api_configuration(&self) -> Option<ApiConfiguration> {
        self.inner.read().api_configuration.clone()
    }

    /// Replace the whole API configuration, user token included.
    pub fn update_settings(&self, request: UpdateSettingsRequest) -> Result<(), StoreError> {
        let config = request.into_configuration()?;
        self.commit(config)
    }

    /// Replace the provider/model fields, keeping the stored user token.
    pub fn update_api_configuration(
        &self,
        request: UpdateApiConfigurationRequest,
    ) -> Result<(), StoreError> {
        let current = self.api_configuration().unwrap_or_default();
        let config = request.merge_into(&current)?;
        self.commit(config)
    }

    fn commit(&self, config: ApiConfiguration) -> Result<(), StoreError> {
        let mut guard = self.inner.write();
        write_api_configuration(&self.path, &config)?;
        guard.api_configuration = Some(config);
        Ok(())
    }
}

/// Rewrite the `api_configuration` table, preserving every other table in
/// the file.
///
/// The read-modify-write runs under an exclusive lock on a sidecar
/// `<file>.lock`. The lock is never waited on: if another process holds it
/// the update fails with `StoreError::Locked`. The new content goes to a
/// temporary file in the same directory which is then renamed over the
/// target, so a failed write leaves the previous file intact.
fn write_api_configuration(path: &Path, config: &ApiConfiguration) -> Result<(), StoreError> {
    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let lock_path = sibling_path(path, ".lock");
    let lock = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)
        .map_err(write_err)?;
    lock.try_lock_exclusive().map_err(|source| {
        if source.kind() == ErrorKind::WouldBlock
            || source.raw_os_error() == fs2::lock_contended_error().raw_os_error()
        {
            StoreError::Locked { path: lock_path.clone() }
        } else {
            write_err(source)
        }
    })?;

    let result = replace_table(path, config);
    if let Err(error) = FileExt::unlock(&lock) {
        tracing::debug!(%error, path = %lock_path.display(), "Failed to release settings lock");
    }
    result
}

fn replace_table(path: &Path, config: &ApiConfiguration) -> Result<(), StoreError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let mut table: toml::Table = if content.trim().is_empty() {
        toml::Table::new()
    } else {
        toml::from_str(&content).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?
    };
    table.insert(
        API_CONFIGURATION_KEY.to_string(),
        toml::Value::try_from(config)?,
    );
    let serialized = toml::to_string_pretty(&table)?;

    let tmp_path = temp_path(path);
    let written = write_synced(&tmp_path, serialized.as_bytes())
        .and_then(|()| fs::rename(&tmp_path, path));
    if let Err(source) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Write {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

fn temp_path(path: &Path) -> PathBuf {
    sibling_path(path, &format!(".tmp.{}", std::process::id()))
}

fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}
