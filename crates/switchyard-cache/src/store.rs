// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON-file backed response cache.
//!
//! The whole map lives in memory behind a mutex. Every `set` rewrites the
//! complete file through a temporary sibling that is atomically renamed over
//! the target, so readers only ever see a whole file.

use std::collections::BTreeMap;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use switchyard_config::model::CacheConfig;
use switchyard_core::SwitchyardError;
use tracing::{debug, info};

use crate::entry::CacheEntry;

type EntryMap = BTreeMap<String, CacheEntry>;

/// Durable, full-history cache keyed by exact query text.
///
/// Keys are compared byte-for-byte: no trimming or case folding. A disabled
/// cache never touches the filesystem.
pub struct ResponseCache {
    enabled: bool,
    path: PathBuf,
    entries: Mutex<EntryMap>,
}

impl ResponseCache {
    /// Open the cache described by `config`.
    ///
    /// A missing file is an empty cache. An unreadable or corrupt file is a
    /// [`SwitchyardError::CacheIo`] so existing history is never silently dropped.
    pub fn open(config: &CacheConfig) -> Result<Self, SwitchyardError> {
        let path = PathBuf::from(&config.path);
        if !config.enabled {
            debug!("response cache disabled by configuration");
            return Ok(Self {
                enabled: false,
                path,
                entries: Mutex::new(EntryMap::new()),
            });
        }

        let entries = load_entries(&path)?;
        info!(path = %path.display(), entries = entries.len(), "response cache loaded");
        Ok(Self {
            enabled: true,
            path,
            entries: Mutex::new(entries),
        })
    }

    /// A cache that is permanently disabled.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            path: PathBuf::new(),
            entries: Mutex::new(EntryMap::new()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Path of the backing JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up the entry stored under exactly `query`.
    pub fn get(&self, query: &str) -> Option<CacheEntry> {
        if !self.enabled {
            return None;
        }
        self.lock().get(query).cloned()
    }

    /// Insert or replace the entry for `query`, then rewrite the store.
    ///
    /// If the write fails the previous in-memory entry is restored and the
    /// error is returned, keeping memory and disk in agreement.
    pub fn set(
        &self,
        query: &str,
        response: &str,
        model: &str,
        complexity: &str,
    ) -> Result<(), SwitchyardError> {
        if !self.enabled {
            return Ok(());
        }

        let mut entries = self.lock();
        let previous = entries.insert(
            query.to_string(),
            CacheEntry::new(query, response, model, complexity),
        );

        if let Err(e) = write_entries(&self.path, &entries) {
            match previous {
                Some(old) => entries.insert(query.to_string(), old),
                None => entries.remove(query),
            };
            return Err(e);
        }

        info!(model, complexity, entries = entries.len(), "cache entry stored");
        Ok(())
    }

    /// Remove every entry and delete the backing file.
    pub fn clear(&self) -> Result<(), SwitchyardError> {
        if !self.enabled {
            return Ok(());
        }

        let mut entries = self.lock();
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                return Err(SwitchyardError::cache_io(
                    &self.path,
                    "failed to delete cache file",
                    e,
                ));
            }
        }
        let removed = entries.len();
        entries.clear();
        info!(removed, "response cache cleared");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Snapshot of all entries, ordered by query.
    pub fn entries(&self) -> Vec<CacheEntry> {
        self.lock().values().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, EntryMap> {
        // The map is only mutated after a successful write or during rollback,
        // so a panic elsewhere cannot leave it half-updated.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn load_entries(path: &Path) -> Result<EntryMap, SwitchyardError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no cache file yet, starting empty");
            return Ok(EntryMap::new());
        }
        Err(e) => return Err(SwitchyardError::cache_io(path, "failed to read cache file", e)),
    };

    let mut entries: EntryMap = serde_json::from_str(&content)
        .map_err(|e| SwitchyardError::cache_io(path, "cache file is corrupt", e))?;

    for (query, entry) in entries.iter_mut() {
        if entry.query.is_empty() {
            entry.query = query.clone();
        }
    }
    Ok(entries)
}

fn write_entries(path: &Path, entries: &EntryMap) -> Result<(), SwitchyardError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .map_err(|e| SwitchyardError::cache_io(path, "failed to create cache directory", e))?;

    let json = serde_json::to_string_pretty(entries)
        .map_err(|e| SwitchyardError::cache_io(path, "failed to serialize cache", e))?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .map_err(|e| SwitchyardError::cache_io(path, "failed to create temporary cache file", e))?;
    tmp.write_all(json.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| SwitchyardError::cache_io(path, "failed to write cache file", e))?;
    tmp.persist(path)
        .map_err(|e| SwitchyardError::cache_io(path, "failed to replace cache file", e.error))?;
    Ok(())
}
