// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Throwaway filesystem environment for cache-backed tests.

use std::path::PathBuf;

use switchyard_cache::ResponseCache;
use switchyard_config::RouterConfig;
use switchyard_core::SwitchyardError;
use tempfile::TempDir;

/// A temporary directory plus a configuration whose cache file lives in it.
///
/// The directory, and with it the cache, is removed on drop.
pub struct TestEnv {
    pub config: RouterConfig,
    _dir: TempDir,
}

impl TestEnv {
    /// Default configuration with the cache redirected into a temp directory.
    pub fn new() -> std::io::Result<Self> {
        Self::with_config(RouterConfig::default())
    }

    /// Use `config`, overriding only the cache path.
    pub fn with_config(mut config: RouterConfig) -> std::io::Result<Self> {
        let dir = TempDir::new()?;
        config.cache.path = dir
            .path()
            .join("cache")
            .join("query_cache.json")
            .display()
            .to_string();
        Ok(Self { config, _dir: dir })
    }

    pub fn cache_path(&self) -> PathBuf {
        PathBuf::from(&self.config.cache.path)
    }

    /// Open the cache described by the current configuration.
    pub fn open_cache(&self) -> Result<ResponseCache, SwitchyardError> {
        ResponseCache::open(&self.config.cache)
    }
}
