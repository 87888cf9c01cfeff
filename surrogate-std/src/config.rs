//! Generated-artifacts configuration.
//!
//! The proxy-generation backend writes its artifacts somewhere; this module
//! says where, and makes that location discoverable for later runs.
//! Registration is not a construction side effect: the factory invokes
//! [`ProxyConfig::ensure_loadable`] explicitly, once per configuration, and
//! repeated calls are no-ops.

use parking_lot::Mutex;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use surrogate_core::GenerationError;

/// How long generated artifacts are expected to live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheStrategy {
    /// Artifacts live in a throwaway location; nothing is registered for
    /// later runs.
    Ephemeral,
    /// Artifacts persist across runs; the location must be made loadable.
    Persistent,
}

/// Per-factory backend configuration: artifacts location and cache strategy.
///
/// Opaque to the interception core. Immutable after construction.
#[derive(Debug)]
pub struct ProxyConfig {
    artifacts_dir: PathBuf,
    cache: CacheStrategy,
    registered: AtomicBool,
}

impl ProxyConfig {
    /// A persistent configuration writing artifacts to `artifacts_dir`.
    pub fn new(artifacts_dir: impl Into<PathBuf>) -> Self {
        Self {
            artifacts_dir: artifacts_dir.into(),
            cache: CacheStrategy::Persistent,
            registered: AtomicBool::new(false),
        }
    }

    /// The default configuration: a throwaway location under the system
    /// temp directory, never registered as loadable.
    pub fn ephemeral() -> Self {
        Self {
            artifacts_dir: std::env::temp_dir().join("surrogate-proxies"),
            cache: CacheStrategy::Ephemeral,
            registered: AtomicBool::new(false),
        }
    }

    /// Where generated artifacts are written.
    pub fn artifacts_dir(&self) -> &Path {
        &self.artifacts_dir
    }

    /// The configured cache strategy.
    pub fn cache_strategy(&self) -> CacheStrategy {
        self.cache
    }

    /// Make the artifacts location loadable.
    ///
    /// Creates the directory, and for persistent configurations records it
    /// in the process-wide loader path registry so later runs can find the
    /// generated artifacts. Idempotent: repeated calls are no-ops.
    pub fn ensure_loadable(&self) -> Result<(), GenerationError> {
        if self.registered.load(Ordering::SeqCst) {
            return Ok(());
        }
        std::fs::create_dir_all(&self.artifacts_dir).map_err(|source| {
            GenerationError::Artifacts {
                path: self.artifacts_dir.clone(),
                source,
            }
        })?;
        if self.cache == CacheStrategy::Persistent {
            loader_registry().lock().insert(self.artifacts_dir.clone());
            tracing::debug!(
                path = %self.artifacts_dir.display(),
                "registered generated-artifacts loader path"
            );
        }
        self.registered.store(true, Ordering::SeqCst);
        Ok(())
    }

    /// Whether this configuration's location has been registered.
    pub fn is_registered(&self) -> bool {
        self.registered.load(Ordering::SeqCst)
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self::ephemeral()
    }
}

fn loader_registry() -> &'static Mutex<BTreeSet<PathBuf>> {
    static REGISTRY: OnceLock<Mutex<BTreeSet<PathBuf>>> = OnceLock::new();
    REGISTRY.get_or_init(|| Mutex::new(BTreeSet::new()))
}

/// Snapshot of all loader paths registered in this process.
pub fn registered_loader_paths() -> Vec<PathBuf> {
    loader_registry().lock().iter().cloned().collect()
}
