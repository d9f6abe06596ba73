//! Time-bounded memoization of classified path statuses.
//!
//! Editors ask for the status of the same path in rapid bursts (activate,
//! focus, repaint), and each classification costs a full client process. The
//! cache absorbs those bursts: a classified status is served from memory
//! until its time-to-live expires, after which the next request classifies
//! again.
//!
//! # Public API
//! - [`StatusCache`]: Shared map from absolute path to freshly classified status
//! - [`DEFAULT_TTL`]: Time-to-live used when no setting overrides it
//!
//! Failed classifications are never stored, so an error does not pin a stale
//! answer for the following requests.

use crate::core::error::Result;
use crate::core::status::FileStatus;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Time-to-live applied by [`StatusCache::with_default_ttl`].
pub const DEFAULT_TTL: Duration = Duration::from_secs(5);

/// Entry count at which an insert also sweeps out expired entries.
const SWEEP_THRESHOLD: usize = 128;

#[derive(Debug, Clone, Copy)]
struct CacheEntry {
    status: FileStatus,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_fresh(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Shared cache of classified statuses keyed by absolute path.
///
/// Interior locking keeps the map consistent across threads. Classification
/// runs outside the lock, so two threads racing on the same cold path may
/// both classify it; the later insert wins, which is harmless for a value
/// that expires within seconds anyway.
#[derive(Debug)]
pub struct StatusCache {
    ttl: Duration,
    entries: Mutex<HashMap<PathBuf, CacheEntry>>,
}

impl StatusCache {
    /// Create a cache whose entries stay fresh for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Create a cache with [`DEFAULT_TTL`].
    pub fn with_default_ttl() -> Self {
        Self::new(DEFAULT_TTL)
    }

    /// Return the cached status for `path`, classifying on a miss.
    ///
    /// `classify` is only invoked when no fresh entry exists. Its result is
    /// stored before being returned; its error is propagated and nothing is
    /// stored.
    pub fn get_or_classify<F>(&self, path: &Path, classify: F) -> Result<FileStatus>
    where
        F: FnOnce() -> Result<FileStatus>,
    {
        if let Some(status) = self.lookup(path) {
            log::debug!("Serving cached status for {}", path.display());
            return Ok(status);
        }

        let started = Instant::now();
        let status = classify()?;
        self.insert(path, status);
        log::debug!(
            "Classified {} in {:.3}s",
            path.display(),
            started.elapsed().as_secs_f64()
        );
        Ok(status)
    }

    /// Number of entries currently held, fresh or expired.
    pub fn len(&self) -> usize {
        self.lock_entries().len()
    }

    /// Check whether the cache holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.lock_entries().is_empty()
    }

    /// Drop every entry regardless of freshness.
    pub fn clear(&self) {
        self.lock_entries().clear();
    }

    fn lookup(&self, path: &Path) -> Option<FileStatus> {
        let entries = self.lock_entries();
        let entry = entries.get(path)?;
        entry.is_fresh(Instant::now()).then_some(entry.status)
    }

    fn insert(&self, path: &Path, status: FileStatus) {
        let now = Instant::now();
        let mut entries = self.lock_entries();
        // Expired entries are otherwise only replaced when their path is
        // requested again, so sweep once the map grows noticeably.
        if entries.len() >= SWEEP_THRESHOLD {
            entries.retain(|_, entry| entry.is_fresh(now));
        }
        entries.insert(
            path.to_path_buf(),
            CacheEntry {
                status,
                expires_at: now + self.ttl,
            },
        );
    }

    fn lock_entries(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, CacheEntry>> {
        // A poisoned lock only means another thread panicked mid-update; the
        // map itself is still usable.
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
