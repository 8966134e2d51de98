use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::SystemTime;

use super::error::DataLoadError;
use super::loader::SourceLoader;

/// Shared result of one load attempt. Both sides are reference counted so a
/// render cycle can hold on to them without copying the collection.
pub type Loaded<T> = Result<Arc<Vec<T>>, Arc<DataLoadError>>;

// ---------------------------------------------------------------------------
// SourceCache – memoized, single-flight loader for one source file
// ---------------------------------------------------------------------------

/// Memoizes the outcome of a [`SourceLoader`].
///
/// The outcome (collection or error) is remembered together with the file's
/// modification time. It is reused until the mtime changes or [`clear`] is
/// called. Loading happens while the slot's mutex is held, so concurrent
/// first callers wait for a single load instead of racing.
///
/// [`clear`]: SourceCache::clear
pub struct SourceCache<L: SourceLoader> {
    loader: L,
    slot: Mutex<Option<Entry<L::Record>>>,
}

struct Entry<T> {
    outcome: Loaded<T>,
    modified: Option<SystemTime>,
}

impl<L: SourceLoader> SourceCache<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            slot: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        self.loader.path()
    }

    /// Return the memoized outcome, loading (or reloading) when needed.
    pub fn get(&self) -> Loaded<L::Record> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        let modified = modified_time(self.loader.path());

        if let Some(entry) = slot.as_ref() {
            if entry.modified == modified {
                return entry.outcome.clone();
            }
            log::info!("{} changed on disk, reloading", self.path().display());
        }

        let outcome = match self.loader.load() {
            Ok(records) => {
                log::info!("Loaded {} records from {}", records.len(), self.path().display());
                Ok(Arc::new(records))
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", self.path().display());
                Err(Arc::new(e))
            }
        };

        *slot = Some(Entry {
            outcome: outcome.clone(),
            modified,
        });
        outcome
    }

    /// Forget the memoized outcome; the next [`get`](Self::get) reloads.
    pub fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}
