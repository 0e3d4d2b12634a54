//! Process-wide handle to the active incident store.

use std::sync::{Arc, PoisonError, RwLock};

use super::IncidentStore;

/// Shared reference to the current [`IncidentStore`].
///
/// Readers take a [`snapshot`](Self::snapshot) and score against it for the
/// whole request. A reload builds a fresh store and calls
/// [`replace`](Self::replace); readers holding an older snapshot keep seeing
/// the complete previous store until they drop it.
///
/// # Examples
/// ```
/// use saferoute_core::{GeoPoint, Incident, IncidentStore, SharedIncidentStore};
///
/// let shared = SharedIncidentStore::default();
/// let before = shared.snapshot();
///
/// shared.replace(IncidentStore::new(vec![Incident::new(
///     GeoPoint::new(28.6139, 77.2090),
///     "Theft",
/// )]));
///
/// assert!(before.is_empty());
/// assert_eq!(shared.snapshot().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SharedIncidentStore {
    current: RwLock<Arc<IncidentStore>>,
}

impl SharedIncidentStore {
    /// Publish `store` as the initial active store.
    #[must_use]
    pub fn new(store: IncidentStore) -> Self {
        Self {
            current: RwLock::new(Arc::new(store)),
        }
    }

    /// The store active at the time of the call.
    #[must_use]
    pub fn snapshot(&self) -> Arc<IncidentStore> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Atomically swap in a replacement store and return the previous one.
    pub fn replace(&self, store: IncidentStore) -> Arc<IncidentStore> {
        let incoming = Arc::new(store);
        let count = incoming.len();
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *guard, incoming);
        drop(guard);
        log::info!(
            "Replaced incident store ({} -> {count} incidents)",
            previous.len()
        );
        previous
    }
}

impl From<IncidentStore> for SharedIncidentStore {
    fn from(store: IncidentStore) -> Self {
        Self::new(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GeoPoint, Incident};
    use rstest::rstest;
    use std::thread;

    fn store_of(count: usize) -> IncidentStore {
        (0..count)
            .map(|_| Incident::new(GeoPoint::new(10.0, 20.0), "Theft"))
            .collect()
    }

    #[rstest]
    fn replace_returns_previous_store() {
        let shared = SharedIncidentStore::new(store_of(2));
        let previous = shared.replace(store_of(5));
        assert_eq!(previous.len(), 2);
        assert_eq!(shared.snapshot().len(), 5);
    }

    #[rstest]
    fn snapshots_survive_replacement() {
        let shared = SharedIncidentStore::new(store_of(3));
        let held = shared.snapshot();
        shared.replace(IncidentStore::empty());
        assert_eq!(held.len(), 3);
        assert!(shared.snapshot().is_empty());
    }

    #[rstest]
    fn concurrent_readers_only_see_whole_stores() {
        let shared = SharedIncidentStore::new(store_of(4));
        thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..100 {
                        let len = shared.snapshot().len();
                        assert!(len == 4 || len == 8, "observed partial store of {len}");
                    }
                });
            }
            scope.spawn(|| shared.replace(store_of(8)));
        });
        assert_eq!(shared.snapshot().len(), 8);
    }
}
