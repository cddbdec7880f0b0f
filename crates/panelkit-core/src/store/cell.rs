// ── Reactive state cell ──
//
// One domain fact behind a `watch` channel. Every write bumps a version
// counter and stamps the time so consumers can tell stale from fresh.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::stream::CellStream;

/// What a cell publishes on each write: the value with its version and
/// timestamp, always sent together.
pub(crate) struct Snapshot<T> {
    pub(crate) value: Arc<T>,
    pub(crate) version: u64,
    pub(crate) updated_at: Option<DateTime<Utc>>,
}

impl<T> Snapshot<T> {
    pub(crate) fn initial(value: T) -> Self {
        Self {
            value: Arc::new(value),
            version: 0,
            updated_at: None,
        }
    }
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            version: self.version,
            updated_at: self.updated_at,
        }
    }
}

/// A single observable value.
///
/// Reads are wait-free clones of an `Arc`. Writes replace the value
/// wholesale; the last write wins.
pub(crate) struct Cell<T: Send + Sync + 'static> {
    inner: watch::Sender<Snapshot<T>>,
}

impl<T: Send + Sync + 'static> Cell<T> {
    pub(crate) fn new(initial: T) -> Self {
        let (inner, _) = watch::channel(Snapshot::initial(initial));
        Self { inner }
    }

    /// Replace the value and notify subscribers.
    ///
    /// Only the owning service module may call this.
    pub(crate) fn set(&self, next: T) {
        self.inner.send_modify(|snap| {
            *snap = Snapshot {
                value: Arc::new(next),
                version: snap.version + 1,
                updated_at: Some(Utc::now()),
            };
        });
    }

    pub(crate) fn get(&self) -> Arc<T> {
        Arc::clone(&self.inner.borrow().value)
    }

    #[cfg(test)]
    pub(crate) fn snapshot(&self) -> Snapshot<T> {
        self.inner.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> CellStream<T> {
        CellStream::new(self.inner.subscribe())
    }

    /// Number of writes since creation. Zero means never fetched.
    pub(crate) fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    pub(crate) fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.inner.borrow().updated_at
    }
}

impl<T: Default + Send + Sync + 'static> Default for Cell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_unwritten() {
        let cell: Cell<Vec<String>> = Cell::default();
        assert!(cell.get().is_empty());
        assert_eq!(cell.version(), 0);
        assert!(cell.updated_at().is_none());
    }

    #[test]
    fn set_replaces_and_bumps_version() {
        let cell = Cell::new(false);
        cell.set(true);
        cell.set(false);
        assert!(!*cell.get());
        assert_eq!(cell.version(), 2);
        assert!(cell.updated_at().is_some());
    }

    #[test]
    fn snapshot_carries_value_version_and_time_together() {
        let cell = Cell::new(0u8);
        let before = cell.snapshot();
        cell.set(5);
        let after = cell.snapshot();

        assert_eq!((*before.value, before.version), (0, 0));
        assert!(before.updated_at.is_none());
        assert_eq!((*after.value, after.version), (5, 1));
        assert!(after.updated_at.is_some());
    }

    #[tokio::test]
    async fn subscribers_see_writes() {
        let cell = Cell::new(10u8);
        let mut sub = cell.subscribe();
        assert_eq!(**sub.current(), 10);
        assert_eq!(sub.version(), 0);

        cell.set(42);
        let next = sub.changed().await.unwrap();
        assert_eq!(*next, 42);
        assert_eq!(**sub.current(), 42);
        assert_eq!(sub.version(), 1);
    }
}
