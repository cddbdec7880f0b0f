// ── Reactive cell streams ──
//
// Read-only subscription types for consuming store changes.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::store::cell::Snapshot;

/// A read-only subscription to one store cell.
///
/// Provides both point-in-time snapshot access and reactive change
/// notification via `changed()` or by converting to a `Stream`.
pub struct CellStream<T: Send + Sync + 'static> {
    current: Snapshot<T>,
    receiver: watch::Receiver<Snapshot<T>>,
}

impl<T: Send + Sync + 'static> CellStream<T> {
    pub(crate) fn new(receiver: watch::Receiver<Snapshot<T>>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// Get the snapshot captured at creation (or the last `changed()`).
    pub fn current(&self) -> &Arc<T> {
        &self.current.value
    }

    /// Write count behind `current()`.
    pub fn version(&self) -> u64 {
        self.current.version
    }

    /// Get the latest value (may have changed since creation).
    pub fn latest(&self) -> Arc<T> {
        Arc::clone(&self.receiver.borrow().value)
    }

    /// Wait for the next write, returning the new value.
    /// Returns `None` if the store has been dropped.
    pub async fn changed(&mut self) -> Option<Arc<T>> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        let value = Arc::clone(&snap.value);
        self.current = snap;
        Some(value)
    }

    /// Convert into a `Stream` for use with `StreamExt` combinators.
    pub fn into_stream(self) -> CellWatchStream<T> {
        CellWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter backed by a `watch::Receiver`.
///
/// Yields the current value first, then each subsequent write.
pub struct CellWatchStream<T: Send + Sync + 'static> {
    inner: WatchStream<Snapshot<T>>,
}

impl<T: Send + Sync + 'static> Stream for CellWatchStream<T> {
    type Item = Arc<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        // WatchStream boxes its future, so it is Unpin.
        Pin::new(&mut self.inner)
            .poll_next(cx)
            .map(|next| next.map(|snap| snap.value))
    }
}
