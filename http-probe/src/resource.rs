use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::{Mutex, MutexGuard};

/// Exclusive lock held around a probe cycle.
///
/// Exclusivity comes from a `tokio` mutex; on top of it the lock counts
/// acquisitions and releases so the balance invariant (every acquire matched
/// by exactly one release) stays observable. Acquiring hands back a guard
/// and the guard releases on drop, so early returns and error paths cannot
/// leak an acquisition.
#[derive(Debug, Default)]
pub struct ResourceLock {
    inner: Mutex<()>,
    acquired: AtomicUsize,
    released: AtomicUsize,
}

impl ResourceLock {
    /// Create an unheld lock
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the resource, waiting if another cycle still holds it.
    /// It is released when the returned guard drops.
    pub async fn acquire(&self) -> ResourceGuard<'_> {
        let permit = self.inner.lock().await;
        self.acquired.fetch_add(1, Ordering::SeqCst);
        ResourceGuard {
            lock: self,
            _permit: permit,
        }
    }

    /// Number of acquisitions so far
    pub fn acquire_count(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    /// Number of releases so far
    pub fn release_count(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    /// True when every acquisition has been matched by a release
    pub fn is_balanced(&self) -> bool {
        self.acquire_count() == self.release_count()
    }
}

/// Guard returned by [`ResourceLock::acquire`]
#[must_use = "the resource is released when the guard is dropped"]
pub struct ResourceGuard<'a> {
    lock: &'a ResourceLock,
    _permit: MutexGuard<'a, ()>,
}

impl Drop for ResourceGuard<'_> {
    fn drop(&mut self) {
        self.lock.released.fetch_add(1, Ordering::SeqCst);
    }
}
