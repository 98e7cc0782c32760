//! Versioned: A lock-plus-revision wrapper for shared mutable values.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

/// A mutex-guarded value with a monotonically increasing revision.
///
/// Every [`mutate`](Self::mutate) call runs under the lock and bumps the
/// revision before releasing it; [`read`](Self::read) runs under the
/// lock without bumping. Consumers that cached derived state compare
/// [`revision`](Self::revision) against what they last saw and rebuild
/// only when it moved: change notification without coupling the
/// wrapper to the wrapped type.
///
/// The wrapper is composition, not a base class: any `T` works, and the
/// value itself stays free of synchronization concerns.
///
/// # Example
/// ```
/// use tessera::{Buffer, Cell, Versioned};
///
/// let shared = Versioned::new(Buffer::new());
/// let before = shared.revision();
///
/// shared.mutate(|buf| buf.set(0, 0, Cell::new('x')));
///
/// assert!(shared.revision() > before);
/// assert_eq!(shared.read(tessera::Buffer::len), 1);
/// ```
#[derive(Debug, Default)]
pub struct Versioned<T> {
    inner: Mutex<T>,
    revision: AtomicU64,
}

impl<T> Versioned<T> {
    /// Wrap a value at revision zero.
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(value),
            revision: AtomicU64::new(0),
        }
    }

    /// Run a mutating operation under the lock and bump the revision.
    ///
    /// The counter moves even if the closure made no observable change;
    /// it counts mutation opportunities, not semantic deltas.
    pub fn mutate<R>(&self, op: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let out = op(&mut guard);
        self.revision.fetch_add(1, Ordering::Release);
        out
    }

    /// Run a read-only operation under the lock.
    pub fn read<R>(&self, op: impl FnOnce(&T) -> R) -> R {
        let guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        op(&guard)
    }

    /// The current revision, readable without taking the data lock.
    ///
    /// Strictly increases across `mutate` calls; never decreases.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::Acquire)
    }

    /// Unwrap the value, consuming the wrapper.
    pub fn into_inner(self) -> T {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
