//! Sync module: External serialization for shared mutable state.
//!
//! Buffers are plain single-threaded values with no internal locking;
//! sharing one across threads is the caller's problem. [`Versioned`] is
//! the reusable answer: a mutex-guarded wrapper whose revision counter
//! ticks on every mutation, so consumers can poll "did anything change?"
//! without holding the data lock.

mod versioned;

pub use versioned::Versioned;
