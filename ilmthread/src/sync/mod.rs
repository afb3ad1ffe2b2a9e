//! Synchronization primitives for ilmthread.
//!
//! This module provides blocking mutual exclusion backed by the operating
//! system's native mutex:
//! - [`Mutex`] — an opaque handle to a native mutex, shared between threads.
//! - [`Lock`] — a scope-bound guard that acquires and releases a [`Mutex`].
//!
//! ## Design notes
//!
//! - A [`Mutex`] cannot be locked directly. All locking goes through a
//!   [`Lock`], so a held mutex is always released when its guard leaves
//!   scope, including during panic unwinding.
//! - The native mutex is not recursive. Acquiring it twice from one thread
//!   through two guards deadlocks.
//! - No fairness or ordering between waiting threads is promised beyond
//!   what the platform provides.

mod lock;
mod mutex;

pub use lock::Lock;
pub use mutex::Mutex;
