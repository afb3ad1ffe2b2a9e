//! # ilmthread
//!
//! **ilmthread** provides a cross-platform mutual-exclusion primitive and a
//! scope-bound guard to lock it.
//!
//! The mutex is a thin layer over the native primitive of the host
//! operating system: POSIX `pthread_mutex_t` on Unix and slim reader/writer
//! locks on Windows. There is no custom scheduling, no fairness policy, and
//! no reentrancy: the behavior under contention is exactly the platform's.
//!
//! ## Quick Start
//!
//! ```rust
//! use ilmthread::{Lock, Mutex};
//! use std::cell::UnsafeCell;
//! use std::sync::Arc;
//! use std::thread;
//!
//! struct Counter {
//!     mutex: Mutex,
//!     value: UnsafeCell<u64>,
//! }
//!
//! // Safety: `value` is only accessed while `mutex` is held.
//! unsafe impl Sync for Counter {}
//!
//! let counter = Arc::new(Counter {
//!     mutex: Mutex::new(),
//!     value: UnsafeCell::new(0),
//! });
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|_| {
//!         let counter = counter.clone();
//!         thread::spawn(move || {
//!             for _ in 0..1000 {
//!                 let _lock = Lock::new(&counter.mutex);
//!                 unsafe { *counter.value.get() += 1 };
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! let _lock = counter.mutex.lock();
//! assert_eq!(unsafe { *counter.value.get() }, 4000);
//! ```
//!
//! ## Modules
//!
//! - [`sync`] — [`Mutex`] and its guard [`Lock`]
//!
//! ## Logging
//!
//! Native failures are reported through the [`log`](https://docs.rs/log)
//! facade. No logger is installed by this crate.

mod sys;

pub mod sync;

pub use sync::{Lock, Mutex};
