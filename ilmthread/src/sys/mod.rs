//! Platform-specific native mutex abstraction.
//!
//! This module provides a unified interface over the mutual-exclusion
//! object offered by the host operating system:
//! - `pthread_mutex_t` on Unix targets,
//! - `SRWLOCK` on Windows targets.
//!
//! Both backends expose a `RawMutex` with the same surface:
//! `new`, `lock`, `try_lock` and `unlock`. The native object is always
//! heap-allocated so its address stays fixed for its whole lifetime.
//!
//! The concrete implementation is selected at compile time
//! depending on the target operating system.

#[cfg(unix)]
mod unix;

#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub(crate) use unix::RawMutex;

#[cfg(windows)]
pub(crate) use windows::RawMutex;
