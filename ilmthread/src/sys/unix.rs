//! Unix backend built on POSIX threads.
//!
//! The mutex is created with default attributes, which makes it a
//! non-recursive mutex on every supported platform.

use libc::{
    PTHREAD_MUTEX_INITIALIZER, pthread_mutex_destroy, pthread_mutex_init, pthread_mutex_lock,
    pthread_mutex_t, pthread_mutex_trylock, pthread_mutex_unlock,
};
use std::{io, ptr};

/// A native `pthread_mutex_t`.
///
/// The mutex lives in its own heap allocation: POSIX forbids moving a
/// `pthread_mutex_t` once it has been initialized, while the owning
/// `RawMutex` may be moved freely.
pub(crate) struct RawMutex {
    inner: *mut pthread_mutex_t,
}

// Safety: pthread mutexes are designed to be locked and unlocked from
// any thread, and the pointer is owned exclusively by this value.
unsafe impl Send for RawMutex {}
unsafe impl Sync for RawMutex {}

impl RawMutex {
    /// Allocates and initializes a new unlocked mutex.
    ///
    /// Returns the error code reported by `pthread_mutex_init(3)`
    /// (typically `ENOMEM` or `EAGAIN`) if the system cannot provide one.
    pub(crate) fn new() -> io::Result<Self> {
        let inner = Box::into_raw(Box::new(PTHREAD_MUTEX_INITIALIZER));

        let rc = unsafe { pthread_mutex_init(inner, ptr::null()) };
        if rc != 0 {
            drop(unsafe { Box::from_raw(inner) });
            return Err(io::Error::from_raw_os_error(rc));
        }

        Ok(Self { inner })
    }

    /// Blocks the calling thread until the mutex is acquired.
    pub(crate) fn lock(&self) {
        let rc = unsafe { pthread_mutex_lock(self.inner) };
        if rc != 0 {
            panic!("pthread_mutex_lock failed: {}", io::Error::from_raw_os_error(rc));
        }
    }

    /// Attempts to acquire the mutex without blocking.
    ///
    /// Returns `true` if the mutex is now held by the caller.
    pub(crate) fn try_lock(&self) -> bool {
        unsafe { pthread_mutex_trylock(self.inner) == 0 }
    }

    /// Releases the mutex.
    ///
    /// # Safety
    ///
    /// The calling thread must currently hold the mutex.
    pub(crate) unsafe fn unlock(&self) {
        let rc = unsafe { pthread_mutex_unlock(self.inner) };
        if rc != 0 {
            panic!("pthread_mutex_unlock failed: {}", io::Error::from_raw_os_error(rc));
        }
    }
}

impl Drop for RawMutex {
    /// Destroys the native mutex and frees its allocation.
    ///
    /// Destroying a locked `pthread_mutex_t` is undefined behavior. A mutex
    /// can only still be locked here if a guard was leaked, in which case
    /// the allocation is leaked as well.
    fn drop(&mut self) {
        if !self.try_lock() {
            log::warn!("dropping a mutex that is still locked, leaking the native handle");
            return;
        }

        unsafe {
            pthread_mutex_unlock(self.inner);
            pthread_mutex_destroy(self.inner);
            drop(Box::from_raw(self.inner));
        }
    }
}
