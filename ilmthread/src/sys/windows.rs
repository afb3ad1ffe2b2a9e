//! Windows backend built on slim reader/writer locks.
//!
//! Only the exclusive mode of the SRW lock is used. Unlike a
//! `CRITICAL_SECTION`, an SRW lock is not recursive, which keeps the
//! behavior identical to the Unix backend.

use std::cell::UnsafeCell;
use std::{io, mem};

use windows_sys::Win32::System::Threading::{
    AcquireSRWLockExclusive, InitializeSRWLock, ReleaseSRWLockExclusive, SRWLOCK,
    TryAcquireSRWLockExclusive,
};

/// A native `SRWLOCK`.
///
/// SRW locks must not be moved while in use, so the lock is kept behind
/// a `Box`. They need no destruction call.
pub(crate) struct RawMutex {
    inner: Box<UnsafeCell<SRWLOCK>>,
}

// Safety: SRW locks can be acquired and released from any thread.
unsafe impl Send for RawMutex {}
unsafe impl Sync for RawMutex {}

impl RawMutex {
    /// Allocates and initializes a new unlocked SRW lock.
    ///
    /// Initialization cannot fail on Windows beyond the allocation itself.
    pub(crate) fn new() -> io::Result<Self> {
        let inner: Box<UnsafeCell<SRWLOCK>> = Box::new(UnsafeCell::new(unsafe { mem::zeroed() }));
        unsafe { InitializeSRWLock(inner.get()) };

        Ok(Self { inner })
    }

    /// Blocks the calling thread until the lock is acquired exclusively.
    pub(crate) fn lock(&self) {
        unsafe { AcquireSRWLockExclusive(self.inner.get()) };
    }

    /// Attempts to acquire the lock exclusively without blocking.
    pub(crate) fn try_lock(&self) -> bool {
        let acquired = unsafe { TryAcquireSRWLockExclusive(self.inner.get()) };
        acquired as u8 != 0
    }

    /// Releases the lock.
    ///
    /// # Safety
    ///
    /// The calling thread must currently hold the lock.
    pub(crate) unsafe fn unlock(&self) {
        unsafe { ReleaseSRWLockExclusive(self.inner.get()) };
    }
}

impl Drop for RawMutex {
    /// Frees the lock.
    ///
    /// A held SRW lock owns no kernel resources, so nothing is leaked even
    /// when a guard was forgotten; the condition is still reported.
    fn drop(&mut self) {
        if self.try_lock() {
            unsafe { self.unlock() };
        } else {
            log::warn!("dropping a mutex that is still locked");
        }
    }
}
