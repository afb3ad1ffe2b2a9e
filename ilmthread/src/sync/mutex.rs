use super::Lock;
use crate::sys::RawMutex;

use std::fmt;
use std::io;

/// A native mutual-exclusion primitive.
///
/// `Mutex` wraps the mutex provided by the host operating system
/// (`pthread_mutex_t` on Unix, `SRWLOCK` on Windows). It protects no data
/// by itself: it marks a critical section that callers enter by
/// constructing a [`Lock`].
///
/// A `Mutex` is shared by reference, either borrowed across scoped threads
/// or wrapped in an `Arc`. It can never be cloned.
///
/// # Example
///
/// ```rust
/// use ilmthread::{Lock, Mutex};
///
/// let mutex = Mutex::new();
///
/// {
///     let lock = Lock::new(&mutex);
///     assert!(lock.locked());
///     // critical section
/// }
/// ```
pub struct Mutex {
    /// The platform mutex. Its native object is heap-allocated, so moving
    /// the `Mutex` never moves the OS primitive.
    raw: RawMutex,
}

impl Mutex {
    /// Creates a new, unlocked mutex.
    ///
    /// # Panics
    ///
    /// Panics if the operating system cannot provide a new mutex. Use
    /// [`Mutex::try_new`] to handle that case instead.
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(mutex) => mutex,
            Err(err) => panic!("failed to create native mutex: {err}"),
        }
    }

    /// Creates a new, unlocked mutex, reporting OS resource exhaustion.
    pub fn try_new() -> io::Result<Self> {
        let raw = RawMutex::new().inspect_err(|err| {
            log::error!("native mutex initialization failed: {err}");
        })?;

        Ok(Self { raw })
    }

    /// Acquires the mutex and returns a guard holding it.
    ///
    /// Equivalent to [`Lock::new`]. Blocks the calling thread until the
    /// mutex is available.
    pub fn lock(&self) -> Lock<'_> {
        Lock::new(self)
    }

    pub(crate) fn raw_lock(&self) {
        self.raw.lock();
    }

    pub(crate) fn raw_try_lock(&self) -> bool {
        self.raw.try_lock()
    }

    /// # Safety
    ///
    /// The calling thread must hold the mutex.
    pub(crate) unsafe fn raw_unlock(&self) {
        unsafe { self.raw.unlock() };
    }
}

impl Default for Mutex {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Mutex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mutex").finish_non_exhaustive()
    }
}
