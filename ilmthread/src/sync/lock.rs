use super::Mutex;

use std::fmt;
use std::marker::PhantomData;

/// A scope-bound guard over a [`Mutex`].
///
/// Constructing a `Lock` with [`Lock::new`] locks the mutex, and dropping
/// it unlocks the mutex. The guard can also be created unheld with
/// [`Lock::deferred`] and then driven manually with [`acquire`](Self::acquire)
/// and [`release`](Self::release). Whatever happens in between, the mutex
/// is released when the guard goes out of scope if, and only if, the guard
/// holds it at that point.
///
/// A `Lock` is neither `Send` nor `Sync`: it must be created, used, and
/// dropped on the same thread.
///
/// # Example
///
/// ```rust
/// use ilmthread::{Lock, Mutex};
///
/// let mutex = Mutex::new();
/// let mut lock = Lock::deferred(&mutex);
/// assert!(!lock.locked());
///
/// lock.acquire();
/// assert!(lock.locked());
///
/// lock.release();
/// assert!(!lock.locked());
/// ```
#[must_use = "if unused the Mutex will immediately unlock"]
pub struct Lock<'a> {
    /// The mutex this guard operates on.
    mutex: &'a Mutex,

    /// Whether this guard currently holds `mutex`.
    locked: bool,

    /// Pins the guard to the thread that created it.
    _not_send: PhantomData<*const ()>,
}

impl<'a> Lock<'a> {
    /// Binds a guard to `mutex` and locks it, blocking until it is available.
    pub fn new(mutex: &'a Mutex) -> Self {
        Self::with_auto_lock(mutex, true)
    }

    /// Binds a guard to `mutex` without locking it.
    pub fn deferred(mutex: &'a Mutex) -> Self {
        Self::with_auto_lock(mutex, false)
    }

    /// Binds a guard to `mutex`, locking it immediately when `auto_lock`
    /// is `true`.
    pub fn with_auto_lock(mutex: &'a Mutex, auto_lock: bool) -> Self {
        let mut lock = Self {
            mutex,
            locked: false,
            _not_send: PhantomData,
        };

        if auto_lock {
            lock.acquire();
        }

        lock
    }

    /// Locks the mutex, blocking the current thread until it is available.
    ///
    /// # Panics
    ///
    /// Panics if this guard already holds the mutex.
    pub fn acquire(&mut self) {
        assert!(!self.locked, "lock already held by this guard");

        self.mutex.raw_lock();
        self.locked = true;
    }

    /// Attempts to lock the mutex without blocking.
    ///
    /// Returns `true` if the guard now holds the mutex.
    ///
    /// # Panics
    ///
    /// Panics if this guard already holds the mutex.
    pub fn try_acquire(&mut self) -> bool {
        assert!(!self.locked, "lock already held by this guard");

        self.locked = self.mutex.raw_try_lock();
        self.locked
    }

    /// Unlocks the mutex.
    ///
    /// # Panics
    ///
    /// Panics if this guard does not hold the mutex. The mutex is left
    /// untouched in that case.
    pub fn release(&mut self) {
        assert!(self.locked, "lock not held by this guard");

        // Safety: `locked` is only set after this thread acquired the mutex,
        // and the guard cannot leave this thread.
        unsafe { self.mutex.raw_unlock() };
        self.locked = false;
    }

    /// Returns `true` if this guard currently holds the mutex.
    pub fn locked(&self) -> bool {
        self.locked
    }

    /// Returns the mutex this guard is bound to.
    pub fn mutex(&self) -> &'a Mutex {
        self.mutex
    }
}

impl Drop for Lock<'_> {
    /// Unlocks the mutex if this guard holds it.
    fn drop(&mut self) {
        if self.locked {
            unsafe { self.mutex.raw_unlock() };
        }
    }
}

impl fmt::Debug for Lock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lock")
            .field("locked", &self.locked)
            .finish_non_exhaustive()
    }
}
