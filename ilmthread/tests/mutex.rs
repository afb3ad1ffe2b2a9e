use ilmthread::{Lock, Mutex};
use std::sync::Arc;
use std::thread;

#[test]
fn test_try_new() {
    let mutex = Mutex::try_new().unwrap();

    let lock = Lock::new(&mutex);
    assert!(lock.locked());
}

#[test]
fn test_default() {
    let mutex = Mutex::default();

    let lock = mutex.lock();
    assert!(lock.locked());
}

#[test]
fn test_lock_shorthand_blocks_others() {
    let mutex = Arc::new(Mutex::new());
    let guard = mutex.lock();

    let other = mutex.clone();
    let acquired = thread::spawn(move || Lock::deferred(&other).try_acquire())
        .join()
        .unwrap();

    assert!(guard.locked());
    assert!(!acquired);
}

#[test]
fn test_move_between_uses() {
    let mutex = Mutex::new();
    drop(mutex.lock());

    let boxed = Box::new(mutex);
    drop(boxed.lock());

    let mut mutexes = vec![*boxed];
    mutexes.push(Mutex::new());

    for mutex in &mutexes {
        let mut lock = Lock::deferred(mutex);
        assert!(lock.try_acquire());
    }
}

#[test]
fn test_independent_mutexes() {
    let a = Mutex::new();
    let b = Mutex::new();

    let _a = Lock::new(&a);
    let mut lock_b = Lock::deferred(&b);
    assert!(lock_b.try_acquire());
}

#[test]
fn test_drop_with_leaked_guard() {
    let mutex = Mutex::new();
    std::mem::forget(mutex.lock());

    let available = thread::scope(|s| {
        s.spawn(|| Lock::deferred(&mutex).try_acquire())
            .join()
            .unwrap()
    });
    assert!(!available);

    drop(mutex);
}

#[test]
fn test_debug_is_opaque() {
    let mutex = Mutex::new();
    assert_eq!(format!("{mutex:?}"), "Mutex { .. }");
}
