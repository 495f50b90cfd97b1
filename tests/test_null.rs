// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025-2026 natyamatsya contributors
//
// Unit tests for the no-op mutex. The type is compiled on every target;
// only the default-alias selection is feature-driven.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;
use std::thread;

use unimutex::{Lock, NullMutex};

#[test]
fn basic_lock_unlock() {
    let mtx = NullMutex::new();
    mtx.lock();
    mtx.unlock();
}

#[test]
fn thousand_cycles() {
    let mtx = NullMutex::new();
    for _ in 0..1000 {
        mtx.lock();
        mtx.unlock();
    }
}

#[test]
fn is_zero_sized() {
    assert_eq!(std::mem::size_of::<NullMutex>(), 0);
}

#[test]
fn const_constructible() {
    static MTX: NullMutex = NullMutex::new();
    MTX.lock();
    MTX.unlock();
}

// The null mutex never serializes: many threads hammer one shared
// instance and all complete — no thread ever blocks on another.
#[test]
fn never_blocks_concurrent_callers() {
    let mtx = Arc::new(NullMutex::new());
    let completed = Arc::new(AtomicI32::new(0));
    let num_threads = 8;

    let handles: Vec<_> = (0..num_threads)
        .map(|_| {
            let mtx = Arc::clone(&mtx);
            let completed = Arc::clone(&completed);
            thread::spawn(move || {
                for _ in 0..100_000 {
                    mtx.lock();
                    mtx.unlock();
                }
                completed.fetch_add(1, Ordering::Relaxed);
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(completed.load(Ordering::Relaxed), num_threads);
}

// With `single-threaded` enabled the selector must bind the default
// alias to the no-op variant; being zero-sized proves it.
#[cfg(feature = "single-threaded")]
#[test]
fn default_alias_is_null() {
    assert_eq!(std::mem::size_of::<unimutex::DefaultMutex>(), 0);
}

#[cfg(not(feature = "single-threaded"))]
#[test]
fn default_alias_is_not_null() {
    assert!(std::mem::size_of::<unimutex::DefaultMutex>() > 0);
}
