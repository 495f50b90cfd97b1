// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025-2026 natyamatsya contributors
//
// POSIX mutex variant: a process-private pthread_mutex_t.

use std::cell::UnsafeCell;
use std::io;

use crate::lock::Lock;

/// An exclusive lock backed by a `pthread_mutex_t` with default
/// (process-private, non-recursive) attributes.
///
/// The native handle is heap-allocated so its address never changes
/// after `pthread_mutex_init`: both glibc and the macOS pthread
/// implementation bake self-referential state into the struct once it is
/// initialised, so the initialised bytes must not move. The handle is
/// exclusively owned by this instance and destroyed on drop; the caller
/// must ensure the mutex is unowned by then, per the pthread contract.
pub struct PthreadMutex {
    mtx: Box<UnsafeCell<libc::pthread_mutex_t>>,
}

// Safety: pthread mutexes are built for concurrent lock/unlock from any
// thread; all access goes through the stable heap address.
unsafe impl Send for PthreadMutex {}
unsafe impl Sync for PthreadMutex {}

impl PthreadMutex {
    /// Create a new unowned mutex.
    ///
    /// # Panics
    /// Panics if `pthread_mutex_init` fails. Initialization is a
    /// one-time construction event with no recovery path; under normal
    /// operating conditions it does not fail.
    pub fn new() -> Self {
        let mtx: Box<UnsafeCell<libc::pthread_mutex_t>> =
            Box::new(UnsafeCell::new(unsafe { std::mem::zeroed() }));
        let eno = unsafe { libc::pthread_mutex_init(mtx.get(), std::ptr::null()) };
        if eno != 0 {
            panic!(
                "pthread_mutex_init failed: {}",
                io::Error::from_raw_os_error(eno)
            );
        }
        Self { mtx }
    }
}

impl Default for PthreadMutex {
    fn default() -> Self {
        Self::new()
    }
}

impl Lock for PthreadMutex {
    #[inline]
    fn lock(&self) {
        let eno = unsafe { libc::pthread_mutex_lock(self.mtx.get()) };
        debug_assert_eq!(eno, 0, "pthread_mutex_lock failed: errno {eno}");
    }

    #[inline]
    fn unlock(&self) {
        let eno = unsafe { libc::pthread_mutex_unlock(self.mtx.get()) };
        debug_assert_eq!(eno, 0, "pthread_mutex_unlock failed: errno {eno}");
    }
}

impl Drop for PthreadMutex {
    fn drop(&mut self) {
        // The mutex must be unowned here (caller invariant).
        let eno = unsafe { libc::pthread_mutex_destroy(self.mtx.get()) };
        debug_assert_eq!(eno, 0, "pthread_mutex_destroy failed: errno {eno}");
    }
}
