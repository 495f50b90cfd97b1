// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025-2026 natyamatsya contributors
//
// Windows mutex variant: a CRITICAL_SECTION.

use std::cell::UnsafeCell;

use windows_sys::Win32::System::Threading::{
    DeleteCriticalSection, EnterCriticalSection, InitializeCriticalSection,
    LeaveCriticalSection, CRITICAL_SECTION,
};

use crate::lock::Lock;

/// An exclusive lock backed by a Win32 `CRITICAL_SECTION`.
///
/// Critical sections are the cheapest exclusive thread-level primitive
/// on Windows (user-mode fast path, kernel wait only under contention)
/// and, unlike kernel mutex handles, cannot cross a process boundary —
/// which is exactly the scope of this crate.
///
/// The native struct is heap-allocated so its address never changes
/// while threads may be waiting on it. It is exclusively owned by this
/// instance and deleted on drop; the caller must ensure the section is
/// unowned by then, per the Win32 contract.
pub struct Win32Mutex {
    cs: Box<UnsafeCell<CRITICAL_SECTION>>,
}

// Safety: critical sections are built for concurrent enter/leave from
// any thread; all access goes through the stable heap address.
unsafe impl Send for Win32Mutex {}
unsafe impl Sync for Win32Mutex {}

impl Win32Mutex {
    /// Create a new unowned mutex. `InitializeCriticalSection` cannot
    /// fail on any supported Windows version, so construction is
    /// infallible.
    pub fn new() -> Self {
        let cs: Box<UnsafeCell<CRITICAL_SECTION>> =
            Box::new(UnsafeCell::new(unsafe { std::mem::zeroed() }));
        unsafe { InitializeCriticalSection(cs.get()) };
        Self { cs }
    }
}

impl Default for Win32Mutex {
    fn default() -> Self {
        Self::new()
    }
}

impl Lock for Win32Mutex {
    #[inline]
    fn lock(&self) {
        unsafe { EnterCriticalSection(self.cs.get()) };
    }

    #[inline]
    fn unlock(&self) {
        unsafe { LeaveCriticalSection(self.cs.get()) };
    }
}

impl Drop for Win32Mutex {
    fn drop(&mut self) {
        // The section must be unowned here (caller invariant).
        unsafe { DeleteCriticalSection(self.cs.get()) };
    }
}
