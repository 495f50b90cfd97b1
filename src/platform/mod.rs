// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025-2026 natyamatsya contributors
//
// Build-time selection of the mutex variant backing `DefaultMutex`.
//
// Priority order:
//   1. `single-threaded` feature, or a wasm target with no native
//      threading facility → NullMutex (locks compile to nothing)
//   2. Windows → Win32Mutex (CRITICAL_SECTION)
//   3. POSIX+pthread → PthreadMutex (pthread_mutex_t)
//   4. anything else → build failure; we refuse to guess a platform.
//
// Exactly one arm is active per build. `DefaultMutex` is a type alias,
// never a runtime value, so lock/unlock carry no branch and no dispatch.

#[cfg(all(not(feature = "single-threaded"), unix))]
pub mod posix;

#[cfg(all(not(feature = "single-threaded"), windows))]
pub mod windows;

#[cfg(any(
    feature = "single-threaded",
    all(target_family = "wasm", not(unix), not(windows))
))]
pub type DefaultMutex = crate::null::NullMutex;

#[cfg(all(not(feature = "single-threaded"), windows))]
pub type DefaultMutex = windows::Win32Mutex;

#[cfg(all(not(feature = "single-threaded"), not(windows), unix))]
pub type DefaultMutex = posix::PthreadMutex;

#[cfg(not(any(
    feature = "single-threaded",
    target_family = "wasm",
    windows,
    unix
)))]
compile_error!(
    "unable to determine a platform mutex for this target; \
     enable the `single-threaded` feature to assume no threads"
);
