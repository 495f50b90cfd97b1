// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025-2026 natyamatsya contributors
//
// Extremely light-weight wrapper types for OS thread synchronization.
// One lock/unlock contract across Win32, POSIX and single-threaded builds.

//! Thread-level exclusive locks behind a single build-time alias.
//!
//! The crate configures itself for the target: on Windows the default
//! mutex wraps a `CRITICAL_SECTION`, on POSIX+pthread systems a
//! `pthread_mutex_t`. Enabling the `single-threaded` feature stubs all
//! locking out with the no-op [`NullMutex`], so code written against
//! [`DefaultMutex`] pays nothing when only one thread of control exists.
//!
//! Each mutex is always either owned or unowned; if owned, it is owned
//! by a particular thread. To lock is to wait until the mutex is unowned
//! and then make it owned by the current thread; to unlock is to release
//! that ownership (the calling thread must own the mutex). As a special
//! case, the null mutex never waits. These are thread-level mutexes
//! only; interprocess mutexes are not supported, and neither are
//! recursive locking, try-lock or timeouts.
//!
//! ```
//! use unimutex::{DefaultMutex, Guard, Lock};
//!
//! let mtx = DefaultMutex::new();
//! mtx.lock();
//! mtx.unlock();
//!
//! // Or structurally, via the RAII guard:
//! let _held = Guard::new(&mtx);
//! ```
//!
//! No variant is clonable — a native handle has exactly one owner:
//!
//! ```compile_fail
//! use unimutex::DefaultMutex;
//!
//! let a = DefaultMutex::new();
//! let b = a.clone();
//! ```

mod platform;
pub use platform::DefaultMutex;

mod lock;
pub use lock::Lock;

mod null;
pub use null::NullMutex;

mod guard;
pub use guard::Guard;

#[cfg(all(not(feature = "single-threaded"), unix))]
pub use platform::posix::PthreadMutex;

#[cfg(all(not(feature = "single-threaded"), windows))]
pub use platform::windows::Win32Mutex;
