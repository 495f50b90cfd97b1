// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025-2026 natyamatsya contributors
//
// The two-operation contract every mutex variant satisfies.

/// An exclusive, non-recursive thread-level lock.
///
/// At most one thread owns the lock at any time. Implementations wrap a
/// native primitive (`PthreadMutex`, `Win32Mutex`) or nothing at all
/// ([`crate::NullMutex`]); callers are expected to write
/// against [`crate::DefaultMutex`] so the variant is resolved once, at
/// build time, with no dispatch on the hot path.
///
/// The contract inherits the native one unchanged: locking a mutex the
/// calling thread already owns, unlocking a mutex the calling thread
/// does not own, or dropping an owned mutex is undefined behavior of the
/// underlying primitive. This layer adds no checking.
pub trait Lock {
    /// Block until the mutex is unowned, then make it owned by the
    /// calling thread. May wait indefinitely; not cancellable.
    fn lock(&self);

    /// Release ownership. Never blocks.
    fn unlock(&self);
}
