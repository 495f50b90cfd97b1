// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025-2026 natyamatsya contributors
//
// No-op mutex for single-threaded builds. Never waits, owns nothing.

use crate::lock::Lock;

/// A mutex that never waits.
///
/// Satisfies the [`Lock`] contract with empty bodies: no native resource
/// is acquired, no ownership is tracked, no thread is ever blocked. This
/// is the variant [`crate::DefaultMutex`] resolves to when the
/// `single-threaded` feature is enabled, making every lock site free.
///
/// The type is zero-sized, so an "instance" costs nothing at runtime.
pub struct NullMutex;

impl NullMutex {
    /// Create a new null mutex.
    pub const fn new() -> Self {
        Self
    }
}

impl Default for NullMutex {
    fn default() -> Self {
        Self::new()
    }
}

impl Lock for NullMutex {
    #[inline(always)]
    fn lock(&self) {}

    #[inline(always)]
    fn unlock(&self) {}
}
