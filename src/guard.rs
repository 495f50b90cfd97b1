// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025-2026 natyamatsya contributors
//
// RAII guard: locks a mutex for the lifetime of the guard value.

use crate::lock::Lock;

/// RAII guard: locks on construction, unlocks on drop.
///
/// Makes the paired-unlock invariant structural — the critical section
/// is the guard's lexical scope, and the unlock runs even on panic
/// unwind. Generic over [`Lock`], so it costs nothing when instantiated
/// with [`crate::NullMutex`].
pub struct Guard<'a, L: Lock> {
    mtx: &'a L,
}

impl<'a, L: Lock> Guard<'a, L> {
    /// Lock `mtx` and hold it until the guard is dropped.
    pub fn new(mtx: &'a L) -> Self {
        mtx.lock();
        Self { mtx }
    }
}

impl<L: Lock> Drop for Guard<'_, L> {
    fn drop(&mut self) {
        self.mtx.unlock();
    }
}
