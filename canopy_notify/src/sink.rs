// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The notification seam between a style tree and its host.

use alloc::vec::Vec;

use crate::change::Change;

/// Receives change notifications synchronously from the mutating call.
///
/// Notifications are never deferred or dropped by the producer: each call
/// that changes state invokes [`notify`](Self::notify) before it returns.
/// Calls that change nothing do not notify.
///
/// Closures implement this trait, as do [`ChangeSet`](crate::ChangeSet) (a
/// dirty flag), [`ChangeLog`] (an ordered recorder) and [`Discard`].
///
/// # Example
///
/// ```
/// use canopy_notify::{Change, ChangeSink};
///
/// let mut renders = 0;
/// let mut sink = |_key: u32, _change: Change| renders += 1;
/// sink.notify(7, Change::DECLARED);
/// assert_eq!(renders, 1);
/// ```
pub trait ChangeSink<K> {
    /// Called once per effective change.
    fn notify(&mut self, key: K, change: Change);
}

impl<K, F> ChangeSink<K> for F
where
    F: FnMut(K, Change),
{
    #[inline]
    fn notify(&mut self, key: K, change: Change) {
        self(key, change);
    }
}

/// A sink that ignores every notification.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Discard;

impl<K> ChangeSink<K> for Discard {
    #[inline]
    fn notify(&mut self, _key: K, _change: Change) {}
}

/// Records every notification in order.
///
/// Useful for tests and for hosts that replay changes in the order they
/// happened (a [`ChangeSet`](crate::ChangeSet) loses ordering).
#[derive(Clone, Debug)]
pub struct ChangeLog<K> {
    events: Vec<(K, Change)>,
}

impl<K> Default for ChangeLog<K> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<K> ChangeLog<K> {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded notifications, oldest first.
    #[must_use]
    pub fn events(&self) -> &[(K, Change)] {
        &self.events
    }

    /// Returns the number of recorded notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Takes the recorded notifications, leaving the log empty.
    pub fn take(&mut self) -> Vec<(K, Change)> {
        core::mem::take(&mut self.events)
    }

    /// Forgets every recorded notification.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<K> ChangeSink<K> for ChangeLog<K> {
    fn notify(&mut self, key: K, change: Change) {
        self.events.push((key, change));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn drive<S: ChangeSink<u32>>(sink: &mut S) {
        sink.notify(1, Change::CREATED);
        sink.notify(1, Change::DECLARED);
        sink.notify(2, Change::REMOVED);
    }

    #[test]
    fn log_keeps_order() {
        let mut log = ChangeLog::new();
        drive(&mut log);
        assert_eq!(
            log.events(),
            &[
                (1, Change::CREATED),
                (1, Change::DECLARED),
                (2, Change::REMOVED),
            ]
        );

        let taken = log.take();
        assert_eq!(taken.len(), 3);
        assert!(log.is_empty());
    }

    #[test]
    fn closure_sink() {
        let mut seen = vec![];
        let mut sink = |key: u32, change: Change| seen.push((key, change));
        drive(&mut sink);
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[2], (2, Change::REMOVED));
    }

    #[test]
    fn discard_accepts_anything() {
        let mut sink = Discard;
        drive(&mut sink);
    }
}
