//! Observable cells with poll-based change tracking.
//!
//! [`Observed<T>`] wraps a value and counts its revisions; [`Watch<T>`]
//! remembers the last revision it reported and hands back the current value
//! exactly once per change. This is the explicit change-notification
//! primitive the synchronization session is wired with: no dependency
//! tracking, just "has this input moved since I last looked".
//!
//! Std primitives only (`RwLock`, `AtomicU64`), so the module works the
//! same under any async runtime or in plain synchronous code.

// Lock poisoning only occurs after a panic; treat it as unrecoverable.
#![allow(clippy::expect_used)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

struct Cell<T> {
    value: RwLock<T>,
    revision: AtomicU64,
}

/// A shared value whose changes can be watched.
///
/// Cloning an `Observed` clones the handle, not the value; all handles see
/// the same cell.
pub struct Observed<T> {
    cell: Arc<Cell<T>>,
}

impl<T: Clone> Observed<T> {
    /// Wrap an initial value.
    pub fn new(value: T) -> Self {
        Self {
            cell: Arc::new(Cell {
                value: RwLock::new(value),
                revision: AtomicU64::new(0),
            }),
        }
    }

    /// Clone out the current value.
    pub fn get(&self) -> T {
        self.cell
            .value
            .read()
            .expect("observed cell lock poisoned")
            .clone()
    }

    /// Replace the value and bump the revision.
    pub fn set(&self, value: T) {
        {
            let mut guard = self.cell.value.write().expect("observed cell lock poisoned");
            *guard = value;
        }
        self.cell.revision.fetch_add(1, Ordering::Release);
    }

    /// Mutate the value in place and bump the revision.
    pub fn update(&self, mutate: impl FnOnce(&mut T)) {
        {
            let mut guard = self.cell.value.write().expect("observed cell lock poisoned");
            mutate(&mut guard);
        }
        self.cell.revision.fetch_add(1, Ordering::Release);
    }

    /// Current revision counter. Starts at zero and grows by one per `set`
    /// or `update`.
    pub fn revision(&self) -> u64 {
        self.cell.revision.load(Ordering::Acquire)
    }

    /// Start watching for changes made after this call.
    pub fn watch(&self) -> Watch<T> {
        Watch {
            cell: Arc::clone(&self.cell),
            seen: self.cell.revision.load(Ordering::Acquire),
        }
    }
}

impl<T: Clone> Clone for Observed<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T: Clone + Default> Default for Observed<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// A change watch over an [`Observed<T>`].
///
/// [`Watch::poll`] returns `Some(value)` when the cell has moved since the
/// last poll (or since the watch was created), and `None` otherwise.
/// Several intermediate revisions coalesce into one report of the latest
/// value.
pub struct Watch<T> {
    cell: Arc<Cell<T>>,
    seen: u64,
}

impl<T: Clone> Watch<T> {
    /// Report the current value if it changed since the last poll.
    pub fn poll(&mut self) -> Option<T> {
        let current = self.cell.revision.load(Ordering::Acquire);
        if current == self.seen {
            return None;
        }
        self.seen = current;
        Some(
            self.cell
                .value
                .read()
                .expect("observed cell lock poisoned")
                .clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_sees_each_change_once() {
        let cell = Observed::new(0);
        let mut watch = cell.watch();
        assert_eq!(watch.poll(), None);

        cell.set(1);
        assert_eq!(watch.poll(), Some(1));
        assert_eq!(watch.poll(), None);
    }

    #[test]
    fn intermediate_revisions_coalesce() {
        let cell = Observed::new(0);
        let mut watch = cell.watch();

        cell.set(1);
        cell.set(2);
        cell.set(3);
        assert_eq!(watch.poll(), Some(3));
        assert_eq!(watch.poll(), None);
    }

    #[test]
    fn update_mutates_in_place() {
        let cell = Observed::new(vec![1]);
        let mut watch = cell.watch();
        cell.update(|items| items.push(2));
        assert_eq!(watch.poll(), Some(vec![1, 2]));
    }

    #[test]
    fn handles_share_one_cell() {
        let cell = Observed::new(0);
        let other = cell.clone();
        let mut watch = cell.watch();
        other.set(7);
        assert_eq!(watch.poll(), Some(7));
    }
}
