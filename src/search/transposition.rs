//! Implements the [Transposition Table]: values of already searched positions
//! keyed by the board contents.
//!
//! The key includes neither the side to move nor the depth the value was
//! computed at, so a value stored by a shallow search is returned for a deeper
//! query of the same board as well.
//!
//! [Transposition Table]: https://www.chessprogramming.org/Transposition_Table

use std::collections::HashMap;

use crate::checkers::position::Key;
use crate::evaluation::Value;

/// Capacity-limited map from positions to their values. Once the table is
/// full, new positions are not stored until it is cleared.
pub(super) struct TranspositionTable {
    table: HashMap<Key, Value>,
    capacity: usize,
}

impl TranspositionTable {
    #[must_use]
    pub(super) fn new(capacity: usize) -> Self {
        Self {
            table: HashMap::new(),
            capacity,
        }
    }

    pub(super) fn clear(&mut self) {
        self.table.clear();
    }

    #[must_use]
    pub(super) fn len(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    pub(super) fn probe(&self, key: &Key) -> Option<Value> {
        self.table.get(key).copied()
    }

    pub(super) fn store(&mut self, key: Key, value: Value) {
        if self.table.len() < self.capacity || self.table.contains_key(&key) {
            let _ = self.table.insert(key, value);
        }
    }
}
