// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The set of display numbers a visitor intends to buy.
///
/// Numbers are unique and always iterate in ascending order, so anything
/// rendered from a selection is stable regardless of how it was built.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    numbers: BTreeSet<u32>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            numbers: BTreeSet::new(),
        }
    }

    /// Returns whether `number` is selected.
    #[must_use]
    pub fn contains(&self, number: u32) -> bool {
        self.numbers.contains(&number)
    }

    /// Returns whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Returns the number of selected entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Returns the selected numbers in ascending order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u32> {
        self.numbers.iter().copied().collect()
    }

    /// Iterates the selected numbers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.numbers.iter().copied()
    }

    /// Adds a number. Returns `false` if it was already selected.
    pub fn insert(&mut self, number: u32) -> bool {
        self.numbers.insert(number)
    }

    /// Removes a number. Returns `false` if it was not selected.
    pub fn remove(&mut self, number: u32) -> bool {
        self.numbers.remove(&number)
    }

    /// Replaces the whole selection.
    pub fn replace(&mut self, numbers: impl IntoIterator<Item = u32>) {
        self.numbers = numbers.into_iter().collect();
    }

    /// Empties the selection.
    pub fn clear(&mut self) {
        self.numbers.clear();
    }

    /// Renders the selection as `"2, 5, 17"`.
    #[must_use]
    pub fn display_list(&self) -> String {
        self.numbers
            .iter()
            .map(u32::to_string)
            .collect::<Vec<String>>()
            .join(", ")
    }
}

impl FromIterator<u32> for Selection {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            numbers: iter.into_iter().collect(),
        }
    }
}
