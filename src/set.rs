/*
 * Copyright (c) 2018, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A (finite) set of items.
///
/// The set operations (`union`, `intersection`, ...) return new sets and
/// leave both operands unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Set<T>
where
    T: Eq + Hash,
{
    elements: HashSet<T>,
}

impl<T> Default for Set<T>
where
    T: Eq + Hash,
{
    fn default() -> Self {
        Set {
            elements: HashSet::new(),
        }
    }
}

impl<T> Set<T>
where
    T: Eq + Hash,
{
    pub fn new() -> Self {
        Default::default()
    }

    /// Create a set containing the given elements.
    pub fn with_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut s = Set::new();
        s.add_all(elements);
        s
    }

    /// Return `true` if this set is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Return the number of items in this set.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Remove all items from the set.
    pub fn clear(&mut self) {
        self.elements.clear()
    }

    /// Add one item to the set.
    ///
    /// Return `true` iff `u` had not been contained in this set before.
    pub fn add(&mut self, u: T) -> bool {
        self.elements.insert(u)
    }

    /// Add several items to the set.
    pub fn add_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        for u in elements {
            self.elements.insert(u);
        }
    }

    /// Remove one item from the set.
    ///
    /// Returns `true` if the item had been contained in the set, otherwise
    /// false.
    pub fn remove(&mut self, u: &T) -> bool {
        self.elements.remove(u)
    }

    /// Return `true` iff item `u` is contained in this set.
    pub fn contains(&self, u: &T) -> bool {
        self.elements.contains(u)
    }

    /// Return all items in arbitrary order.
    pub fn values(&self) -> Vec<&T> {
        self.elements.iter().collect()
    }

    /// Return `true` iff every item of this set is contained in `other`.
    pub fn is_subset(&self, other: &Set<T>) -> bool {
        self.elements.is_subset(&other.elements)
    }

    /// Return `true` iff every item of `other` is contained in this set.
    pub fn is_superset(&self, other: &Set<T>) -> bool {
        other.is_subset(self)
    }
}

impl<T> Set<T>
where
    T: Eq + Hash + Clone,
{
    /// Items contained in at least one of both sets.
    pub fn union(&self, other: &Set<T>) -> Set<T> {
        Set::with_elements(self.elements.union(&other.elements).cloned())
    }

    /// Items contained in both sets.
    pub fn intersection(&self, other: &Set<T>) -> Set<T> {
        Set::with_elements(self.elements.intersection(&other.elements).cloned())
    }

    /// Items of this set not contained in `other`.
    pub fn difference(&self, other: &Set<T>) -> Set<T> {
        Set::with_elements(self.elements.difference(&other.elements).cloned())
    }

    /// Items contained in exactly one of both sets.
    pub fn symmetric_difference(&self, other: &Set<T>) -> Set<T> {
        Set::with_elements(self.elements.symmetric_difference(&other.elements).cloned())
    }
}

/// The items are sorted by their string representation.
impl<T> fmt::Display for Set<T>
where
    T: Eq + Hash + fmt::Display,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let mut values: Vec<String> = self.elements.iter().map(|u| u.to_string()).collect();
        values.sort();
        write!(fmt, "Set: [{}]", values.join(" "))
    }
}
