/*
 * Copyright (c) 2018, 2020, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A (finite) map of keys to values.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Dictionary<K, V>
where
    K: Eq + Hash,
{
    dict: HashMap<K, V>,
}

impl<K, V> Default for Dictionary<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Dictionary { dict: HashMap::new() }
    }
}

impl<K, V> Dictionary<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Default::default()
    }

    /// Return `true` if this map is empty.
    pub fn is_empty(&self) -> bool {
        self.dict.is_empty()
    }

    /// Return the number of items in this map.
    pub fn len(&self) -> usize {
        self.dict.len()
    }

    /// Remove all items from the map.
    pub fn clear(&mut self) {
        self.dict.clear()
    }

    /// Associate `value` with `key`.
    ///
    /// Return `true` iff `key` had been contained in this map before. In this
    /// case the value *is* replaced.
    pub fn put(&mut self, key: K, value: V) -> bool {
        self.dict.insert(key, value).is_some()
    }

    /// Return `true` iff `key` is contained in this map.
    pub fn contains(&self, key: &K) -> bool {
        self.dict.contains_key(key)
    }

    /// Return a read-only reference to the value with the given key.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.dict.get(key)
    }

    /// Return a mutable reference to the value with the given key.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.dict.get_mut(key)
    }

    /// Remove one item from the map.
    ///
    /// Returns `true` if the item had been contained in the map, otherwise
    /// false.
    pub fn remove(&mut self, key: &K) -> bool {
        self.dict.remove(key).is_some()
    }

    /// Return all keys in arbitrary order.
    pub fn keys(&self) -> Vec<&K> {
        self.dict.keys().collect()
    }

    /// Return all values in arbitrary order.
    pub fn values(&self) -> Vec<&V> {
        self.dict.values().collect()
    }
}

impl<K, V> fmt::Display for Dictionary<K, V>
where
    K: Eq + Hash + fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        if self.dict.is_empty() {
            return write!(fmt, "Dictionary: {{}}");
        }
        writeln!(fmt, "Dictionary: {{")?;
        for (key, value) in &self.dict {
            writeln!(fmt, "  {}: {}", key, value)?;
        }
        write!(fmt, "}}")
    }
}
