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

use std::collections::VecDeque;
use std::fmt;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A first-in first-out queue.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Queue<T> {
    data: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue { data: VecDeque::new() }
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn clear(&mut self) {
        self.data.clear()
    }

    /// Add `u` at the back of the queue.
    pub fn enqueue(&mut self, u: T) {
        self.data.push_back(u)
    }

    /// Remove and return the front element or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.data.pop_front()
    }

    pub fn front(&self) -> Option<&T> {
        self.data.front()
    }
}

impl<T> fmt::Display for Queue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str("Queue: ")?;
        fmt.debug_list().entries(self.data.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Queue;

    #[test]
    fn test_fifo() {
        let mut q = Queue::new();
        assert!(q.is_empty());
        assert_eq!(q.dequeue(), None);
        assert_eq!(q.front(), None);

        for i in 1..=3 {
            q.enqueue(i);
        }
        assert_eq!(q.len(), 3);
        assert_eq!(q.front(), Some(&1));
        assert_eq!(q.dequeue(), Some(1));
        assert_eq!(q.dequeue(), Some(2));
        q.enqueue(4);
        assert_eq!(q.front(), Some(&3));
        assert_eq!(q.dequeue(), Some(3));
        assert_eq!(q.dequeue(), Some(4));
        assert_eq!(q.dequeue(), None);
        assert!(q.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut q = Queue::new();
        q.enqueue("a");
        q.enqueue("b");
        q.clear();
        assert_eq!(q.len(), 0);
        assert_eq!(q.front(), None);
    }

    #[test]
    fn test_display() {
        let mut q = Queue::new();
        assert_eq!(q.to_string(), "Queue: []");
        q.enqueue(1);
        q.enqueue(2);
        q.enqueue(3);
        assert_eq!(q.to_string(), "Queue: [1, 2, 3]");
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn test_serde() {
        let mut q = Queue::new();
        q.enqueue(1);
        q.enqueue(2);
        let serialized = serde_json::to_string(&q).unwrap();
        assert_eq!(serialized, r#"{"data":[1,2]}"#);
        let r: Queue<i32> = serde_json::from_str(&serialized).unwrap();
        assert_eq!(q, r);
    }
}
