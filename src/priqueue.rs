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

//! Priority queues of values with integer priorities.
//!
//! A [`PriorityQueue`] is either a min-queue (smallest priority first) or a
//! max-queue (largest priority first). Both are backed by the same
//! [`BinHeap`], only the comparator differs. Values with equal priority are
//! returned in no particular order.

pub mod binheap;
pub use self::binheap::BinHeap;

use log::trace;

use std::error;
use std::fmt;

/// Error when accessing the front of a priority queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The queue does not contain any element.
    Empty,
}

impl From<binheap::Error> for Error {
    fn from(err: binheap::Error) -> Self {
        match err {
            binheap::Error::Empty => Error::Empty,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        match self {
            Error::Empty => write!(fmt, "queue empty"),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

/// A queue of values ordered by integer priorities.
pub trait PriQueue<T> {
    /// Return `true` iff the queue contains no element.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the number of elements in the queue.
    fn len(&self) -> usize;

    /// Remove all elements from the queue.
    fn clear(&mut self);

    /// Add `value` with the given `priority` to the queue.
    fn enqueue(&mut self, value: T, priority: i64);

    /// Remove and return the value with the most urgent priority.
    fn dequeue(&mut self) -> Result<T>;

    /// Return the value with the most urgent priority without removing it.
    fn peek(&self) -> Result<&T>;
}

impl<'a, P, T> PriQueue<T> for &'a mut P
where
    P: PriQueue<T>,
{
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn enqueue(&mut self, value: T, priority: i64) {
        (**self).enqueue(value, priority)
    }

    fn dequeue(&mut self) -> Result<T> {
        (**self).dequeue()
    }

    fn peek(&self) -> Result<&T> {
        (**self).peek()
    }
}

/// A value together with its priority.
#[derive(Debug, Clone)]
struct Prioritized<T> {
    value: T,
    priority: i64,
}

/// A priority queue backed by a binary heap.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: BinHeap<Prioritized<T>>,
}

impl<T> PriorityQueue<T> {
    /// Create an empty queue returning values with smallest priority first.
    pub fn new_min() -> Self {
        PriorityQueue {
            heap: BinHeap::min(|a: &Prioritized<T>, b: &Prioritized<T>| a.priority.cmp(&b.priority)),
        }
    }

    /// Create an empty queue returning values with largest priority first.
    pub fn new_max() -> Self {
        PriorityQueue {
            heap: BinHeap::max(|a: &Prioritized<T>, b: &Prioritized<T>| a.priority.cmp(&b.priority)),
        }
    }

    /// Return `true` iff the queue contains no element.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Return the number of elements in the queue.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Add `value` with the given `priority`.
    pub fn enqueue(&mut self, value: T, priority: i64) {
        self.heap.insert(Prioritized { value, priority });
    }

    /// Remove and return the value with the smallest (min-queue) or largest
    /// (max-queue) priority.
    pub fn dequeue(&mut self) -> Result<T> {
        Ok(self.heap.remove()?.value)
    }

    /// Return the value that the next call to `dequeue` would return.
    pub fn peek(&self) -> Result<&T> {
        Ok(&self.heap.peek()?.value)
    }

    /// Remove all elements.
    ///
    /// The queue keeps its orientation: the new heap shares the comparator
    /// of the old one.
    pub fn clear(&mut self) {
        trace!("Clear priority queue with {} elements", self.heap.len());
        self.heap = BinHeap::with_comparator(self.heap.comparator());
    }
}

impl<T> PriQueue<T> for PriorityQueue<T> {
    fn is_empty(&self) -> bool {
        PriorityQueue::is_empty(self)
    }

    fn len(&self) -> usize {
        PriorityQueue::len(self)
    }

    fn clear(&mut self) {
        PriorityQueue::clear(self)
    }

    fn enqueue(&mut self, value: T, priority: i64) {
        PriorityQueue::enqueue(self, value, priority)
    }

    fn dequeue(&mut self) -> Result<T> {
        PriorityQueue::dequeue(self)
    }

    fn peek(&self) -> Result<&T> {
        PriorityQueue::peek(self)
    }
}
