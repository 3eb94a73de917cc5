// Copyright (c) 2016, 2017, 2020, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Binary heap implementation
//!
//! The heap is a complete binary tree stored in level order in a vector. The
//! order of the elements is given by a comparison function that is fixed when
//! the heap is created. The element at the root never compares greater than
//! any other element, i.e. the heap is a min-heap with respect to its
//! comparator. A max-heap is obtained by swapping the arguments of the
//! comparator, see [`BinHeap::max`].
//!
//! The comparator must be a total order on all elements ever inserted. If it
//! is not, the layout of the heap is unspecified (but no operation panics).

use log::trace;

use std::cmp::Ordering;
use std::error;
use std::fmt;
use std::rc::Rc;

/// Error when accessing the root of a heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The heap does not contain any element.
    Empty,
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        match self {
            Error::Empty => write!(fmt, "empty heap"),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

/// The comparison function of a heap.
///
/// `compare(a, b)` returns `Less` if `a` should be closer to the root than `b`.
pub type Comparator<T> = Rc<dyn Fn(&T, &T) -> Ordering>;

/// Simple binary heap data structure ordered by a comparison function.
pub struct BinHeap<T> {
    /// The heap elements in level order.
    elements: Vec<T>,
    /// The comparison function.
    compare: Comparator<T>,
}

impl<T> BinHeap<T> {
    /// Create an empty heap ordered by `compare`.
    ///
    /// The smallest element w.r.t. `compare` is at the root.
    pub fn new<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        BinHeap::with_comparator(Rc::new(compare))
    }

    /// Create an empty min-heap ordered by `compare`.
    ///
    /// This is the same as [`BinHeap::new`].
    pub fn min<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        BinHeap::new(compare)
    }

    /// Create an empty max-heap ordered by `compare`.
    ///
    /// The largest element w.r.t. `compare` is at the root. The heap stores
    /// the comparator with swapped arguments, so [`BinHeap::comparator`]
    /// returns the reversed order.
    pub fn max<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        BinHeap::new(move |a: &T, b: &T| compare(b, a))
    }

    /// Create an empty heap sharing an existing comparator.
    pub fn with_comparator(compare: Comparator<T>) -> Self {
        BinHeap {
            elements: vec![],
            compare,
        }
    }

    /// Return the comparator of this heap.
    ///
    /// The returned handle can be used to create an equivalent empty heap
    /// with [`BinHeap::with_comparator`].
    pub fn comparator(&self) -> Comparator<T> {
        Rc::clone(&self.compare)
    }

    /// Return the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Return `true` iff the heap contains no element.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Return the elements in heap (level) order.
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// Add a new element to the heap.
    pub fn insert(&mut self, element: T) {
        self.elements.push(element);
        self.upheap(self.elements.len() - 1);
    }

    /// Remove and return the root element.
    ///
    /// The last element of the heap replaces the root and is moved down
    /// until the heap property holds again.
    pub fn remove(&mut self) -> Result<T> {
        if self.elements.is_empty() {
            return Err(Error::Empty);
        }
        let root = self.elements.swap_remove(0);
        self.downheap(0);
        Ok(root)
    }

    /// Return the root element without removing it.
    pub fn peek(&self) -> Result<&T> {
        self.elements.first().ok_or(Error::Empty)
    }

    /// Remove all elements from the heap.
    ///
    /// The comparator is kept.
    pub fn clear(&mut self) {
        trace!("Clear binary heap with {} elements", self.elements.len());
        self.elements.clear();
    }

    /// Return the elements in heap order, consuming the heap.
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Return `true` if `a` must be closer to the root than `b`.
    fn less(&self, a: usize, b: usize) -> bool {
        (self.compare)(&self.elements[a], &self.elements[b]) == Ordering::Less
    }

    /// Move the element at position `cur_pos` up in the heap until its parent
    /// is not larger or the root node is reached.
    fn upheap(&mut self, mut cur_pos: usize) {
        while cur_pos > 0 {
            let parent_pos = (cur_pos - 1) / 2;
            // An element equal to its parent stays below it.
            if !self.less(cur_pos, parent_pos) {
                break;
            }
            self.elements.swap(cur_pos, parent_pos);
            cur_pos = parent_pos;
        }
    }

    /// Move the element at position `cur_pos` down in the heap until none of
    /// its children is smaller.
    ///
    /// If both children are equal, the left one is chosen.
    fn downheap(&mut self, mut cur_pos: usize) {
        let n = self.elements.len();
        loop {
            let left_pos = 2 * cur_pos + 1;
            let right_pos = left_pos + 1;
            let next_pos = if left_pos >= n {
                break;
            } else if right_pos >= n || !self.less(right_pos, left_pos) {
                left_pos
            } else {
                right_pos
            };

            if !self.less(next_pos, cur_pos) {
                break;
            }

            self.elements.swap(cur_pos, next_pos);
            cur_pos = next_pos;
        }
    }
}

impl<T> Clone for BinHeap<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        BinHeap {
            elements: self.elements.clone(),
            compare: self.comparator(),
        }
    }
}

impl<T> fmt::Debug for BinHeap<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("BinHeap").field("elements", &self.elements).finish()
    }
}
