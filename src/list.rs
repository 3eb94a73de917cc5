/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Singly linked list.
//!
//! The nodes are stored in a vector and linked by their indices. Slots of
//! removed nodes are kept in a free list and reused by later insertions.

use log::trace;

use std::error;
use std::fmt;

/// Error when inserting into a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The position is larger than the length of the list.
    IndexOutOfBounds { index: usize, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        match self {
            Error::IndexOutOfBounds { index, len } => {
                write!(fmt, "index out of bounds: {} (length {})", index, len)
            }
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

/// A node slot.
#[derive(Clone)]
struct Slot<T> {
    /// The data of the node, `None` if the slot is free.
    data: Option<T>,
    /// The next node in the list. If this slot is free, the next slot in the
    /// free list.
    next: Option<usize>,
}

/// A singly linked list with constant time access to both ends.
#[derive(Clone)]
pub struct SinglyLinkedList<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    /// First free slot.
    free: Option<usize>,
    len: usize,
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        SinglyLinkedList {
            slots: vec![],
            head: None,
            tail: None,
            free: None,
            len: 0,
        }
    }
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return the first element.
    pub fn head(&self) -> Option<&T> {
        self.head.and_then(|idx| self.slots[idx].data.as_ref())
    }

    /// Return the last element.
    pub fn tail(&self) -> Option<&T> {
        self.tail.and_then(|idx| self.slots[idx].data.as_ref())
    }

    /// Remove all elements.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.free = None;
        self.len = 0;
    }

    /// Insert `data` at the front.
    pub fn prepend(&mut self, data: T) {
        let idx = self.alloc(data, self.head);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
        self.head = Some(idx);
        self.len += 1;
    }

    /// Insert `data` at the back.
    pub fn append(&mut self, data: T) {
        let idx = self.alloc(data, None);
        match self.tail {
            Some(tail) => self.slots[tail].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Insert `data` such that it becomes the element at position `index`.
    ///
    /// `index` may be equal to the length of the list, then `data` is
    /// appended.
    pub fn insert_at(&mut self, index: usize, data: T) -> Result<()> {
        if index > self.len {
            return Err(Error::IndexOutOfBounds { index, len: self.len });
        }
        if index == 0 {
            self.prepend(data);
        } else if index == self.len {
            self.append(data);
        } else {
            let mut prev = self.head;
            for _ in 1..index {
                prev = prev.and_then(|p| self.slots[p].next);
            }
            if let Some(prev) = prev {
                let idx = self.alloc(data, self.slots[prev].next);
                self.slots[prev].next = Some(idx);
                self.len += 1;
            }
        }
        Ok(())
    }

    /// Remove and return the first element.
    pub fn remove_first(&mut self) -> Option<T> {
        let head = self.head?;
        self.unlink(None, head)
    }

    /// Remove and return the last element.
    ///
    /// This needs a pass over the whole list to find the new tail.
    pub fn remove_last(&mut self) -> Option<T> {
        let tail = self.tail?;
        let mut prev = None;
        let mut cur = self.head;
        while let Some(c) = cur {
            if c == tail {
                break;
            }
            prev = cur;
            cur = self.slots[c].next;
        }
        self.unlink(prev, tail)
    }

    /// Reverse the order of the elements.
    pub fn reverse(&mut self) {
        trace!("Reverse list with {} elements", self.len);
        let mut prev = None;
        let mut cur = self.head;
        while let Some(c) = cur {
            cur = self.slots[c].next;
            self.slots[c].next = prev;
            prev = Some(c);
        }
        self.tail = self.head;
        self.head = prev;
    }

    /// Call `f` for each element from head to tail.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        let mut cur = self.head;
        while let Some(c) = cur {
            let slot = &self.slots[c];
            if let Some(data) = slot.data.as_ref() {
                f(data);
            }
            cur = slot.next;
        }
    }

    /// Store `data` in a free slot, return the index of that slot.
    fn alloc(&mut self, data: T, next: Option<usize>) -> usize {
        let slot = Slot { data: Some(data), next };
        if let Some(idx) = self.free {
            self.free = self.slots[idx].next;
            self.slots[idx] = slot;
            idx
        } else {
            self.slots.push(slot);
            self.slots.len() - 1
        }
    }

    /// Remove node `idx` following node `prev` (or the head if `prev` is `None`).
    ///
    /// The slot of the node is put in the free list.
    fn unlink(&mut self, prev: Option<usize>, idx: usize) -> Option<T> {
        let next = self.slots[idx].next;
        match prev {
            Some(p) => self.slots[p].next = next,
            None => self.head = next,
        }
        if self.tail == Some(idx) {
            self.tail = prev;
        }
        self.len -= 1;

        self.slots[idx].next = self.free;
        self.free = Some(idx);
        self.slots[idx].data.take()
    }
}

impl<T> SinglyLinkedList<T>
where
    T: PartialEq,
{
    /// Return the first element equal to `data`.
    pub fn find(&self, data: &T) -> Option<&T> {
        let mut cur = self.head;
        while let Some(c) = cur {
            let slot = &self.slots[c];
            if slot.data.as_ref() == Some(data) {
                return slot.data.as_ref();
            }
            cur = slot.next;
        }
        None
    }

    /// Remove the first element equal to `data`.
    ///
    /// Return `true` if such an element has been found.
    pub fn remove(&mut self, data: &T) -> bool {
        let mut prev = None;
        let mut cur = self.head;
        while let Some(c) = cur {
            if self.slots[c].data.as_ref() == Some(data) {
                self.unlink(prev, c);
                return true;
            }
            prev = cur;
            cur = self.slots[c].next;
        }
        false
    }

    /// Remove all elements equal to `data`.
    ///
    /// Return the number of removed elements.
    pub fn remove_all(&mut self, data: &T) -> usize {
        let mut nremoved = 0;
        let mut prev = None;
        let mut cur = self.head;
        while let Some(c) = cur {
            let next = self.slots[c].next;
            if self.slots[c].data.as_ref() == Some(data) {
                self.unlink(prev, c);
                nremoved += 1;
            } else {
                prev = cur;
            }
            cur = next;
        }
        nremoved
    }
}

impl<T> fmt::Display for SinglyLinkedList<T>
where
    T: fmt::Display,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return write!(fmt, "SinglyLinkedList: []");
        }
        let mut parts = vec![];
        self.for_each(|data| parts.push(format!("[{}]", data)));
        write!(fmt, "SinglyLinkedList: {}", parts.join(" → "))
    }
}

impl<T> fmt::Debug for SinglyLinkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let mut list = fmt.debug_list();
        self.for_each(|data| {
            list.entry(data);
        });
        list.finish()
    }
}
