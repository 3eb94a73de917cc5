// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

#![forbid(unsafe_code)]

//! A library of classic generic containers.
//!
//! The central data structure is the comparator based [`BinHeap`] and the
//! [`PriorityQueue`] built on top of it. The remaining containers are thin
//! wrappers around the standard collections.
//!
//! None of the containers is synchronized. The heap and the priority queue
//! share their comparator via `Rc` and are therefore neither `Send` nor
//! `Sync`.

mod num {
    pub use num_traits as traits;
}

// # Ordered containers

pub mod priqueue;
pub use self::priqueue::binheap;
pub use self::priqueue::{BinHeap, PriQueue, PriorityQueue};

// # Plain containers

pub mod bitmap;
pub use self::bitmap::BitMap;

pub mod dictionary;
pub use self::dictionary::Dictionary;

pub mod list;
pub use self::list::SinglyLinkedList;

pub mod queue;
pub use self::queue::Queue;

pub mod set;
pub use self::set::Set;

pub mod stack;
pub use self::stack::Stack;
