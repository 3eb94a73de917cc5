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

//! A fixed size set of bits stored in a single machine word.

use crate::num::traits::PrimInt;

use log::trace;

use std::error;
use std::fmt;
use std::mem;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// Error when accessing a bit of a bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The position is not smaller than the number of bits.
    InvalidPosition(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        match self {
            Error::InvalidPosition(pos) => write!(fmt, "invalid position: {}", pos),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

/// A bitmap backed by the word type `B`.
///
/// The bitmap has as many bits as `B`, position 0 is the least significant
/// bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct BitMap<B = u32> {
    bits: B,
}

impl BitMap {
    /// Number of bits of the default bitmap.
    pub const SIZE: u8 = 32;
}

impl<B> Default for BitMap<B>
where
    B: PrimInt,
{
    fn default() -> Self {
        BitMap { bits: B::zero() }
    }
}

impl<B> BitMap<B>
where
    B: PrimInt,
{
    /// Create a bitmap with all bits off.
    pub fn new() -> Self {
        Default::default()
    }

    /// The number of bits in this bitmap.
    pub fn capacity(&self) -> u8 {
        (mem::size_of::<B>() * 8) as u8
    }

    fn mask(&self, pos: u8) -> Result<B> {
        if pos >= self.capacity() {
            Err(Error::InvalidPosition(pos))
        } else {
            Ok(B::one() << pos as usize)
        }
    }

    /// Turn bit `pos` on.
    pub fn on(&mut self, pos: u8) -> Result<()> {
        self.bits = self.bits | self.mask(pos)?;
        Ok(())
    }

    /// Turn bit `pos` off.
    pub fn off(&mut self, pos: u8) -> Result<()> {
        self.bits = self.bits & !self.mask(pos)?;
        Ok(())
    }

    /// Flip bit `pos`.
    pub fn toggle(&mut self, pos: u8) -> Result<()> {
        self.bits = self.bits ^ self.mask(pos)?;
        Ok(())
    }

    /// Return `true` iff bit `pos` is on.
    pub fn is_on(&self, pos: u8) -> Result<bool> {
        Ok(self.bits & self.mask(pos)? != B::zero())
    }

    /// Return the number of bits that are on.
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Turn all bits off.
    pub fn reset(&mut self) {
        trace!("Reset bitmap with {} bits on", self.count());
        self.bits = B::zero();
    }

    /// Return the underlying word.
    pub fn bits(&self) -> B {
        self.bits
    }
}

/// All bits, most significant first.
impl<B> fmt::Display for BitMap<B>
where
    B: PrimInt + fmt::Binary,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{:0width$b}", self.bits, width = self.capacity() as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::{BitMap, Error};

    #[test]
    fn test_new() {
        let bm = BitMap::<u32>::new();
        assert_eq!(bm.bits(), 0);
        assert_eq!(bm.capacity(), BitMap::<u32>::SIZE);
        assert_eq!(bm.count(), 0);
    }

    #[test]
    fn test_on_off() {
        let mut bm = BitMap::<u32>::new();
        bm.on(0).unwrap();
        bm.on(5).unwrap();
        bm.on(31).unwrap();
        assert_eq!(bm.bits(), 0b1000_0000_0000_0000_0000_0000_0010_0001);
        assert_eq!(bm.is_on(5), Ok(true));
        assert_eq!(bm.is_on(6), Ok(false));
        bm.off(5).unwrap();
        bm.off(6).unwrap();
        assert_eq!(bm.is_on(5), Ok(false));
        assert_eq!(bm.count(), 2);
    }

    #[test]
    fn test_toggle_reset() {
        let mut bm = BitMap::<u32>::new();
        bm.toggle(3).unwrap();
        assert_eq!(bm.bits(), 0b1000);
        bm.toggle(3).unwrap();
        assert_eq!(bm.bits(), 0);
        bm.on(1).unwrap();
        bm.on(2).unwrap();
        bm.reset();
        assert_eq!(bm.bits(), 0);
    }

    #[test]
    fn test_invalid_position() {
        let mut bm = BitMap::<u32>::new();
        assert_eq!(bm.on(32), Err(Error::InvalidPosition(32)));
        assert_eq!(bm.off(40), Err(Error::InvalidPosition(40)));
        assert_eq!(bm.toggle(255), Err(Error::InvalidPosition(255)));
        assert_eq!(bm.is_on(32), Err(Error::InvalidPosition(32)));
        assert_eq!(bm.bits(), 0);
        assert_eq!(Error::InvalidPosition(32).to_string(), "invalid position: 32");
    }

    #[test]
    fn test_other_words() {
        let mut small = BitMap::<u8>::new();
        assert_eq!(small.capacity(), 8);
        small.on(7).unwrap();
        assert_eq!(small.bits(), 0x80);
        assert!(small.on(8).is_err());

        let mut large = BitMap::<u64>::new();
        assert_eq!(large.capacity(), 64);
        large.on(63).unwrap();
        assert_eq!(large.is_on(63), Ok(true));
        assert_eq!(large.count(), 1);
    }

    #[test]
    fn test_display() {
        let mut bm = BitMap::<u32>::new();
        assert_eq!(bm.to_string(), "00000000000000000000000000000000");
        bm.on(0).unwrap();
        bm.on(31).unwrap();
        assert_eq!(bm.to_string(), "10000000000000000000000000000001");
        let mut small = BitMap::<u8>::new();
        small.on(2).unwrap();
        assert_eq!(small.to_string(), "00000100");
    }
}
