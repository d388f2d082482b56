//! Compact bit array indexed by code point
//!
//! Bits are stored LSB-first: bit `i` lives in byte `i / 8` at offset
//! `i % 8`. This natural ordering is the only one the compiler and the
//! verification pass ever see.

use alloc::vec;
use alloc::vec::Vec;

/// Bitmap where bit `i` is set iff code point `i` is wide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidthBitmap {
    /// Bit storage, `len.div_ceil(8)` bytes
    bytes: Vec<u8>,
    /// Number of bits in the table
    len: usize,
}

impl WidthBitmap {
    /// Create a bitmap of `len` bits, all clear
    pub fn new(len: usize) -> Self {
        Self {
            bytes: vec![0; len.div_ceil(8)],
            len,
        }
    }

    /// Set a single bit; indices past the end are ignored
    pub fn set(&mut self, index: usize) {
        if index < self.len {
            self.bytes[index / 8] |= 1 << (index % 8);
        }
    }

    /// Clear a single bit; indices past the end are ignored
    pub fn clear(&mut self, index: usize) {
        if index < self.len {
            self.bytes[index / 8] &= !(1 << (index % 8));
        }
    }

    /// Set every bit in the inclusive range `[start, end]`, clamped to the table
    pub fn set_range(&mut self, start: usize, end: usize) {
        if start >= self.len || start > end {
            return;
        }
        let end = end.min(self.len - 1);

        let mut index = start;
        // Leading partial byte
        while index <= end && index % 8 != 0 {
            self.set(index);
            index += 1;
        }
        // Whole bytes
        while index + 7 <= end {
            self.bytes[index / 8] = 0xFF;
            index += 8;
        }
        // Trailing partial byte
        while index <= end {
            self.set(index);
            index += 1;
        }
    }

    /// Read a bit; indices past the end read as clear
    pub fn get(&self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        (self.bytes[index / 8] & (1 << (index % 8))) != 0
    }

    /// Check whether a code point is wide; anything past the table is narrow
    pub fn is_wide(&self, code_point: u32) -> bool {
        self.get(code_point as usize)
    }

    /// Number of bits in the table
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the table has no bits
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of set bits
    pub fn count_wide(&self) -> usize {
        self.bytes.iter().map(|byte| byte.count_ones() as usize).sum()
    }

    /// Iterate over all bits, lowest code point first
    pub fn iter(&self) -> Bits<'_> {
        Bits {
            bitmap: self,
            front: 0,
            back: self.len,
        }
    }

    /// Get the raw LSB-first bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Iterator over the bits of a [`WidthBitmap`]
///
/// Double-ended, so `.rev()` yields the highest code point first.
#[derive(Debug, Clone)]
pub struct Bits<'a> {
    bitmap: &'a WidthBitmap,
    front: usize,
    back: usize,
}

impl Iterator for Bits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.front >= self.back {
            return None;
        }
        let bit = self.bitmap.get(self.front);
        self.front += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Bits<'_> {
    fn next_back(&mut self) -> Option<bool> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.bitmap.get(self.back))
    }
}

impl ExactSizeIterator for Bits<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitmap_basic() {
        let mut bitmap = WidthBitmap::new(20);
        assert_eq!(bitmap.len(), 20);
        assert_eq!(bitmap.as_bytes().len(), 3);

        bitmap.set(0);
        bitmap.set(9);
        bitmap.set(19);
        assert!(bitmap.get(0));
        assert!(bitmap.get(9));
        assert!(bitmap.get(19));
        assert!(!bitmap.get(1));
        assert_eq!(bitmap.count_wide(), 3);

        // Out of range writes are ignored, reads are clear
        bitmap.set(20);
        assert!(!bitmap.get(20));
        assert!(!bitmap.is_wide(u32::MAX));
        assert_eq!(bitmap.count_wide(), 3);

        bitmap.clear(9);
        assert!(!bitmap.get(9));
    }

    #[test]
    fn test_set_range_matches_bitwise() {
        // Every (start, end) pair inside a small table, checked against set()
        for start in 0..40 {
            for end in start..40 {
                let mut fast = WidthBitmap::new(40);
                fast.set_range(start, end);

                let mut slow = WidthBitmap::new(40);
                for i in start..=end {
                    slow.set(i);
                }
                assert_eq!(fast, slow, "set_range({start}, {end})");
            }
        }
    }

    #[test]
    fn test_set_range_clamps() {
        let mut bitmap = WidthBitmap::new(10);
        bitmap.set_range(8, 100);
        assert_eq!(bitmap.count_wide(), 2);
        bitmap.set_range(50, 60);
        assert_eq!(bitmap.count_wide(), 2);
    }

    #[test]
    fn test_iter_order() {
        let mut bitmap = WidthBitmap::new(4);
        bitmap.set(0);
        bitmap.set(1);

        let forward: Vec<bool> = bitmap.iter().collect();
        assert_eq!(forward, [true, true, false, false]);

        let reversed: Vec<bool> = bitmap.iter().rev().collect();
        assert_eq!(reversed, [false, false, true, true]);
        assert_eq!(bitmap.iter().len(), 4);
    }
}
