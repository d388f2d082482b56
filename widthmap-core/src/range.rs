//! Inclusive code point ranges

/// Inclusive interval of code points sharing one width category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodePointRange {
    /// First code point in the range
    pub start: u32,
    /// Last code point in the range (inclusive)
    pub end: u32,
}

impl CodePointRange {
    /// Create a range, returning `None` if `start > end`
    pub const fn new(start: u32, end: u32) -> Option<Self> {
        if start > end {
            None
        } else {
            Some(Self { start, end })
        }
    }

    /// Create a range covering a single code point
    pub const fn single(code_point: u32) -> Self {
        Self {
            start: code_point,
            end: code_point,
        }
    }

    /// Number of code points covered
    pub const fn len(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    /// Always false; a range covers at least one code point
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Check if two ranges share at least one code point
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl core::fmt::Display for CodePointRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.start == self.end {
            write!(f, "{:04X}", self.start)
        } else {
            write!(f, "{:04X}..{:04X}", self.start, self.end)
        }
    }
}
