//! Range-to-bitmap compiler with self-verification
//!
//! The compiler sorts the wide ranges, builds a [`WidthBitmap`] of
//! `max_end + 1` bits, and then proves the bitmap against the ranges with
//! [`verify`] before handing out a [`VerifiedTable`]. Renderers only accept
//! a `VerifiedTable`, so an unchecked bitmap can never be emitted.

use alloc::vec::Vec;

use crate::{
    CodePointRange, Result, WideSet, WidthBitmap, WidthCategory, WidthError,
    CJK_WIDE_CATEGORIES, DEFAULT_WIDE_CATEGORIES,
};

/// How the compiler treats ranges that share code points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapPolicy {
    /// Accept overlap; setting a bit twice is harmless
    #[default]
    Tolerate,
    /// Fail with [`WidthError::OverlappingRanges`]
    Reject,
}

/// Configuration for parsing and compiling a width table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Categories that count as two columns wide
    pub wide_categories: &'static [WidthCategory],
    /// Handling of overlapping ranges
    pub overlap_policy: OverlapPolicy,
}

impl CompilerConfig {
    /// Treat `Ambiguous` as wide in addition to `Wide` and `Fullwidth`
    pub fn with_ambiguous_wide(mut self, ambiguous_wide: bool) -> Self {
        self.wide_categories = if ambiguous_wide {
            CJK_WIDE_CATEGORIES
        } else {
            DEFAULT_WIDE_CATEGORIES
        };
        self
    }

    /// Set the overlap policy
    pub fn with_overlap_policy(mut self, overlap_policy: OverlapPolicy) -> Self {
        self.overlap_policy = overlap_policy;
        self
    }

    /// Set an explicit list of wide categories
    pub fn with_wide_categories(mut self, wide_categories: &'static [WidthCategory]) -> Self {
        self.wide_categories = wide_categories;
        self
    }

    /// The wide set used by the record parser
    pub fn wide_set(&self) -> WideSet<'static> {
        WideSet::new(self.wide_categories)
    }
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            wide_categories: DEFAULT_WIDE_CATEGORIES,
            overlap_policy: OverlapPolicy::Tolerate,
        }
    }
}

/// Wide ranges sorted ascending by start
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WideRangeSet {
    ranges: Vec<CodePointRange>,
}

impl WideRangeSet {
    /// Collect and sort ranges
    pub fn new(mut ranges: Vec<CodePointRange>) -> Self {
        ranges.sort_by_key(|range| range.start);
        Self { ranges }
    }

    /// Ranges in ascending start order
    pub fn ranges(&self) -> &[CodePointRange] {
        &self.ranges
    }

    /// Number of ranges
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Check if the set holds no ranges
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Highest code point covered by any range
    ///
    /// For disjoint input this is the end of the last range.
    pub fn max_end(&self) -> Option<u32> {
        self.ranges.iter().map(|range| range.end).max()
    }

    /// First pair of sorted neighbours that share a code point
    pub fn find_overlap(&self) -> Option<(CodePointRange, CodePointRange)> {
        // Tracks the furthest end seen so far so a long range that swallows
        // several later ones is still reported
        let mut widest = *self.ranges.first()?;
        for range in &self.ranges[1..] {
            if range.overlaps(&widest) {
                return Some((widest, *range));
            }
            if range.end > widest.end {
                widest = *range;
            }
        }
        None
    }
}

impl FromIterator<CodePointRange> for WideRangeSet {
    fn from_iter<I: IntoIterator<Item = CodePointRange>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A bitmap that passed verification, paired with the ranges it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedTable {
    bitmap: WidthBitmap,
    ranges: WideRangeSet,
}

impl VerifiedTable {
    /// The verified bitmap
    pub fn bitmap(&self) -> &WidthBitmap {
        &self.bitmap
    }

    /// The sorted wide ranges
    pub fn ranges(&self) -> &WideRangeSet {
        &self.ranges
    }

    /// Table length in bits (`max_end + 1`)
    pub fn len(&self) -> usize {
        self.bitmap.len()
    }

    /// Always false; a verified table holds at least one range
    pub fn is_empty(&self) -> bool {
        self.bitmap.is_empty()
    }

    /// Check whether a code point is wide
    pub fn is_wide(&self, code_point: u32) -> bool {
        self.bitmap.is_wide(code_point)
    }
}

/// Compile ranges into a verified bitmap using the default configuration
pub fn compile(ranges: Vec<CodePointRange>) -> Result<VerifiedTable> {
    compile_with_config(ranges, &CompilerConfig::default())
}

/// Compile ranges into a verified bitmap
///
/// Fails with [`WidthError::EmptyInput`] for an empty range list,
/// [`WidthError::OverlappingRanges`] under [`OverlapPolicy::Reject`], and
/// [`WidthError::VerificationFailed`] if the built bitmap disagrees with
/// the ranges.
pub fn compile_with_config(
    ranges: Vec<CodePointRange>,
    config: &CompilerConfig,
) -> Result<VerifiedTable> {
    let ranges = WideRangeSet::new(ranges);
    if ranges.is_empty() {
        return Err(WidthError::EmptyInput);
    }

    if config.overlap_policy == OverlapPolicy::Reject {
        if let Some((first, second)) = ranges.find_overlap() {
            return Err(WidthError::OverlappingRanges { first, second });
        }
    }

    let bitmap = build_bitmap(&ranges)?;
    verify(&bitmap, &ranges)?;

    Ok(VerifiedTable { bitmap, ranges })
}

/// Build the bitmap without verifying it
pub fn build_bitmap(ranges: &WideRangeSet) -> Result<WidthBitmap> {
    let max_end = ranges.max_end().ok_or(WidthError::EmptyInput)?;

    let mut bitmap = WidthBitmap::new(max_end as usize + 1);
    for range in ranges.ranges() {
        bitmap.set_range(range.start as usize, range.end as usize);
    }

    Ok(bitmap)
}

/// Check a bitmap against the ranges that built it
///
/// Every bit inside a range must be set, every bit below the first range and
/// in each gap between consecutive ranges must be clear, and the length must
/// be exactly `max_end + 1`. Runs against the natural low-bit-first indexing.
pub fn verify(bitmap: &WidthBitmap, ranges: &WideRangeSet) -> Result<()> {
    let sorted = ranges.ranges();
    let (first, max_end) = match (sorted.first(), ranges.max_end()) {
        (Some(first), Some(max_end)) => (first, max_end),
        _ => return Err(WidthError::EmptyInput),
    };

    if bitmap.len() != max_end as usize + 1 {
        return Err(WidthError::VerificationFailed {
            code_point: max_end,
            expected: true,
        });
    }

    for range in sorted {
        expect_bits(bitmap, range.start as u64, range.end as u64 + 1, true)?;
    }

    expect_bits(bitmap, 0, first.start as u64, false)?;

    // Gap between consecutive ranges. The left edge is the furthest end seen
    // so far, which is the previous range's end whenever ranges are disjoint.
    let mut covered_to = first.end;
    for range in &sorted[1..] {
        expect_bits(bitmap, covered_to as u64 + 1, range.start as u64, false)?;
        covered_to = covered_to.max(range.end);
    }

    Ok(())
}

/// Require every bit in the half-open range `[start, end)` to equal `expected`
fn expect_bits(bitmap: &WidthBitmap, start: u64, end: u64, expected: bool) -> Result<()> {
    for code_point in start..end {
        if bitmap.get(code_point as usize) != expected {
            return Err(WidthError::VerificationFailed {
                code_point: code_point as u32,
                expected,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn range(start: u32, end: u32) -> CodePointRange {
        CodePointRange::new(start, end).unwrap()
    }

    #[test]
    fn test_compile_basic() {
        let table = compile(vec![range(0x3000, 0x3000), range(0x1100, 0x115F)]).unwrap();

        assert_eq!(table.len(), 0x3001);
        assert_eq!(table.ranges().ranges()[0], range(0x1100, 0x115F));
        assert!(table.is_wide(0x1100));
        assert!(table.is_wide(0x115F));
        assert!(table.is_wide(0x3000));
        assert!(!table.is_wide(0x10FF));
        assert!(!table.is_wide(0x1160));
        assert!(!table.is_wide(0x2FFF));
        assert!(!table.is_wide(0xFF61));
        assert_eq!(table.bitmap().count_wide(), 0x60 + 1);
    }

    #[test]
    fn test_compile_empty() {
        assert_eq!(compile(Vec::new()), Err(WidthError::EmptyInput));
    }

    #[test]
    fn test_range_starting_at_zero() {
        let table = compile(vec![range(0, 3)]).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.bitmap().count_wide(), 4);
    }

    #[test]
    fn test_abutting_ranges() {
        let table = compile(vec![range(10, 19), range(20, 29)]).unwrap();
        assert_eq!(table.len(), 30);
        assert_eq!(table.bitmap().count_wide(), 20);
        assert!(!table.is_wide(9));
    }

    #[test]
    fn test_overlap_tolerated_by_default() {
        let table = compile(vec![range(0x100, 0x1FF), range(0x110, 0x120)]).unwrap();
        // The table still covers the widest range, not just the last one sorted
        assert_eq!(table.len(), 0x200);
        assert_eq!(table.bitmap().count_wide(), 0x100);

        // Two ranges nested in a larger one leave no real gap between them
        let table = compile(vec![range(0, 100), range(10, 20), range(50, 60)]).unwrap();
        assert_eq!(table.len(), 101);
        assert_eq!(table.bitmap().count_wide(), 101);
    }

    #[test]
    fn test_overlap_rejected() {
        let config = CompilerConfig::default().with_overlap_policy(OverlapPolicy::Reject);
        assert_eq!(
            compile_with_config(vec![range(0x100, 0x1FF), range(0x200, 0x210)], &config)
                .map(|table| table.len()),
            Ok(0x211)
        );
        assert_eq!(
            compile_with_config(
                vec![range(0x100, 0x1FF), range(0x150, 0x160), range(0x170, 0x180)],
                &config
            ),
            Err(WidthError::OverlappingRanges {
                first: range(0x100, 0x1FF),
                second: range(0x150, 0x160),
            })
        );
    }

    #[test]
    fn test_find_overlap_after_swallowed_range() {
        let set: WideRangeSet = [range(0, 100), range(10, 20), range(50, 60)]
            .into_iter()
            .collect();
        assert_eq!(set.find_overlap(), Some((range(0, 100), range(10, 20))));

        let set: WideRangeSet = [range(30, 40), range(0, 9), range(10, 29)]
            .into_iter()
            .collect();
        assert_eq!(set.find_overlap(), None);
    }


    #[test]
    fn test_verify_catches_set_gap_bit() {
        let set: WideRangeSet = [range(10, 20), range(30, 40)].into_iter().collect();
        let mut bitmap = build_bitmap(&set).unwrap();
        assert_eq!(verify(&bitmap, &set), Ok(()));

        bitmap.set(25);
        assert_eq!(
            verify(&bitmap, &set),
            Err(WidthError::VerificationFailed {
                code_point: 25,
                expected: false
            })
        );
    }

    #[test]
    fn test_verify_gap_edges_next_to_zero() {
        // Gap bounds are widened past the range ends before comparison
        let set: WideRangeSet = [range(0, 0), range(5, 7)].into_iter().collect();
        let bitmap = build_bitmap(&set).unwrap();
        assert_eq!(verify(&bitmap, &set), Ok(()));

        for code_point in [1, 4] {
            let mut corrupted = bitmap.clone();
            corrupted.set(code_point);
            assert_eq!(
                verify(&corrupted, &set),
                Err(WidthError::VerificationFailed {
                    code_point: code_point as u32,
                    expected: false
                })
            );
        }

        let mut corrupted = bitmap.clone();
        corrupted.clear(0);
        assert_eq!(
            verify(&corrupted, &set),
            Err(WidthError::VerificationFailed {
                code_point: 0,
                expected: true
            })
        );
    }

    #[test]
    fn test_verify_catches_bit_below_first_range() {
        let set: WideRangeSet = [range(10, 20)].into_iter().collect();
        let mut bitmap = build_bitmap(&set).unwrap();
        bitmap.set(0);
        assert_eq!(
            verify(&bitmap, &set),
            Err(WidthError::VerificationFailed {
                code_point: 0,
                expected: false
            })
        );
    }

    #[test]
    fn test_verify_catches_missing_range_bit() {
        let set: WideRangeSet = [range(10, 20), range(30, 40)].into_iter().collect();
        let mut bitmap = build_bitmap(&set).unwrap();
        bitmap.clear(35);
        assert_eq!(
            verify(&bitmap, &set),
            Err(WidthError::VerificationFailed {
                code_point: 35,
                expected: true
            })
        );
    }

    #[test]
    fn test_verify_catches_wrong_length() {
        let set: WideRangeSet = [range(10, 20)].into_iter().collect();
        let mut bitmap = WidthBitmap::new(30);
        bitmap.set_range(10, 20);
        assert_eq!(
            verify(&bitmap, &set),
            Err(WidthError::VerificationFailed {
                code_point: 20,
                expected: true
            })
        );
    }

    #[test]
    fn test_verify_rejects_reversed_bitmap() {
        // A bitmap reversed before verification must not pass
        let set: WideRangeSet = [range(2, 3)].into_iter().collect();
        let bitmap = build_bitmap(&set).unwrap();
        let reversed_bits: Vec<bool> = bitmap.iter().rev().collect();
        let mut reversed = WidthBitmap::new(bitmap.len());
        for (index, bit) in reversed_bits.into_iter().enumerate() {
            if bit {
                reversed.set(index);
            }
        }
        assert!(verify(&reversed, &set).is_err());
    }

    #[test]
    fn test_verify_empty_set() {
        assert_eq!(
            verify(&WidthBitmap::new(0), &WideRangeSet::default()),
            Err(WidthError::EmptyInput)
        );
    }

    #[test]
    fn test_ambiguous_config() {
        let config = CompilerConfig::default().with_ambiguous_wide(true);
        assert_eq!(config.wide_categories, CJK_WIDE_CATEGORIES);
        let config = config.with_ambiguous_wide(false);
        assert_eq!(config.wide_categories, DEFAULT_WIDE_CATEGORIES);
    }
}
