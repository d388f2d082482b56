//! East Asian Width categories and the wide-category mapping
//!
//! Tags are resolved through [`CATEGORY_TAGS`] rather than inline string
//! comparisons, and the set of categories that count as two columns wide is
//! a plain slice, so adding a wide-equivalent category is a one-line change.

/// Width category attached to a range in `EastAsianWidth.txt`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WidthCategory {
    /// Neutral (`N`)
    Neutral,
    /// Ambiguous (`A`)
    Ambiguous,
    /// Halfwidth (`H`)
    Halfwidth,
    /// Narrow (`Na`)
    Narrow,
    /// Wide (`W`)
    Wide,
    /// Fullwidth (`F`)
    Fullwidth,
}

/// Tag spellings used by the data file
pub const CATEGORY_TAGS: [(&str, WidthCategory); 6] = [
    ("N", WidthCategory::Neutral),
    ("A", WidthCategory::Ambiguous),
    ("H", WidthCategory::Halfwidth),
    ("Na", WidthCategory::Narrow),
    ("W", WidthCategory::Wide),
    ("F", WidthCategory::Fullwidth),
];

/// Categories that collapse to "wide" by default
pub const DEFAULT_WIDE_CATEGORIES: &[WidthCategory] =
    &[WidthCategory::Wide, WidthCategory::Fullwidth];

/// Wide categories for CJK contexts, where ambiguous characters take two cells
pub const CJK_WIDE_CATEGORIES: &[WidthCategory] = &[
    WidthCategory::Wide,
    WidthCategory::Fullwidth,
    WidthCategory::Ambiguous,
];

impl WidthCategory {
    /// Look up a category by its exact tag; unknown tags yield `None`
    pub fn from_tag(tag: &str) -> Option<Self> {
        CATEGORY_TAGS
            .iter()
            .find(|(name, _)| *name == tag)
            .map(|(_, category)| *category)
    }
}

impl core::fmt::Display for WidthCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            WidthCategory::Neutral => write!(f, "Neutral"),
            WidthCategory::Ambiguous => write!(f, "Ambiguous"),
            WidthCategory::Halfwidth => write!(f, "Halfwidth"),
            WidthCategory::Narrow => write!(f, "Narrow"),
            WidthCategory::Wide => write!(f, "Wide"),
            WidthCategory::Fullwidth => write!(f, "Fullwidth"),
        }
    }
}

/// Display width a category collapses to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayWidth {
    /// Occupies two terminal columns
    IsWide,
    /// Occupies one terminal column
    IsNarrow,
}

/// The set of categories treated as [`DisplayWidth::IsWide`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WideSet<'a> {
    categories: &'a [WidthCategory],
}

impl<'a> WideSet<'a> {
    /// Build a set from an explicit category list
    pub const fn new(categories: &'a [WidthCategory]) -> Self {
        Self { categories }
    }

    /// Collapse a category to its display width
    pub fn classify(&self, category: WidthCategory) -> DisplayWidth {
        if self.categories.contains(&category) {
            DisplayWidth::IsWide
        } else {
            DisplayWidth::IsNarrow
        }
    }

    /// Resolve a raw tag; unknown tags are narrow
    pub fn classify_tag(&self, tag: &str) -> DisplayWidth {
        WidthCategory::from_tag(tag)
            .map(|category| self.classify(category))
            .unwrap_or(DisplayWidth::IsNarrow)
    }
}

impl Default for WideSet<'static> {
    fn default() -> Self {
        Self::new(DEFAULT_WIDE_CATEGORIES)
    }
}
