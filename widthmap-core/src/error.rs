//! Error types for width table compilation

use alloc::string::String;

use crate::CodePointRange;

/// Errors that can occur while parsing width data or compiling the bitmap
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidthError {
    /// A code point field is not valid hexadecimal or not a valid range
    MalformedRange {
        /// 1-based line number in the data file (0 when parsed standalone)
        line: usize,
        /// The offending field text
        text: String,
    },
    /// A record has a code point field but no category field
    MissingCategory {
        /// 1-based line number in the data file
        line: usize,
    },
    /// No range carried a wide category
    EmptyInput,
    /// The constructed bitmap disagrees with the ranges that built it
    VerificationFailed {
        /// First code point found with the wrong bit
        code_point: u32,
        /// The bit value the ranges require
        expected: bool,
    },
    /// Two ranges share a code point and the compiler was told to reject overlap
    OverlappingRanges {
        first: CodePointRange,
        second: CodePointRange,
    },
}

impl core::fmt::Display for WidthError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            WidthError::MalformedRange { line, text } => {
                write!(f, "malformed code point range {text:?} on line {line}")
            }
            WidthError::MissingCategory { line } => {
                write!(f, "record on line {line} has no category field")
            }
            WidthError::EmptyInput => write!(f, "no wide ranges found in input"),
            WidthError::VerificationFailed {
                code_point,
                expected,
            } => write!(
                f,
                "bitmap verification failed at U+{code_point:04X}: expected {}",
                if *expected { "wide" } else { "narrow" }
            ),
            WidthError::OverlappingRanges { first, second } => {
                write!(f, "ranges {first} and {second} overlap")
            }
        }
    }
}

/// Result type for width table operations
pub type Result<T> = core::result::Result<T, WidthError>;
