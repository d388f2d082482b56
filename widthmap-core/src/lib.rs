#![no_std]

//! widthmap core - East Asian Width range-to-bitmap compiler
//!
//! This crate turns `EastAsianWidth.txt` records into a verified bitmap
//! where bit `i` is set iff code point `i` occupies two terminal columns.
//! It performs no I/O: callers supply the file text and consume a
//! [`VerifiedTable`] through a [`TableRenderer`].

extern crate alloc;

pub mod bitmap;
pub mod category;
pub mod compiler;
pub mod error;
pub mod parser;
pub mod range;
pub mod traits;

pub use bitmap::*;
pub use category::*;
pub use compiler::*;
pub use error::*;
pub use parser::*;
pub use range::*;
pub use traits::*;

/// Parse a data file and compile its wide ranges in one step
pub fn compile_text(text: &str, config: &CompilerConfig) -> Result<VerifiedTable> {
    let ranges = parse_records(text, &config.wide_set())?;
    compile_with_config(ranges, config)
}
