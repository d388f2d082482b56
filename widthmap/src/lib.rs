//! widthmap - East Asian Width bitmap table generator
//!
//! Reads a Unicode `EastAsianWidth.txt` file, compiles its wide ranges into a
//! verified bitmap with `widthmap-core`, and renders the bitmap as source code
//! for whatever toolchain consumes it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use widthmap::{generate, CompilerConfig, OutputFormat, RenderConfig};
//!
//! fn example() -> widthmap::Result<()> {
//!     let compiler = CompilerConfig::default();
//!     let render = RenderConfig::with_format(OutputFormat::CppHeader).with_chunk_width(100);
//!     let header = generate("EastAsianWidth.txt", &compiler, &render)?;
//!     print!("{header}");
//!     Ok(())
//! }
//! ```
//!
//! ## Output formats
//!
//! - **cpp-header**: `constexpr std::bitset` literal, most significant bit first
//! - **cpp-extern-header** / **cpp-source**: declaration and definition pair for
//!   tables too large for `constexpr`
//! - **rust**: LSB-first `static` byte table with an `is_wide` lookup
//! - **json**: manifest with ranges and hex bytes (`serde` feature)

use std::path::Path;

// Re-export the core abstractions
pub use widthmap_core::{
    compile, compile_text, compile_with_config, verify, CodePointRange, CompilerConfig,
    OverlapPolicy, TableRenderer, VerifiedTable, WidthBitmap, WidthCategory, WidthError,
};

pub mod config;
pub mod error;
pub mod output;
pub mod render;
pub mod source;

pub use config::{parse_code_point, OutputFormat, RenderConfig};
pub use error::{Error, Result};
pub use output::{generate_to, write_artifact};
pub use render::render_table;
pub use source::{load_table, read_data_file};

/// Load a data file and render its verified table
///
/// Nothing is returned unless parsing, compilation and verification all
/// succeed, so a caller never sees a partial artifact.
pub fn generate<P: AsRef<Path>>(
    path: P,
    compiler: &CompilerConfig,
    render: &RenderConfig,
) -> Result<String> {
    let table = load_table(path, compiler)?;
    render_table(&table, render)
}
