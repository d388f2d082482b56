//! Rust byte-table renderer
//!
//! Emits the bitmap in its natural LSB-first byte order; no reversal.

use core::fmt::Write;

use widthmap_core::{TableRenderer, VerifiedTable};

use crate::RenderConfig;

const BYTES_PER_LINE: usize = 12;

/// Rust module source with a `static` byte table and lookup function
#[derive(Debug, Clone, Copy)]
pub struct RustRenderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> RustRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }
}

impl TableRenderer for RustRenderer<'_> {
    fn render<W: Write>(&self, table: &VerifiedTable, out: &mut W) -> core::fmt::Result {
        let symbol = &self.config.symbol;
        let bytes = table.bitmap().as_bytes();

        writeln!(out, "// Generated by widthmap. Do not edit.")?;
        writeln!(out)?;
        writeln!(out, "/// Number of code points covered by [`{symbol}`]")?;
        writeln!(out, "pub const {symbol}_LEN: usize = {};", table.len())?;
        writeln!(out)?;
        writeln!(
            out,
            "/// Wide code points, LSB-first: bit `i` is in byte `i / 8` at offset `i % 8`"
        )?;
        writeln!(out, "pub static {symbol}: [u8; {}] = [", bytes.len())?;
        for line in bytes.chunks(BYTES_PER_LINE) {
            write!(out, "   ")?;
            for byte in line {
                write!(out, " 0x{byte:02x},")?;
            }
            writeln!(out)?;
        }
        writeln!(out, "];")?;
        writeln!(out)?;
        writeln!(
            out,
            "/// Whether `code_point` occupies two terminal columns; anything past the table is narrow"
        )?;
        writeln!(out, "pub fn is_wide(code_point: u32) -> bool {{")?;
        writeln!(out, "    let index = code_point as usize;")?;
        writeln!(
            out,
            "    index < {symbol}_LEN && {symbol}[index / 8] & (1 << (index % 8)) != 0"
        )?;
        writeln!(out, "}}")
    }
}
