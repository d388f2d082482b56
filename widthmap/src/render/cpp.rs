//! C++ `std::bitset` renderers
//!
//! `std::bitset`'s string constructor reads its argument most-significant
//! bit first: the last character of the literal is bit 0. The bits are
//! therefore reversed here, once, on the already verified table, so the
//! first character of the literal is the highest code point.

use core::fmt::Write;

use widthmap_core::{TableRenderer, VerifiedTable};

use crate::RenderConfig;

const INDENT: &str = "    ";

/// Self-contained header with a `constexpr` table
#[derive(Debug, Clone, Copy)]
pub struct CppHeaderRenderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> CppHeaderRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }
}

impl TableRenderer for CppHeaderRenderer<'_> {
    fn render<W: Write>(&self, table: &VerifiedTable, out: &mut W) -> core::fmt::Result {
        writeln!(out, "#pragma once")?;
        writeln!(out)?;
        writeln!(out, "#include <bitset>")?;
        writeln!(out)?;
        writeln!(out, "namespace {}", self.config.namespace)?;
        writeln!(out, "{{")?;
        writeln!(
            out,
            "{INDENT}constexpr std::bitset<{}> {}(",
            table.len(),
            self.config.symbol
        )?;
        write_bitset_literal(out, table, self.config.chunk_width)?;
        writeln!(out, "{INDENT});")?;
        writeln!(out, "}}")
    }
}

/// Header declaring the table for compilers that reject a `constexpr` of this size
#[derive(Debug, Clone, Copy)]
pub struct CppExternHeaderRenderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> CppExternHeaderRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }
}

impl TableRenderer for CppExternHeaderRenderer<'_> {
    fn render<W: Write>(&self, table: &VerifiedTable, out: &mut W) -> core::fmt::Result {
        writeln!(out, "#pragma once")?;
        writeln!(out)?;
        writeln!(out, "#include <bitset>")?;
        writeln!(out)?;
        writeln!(out, "namespace {}", self.config.namespace)?;
        writeln!(out, "{{")?;
        writeln!(
            out,
            "{INDENT}extern const std::bitset<{}> {};",
            table.len(),
            self.config.symbol
        )?;
        writeln!(out, "}}")
    }
}

/// Source file defining the table declared by [`CppExternHeaderRenderer`]
#[derive(Debug, Clone, Copy)]
pub struct CppSourceRenderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> CppSourceRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }
}

impl TableRenderer for CppSourceRenderer<'_> {
    fn render<W: Write>(&self, table: &VerifiedTable, out: &mut W) -> core::fmt::Result {
        writeln!(out, "#include \"{}\"", self.config.header_name)?;
        writeln!(out)?;
        writeln!(out, "namespace {}", self.config.namespace)?;
        writeln!(out, "{{")?;
        writeln!(
            out,
            "{INDENT}const std::bitset<{}> {}(",
            table.len(),
            self.config.symbol
        )?;
        write_bitset_literal(out, table, self.config.chunk_width)?;
        writeln!(out, "{INDENT});")?;
        writeln!(out, "}}")
    }
}

/// Write the reversed bits as adjacent string literals of `chunk_width` characters
fn write_bitset_literal<W: Write>(
    out: &mut W,
    table: &VerifiedTable,
    chunk_width: usize,
) -> core::fmt::Result {
    let chunk_width = chunk_width.max(1);
    let total = table.len();

    for (position, bit) in table.bitmap().iter().rev().enumerate() {
        if position % chunk_width == 0 {
            write!(out, "{INDENT}{INDENT}\"")?;
        }
        out.write_char(if bit { '1' } else { '0' })?;
        if (position + 1) % chunk_width == 0 || position + 1 == total {
            writeln!(out, "\"")?;
        }
    }

    Ok(())
}
