//! JSON manifest renderer

use core::fmt::Write;

use serde::Serialize;
use widthmap_core::{CodePointRange, TableRenderer, VerifiedTable};

use crate::RenderConfig;

/// Serialized form of a verified table
#[derive(Debug, Serialize)]
pub struct TableManifest<'a> {
    pub symbol: &'a str,
    /// Table length in bits
    pub len: usize,
    /// Number of wide code points
    pub wide_count: usize,
    pub bit_order: &'static str,
    pub ranges: &'a [CodePointRange],
    /// LSB-first table bytes, hex encoded
    pub bytes: String,
}

impl<'a> TableManifest<'a> {
    pub fn new(table: &'a VerifiedTable, symbol: &'a str) -> Self {
        Self {
            symbol,
            len: table.len(),
            wide_count: table.bitmap().count_wide(),
            bit_order: "lsb-first",
            ranges: table.ranges().ranges(),
            bytes: table
                .bitmap()
                .as_bytes()
                .iter()
                .map(|byte| format!("{byte:02x}"))
                .collect(),
        }
    }
}

/// Pretty-printed JSON manifest
#[derive(Debug, Clone, Copy)]
pub struct JsonRenderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> JsonRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }
}

impl TableRenderer for JsonRenderer<'_> {
    fn render<W: Write>(&self, table: &VerifiedTable, out: &mut W) -> core::fmt::Result {
        let manifest = TableManifest::new(table, &self.config.symbol);
        let json = serde_json::to_string_pretty(&manifest).map_err(|_| core::fmt::Error)?;
        writeln!(out, "{json}")
    }
}
