//! Output interface for verified width tables

use alloc::string::String;

use crate::VerifiedTable;

/// Renders a verified table into some textual artifact
///
/// Implementations own any representation-specific transform (bit order,
/// chunking, literal syntax). The table they receive has already passed
/// verification in its natural low-bit-first order.
pub trait TableRenderer {
    /// Write the artifact for `table` to `out`
    fn render<W: core::fmt::Write>(
        &self,
        table: &VerifiedTable,
        out: &mut W,
    ) -> core::fmt::Result;

    /// Render into a new string
    fn render_to_string(&self, table: &VerifiedTable) -> Result<String, core::fmt::Error> {
        let mut out = String::new();
        self.render(table, &mut out)?;
        Ok(out)
    }
}
