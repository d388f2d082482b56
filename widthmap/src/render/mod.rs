//! Renderers for verified width tables
//!
//! Each renderer implements [`TableRenderer`] from the core crate. Bit order
//! transforms live here and nowhere else.

pub mod cpp;
#[cfg(feature = "serde")]
pub mod json;
pub mod rust;

pub use cpp::{CppExternHeaderRenderer, CppHeaderRenderer, CppSourceRenderer};
#[cfg(feature = "serde")]
pub use json::{JsonRenderer, TableManifest};
pub use rust::RustRenderer;

use widthmap_core::{TableRenderer, VerifiedTable};

use crate::{OutputFormat, RenderConfig, Result};

/// Render a table in the configured format
pub fn render_table(table: &VerifiedTable, config: &RenderConfig) -> Result<String> {
    let rendered = match config.format {
        OutputFormat::CppHeader => CppHeaderRenderer::new(config).render_to_string(table)?,
        OutputFormat::CppExternHeader => {
            CppExternHeaderRenderer::new(config).render_to_string(table)?
        }
        OutputFormat::CppSource => CppSourceRenderer::new(config).render_to_string(table)?,
        OutputFormat::Rust => RustRenderer::new(config).render_to_string(table)?,
        #[cfg(feature = "serde")]
        OutputFormat::Json => JsonRenderer::new(config).render_to_string(table)?,
    };
    Ok(rendered)
}
