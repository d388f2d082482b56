//! Output configuration for rendered tables

/// Artifact format produced by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Self-contained C++ header with a `constexpr std::bitset`
    #[default]
    CppHeader,
    /// C++ header declaring an `extern const std::bitset`
    CppExternHeader,
    /// C++ source defining the table declared by the extern header
    CppSource,
    /// Rust module with a byte table and lookup function
    Rust,
    /// JSON manifest with ranges and hex-encoded bytes
    #[cfg(feature = "serde")]
    Json,
}

/// Configuration for rendering a verified table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Artifact format
    pub format: OutputFormat,
    /// Characters per string segment in C++ bitset literals
    pub chunk_width: usize,
    /// C++ namespace wrapping the table
    pub namespace: String,
    /// Name of the table symbol
    pub symbol: String,
    /// Header included by the C++ source output
    pub header_name: String,
}

impl RenderConfig {
    /// Default characters per literal segment
    pub const DEFAULT_CHUNK_WIDTH: usize = 100;

    /// Create config for a given output format
    pub fn with_format(format: OutputFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// Set the literal segment width (at least 1)
    pub fn with_chunk_width(mut self, chunk_width: usize) -> Self {
        self.chunk_width = chunk_width.max(1);
        self
    }

    /// Set the C++ namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the table symbol name
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// Set the header included by C++ source output
    pub fn with_header_name(mut self, header_name: impl Into<String>) -> Self {
        self.header_name = header_name.into();
        self
    }
}

/// Parse a hex code point, optionally prefixed with `U+`, `u+` or `0x`
///
/// Used as a clap value parser, so errors are plain strings.
pub fn parse_code_point(s: &str) -> Result<u32, String> {
    let digits = s
        .strip_prefix("U+")
        .or_else(|| s.strip_prefix("u+"))
        .or_else(|| s.strip_prefix("0x"))
        .unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!("invalid code point {s:?}: expected hex digits"));
    }
    u32::from_str_radix(digits, 16).map_err(|e| format!("invalid code point {s:?}: {e}"))
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::CppHeader,
            chunk_width: Self::DEFAULT_CHUNK_WIDTH,
            namespace: "east_asian_width".to_string(),
            symbol: "TABLE".to_string(),
            header_name: "east_asian_width.hpp".to_string(),
        }
    }
}
