//! Error types for table generation with I/O

use std::path::PathBuf;

use widthmap_core::WidthError;

/// Errors that can occur while reading, compiling, or writing a table
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Parsing or compiling the width data failed
    #[error("{0}")]
    Width(WidthError),
    /// The data file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The artifact file could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The artifact could not be written to stdout
    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] std::io::Error),
    /// A renderer failed to format the table
    #[error("failed to render table")]
    Render(#[from] std::fmt::Error),
}

impl From<WidthError> for Error {
    fn from(err: WidthError) -> Self {
        Error::Width(err)
    }
}

/// Result type for widthmap operations
pub type Result<T> = std::result::Result<T, Error>;
