//! Loading width data files from disk

use std::fs;
use std::path::Path;

use widthmap_core::{compile_text, CompilerConfig, VerifiedTable};

use crate::{Error, Result};

/// Read a data file fully into memory
pub fn read_data_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read, parse, compile and verify a data file
pub fn load_table<P: AsRef<Path>>(path: P, config: &CompilerConfig) -> Result<VerifiedTable> {
    let text = read_data_file(path)?;
    Ok(compile_text(&text, config)?)
}
