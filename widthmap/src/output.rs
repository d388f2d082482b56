//! Writing rendered artifacts

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::{
    load_table, render_table, CompilerConfig, Error, RenderConfig, Result, VerifiedTable,
};

/// Write an artifact to `output`, or to stdout when no path is given
pub fn write_artifact(output: Option<&Path>, artifact: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, artifact).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(artifact.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(Error::Stdout)
        }
    }
}

/// Load, render and write a table in one step
///
/// The output is only touched once the table has been verified and
/// rendered, so a failed run leaves no file behind.
pub fn generate_to<P: AsRef<Path>>(
    path: P,
    compiler: &CompilerConfig,
    render: &RenderConfig,
    output: Option<&Path>,
) -> Result<VerifiedTable> {
    let table = load_table(path, compiler)?;
    let artifact = render_table(&table, render)?;
    write_artifact(output, &artifact)?;
    Ok(table)
}
