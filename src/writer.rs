//! Bundle serialization and atomic output
//!
//! Each output file is owned by exactly one worker, so there is no write
//! contention; atomicity is per file. The bundle is serialized to a
//! temporary file in the output directory and renamed over the target, so a
//! failed serialization never leaves a truncated output behind. An existing
//! file of the same name is overwritten.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, TransformError};
use crate::model::Bundle;

/// Serialize `bundle` and write it to `<output_dir>/<file_name>` atomically.
///
/// Returns the path of the written file.
pub fn write_bundle(bundle: &Bundle, output_dir: &Path, file_name: &str) -> Result<PathBuf> {
    let target = output_dir.join(file_name);
    let tmp = tempfile::NamedTempFile::new_in(output_dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file());
        serde_json::to_writer(&mut writer, bundle)?;
        writer.flush()?;
    }
    tmp.persist(&target)
        .map_err(|e| TransformError::Io(e.error))?;
    Ok(target)
}
