use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::records::OutputRow;

fn write_rows<W: io::Write>(writer: W, rows: &[OutputRow]) -> csv::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_writer(writer);

    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes rows of varying width as headerless comma-separated lines.
pub fn write_csv(path: &Path, rows: &[OutputRow]) -> Result<()> {
    let write_error = |source| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|err| write_error(csv::Error::from(err)))?;
    }

    let file = std::fs::File::create(path).map_err(|err| write_error(csv::Error::from(err)))?;
    write_rows(io::BufWriter::new(file), rows).map_err(write_error)?;

    debug!(path = %path.display(), rows = rows.len(), "wrote output");
    Ok(())
}
