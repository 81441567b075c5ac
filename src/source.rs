use std::fs::File;
use std::io;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Error, Result};

/// Outcome of reading one tabular source.
enum Parsed<T> {
    Rows(Vec<T>),
    MissingField(&'static str),
}

fn read_rows<T, R>(reader: R, required: &[&'static str]) -> csv::Result<Parsed<T>>
where
    T: DeserializeOwned,
    R: io::Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if let Some(field) = required
        .iter()
        .find(|field| !headers.iter().any(|header| header == **field))
    {
        return Ok(Parsed::MissingField(*field));
    }

    let rows = reader.deserialize().collect::<csv::Result<Vec<T>>>()?;
    Ok(Parsed::Rows(rows))
}

/// Reads every row of a header-named CSV file into memory.
pub fn read_csv<T: DeserializeOwned>(path: &Path, required: &[&'static str]) -> Result<Vec<T>> {
    let read_error = |source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|err| read_error(csv::Error::from(err)))?;
    match read_rows(file, required).map_err(read_error)? {
        Parsed::Rows(rows) => {
            debug!(path = %path.display(), rows = rows.len(), "read csv");
            Ok(rows)
        }
        Parsed::MissingField(field) => Err(Error::MissingField {
            path: path.to_path_buf(),
            field,
        }),
    }
}
