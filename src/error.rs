use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to parse csv file {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Unable to parse csv file {}: missing field `{field}`", .path.display())]
    MissingField { path: PathBuf, field: &'static str },
    #[error("Unable to write output file {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Unable to write report: {0}")]
    Report(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
