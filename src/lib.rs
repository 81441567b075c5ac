//! Reconciles an orders file with a barcodes file: drops duplicate barcodes and orders
//! left without one, writes each customer's orders with their barcodes, and reports the
//! customers holding the most tickets along with the number of unused barcodes.

pub mod assemble;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod index;
pub mod pipeline;
pub mod ranking;
pub mod records;
pub mod report;
pub mod sanitize;
pub mod sink;
pub mod source;

pub use config::{Config, UnusedFrom};
pub use diagnostics::{Diagnostic, Diagnostics, WriterDiagnostics};
pub use error::{Error, Result};
pub use pipeline::{run, RunStats};
pub use ranking::Ranking;
