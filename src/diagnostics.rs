use std::fmt;
use std::io::{self, Write};

/// Data-quality findings. They are recovered from by exclusion and never abort a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Barcode values seen on more than one row, in no particular order.
    DuplicateBarcodes(Vec<String>),
    /// Order ids left without any barcode, sorted.
    OrdersWithoutBarcode(Vec<String>),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DuplicateBarcodes(barcodes) => write!(
                f,
                "Ignoring orders for duplicate barcodes: {}.",
                barcodes.join(", ")
            ),
            Diagnostic::OrdersWithoutBarcode(order_ids) => write!(
                f,
                "Ignoring orders without barcode: {}.",
                order_ids.join(", ")
            ),
        }
    }
}

pub trait Diagnostics {
    fn emit(&mut self, diagnostic: Diagnostic) -> io::Result<()>;
}

/// Collects diagnostics in memory.
impl Diagnostics for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) -> io::Result<()> {
        self.push(diagnostic);
        Ok(())
    }
}

/// Writes each diagnostic as its own paragraph, usually to stderr.
pub struct WriterDiagnostics<W> {
    writer: W,
}

impl<W: Write> WriterDiagnostics<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl WriterDiagnostics<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> Diagnostics for WriterDiagnostics<W> {
    fn emit(&mut self, diagnostic: Diagnostic) -> io::Result<()> {
        writeln!(self.writer, "{diagnostic}\n")?;
        self.writer.flush()
    }
}
