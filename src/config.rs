use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Which barcode set the unused-barcode count is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum UnusedFrom {
    /// Every barcode row as read from the input.
    PreDedup,
    /// Only barcodes that survived duplicate removal.
    #[default]
    PostDedup,
}

/// Process customers, orders and barcodes
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Orders csv file
    #[arg(long, env = "BARCODE_REPORT_ORDERS", default_value = "orders.csv")]
    pub orders: PathBuf,

    /// Barcodes csv file
    #[arg(long, env = "BARCODE_REPORT_BARCODES", default_value = "barcodes.csv")]
    pub barcodes: PathBuf,

    /// Output csv file
    #[arg(long, env = "BARCODE_REPORT_OUTPUT", default_value = "output.csv")]
    pub output: PathBuf,

    /// How many customers to rank
    #[arg(
        long,
        env = "BARCODE_REPORT_TOP",
        default_value_t = 5,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub top: u16,

    /// Barcode set the unused count is taken from
    #[arg(long, value_enum, default_value_t = UnusedFrom::PostDedup)]
    pub unused_from: UnusedFrom,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orders: PathBuf::from("orders.csv"),
            barcodes: PathBuf::from("barcodes.csv"),
            output: PathBuf::from("output.csv"),
            top: 5,
            unused_from: UnusedFrom::default(),
        }
    }
}
