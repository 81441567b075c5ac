use std::io::Write;

use tracing::info;

use crate::assemble::output_rows;
use crate::config::{Config, UnusedFrom};
use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::index::{customer_orders, order_barcodes};
use crate::records::{BarcodeRow, OrderRow, BARCODE_FIELDS, ORDER_FIELDS};
use crate::report::{
    customer_ranking, unused_barcode_amount, write_customer_ranking, write_unused_barcode_amount,
};
use crate::sanitize::{order_ids_with_barcode, remove_barcode_dupes, remove_orders_without_barcodes};
use crate::sink::write_csv;
use crate::source::read_csv;

/// Summary of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub barcode_rows: usize,
    pub order_rows: usize,
    pub kept_barcode_rows: usize,
    pub kept_order_rows: usize,
    pub output_rows: usize,
    pub unused_barcodes: usize,
}

/// Writes the output file, then prints the customer ranking and unused barcode count to `out`.
pub fn run<W, D>(config: &Config, out: &mut W, diagnostics: &mut D) -> Result<RunStats>
where
    W: Write,
    D: Diagnostics + ?Sized,
{
    let barcodes: Vec<BarcodeRow> = read_csv(&config.barcodes, &BARCODE_FIELDS)?;
    let orders: Vec<OrderRow> = read_csv(&config.orders, &ORDER_FIELDS)?;
    let (barcode_rows, order_rows) = (barcodes.len(), orders.len());
    info!(barcode_rows, order_rows, "read input");

    let unused_before_dedup = unused_barcode_amount(&barcodes);

    let barcodes = remove_barcode_dupes(barcodes, diagnostics)?;
    let orders = {
        let with_barcode = order_ids_with_barcode(&barcodes);
        remove_orders_without_barcodes(orders, &with_barcode, diagnostics)?
    };

    let order_index = order_barcodes(&barcodes);
    let customer_index = customer_orders(&orders);
    info!(
        kept_barcode_rows = barcodes.len(),
        kept_order_rows = orders.len(),
        customers = customer_index.len(),
        "indexed input"
    );

    let output = output_rows(&customer_index, &order_index);
    write_csv(&config.output, &output)?;
    info!(rows = output.len(), path = %config.output.display(), "wrote output");

    let ranking = customer_ranking(&customer_index, &order_index, usize::from(config.top));
    write_customer_ranking(out, &ranking)?;

    let unused_barcodes = match config.unused_from {
        UnusedFrom::PreDedup => unused_before_dedup,
        UnusedFrom::PostDedup => unused_barcode_amount(&barcodes),
    };
    write_unused_barcode_amount(out, unused_barcodes)?;
    out.flush()?;

    Ok(RunStats {
        barcode_rows,
        order_rows,
        kept_barcode_rows: barcodes.len(),
        kept_order_rows: orders.len(),
        output_rows: output.len(),
        unused_barcodes,
    })
}
