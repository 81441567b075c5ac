use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::Result;
use crate::records::{BarcodeRow, OrderRow};

/// Drops every row whose barcode value occurs more than once, the first occurrence included.
pub fn remove_barcode_dupes<D: Diagnostics + ?Sized>(
    barcodes: Vec<BarcodeRow>,
    diagnostics: &mut D,
) -> Result<Vec<BarcodeRow>> {
    let mut dupes: HashSet<String> = HashSet::new();
    {
        let mut unique: HashSet<&str> = HashSet::with_capacity(barcodes.len());
        for row in &barcodes {
            if !unique.insert(row.barcode.as_str()) {
                dupes.insert(row.barcode.clone());
            }
        }
    }

    if dupes.is_empty() {
        return Ok(barcodes);
    }

    let before = barcodes.len();
    let kept: Vec<BarcodeRow> = barcodes
        .into_iter()
        .filter(|row| !dupes.contains(&row.barcode))
        .collect();
    debug!(
        duplicated_values = dupes.len(),
        dropped_rows = before - kept.len(),
        "removed duplicate barcodes"
    );

    diagnostics.emit(Diagnostic::DuplicateBarcodes(dupes.into_iter().collect()))?;
    Ok(kept)
}

/// Order ids that still own at least one barcode. Unused barcodes are not attached to
/// any order, so the empty id never appears here.
pub fn order_ids_with_barcode(barcodes: &[BarcodeRow]) -> HashSet<&str> {
    barcodes
        .iter()
        .filter(|row| !row.is_unused())
        .map(|row| row.order_id.as_str())
        .collect()
}

/// Drops orders whose id has no barcode left.
pub fn remove_orders_without_barcodes<D: Diagnostics + ?Sized>(
    orders: Vec<OrderRow>,
    order_ids_with_barcode: &HashSet<&str>,
    diagnostics: &mut D,
) -> Result<Vec<OrderRow>> {
    let mut without_barcode: BTreeSet<String> = BTreeSet::new();
    let mut kept = Vec::with_capacity(orders.len());

    for row in orders {
        if order_ids_with_barcode.contains(row.order_id.as_str()) {
            kept.push(row);
        } else {
            without_barcode.insert(row.order_id);
        }
    }

    if !without_barcode.is_empty() {
        debug!(orphan_orders = without_barcode.len(), "removed orders without barcode");
        diagnostics.emit(Diagnostic::OrdersWithoutBarcode(
            without_barcode.into_iter().collect(),
        ))?;
    }

    Ok(kept)
}
