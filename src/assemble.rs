use crate::index::GroupIndex;
use crate::records::OutputRow;

/// Joins the two indexes into one row per order: customer, order, then its barcodes.
pub fn output_rows(customer_orders: &GroupIndex, order_barcodes: &GroupIndex) -> Vec<OutputRow> {
    let mut rows = Vec::new();
    for (customer_id, order_ids) in customer_orders.iter() {
        for order_id in order_ids {
            let barcodes = order_barcodes.get(order_id);
            let mut row = Vec::with_capacity(2 + barcodes.len());
            row.push(customer_id.to_string());
            row.push(order_id.clone());
            row.extend(barcodes.iter().cloned());
            rows.push(row);
        }
    }
    rows
}
