use serde::Deserialize;

/// Columns every orders file must carry.
pub const ORDER_FIELDS: [&str; 2] = ["customer_id", "order_id"];

/// Columns every barcodes file must carry.
pub const BARCODE_FIELDS: [&str; 2] = ["order_id", "barcode"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderRow {
    pub customer_id: String,
    pub order_id: String,
}

/// A barcode with an empty `order_id` has been issued but not assigned.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BarcodeRow {
    pub order_id: String,
    pub barcode: String,
}

impl BarcodeRow {
    pub fn is_unused(&self) -> bool {
        self.order_id.is_empty()
    }
}

/// `customer_id, order_id, barcode...`, one per order.
pub type OutputRow = Vec<String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerTickets {
    pub customer_id: String,
    pub amount_of_tickets: usize,
}

#[cfg(test)]
pub(crate) fn order(customer_id: &str, order_id: &str) -> OrderRow {
    OrderRow {
        customer_id: customer_id.to_string(),
        order_id: order_id.to_string(),
    }
}

#[cfg(test)]
pub(crate) fn barcode(order_id: &str, barcode: &str) -> BarcodeRow {
    BarcodeRow {
        order_id: order_id.to_string(),
        barcode: barcode.to_string(),
    }
}
