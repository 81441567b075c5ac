use indexmap::IndexMap;

use crate::records::{BarcodeRow, OrderRow};

/// Multi-map that remembers the order in which keys and values first arrived.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GroupIndex {
    groups: IndexMap<String, Vec<String>>,
}

impl GroupIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: &str) {
        match self.groups.get_mut(key) {
            Some(values) => values.push(value.to_string()),
            None => {
                self.groups.insert(key.to_string(), vec![value.to_string()]);
            }
        }
    }

    /// Values grouped under `key`; empty when the key was never pushed.
    pub fn get(&self, key: &str) -> &[String] {
        self.groups.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// customer_id -> [order_id, ...]
pub fn customer_orders(orders: &[OrderRow]) -> GroupIndex {
    let mut index = GroupIndex::new();
    for row in orders {
        index.push(&row.customer_id, &row.order_id);
    }
    index
}

/// order_id -> [barcode, ...]. Unused barcodes belong to no order and are left out.
pub fn order_barcodes(barcodes: &[BarcodeRow]) -> GroupIndex {
    let mut index = GroupIndex::new();
    for row in barcodes.iter().filter(|row| !row.is_unused()) {
        index.push(&row.order_id, &row.barcode);
    }
    index
}
