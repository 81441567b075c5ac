use std::io::{self, Write};

use crate::index::GroupIndex;
use crate::ranking::Ranking;
use crate::records::{BarcodeRow, CustomerTickets};

/// Number of barcodes across all of a customer's orders.
pub fn customer_ticket_amount(
    customer_id: &str,
    customer_orders: &GroupIndex,
    order_barcodes: &GroupIndex,
) -> usize {
    customer_orders
        .get(customer_id)
        .iter()
        .map(|order_id| order_barcodes.get(order_id).len())
        .sum()
}

/// Top `length` customers by ticket amount, highest first.
pub fn customer_ranking(
    customer_orders: &GroupIndex,
    order_barcodes: &GroupIndex,
    length: usize,
) -> Vec<CustomerTickets> {
    let mut ranking = Ranking::new(length);
    for customer_id in customer_orders.keys() {
        let amount = customer_ticket_amount(customer_id, customer_orders, order_barcodes);
        ranking.add(customer_id, amount);
    }

    ranking
        .into_vec()
        .into_iter()
        .map(|(customer_id, amount_of_tickets)| CustomerTickets {
            customer_id: customer_id.to_string(),
            amount_of_tickets,
        })
        .collect()
}

pub fn unused_barcode_amount(barcodes: &[BarcodeRow]) -> usize {
    barcodes.iter().filter(|row| row.is_unused()).count()
}

pub fn write_customer_ranking<W: Write>(out: &mut W, ranking: &[CustomerTickets]) -> io::Result<()> {
    writeln!(out, "Top {} Customers:", ranking.len())?;
    writeln!(out, "customer_id,amount_of_tickets")?;
    for row in ranking {
        writeln!(out, "{},{}", row.customer_id, row.amount_of_tickets)?;
    }
    writeln!(out)
}

pub fn write_unused_barcode_amount<W: Write>(out: &mut W, amount: usize) -> io::Result<()> {
    writeln!(out, "Amount of unused barcodes: {amount}\n")
}
