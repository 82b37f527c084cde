#![allow(dead_code)]

use rand::Rng;
use receipt_processor::application::service::ReceiptService;
use receipt_processor::domain::receipt::{ItemSubmission, ReceiptSubmission};
use receipt_processor::infrastructure::in_memory::InMemoryReceiptStore;
use serde_json::{Value, json};
use std::sync::Arc;

pub fn service() -> Arc<ReceiptService> {
    Arc::new(ReceiptService::new(Box::new(InMemoryReceiptStore::new())))
}

pub fn item(description: &str, price: &str) -> ItemSubmission {
    ItemSubmission {
        short_description: description.to_string(),
        price: price.to_string(),
    }
}

pub fn submission(
    retailer: &str,
    date: &str,
    time: &str,
    items: Vec<ItemSubmission>,
    total: &str,
) -> ReceiptSubmission {
    ReceiptSubmission {
        retailer: retailer.to_string(),
        purchase_date: date.to_string(),
        purchase_time: time.to_string(),
        items,
        total: total.to_string(),
    }
}

/// Scores 28 points.
pub fn target_receipt() -> ReceiptSubmission {
    submission(
        "Target",
        "2022-01-01",
        "13:01",
        vec![
            item("Mountain Dew 12PK", "6.49"),
            item("Emils Cheese Pizza", "12.25"),
            item("Knorr Creamy Chicken", "1.26"),
            item("Doritos Nacho Cheese", "3.35"),
            item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
        "35.35",
    )
}

/// Scores 109 points.
pub fn corner_market_receipt() -> ReceiptSubmission {
    submission(
        "M&M Corner Market",
        "2022-03-20",
        "14:33",
        vec![item("Gatorade", "2.25"); 4],
        "9.00",
    )
}

pub fn to_json(submission: &ReceiptSubmission) -> Value {
    json!(submission)
}

/// A valid receipt with random items, prices in whole cents and a matching total.
pub fn random_receipt(rng: &mut impl Rng) -> ReceiptSubmission {
    const DESCRIPTIONS: [&str; 7] = [
        "Gum",
        "Bread",
        "Milk 2%",
        "Eggs",
        "  Dozen Roses ",
        "Tea",
        "Crème",
    ];
    const RETAILERS: [&str; 4] = ["Target", "M&M Corner Market", "Walgreens", "7-Eleven"];

    let count = rng.gen_range(1..=8);
    let cents: Vec<u64> = (0..count).map(|_| rng.gen_range(0..10_000)).collect();
    let items = cents
        .iter()
        .map(|c| {
            let description = DESCRIPTIONS[rng.gen_range(0..DESCRIPTIONS.len())];
            item(description, &format_cents(*c))
        })
        .collect();

    submission(
        RETAILERS[rng.gen_range(0..RETAILERS.len())],
        &format!("2023-{:02}-{:02}", rng.gen_range(1..=12), rng.gen_range(1..=28)),
        &format!("{:02}:{:02}", rng.gen_range(0..24), rng.gen_range(0..60)),
        items,
        &format_cents(cents.iter().sum()),
    )
}

pub fn format_cents(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}
