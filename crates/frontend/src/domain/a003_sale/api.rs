//! Simulated sales endpoint: fixed latency, fixed payload.
//! Sales are read-only; the report screen is their only consumer.

use chrono::NaiveDate;
use contracts::domain::a003_sale::{SaleId, SaleRecord};
use gloo_timers::future::TimeoutFuture;
use uuid::Uuid;

const LATENCY_MS: u32 = 1000;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

fn sale(
    seed: u128,
    product_name: &str,
    quantity: u32,
    price: f64,
    total: f64,
    customer_name: &str,
    day: NaiveDate,
) -> SaleRecord {
    SaleRecord {
        id: SaleId::new(Uuid::from_u128(seed)),
        product_name: product_name.to_string(),
        quantity,
        price,
        total,
        customer_name: customer_name.to_string(),
        date: day,
    }
}

pub async fn fetch_sales() -> Result<Vec<SaleRecord>, String> {
    TimeoutFuture::new(LATENCY_MS).await;

    Ok(vec![
        sale(
            1,
            "Wireless Headphones",
            2,
            199.99,
            399.98,
            "John Doe",
            date(2024, 1, 20),
        ),
        sale(
            2,
            "Laptop Stand",
            1,
            49.99,
            49.99,
            "Jane Smith",
            date(2024, 1, 19),
        ),
        sale(
            3,
            "Running Shoes",
            3,
            89.99,
            269.97,
            "Bob Johnson",
            date(2024, 1, 18),
        ),
        sale(
            4,
            "Programming Book",
            1,
            39.99,
            39.99,
            "Alice Brown",
            date(2024, 1, 17),
        ),
    ])
}
