//! Simulated products endpoint: fixed latency, fixed payload

use chrono::NaiveDate;
use contracts::domain::a002_product::{Product, ProductId};
use contracts::enums::EntityStatus;
use gloo_timers::future::TimeoutFuture;
use uuid::Uuid;

const LATENCY_MS: u32 = 1000;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

#[allow(clippy::too_many_arguments)]
fn product(
    seed: u128,
    name: &str,
    description: &str,
    price: f64,
    category: &str,
    stock: u32,
    status: EntityStatus,
    created: NaiveDate,
    updated: NaiveDate,
) -> Product {
    Product {
        id: ProductId::new(Uuid::from_u128(seed)),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        stock,
        status,
        created_at: created,
        updated_at: updated,
    }
}

pub async fn fetch_products() -> Result<Vec<Product>, String> {
    TimeoutFuture::new(LATENCY_MS).await;

    Ok(vec![
        product(
            1,
            "Wireless Headphones",
            "High-quality wireless headphones with noise cancellation",
            199.99,
            "Electronics",
            25,
            EntityStatus::Active,
            date(2024, 1, 15),
            date(2024, 1, 20),
        ),
        product(
            2,
            "Laptop Stand",
            "Adjustable aluminum laptop stand for better ergonomics",
            49.99,
            "Electronics",
            8,
            EntityStatus::Active,
            date(2024, 1, 10),
            date(2024, 1, 18),
        ),
        product(
            3,
            "Coffee Mug",
            "Ceramic coffee mug with company logo",
            12.99,
            "Home",
            0,
            EntityStatus::Inactive,
            date(2024, 1, 5),
            date(2024, 1, 15),
        ),
        product(
            4,
            "Running Shoes",
            "Comfortable running shoes for all terrains",
            89.99,
            "Sports",
            15,
            EntityStatus::Active,
            date(2024, 1, 12),
            date(2024, 1, 19),
        ),
        product(
            5,
            "Programming Book",
            "Complete guide to modern web development",
            39.99,
            "Books",
            3,
            EntityStatus::Active,
            date(2024, 1, 8),
            date(2024, 1, 17),
        ),
    ])
}
