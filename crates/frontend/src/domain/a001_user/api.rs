//! Simulated users endpoint: fixed latency, fixed payloads.
//! There is no real backend behind this module; the write calls
//! only model the latency and the success path.

use chrono::NaiveDate;
use contracts::domain::a001_user::{User, UserDto, UserId};
use contracts::enums::{EntityStatus, UserRole};
use gloo_timers::future::TimeoutFuture;
use uuid::Uuid;

use crate::shared::date_utils::today;

const LATENCY_MS: u32 = 1000;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

fn user(
    seed: u128,
    name: &str,
    email: &str,
    role: UserRole,
    status: EntityStatus,
    created: NaiveDate,
    last_login: NaiveDate,
) -> User {
    User {
        id: UserId::new(Uuid::from_u128(seed)),
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
        created_at: created,
        last_login: Some(last_login),
    }
}

pub async fn fetch_users() -> Result<Vec<User>, String> {
    TimeoutFuture::new(LATENCY_MS).await;

    Ok(vec![
        user(
            1,
            "John Doe",
            "john@example.com",
            UserRole::Admin,
            EntityStatus::Active,
            date(2024, 1, 15),
            date(2024, 1, 20),
        ),
        user(
            2,
            "Jane Smith",
            "jane@example.com",
            UserRole::Manager,
            EntityStatus::Active,
            date(2024, 1, 10),
            date(2024, 1, 19),
        ),
        user(
            3,
            "Bob Johnson",
            "bob@example.com",
            UserRole::User,
            EntityStatus::Inactive,
            date(2024, 1, 5),
            date(2024, 1, 18),
        ),
        user(
            4,
            "Alice Brown",
            "alice@example.com",
            UserRole::User,
            EntityStatus::Active,
            date(2024, 1, 12),
            date(2024, 1, 20),
        ),
        user(
            5,
            "Charlie Wilson",
            "charlie@example.com",
            UserRole::Manager,
            EntityStatus::Active,
            date(2024, 1, 8),
            date(2024, 1, 19),
        ),
    ])
}

/// Создание на "сервере": возвращает агрегат со сгенерированным id
pub async fn create_user(dto: &UserDto) -> Result<User, String> {
    TimeoutFuture::new(LATENCY_MS).await;
    Ok(User::new_for_insert(dto, today()))
}

pub async fn update_user(_id: &UserId, _dto: &UserDto) -> Result<(), String> {
    TimeoutFuture::new(LATENCY_MS).await;
    Ok(())
}

pub async fn delete_user(_id: &UserId) -> Result<(), String> {
    TimeoutFuture::new(LATENCY_MS).await;
    Ok(())
}
