use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{DomainEntity, EntityId, FieldError};
use crate::enums::EntityStatus;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl EntityId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock: u32,
    pub status: EntityStatus,

    #[serde(rename = "createdAt")]
    pub created_at: NaiveDate,

    #[serde(rename = "updatedAt")]
    pub updated_at: NaiveDate,
}

impl Product {
    /// Создать новый товар из формы
    pub fn new_for_insert(dto: &ProductDto, today: NaiveDate) -> Self {
        Self {
            id: ProductId::new_v4(),
            name: dto.name.clone().unwrap_or_default(),
            description: dto.description.clone().unwrap_or_default(),
            price: dto.price.unwrap_or(0.0),
            category: dto.category.clone().unwrap_or_default(),
            stock: dto.stock.unwrap_or(0),
            status: dto.status.unwrap_or(EntityStatus::Active),
            created_at: today,
            updated_at: today,
        }
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    /// Товаров на складе меньше порога
    pub fn is_low_stock(&self) -> bool {
        self.stock < 10
    }
}

impl DomainEntity for Product {
    type Id = ProductId;
    type Patch = ProductDto;

    fn id(&self) -> ProductId {
        self.id
    }

    fn apply_patch(&mut self, patch: &ProductDto) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(category) = &patch.category {
            self.category = category.clone();
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(today) = patch.touched_on {
            self.updated_at = today;
        }
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO формы создания/редактирования товара
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock: Option<u32>,
    pub status: Option<EntityStatus>,

    /// Дата применения патча; проставляет updated_at
    #[serde(skip)]
    pub touched_on: Option<NaiveDate>,
}

impl ProductDto {
    /// Валидация формы; пустой список означает успех
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        let name = self.name.as_deref().unwrap_or("").trim();
        if name.is_empty() {
            errors.push(FieldError::new("name", "Name is required"));
        } else if name.chars().count() < 2 {
            errors.push(FieldError::new("name", "Name must be at least 2 characters"));
        }

        let description = self.description.as_deref().unwrap_or("").trim();
        if description.is_empty() {
            errors.push(FieldError::new("description", "Description is required"));
        } else if description.chars().count() < 10 {
            errors.push(FieldError::new(
                "description",
                "Description must be at least 10 characters",
            ));
        }

        match self.price {
            None => errors.push(FieldError::new("price", "Price is required")),
            Some(price) if price < 0.0 => {
                errors.push(FieldError::new("price", "Price must be positive"))
            }
            Some(_) => {}
        }

        if self.category.as_deref().unwrap_or("").trim().is_empty() {
            errors.push(FieldError::new("category", "Category is required"));
        }

        if self.stock.is_none() {
            errors.push(FieldError::new("stock", "Stock is required"));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::message_for;

    fn valid_dto() -> ProductDto {
        ProductDto {
            name: Some("Wireless Headphones".to_string()),
            description: Some("High-quality wireless headphones".to_string()),
            price: Some(199.99),
            category: Some("Electronics".to_string()),
            stock: Some(25),
            status: Some(EntityStatus::Active),
            touched_on: None,
        }
    }

    #[test]
    fn test_valid_dto_passes() {
        assert!(valid_dto().validate().is_empty());
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut dto = valid_dto();
        dto.price = Some(-1.0);
        assert_eq!(
            message_for(&dto.validate(), "price"),
            Some("Price must be positive")
        );
    }

    #[test]
    fn test_short_description_rejected() {
        let mut dto = valid_dto();
        dto.description = Some("short".to_string());
        assert_eq!(
            message_for(&dto.validate(), "description"),
            Some("Description must be at least 10 characters")
        );
    }

    #[test]
    fn test_patch_bumps_updated_at() {
        let created = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let mut product = Product::new_for_insert(&valid_dto(), created);

        let later = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        product.apply_patch(&ProductDto {
            stock: Some(30),
            touched_on: Some(later),
            ..Default::default()
        });

        assert_eq!(product.stock, 30);
        assert_eq!(product.created_at, created);
        assert_eq!(product.updated_at, later);
    }
}
