use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{DomainEntity, EntityId};

/// Уникальный идентификатор продажи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SaleId(pub Uuid);

impl SaleId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl EntityId for SaleId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SaleId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Строка продаж. Только чтение: продажи приходят из выгрузки
/// и в интерфейсе не редактируются.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: SaleId,

    #[serde(rename = "productName")]
    pub product_name: String,

    pub quantity: u32,
    pub price: f64,
    pub total: f64,

    #[serde(rename = "customerName")]
    pub customer_name: String,

    pub date: NaiveDate,
}

impl DomainEntity for SaleRecord {
    type Id = SaleId;
    /// Продажи только для чтения: патча нет.
    type Patch = ();

    fn id(&self) -> SaleId {
        self.id
    }

    /// Read-only aggregate: patching is a no-op.
    fn apply_patch(&mut self, _patch: &()) {}

    fn element_name() -> &'static str {
        "Sale"
    }

    fn list_name() -> &'static str {
        "Sales"
    }
}
