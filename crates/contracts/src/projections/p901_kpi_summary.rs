use serde::{Deserialize, Serialize};

/// Сводка KPI для дашборда
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    #[serde(rename = "totalSales")]
    pub total_sales: f64,

    #[serde(rename = "totalUsers")]
    pub total_users: f64,

    #[serde(rename = "totalRevenue")]
    pub total_revenue: f64,

    #[serde(rename = "growthRate")]
    pub growth_rate: f64,
}

/// Точка графика: подпись и значение
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
