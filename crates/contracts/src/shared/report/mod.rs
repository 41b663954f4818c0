//! Конвейер отчётов: выбор спецификации колонок по виду отчёта,
//! проекция коллекции в строки-словари и рендеринг в форматы
//! выгрузки (CSV / JSON / XLSX / PDF).

pub mod csv;
pub mod json;
pub mod pdf;
pub mod xlsx;

use anyhow::Result;

use crate::domain::a001_user::User;
use crate::domain::a002_product::Product;
use crate::domain::a003_sale::SaleRecord;

// ============================================================================
// Report kinds
// ============================================================================

/// Виды отчётов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Sales,
    Users,
    Products,
}

impl ReportKind {
    pub fn code(&self) -> &'static str {
        match self {
            ReportKind::Sales => "sales",
            ReportKind::Users => "users",
            ReportKind::Products => "products",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReportKind::Sales => "Sales Report",
            ReportKind::Users => "User Report",
            ReportKind::Products => "Product Report",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReportKind::Sales => "Revenue and sales analytics",
            ReportKind::Users => "User demographics and activity",
            ReportKind::Products => "Product performance metrics",
        }
    }

    pub fn all() -> Vec<ReportKind> {
        vec![ReportKind::Sales, ReportKind::Users, ReportKind::Products]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "sales" => Some(ReportKind::Sales),
            "users" => Some(ReportKind::Users),
            "products" => Some(ReportKind::Products),
            _ => None,
        }
    }
}

// ============================================================================
// Projection
// ============================================================================

/// Колонка отчёта: заголовок + чистая функция доступа
struct ReportColumn<T> {
    header: &'static str,
    accessor: fn(&T) -> String,
}

/// Готовый отчёт: заголовок, упорядоченные колонки и строки
/// отображаемых значений
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Строки как объекты с ключами в порядке колонок
    pub fn row_objects(&self) -> Vec<serde_json::Map<String, serde_json::Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned().map(serde_json::Value::String))
                    .collect()
            })
            .collect()
    }
}

/// Денежное значение с двумя знаками
fn money(value: f64) -> String {
    format!("${:.2}", value)
}

fn iso_date(date: &chrono::NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn project<T>(items: &[T], columns: &[ReportColumn<T>]) -> (Vec<String>, Vec<Vec<String>>) {
    let headers = columns.iter().map(|c| c.header.to_string()).collect();
    let rows = items
        .iter()
        .map(|item| columns.iter().map(|c| (c.accessor)(item)).collect())
        .collect();
    (headers, rows)
}

fn sales_columns() -> Vec<ReportColumn<SaleRecord>> {
    vec![
        ReportColumn {
            header: "Product",
            accessor: |s| s.product_name.clone(),
        },
        ReportColumn {
            header: "Customer",
            accessor: |s| s.customer_name.clone(),
        },
        ReportColumn {
            header: "Quantity",
            accessor: |s| s.quantity.to_string(),
        },
        ReportColumn {
            header: "Price",
            accessor: |s| money(s.price),
        },
        ReportColumn {
            header: "Total",
            accessor: |s| money(s.total),
        },
        ReportColumn {
            header: "Date",
            accessor: |s| iso_date(&s.date),
        },
    ]
}

fn user_columns() -> Vec<ReportColumn<User>> {
    vec![
        ReportColumn {
            header: "Name",
            accessor: |u| u.name.clone(),
        },
        ReportColumn {
            header: "Email",
            accessor: |u| u.email.clone(),
        },
        ReportColumn {
            header: "Role",
            accessor: |u| u.role.code().to_string(),
        },
        ReportColumn {
            header: "Status",
            accessor: |u| u.status.code().to_string(),
        },
        ReportColumn {
            header: "Created",
            accessor: |u| iso_date(&u.created_at),
        },
    ]
}

fn product_columns() -> Vec<ReportColumn<Product>> {
    vec![
        ReportColumn {
            header: "Name",
            accessor: |p| p.name.clone(),
        },
        ReportColumn {
            header: "Category",
            accessor: |p| p.category.clone(),
        },
        ReportColumn {
            header: "Price",
            accessor: |p| money(p.price),
        },
        ReportColumn {
            header: "Stock",
            accessor: |p| p.stock.to_string(),
        },
        ReportColumn {
            header: "Status",
            accessor: |p| p.status.code().to_string(),
        },
        ReportColumn {
            header: "Created",
            accessor: |p| iso_date(&p.created_at),
        },
    ]
}

/// Спроецировать коллекцию выбранного вида в отчёт
pub fn build_report(
    kind: ReportKind,
    users: &[User],
    products: &[Product],
    sales: &[SaleRecord],
) -> Report {
    let (headers, rows) = match kind {
        ReportKind::Sales => project(sales, &sales_columns()),
        ReportKind::Users => project(users, &user_columns()),
        ReportKind::Products => project(products, &product_columns()),
    };
    Report {
        title: kind.display_name().to_string(),
        headers,
        rows,
    }
}

/// Сводные показатели для выбранного вида отчёта
pub fn report_stats(
    kind: ReportKind,
    users: &[User],
    products: &[Product],
    sales: &[SaleRecord],
) -> Vec<(String, String)> {
    match kind {
        ReportKind::Sales => {
            let total_revenue: f64 = sales.iter().map(|s| s.total).sum();
            let total_orders = sales.len();
            let avg_order_value = if total_orders > 0 {
                total_revenue / total_orders as f64
            } else {
                0.0
            };
            vec![
                ("Total Revenue".to_string(), money(total_revenue)),
                ("Total Orders".to_string(), total_orders.to_string()),
                ("Avg Order Value".to_string(), money(avg_order_value)),
            ]
        }
        ReportKind::Users => {
            let active = users.iter().filter(|u| u.status.is_active()).count();
            let admins = users
                .iter()
                .filter(|u| u.role == crate::enums::UserRole::Admin)
                .count();
            vec![
                ("Total Users".to_string(), users.len().to_string()),
                ("Active Users".to_string(), active.to_string()),
                ("Admin Users".to_string(), admins.to_string()),
            ]
        }
        ReportKind::Products => {
            let active = products.iter().filter(|p| p.status.is_active()).count();
            let total_value: f64 = products
                .iter()
                .map(|p| p.price * f64::from(p.stock))
                .sum();
            vec![
                ("Total Products".to_string(), products.len().to_string()),
                ("Active Products".to_string(), active.to_string()),
                ("Total Value".to_string(), money(total_value)),
            ]
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Форматы выгрузки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Excel,
    Pdf,
    Json,
}

impl ReportFormat {
    pub fn code(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Excel => "excel",
            ReportFormat::Pdf => "pdf",
            ReportFormat::Json => "json",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "CSV",
            ReportFormat::Excel => "Excel",
            ReportFormat::Pdf => "PDF",
            ReportFormat::Json => "JSON",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Excel => "xlsx",
            ReportFormat::Pdf => "pdf",
            ReportFormat::Json => "json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "text/csv",
            ReportFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ReportFormat::Pdf => "application/pdf",
            ReportFormat::Json => "application/json",
        }
    }

    pub fn all() -> Vec<ReportFormat> {
        vec![
            ReportFormat::Csv,
            ReportFormat::Excel,
            ReportFormat::Pdf,
            ReportFormat::Json,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "csv" => Some(ReportFormat::Csv),
            "excel" => Some(ReportFormat::Excel),
            "pdf" => Some(ReportFormat::Pdf),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// Срендерить отчёт в байты выбранного формата.
/// Пустой отчёт остаётся корректным файлом в каждом формате.
pub fn render(format: ReportFormat, report: &Report, generated_on: &str) -> Result<Vec<u8>> {
    match format {
        ReportFormat::Csv => Ok(csv::render_csv(report).into_bytes()),
        ReportFormat::Json => Ok(json::render_json(report)?.into_bytes()),
        ReportFormat::Excel => xlsx::render_xlsx(report),
        ReportFormat::Pdf => Ok(pdf::render_pdf(report, generated_on)),
    }
}

/// Имя файла отчёта: заголовок в нижнем регистре, пробелы — подчёркивания
pub fn report_file_name(title: &str, format: ReportFormat) -> String {
    let stem: String = title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    format!("{}.{}", stem, format.extension())
}

/// Имя файла общего экспорта: `<prefix>_<ISO-дата>.<расширение>`
pub fn export_file_name(prefix: &str, iso_date: &str, format: ReportFormat) -> String {
    format!("{}_{}.{}", prefix, iso_date, format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_sale::{SaleId, SaleRecord};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn sale(product: &str, customer: &str, qty: u32, price: f64) -> SaleRecord {
        SaleRecord {
            id: SaleId::new(Uuid::from_u128(qty as u128 + 1)),
            product_name: product.to_string(),
            quantity: qty,
            price,
            total: price * qty as f64,
            customer_name: customer.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
        }
    }

    #[test]
    fn test_build_sales_report() {
        let sales = vec![sale("Wireless Headphones", "John Doe", 2, 199.99)];
        let report = build_report(ReportKind::Sales, &[], &[], &sales);

        assert_eq!(report.title, "Sales Report");
        assert_eq!(
            report.headers,
            vec!["Product", "Customer", "Quantity", "Price", "Total", "Date"]
        );
        assert_eq!(
            report.rows,
            vec![vec![
                "Wireless Headphones".to_string(),
                "John Doe".to_string(),
                "2".to_string(),
                "$199.99".to_string(),
                "$399.98".to_string(),
                "2024-01-20".to_string(),
            ]]
        );
    }

    #[test]
    fn test_sales_stats() {
        let sales = vec![
            sale("A", "X", 1, 49.99),
            sale("B", "Y", 2, 25.0),
        ];
        let stats = report_stats(ReportKind::Sales, &[], &[], &sales);
        assert_eq!(stats[0], ("Total Revenue".to_string(), "$99.99".to_string()));
        assert_eq!(stats[1], ("Total Orders".to_string(), "2".to_string()));
        assert_eq!(
            stats[2],
            ("Avg Order Value".to_string(), "$50.00".to_string())
        );
    }

    #[test]
    fn test_stats_on_empty_collections() {
        let stats = report_stats(ReportKind::Sales, &[], &[], &[]);
        assert_eq!(stats[2], ("Avg Order Value".to_string(), "$0.00".to_string()));
    }

    #[test]
    fn test_file_names() {
        assert_eq!(
            report_file_name("Sales Report", ReportFormat::Pdf),
            "sales_report.pdf"
        );
        assert_eq!(
            report_file_name("Sales Report", ReportFormat::Excel),
            "sales_report.xlsx"
        );
        assert_eq!(
            export_file_name("export", "2024-01-20", ReportFormat::Csv),
            "export_2024-01-20.csv"
        );
    }

    #[test]
    fn test_kind_codes_round_trip() {
        for kind in ReportKind::all() {
            assert_eq!(ReportKind::from_code(kind.code()), Some(kind));
        }
        for format in ReportFormat::all() {
            assert_eq!(ReportFormat::from_code(format.code()), Some(format));
        }
    }
}
