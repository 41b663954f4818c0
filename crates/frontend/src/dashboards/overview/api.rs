//! Simulated KPI endpoint and fixed chart series for the dashboard

use contracts::projections::p901_kpi_summary::{ChartPoint, KpiSummary};
use gloo_timers::future::TimeoutFuture;

const LATENCY_MS: u32 = 1000;

pub async fn fetch_kpi_summary() -> Result<KpiSummary, String> {
    TimeoutFuture::new(LATENCY_MS).await;

    Ok(KpiSummary {
        total_sales: 12450.0,
        total_users: 1234.0,
        total_revenue: 98765.0,
        growth_rate: 12.5,
    })
}

pub fn sales_overview() -> Vec<ChartPoint> {
    vec![
        ChartPoint::new("Jan", 4000.0),
        ChartPoint::new("Feb", 3000.0),
        ChartPoint::new("Mar", 2000.0),
        ChartPoint::new("Apr", 2780.0),
        ChartPoint::new("May", 1890.0),
        ChartPoint::new("Jun", 2390.0),
    ]
}

pub fn revenue_by_month() -> Vec<ChartPoint> {
    vec![
        ChartPoint::new("Jan", 2400.0),
        ChartPoint::new("Feb", 1398.0),
        ChartPoint::new("Mar", 9800.0),
        ChartPoint::new("Apr", 3908.0),
        ChartPoint::new("May", 4800.0),
        ChartPoint::new("Jun", 3800.0),
    ]
}

pub fn device_breakdown() -> Vec<ChartPoint> {
    vec![
        ChartPoint::new("Desktop", 400.0),
        ChartPoint::new("Mobile", 300.0),
        ChartPoint::new("Tablet", 200.0),
        ChartPoint::new("Other", 100.0),
    ]
}

/// Лента последних событий: (описание, время)
pub fn recent_activity() -> Vec<(&'static str, &'static str)> {
    vec![
        ("New user registered", "2 minutes ago"),
        ("Product updated", "5 minutes ago"),
        ("Order completed", "10 minutes ago"),
        ("Report generated", "15 minutes ago"),
    ]
}
