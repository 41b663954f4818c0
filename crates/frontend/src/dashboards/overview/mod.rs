pub mod api;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::use_app_context;
use crate::shared::components::chart_card::{BarChart, ChartCard, DistributionList, LineChart};
use crate::shared::components::stat_card::StatCard;
use crate::shared::i18n::t;
use crate::shared::number_format::{format_money, format_number_int, format_percent};

/// Дашборд: KPI-карточки, графики и лента активности
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();

    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_kpi_summary().await {
                Ok(summary) => {
                    ctx.set_kpi(summary);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    });

    let kpi_value = move |pick: fn(&contracts::projections::p901_kpi_summary::KpiSummary) -> String| {
        ctx.kpi
            .get()
            .as_ref()
            .map(pick)
            .unwrap_or_else(|| "–".to_string())
    };

    view! {
        <div class="page">
            {move || {
                if loading.get() && ctx.kpi.get().is_none() {
                    return view! { <DashboardSkeleton /> }.into_any();
                }
                if let Some(message) = error.get() {
                    return view! {
                        <div class="error-banner">
                            <h3>"Failed to load dashboard data"</h3>
                            <p>{message}</p>
                            <p>"Please try refreshing the page."</p>
                        </div>
                    }
                        .into_any();
                }
                view! {
                    <div class="stat-grid stat-grid-4">
                        <StatCard
                            label=t(ctx.language.get(), "totalSales").to_string()
                            icon_name="dollar-sign"
                            accent="accent-green"
                            value=Signal::derive(move || {
                                kpi_value(|k| format_number_int(k.total_sales))
                            })
                            change_percent=12.5
                        />
                        <StatCard
                            label=t(ctx.language.get(), "activeUsers").to_string()
                            icon_name="users"
                            accent="accent-blue"
                            value=Signal::derive(move || {
                                kpi_value(|k| format_number_int(k.total_users))
                            })
                            change_percent=8.2
                        />
                        <StatCard
                            label=t(ctx.language.get(), "totalRevenue").to_string()
                            icon_name="trending-up"
                            accent="accent-purple"
                            value=Signal::derive(move || {
                                kpi_value(|k| format_money(k.total_revenue))
                            })
                            change_percent=15.3
                        />
                        <StatCard
                            label=t(ctx.language.get(), "growthRate").to_string()
                            icon_name="activity"
                            accent="accent-orange"
                            value=Signal::derive(move || {
                                kpi_value(|k| format_percent(k.growth_rate))
                            })
                            change_percent={-2.1}
                        />
                    </div>

                    <div class="chart-grid">
                        <ChartCard title=t(ctx.language.get(), "salesOverview").to_string()>
                            <LineChart points=api::sales_overview() />
                        </ChartCard>
                        <ChartCard title=t(ctx.language.get(), "revenueByMonth").to_string()>
                            <BarChart points=api::revenue_by_month() />
                        </ChartCard>
                    </div>

                    <div class="chart-grid">
                        <ChartCard title=t(ctx.language.get(), "deviceBreakdown").to_string()>
                            <DistributionList points=api::device_breakdown() />
                        </ChartCard>
                        <div class="card activity-card">
                            <h3 class="chart-card-title">
                                {t(ctx.language.get(), "recentActivity")}
                            </h3>
                            <ul class="activity-list">
                                {api::recent_activity()
                                    .into_iter()
                                    .map(|(action, time)| {
                                        view! {
                                            <li class="activity-item">
                                                <span class="activity-action">{action}</span>
                                                <span class="activity-time">{time}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}

/// Скелет на время загрузки KPI
#[component]
fn DashboardSkeleton() -> impl IntoView {
    view! {
        <div class="stat-grid stat-grid-4">
            {(0..4)
                .map(|_| view! { <div class="card skeleton skeleton-stat"></div> })
                .collect_view()}
        </div>
        <div class="chart-grid">
            <div class="card skeleton skeleton-chart"></div>
            <div class="card skeleton skeleton-chart"></div>
        </div>
    }
}
