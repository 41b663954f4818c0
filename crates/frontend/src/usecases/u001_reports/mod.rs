//! Экран отчётов: выбор вида, сводные показатели, экспорт в четыре
//! формата и предпросмотр первых строк.

use contracts::shared::report::{
    build_report, render, report_file_name, report_stats, Report, ReportFormat, ReportKind,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::{a001_user, a002_product, a003_sale};
use crate::layout::global_context::use_app_context;
use crate::shared::date_utils::{iso_date, today};
use crate::shared::export::download_bytes;
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

const PREVIEW_ROWS: usize = 5;

fn kind_icon(kind: ReportKind) -> &'static str {
    match kind {
        ReportKind::Sales => "bar-chart",
        ReportKind::Users => "pie-chart",
        ReportKind::Products => "trending-up",
    }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let ctx = use_app_context();
    let toasts = use_toasts();

    let (selected, set_selected) = signal(ReportKind::Sales);
    let (generating, set_generating) = signal(false);

    // Отчёты строятся из всех трёх коллекций, поэтому загружаем их
    // здесь, не полагаясь на посещение других экранов
    Effect::new(move |_| {
        spawn_local(async move {
            match a001_user::api::fetch_users().await {
                Ok(data) => ctx.set_users(data),
                Err(e) => log::warn!("Failed to load users for reports: {}", e),
            }
        });
        spawn_local(async move {
            match a002_product::api::fetch_products().await {
                Ok(data) => ctx.set_products(data),
                Err(e) => log::warn!("Failed to load products for reports: {}", e),
            }
        });
        spawn_local(async move {
            match a003_sale::api::fetch_sales().await {
                Ok(data) => ctx.set_sales(data),
                Err(e) => log::warn!("Failed to load sales for reports: {}", e),
            }
        });
    });

    let current_report = Memo::new(move |_| {
        let kind = selected.get();
        ctx.users.with(|users| {
            ctx.products.with(|products| {
                ctx.sales.with(|sales| {
                    build_report(kind, users.items(), products.items(), sales.items())
                })
            })
        })
    });

    let current_stats = Memo::new(move |_| {
        let kind = selected.get();
        ctx.users.with(|users| {
            ctx.products.with(|products| {
                ctx.sales.with(|sales| {
                    report_stats(kind, users.items(), products.items(), sales.items())
                })
            })
        })
    });

    let export = move |format: ReportFormat| {
        if generating.get_untracked() {
            return;
        }
        set_generating.set(true);

        let report: Report = current_report.get_untracked();
        spawn_local(async move {
            let generated_on = iso_date(&today());
            let result = render(format, &report, &generated_on)
                .map_err(|e| e.to_string())
                .and_then(|bytes| {
                    download_bytes(
                        &bytes,
                        &report_file_name(&report.title, format),
                        format.mime_type(),
                    )
                });

            match result {
                Ok(()) => {
                    toasts.success(format!(
                        "{} exported successfully as {}",
                        report.title,
                        format.display_name()
                    ));
                }
                Err(e) => {
                    log::error!("Report export failed: {}", e);
                    toasts.error("Failed to export report");
                }
            }
            set_generating.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h1 class="page-title">
                        {icon("file-text")}
                        {move || t(ctx.language.get(), "reportsAnalytics")}
                    </h1>
                    <p class="page-subtitle">"Generate and export business reports"</p>
                </div>
            </div>

            <div class="report-kind-grid">
                {ReportKind::all()
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <button
                                class="card report-kind-card"
                                class:selected=move || selected.get() == kind
                                on:click=move |_| set_selected.set(kind)
                            >
                                <div class="report-kind-head">
                                    {icon(kind_icon(kind))}
                                    <h3>{kind.display_name()}</h3>
                                </div>
                                <p>{kind.description()}</p>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="stat-grid">
                {move || {
                    current_stats
                        .get()
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="card stat-card">
                                    <div class="stat-card-body centered">
                                        <p class="stat-card-label">{label}</p>
                                        <p class="stat-card-value">{value}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="card export-bar">
                {ReportFormat::all()
                    .into_iter()
                    .map(|format| {
                        view! {
                            <button
                                class="btn btn-primary"
                                disabled=generating
                                on:click=move |_| export(format)
                            >
                                {icon("download")}
                                {move || {
                                    if generating.get() {
                                        "Generating...".to_string()
                                    } else {
                                        format!("Export {}", format.display_name())
                                    }
                                }}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="card table-card">
                <h3 class="chart-card-title">"Report Preview"</h3>
                <table class="data-table">
                    <thead>
                        <tr>
                            {move || {
                                current_report
                                    .get()
                                    .headers
                                    .into_iter()
                                    .map(|header| view! { <th>{header}</th> })
                                    .collect_view()
                            }}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let report = current_report.get();
                            if report.is_empty() {
                                let width = report.headers.len().max(1).to_string();
                                return view! {
                                    <tr>
                                        <td class="table-placeholder" colspan=width>
                                            "No data yet"
                                        </td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            report
                                .rows
                                .into_iter()
                                .take(PREVIEW_ROWS)
                                .map(|row| {
                                    view! {
                                        <tr>
                                            {row
                                                .into_iter()
                                                .map(|cell| view! { <td>{cell}</td> })
                                                .collect_view()}
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
