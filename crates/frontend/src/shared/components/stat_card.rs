use leptos::prelude::*;

use crate::shared::icons::icon;

/// Карточка показателя: подпись, значение и изменение к прошлому
/// периоду
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Accent class for the icon bubble
    #[prop(optional)]
    accent: &'static str,
    /// Formatted value
    #[prop(into)]
    value: Signal<String>,
    /// Change % relative to previous period
    #[prop(optional, into)]
    change_percent: Option<f64>,
) -> impl IntoView {
    let change = change_percent.map(|change| {
        let class = if change >= 0.0 {
            "stat-card-change positive"
        } else {
            "stat-card-change negative"
        };
        let text = if change >= 0.0 {
            format!("+{:.1}%", change)
        } else {
            format!("{:.1}%", change)
        };
        view! { <span class=class>{text}</span> }
    });

    view! {
        <div class="card stat-card">
            <div class=format!("stat-card-icon {}", accent)>{icon(icon_name)}</div>
            <div class="stat-card-body">
                <p class="stat-card-label">{label}</p>
                <p class="stat-card-value">{move || value.get()}</p>
            </div>
            {change}
        </div>
    }
}
