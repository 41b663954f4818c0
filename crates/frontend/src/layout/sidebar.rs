use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::routes::routes::Page;
use crate::shared::i18n::t;
use crate::shared::icons::icon;

/// Боковая навигация по страницам приложения
#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <span class="sidebar-brand-mark">{icon("bar-chart")}</span>
                <span class="sidebar-brand-name">"Business Admin"</span>
            </div>
            <nav class="sidebar-nav">
                {Page::all()
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class="sidebar-link"
                                class:active=move || ctx.active_page.get() == page
                                on:click=move |_| ctx.navigate(page)
                            >
                                {icon(page.icon_name())}
                                <span class="sidebar-link-label">
                                    {move || t(ctx.language.get(), page.title_key())}
                                </span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
