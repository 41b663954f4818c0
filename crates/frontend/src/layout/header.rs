use contracts::enums::Language;
use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::shared::i18n::t;
use crate::shared::icons::icon;

/// Шапка: переключатели боковой панели, языка и темы, текущий
/// пользователь и выход
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();

    let on_language_change = move |ev: leptos::ev::Event| {
        let code = event_target_value(&ev);
        if let Some(language) = Language::from_code(&code) {
            ctx.set_language(language);
        }
    };

    view! {
        <header class="app-header">
            <button
                class="icon-btn"
                title="Toggle sidebar"
                on:click=move |_| ctx.toggle_sidebar()
            >
                {icon("menu")}
            </button>

            <div class="app-header-spacer"></div>

            <select
                class="language-select"
                on:change=on_language_change
                prop:value=move || ctx.language.get().code().to_string()
            >
                {Language::all()
                    .into_iter()
                    .map(|language| {
                        view! {
                            <option
                                value=language.code()
                                selected=move || ctx.language.get() == language
                            >
                                {language.display_name()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>

            <button
                class="icon-btn"
                title="Toggle dark mode"
                on:click=move |_| ctx.toggle_dark_mode()
            >
                {move || icon(if ctx.dark_mode.get() { "sun" } else { "moon" })}
            </button>

            {move || {
                ctx.auth_user.get().map(|user| {
                    view! {
                        <div class="header-user">
                            <span class="header-user-avatar">
                                {user.name.chars().next().unwrap_or('?').to_uppercase().to_string()}
                            </span>
                            <span class="header-user-name">{user.name.clone()}</span>
                            <span class=user.role.badge_class()>{user.role.display_name()}</span>
                        </div>
                    }
                })
            }}

            <button
                class="icon-btn"
                title=move || t(ctx.language.get(), "logout").to_string()
                on:click=move |_| ctx.logout()
            >
                {icon("log-out")}
            </button>
        </header>
    }
}
