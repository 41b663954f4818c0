use leptos::prelude::*;

use super::global_context::use_app_context;
use super::header::Header;
use super::sidebar::Sidebar;

/// Каркас приложения: боковая панель, шапка и область контента
#[component]
pub fn Shell(children: ChildrenFn) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div
            class="app-shell"
            class:sidebar-collapsed=move || !ctx.sidebar_open.get()
        >
            <Sidebar />
            <div class="app-main">
                <Header />
                <main class="app-content">{children()}</main>
            </div>
        </div>
    }
}
