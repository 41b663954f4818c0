use leptos::prelude::*;

use crate::dashboards::overview::DashboardPage;
use crate::domain::a001_user::ui::list::UsersListPage;
use crate::domain::a002_product::ui::list::ProductsListPage;
use crate::layout::global_context::use_app_context;
use crate::layout::Shell;
use crate::system::pages::login::LoginPage;
use crate::usecases::u001_reports::ReportsPage;

/// Страницы приложения; активная хранится в AppGlobalContext
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Users,
    Products,
    Reports,
}

impl Page {
    pub fn code(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Users => "users",
            Page::Products => "products",
            Page::Reports => "reports",
        }
    }

    /// Ключ перевода для подписи в навигации
    pub fn title_key(&self) -> &'static str {
        self.code()
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Page::Dashboard => "home",
            Page::Users => "users",
            Page::Products => "package",
            Page::Reports => "file-text",
        }
    }

    pub fn all() -> Vec<Page> {
        vec![Page::Dashboard, Page::Users, Page::Products, Page::Reports]
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Shell>
            {move || match ctx.active_page.get() {
                Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                Page::Users => view! { <UsersListPage /> }.into_any(),
                Page::Products => view! { <ProductsListPage /> }.into_any(),
                Page::Reports => view! { <ReportsPage /> }.into_any(),
            }}
        </Shell>
    }
}

/// Вход в приложение: неавторизованный пользователь видит форму
/// логина, авторизованный — основной каркас
#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show
            when=move || ctx.is_authenticated.get()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
