//! Явный объект состояния приложения.
//!
//! Передаётся через leptos-контекст; методы мутации — единственная
//! поверхность записи. Каждая мутация, затрагивающая настройки,
//! сразу сохраняется в preference store.

use leptos::prelude::*;

use contracts::domain::a001_user::{User, UserDto, UserId};
use contracts::domain::a002_product::{Product, ProductDto, ProductId};
use contracts::domain::a003_sale::SaleRecord;
use contracts::enums::Language;
use contracts::projections::p901_kpi_summary::KpiSummary;
use contracts::shared::collection::EntityCollection;
use contracts::system::auth::{AuthUser, StoredPreferences};

use crate::routes::routes::Page;
use crate::shared::theme;
use crate::system::auth::storage;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    // Auth / preferences
    pub auth_user: RwSignal<Option<AuthUser>>,
    pub is_authenticated: RwSignal<bool>,
    pub dark_mode: RwSignal<bool>,
    pub language: RwSignal<Language>,

    // UI state
    pub sidebar_open: RwSignal<bool>,
    pub active_page: RwSignal<Page>,

    // Entity collections
    pub users: RwSignal<EntityCollection<User>>,
    pub products: RwSignal<EntityCollection<Product>>,
    pub sales: RwSignal<EntityCollection<SaleRecord>>,
    pub kpi: RwSignal<Option<KpiSummary>>,
}

impl AppGlobalContext {
    /// Создать состояние, восстановив настройки из localStorage
    pub fn new() -> Self {
        let prefs = storage::load_preferences().unwrap_or_default();

        Self {
            auth_user: RwSignal::new(prefs.user),
            is_authenticated: RwSignal::new(prefs.is_authenticated),
            dark_mode: RwSignal::new(prefs.dark_mode),
            language: RwSignal::new(prefs.language),
            sidebar_open: RwSignal::new(true),
            active_page: RwSignal::new(Page::Dashboard),
            users: RwSignal::new(EntityCollection::new()),
            products: RwSignal::new(EntityCollection::new()),
            sales: RwSignal::new(EntityCollection::new()),
            kpi: RwSignal::new(None),
        }
    }

    /// Применить восстановленные настройки к документу
    pub fn apply_document_state(&self) {
        theme::apply_color_mode(self.dark_mode.get_untracked());
        theme::apply_text_direction(self.language.get_untracked());
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    pub fn login(&self, user: AuthUser) {
        leptos::logging::log!("login: {}", user.email);
        self.auth_user.set(Some(user));
        self.is_authenticated.set(true);
        self.persist_preferences();
    }

    pub fn logout(&self) {
        leptos::logging::log!("logout");
        self.auth_user.set(None);
        self.is_authenticated.set(false);
        self.active_page.set(Page::Dashboard);
        self.persist_preferences();
    }

    // ------------------------------------------------------------------
    // UI preferences
    // ------------------------------------------------------------------

    pub fn toggle_dark_mode(&self) {
        self.dark_mode.update(|val| *val = !*val);
        theme::apply_color_mode(self.dark_mode.get_untracked());
        self.persist_preferences();
    }

    pub fn set_language(&self, language: Language) {
        self.language.set(language);
        theme::apply_text_direction(language);
        self.persist_preferences();
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|val| *val = !*val);
    }

    pub fn navigate(&self, page: Page) {
        self.active_page.set(page);
    }

    fn persist_preferences(&self) {
        let prefs = StoredPreferences {
            user: self.auth_user.get_untracked(),
            is_authenticated: self.is_authenticated.get_untracked(),
            dark_mode: self.dark_mode.get_untracked(),
            language: self.language.get_untracked(),
        };
        storage::save_preferences(&prefs);
    }

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    pub fn set_users(&self, items: Vec<User>) {
        self.users.update(|col| col.replace_all(items));
    }

    pub fn add_user(&self, user: User) {
        self.users.update(|col| col.insert(user));
    }

    pub fn update_user(&self, id: &UserId, patch: &UserDto) -> bool {
        let mut found = false;
        self.users.update(|col| found = col.update(id, patch));
        found
    }

    pub fn delete_user(&self, id: &UserId) -> bool {
        let mut found = false;
        self.users.update(|col| found = col.remove(id));
        found
    }

    // ------------------------------------------------------------------
    // Products
    // ------------------------------------------------------------------

    pub fn set_products(&self, items: Vec<Product>) {
        self.products.update(|col| col.replace_all(items));
    }

    pub fn add_product(&self, product: Product) {
        self.products.update(|col| col.insert(product));
    }

    pub fn update_product(&self, id: &ProductId, patch: &ProductDto) -> bool {
        let mut found = false;
        self.products.update(|col| found = col.update(id, patch));
        found
    }

    pub fn delete_product(&self, id: &ProductId) -> bool {
        let mut found = false;
        self.products.update(|col| found = col.remove(id));
        found
    }

    // ------------------------------------------------------------------
    // Sales / KPI
    // ------------------------------------------------------------------

    pub fn set_sales(&self, items: Vec<SaleRecord>) {
        self.sales.update(|col| col.replace_all(items));
    }

    pub fn set_kpi(&self, kpi: KpiSummary) {
        self.kpi.set(Some(kpi));
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found in component tree")
}
