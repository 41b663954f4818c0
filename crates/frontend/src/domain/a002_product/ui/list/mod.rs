use contracts::domain::a002_product::{Product, ProductDto};
use contracts::domain::common::DomainEntity;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_product::api;
use crate::domain::a002_product::ui::details::ProductForm;
use crate::layout::global_context::use_app_context;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::{format_date, today};
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use crate::shared::table_view::{apply, sort_indicator, CellValue, ColumnDef, TableViewState};
use crate::shared::toast::use_toasts;

const PAGE_SIZE: usize = 10;

fn columns() -> Vec<ColumnDef<Product>> {
    vec![
        ColumnDef {
            key: "name",
            header: "Name",
            accessor: |p| CellValue::text(p.name.clone()),
            sortable: true,
        },
        ColumnDef {
            key: "category",
            header: "Category",
            accessor: |p| CellValue::text(p.category.clone()),
            sortable: true,
        },
        ColumnDef {
            key: "price",
            header: "Price",
            accessor: |p| CellValue::number(p.price),
            sortable: true,
        },
        ColumnDef {
            key: "stock",
            header: "Stock",
            accessor: |p| CellValue::number(f64::from(p.stock)),
            sortable: true,
        },
        ColumnDef {
            key: "status",
            header: "Status",
            accessor: |p| CellValue::text(p.status.code()),
            sortable: true,
        },
        ColumnDef {
            key: "created_at",
            header: "Created",
            accessor: |p| CellValue::text(p.created_at.format("%Y-%m-%d").to_string()),
            sortable: true,
        },
    ]
}

/// Экран каталога товаров: карточки сводки, таблица и модальная форма
#[component]
pub fn ProductsListPage() -> impl IntoView {
    let ctx = use_app_context();
    let toasts = use_toasts();

    let view_state = RwSignal::new(TableViewState::with_page_size(PAGE_SIZE));
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_form, set_show_form) = signal(false);
    let editing: RwSignal<Option<Product>> = RwSignal::new(None);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_products().await {
                Ok(data) => {
                    ctx.set_products(data);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to load products: {}", e)));
                    toasts.error("Failed to load products");
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| {
        load_data();
    });

    let table = Memo::new(move |_| {
        let state = view_state.get();
        ctx.products.with(|col| apply(col.items(), &columns(), &state))
    });

    let total_products = move || ctx.products.with(|col| col.len());
    let active_products = move || {
        ctx.products
            .with(|col| col.items().iter().filter(|p| p.status.is_active()).count())
    };
    let low_stock = move || {
        ctx.products
            .with(|col| col.items().iter().filter(|p| p.is_low_stock()).count())
    };

    let open_create = move |_| {
        editing.set(None);
        set_show_form.set(true);
    };

    let on_submit = Callback::new(move |dto: ProductDto| {
        match editing.get_untracked() {
            Some(product) => {
                let patch = ProductDto {
                    touched_on: Some(today()),
                    ..dto
                };
                ctx.update_product(&product.id, &patch);
                toasts.success(format!("{} updated successfully", Product::element_name()));
            }
            None => {
                ctx.add_product(Product::new_for_insert(&dto, today()));
                toasts.success(format!("{} created successfully", Product::element_name()));
            }
        }
        set_show_form.set(false);
    });

    let on_close = Callback::new(move |_| set_show_form.set(false));

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h1 class="page-title">
                        {icon("package")}
                        {move || t(ctx.language.get(), "productManagement")}
                    </h1>
                    <p class="page-subtitle">"Manage your product catalog and inventory"</p>
                </div>
                <button class="btn btn-primary" on:click=open_create>
                    {icon("plus")}
                    "Add Product"
                </button>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Total Products".to_string()
                    icon_name="package"
                    accent="accent-blue"
                    value=Signal::derive(move || total_products().to_string())
                />
                <StatCard
                    label="Active Products".to_string()
                    icon_name="trending-up"
                    accent="accent-green"
                    value=Signal::derive(move || active_products().to_string())
                />
                <StatCard
                    label="Low Stock".to_string()
                    icon_name="alert-triangle"
                    accent="accent-orange"
                    value=Signal::derive(move || low_stock().to_string())
                />
            </div>

            <div class="search-box">
                {icon("search")}
                <input
                    class="form-input search-input"
                    type="text"
                    placeholder=format!("Search {}...", Product::list_name().to_lowercase())
                    prop:value=move || view_state.get().filter_text.clone()
                    on:input=move |ev| {
                        view_state.update(|s| s.set_filter(event_target_value(&ev)))
                    }
                />
            </div>

            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="error-banner">{message}</div> })
            }}

            <div class="card table-card">
                <table class="data-table">
                    <thead>
                        <tr>
                            {columns()
                                .into_iter()
                                .map(|column| {
                                    view! {
                                        <th
                                            class:sortable=column.sortable
                                            on:click=move |_| {
                                                if column.sortable {
                                                    view_state.update(|s| s.toggle_sort(column.key));
                                                }
                                            }
                                        >
                                            {column.header}
                                            {move || {
                                                view_state
                                                    .with(|s| sort_indicator(s, column.key))
                                            }}
                                        </th>
                                    }
                                })
                                .collect_view()}
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if loading.get() {
                                return view! {
                                    <tr>
                                        <td class="table-placeholder" colspan="7">"Loading..."</td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            table
                                .get()
                                .page_rows
                                .into_iter()
                                .map(|product| {
                                    let edit_target = product.clone();
                                    let delete_target = product.clone();
                                    let stock_class = if product.is_low_stock() {
                                        "cell-warning"
                                    } else {
                                        ""
                                    };
                                    view! {
                                        <tr>
                                            <td>
                                                <span class="cell-strong">{product.name.clone()}</span>
                                            </td>
                                            <td>{product.category.clone()}</td>
                                            <td>{format_money(product.price)}</td>
                                            <td class=stock_class>{product.stock}</td>
                                            <td>
                                                <span class=product.status.badge_class()>
                                                    {product.status.display_name()}
                                                </span>
                                            </td>
                                            <td>{format_date(&product.created_at)}</td>
                                            <td>
                                                <button
                                                    class="icon-btn"
                                                    title="Edit product"
                                                    on:click=move |_| {
                                                        editing.set(Some(edit_target.clone()));
                                                        set_show_form.set(true);
                                                    }
                                                >
                                                    {icon("edit")}
                                                </button>
                                                <button
                                                    class="icon-btn danger"
                                                    title="Delete product"
                                                    on:click=move |_| {
                                                        let confirmed = web_sys::window()
                                                            .and_then(|w| {
                                                                w.confirm_with_message(
                                                                        "Are you sure you want to delete this product?",
                                                                    )
                                                                    .ok()
                                                            })
                                                            .unwrap_or(false);
                                                        if confirmed
                                                            && ctx.delete_product(&delete_target.id)
                                                        {
                                                            toasts
                                                                .success("Product deleted successfully");
                                                        }
                                                    }
                                                >
                                                    {icon("trash")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>

                <PaginationControls
                    current_page=Signal::derive(move || table.get().page_index)
                    total_pages=Signal::derive(move || table.get().page_count)
                    total_count=Signal::derive(move || table.get().total_count)
                    page_size=Signal::derive(move || view_state.get().page_size)
                    on_page_change=Callback::new(move |page| {
                        view_state.update(|s| s.page_index = page)
                    })
                    on_page_size_change=Callback::new(move |size| {
                        view_state
                            .update(|s| {
                                s.page_size = size;
                                s.page_index = 0;
                            })
                    })
                />
            </div>

            <Show when=move || show_form.get()>
                <ProductForm product=editing.get() on_submit=on_submit on_close=on_close />
            </Show>
        </div>
    }
}
