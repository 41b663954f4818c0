use contracts::domain::a002_product::{Product, ProductDto};
use contracts::domain::common::message_for;
use contracts::enums::EntityStatus;
use leptos::prelude::*;

use crate::shared::components::modal::Modal;

/// Модальная форма создания/редактирования товара
#[component]
pub fn ProductForm(
    product: Option<Product>,
    on_submit: Callback<ProductDto>,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = if product.is_some() {
        "Edit Product"
    } else {
        "Add New Product"
    };

    let (name, set_name) = signal(product.as_ref().map(|p| p.name.clone()).unwrap_or_default());
    let (description, set_description) = signal(
        product
            .as_ref()
            .map(|p| p.description.clone())
            .unwrap_or_default(),
    );
    let (price, set_price) = signal(
        product
            .as_ref()
            .map(|p| p.price.to_string())
            .unwrap_or_default(),
    );
    let (category, set_category) = signal(
        product
            .as_ref()
            .map(|p| p.category.clone())
            .unwrap_or_default(),
    );
    let (stock, set_stock) = signal(
        product
            .as_ref()
            .map(|p| p.stock.to_string())
            .unwrap_or_default(),
    );
    let (status, set_status) = signal(
        product
            .as_ref()
            .map(|p| p.status)
            .unwrap_or(EntityStatus::Active),
    );
    let errors = RwSignal::new(Vec::new());

    let field_error =
        move |field: &'static str| errors.with(|errs| message_for(errs, field).map(str::to_string));

    let save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Нечисловой ввод оставляет поле незаполненным, и валидация
        // сообщает об обязательности
        let dto = ProductDto {
            name: Some(name.get_untracked().trim().to_string()),
            description: Some(description.get_untracked().trim().to_string()),
            price: price.get_untracked().trim().parse::<f64>().ok(),
            category: Some(category.get_untracked().trim().to_string()),
            stock: stock.get_untracked().trim().parse::<u32>().ok(),
            status: Some(status.get_untracked()),
            touched_on: None,
        };

        let validation = dto.validate();
        errors.set(validation.clone());
        if validation.is_empty() {
            on_submit.run(dto);
        }
    };

    view! {
        <Modal title=title.to_string() on_close=on_close>
            <form class="entity-form" on:submit=save>
                <div class="form-field">
                    <label class="form-label" for="product-name">"Name"</label>
                    <input
                        id="product-name"
                        class="form-input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    {move || field_error("name").map(|msg| view! { <p class="form-error">{msg}</p> })}
                </div>

                <div class="form-field">
                    <label class="form-label" for="product-description">"Description"</label>
                    <textarea
                        id="product-description"
                        class="form-input"
                        rows="3"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                    {move || {
                        field_error("description")
                            .map(|msg| view! { <p class="form-error">{msg}</p> })
                    }}
                </div>

                <div class="form-row">
                    <div class="form-field">
                        <label class="form-label" for="product-price">"Price"</label>
                        <input
                            id="product-price"
                            class="form-input"
                            type="number"
                            step="0.01"
                            min="0"
                            prop:value=move || price.get()
                            on:input=move |ev| set_price.set(event_target_value(&ev))
                        />
                        {move || {
                            field_error("price").map(|msg| view! { <p class="form-error">{msg}</p> })
                        }}
                    </div>

                    <div class="form-field">
                        <label class="form-label" for="product-stock">"Stock"</label>
                        <input
                            id="product-stock"
                            class="form-input"
                            type="number"
                            min="0"
                            prop:value=move || stock.get()
                            on:input=move |ev| set_stock.set(event_target_value(&ev))
                        />
                        {move || {
                            field_error("stock").map(|msg| view! { <p class="form-error">{msg}</p> })
                        }}
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-field">
                        <label class="form-label" for="product-category">"Category"</label>
                        <input
                            id="product-category"
                            class="form-input"
                            type="text"
                            prop:value=move || category.get()
                            on:input=move |ev| set_category.set(event_target_value(&ev))
                        />
                        {move || {
                            field_error("category")
                                .map(|msg| view! { <p class="form-error">{msg}</p> })
                        }}
                    </div>

                    <div class="form-field">
                        <label class="form-label" for="product-status">"Status"</label>
                        <select
                            id="product-status"
                            class="form-input"
                            on:change=move |ev| {
                                if let Some(value) = EntityStatus::from_code(
                                    &event_target_value(&ev),
                                ) {
                                    set_status.set(value);
                                }
                            }
                            prop:value=move || status.get().code().to_string()
                        >
                            {EntityStatus::all()
                                .into_iter()
                                .map(|value| {
                                    view! {
                                        <option
                                            value=value.code()
                                            selected=move || status.get() == value
                                        >
                                            {value.display_name()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                </div>

                <div class="form-actions">
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| on_close.run(())
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary">"Save"</button>
                </div>
            </form>
        </Modal>
    }
}
