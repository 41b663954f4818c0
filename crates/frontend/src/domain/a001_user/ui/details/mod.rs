use contracts::domain::a001_user::{User, UserDto};
use contracts::domain::common::message_for;
use contracts::enums::{EntityStatus, UserRole};
use leptos::prelude::*;

use crate::shared::components::modal::Modal;

/// Модальная форма создания/редактирования пользователя.
/// Ошибки валидации показываются под полями и блокируют сохранение.
#[component]
pub fn UserForm(
    user: Option<User>,
    on_submit: Callback<UserDto>,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = if user.is_some() {
        "Edit User"
    } else {
        "Add New User"
    };

    let (name, set_name) = signal(user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let (email, set_email) = signal(user.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let (role, set_role) = signal(user.as_ref().map(|u| u.role).unwrap_or(UserRole::User));
    let (status, set_status) = signal(
        user.as_ref()
            .map(|u| u.status)
            .unwrap_or(EntityStatus::Active),
    );
    let errors = RwSignal::new(Vec::new());

    let field_error =
        move |field: &'static str| errors.with(|errs| message_for(errs, field).map(str::to_string));

    let save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let dto = UserDto {
            name: Some(name.get_untracked().trim().to_string()),
            email: Some(email.get_untracked().trim().to_string()),
            role: Some(role.get_untracked()),
            status: Some(status.get_untracked()),
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
                    <label class="form-label" for="user-name">"Name"</label>
                    <input
                        id="user-name"
                        class="form-input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    {move || field_error("name").map(|msg| view! { <p class="form-error">{msg}</p> })}
                </div>

                <div class="form-field">
                    <label class="form-label" for="user-email">"Email"</label>
                    <input
                        id="user-email"
                        class="form-input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    {move || {
                        field_error("email").map(|msg| view! { <p class="form-error">{msg}</p> })
                    }}
                </div>

                <div class="form-field">
                    <label class="form-label" for="user-role">"Role"</label>
                    <select
                        id="user-role"
                        class="form-input"
                        on:change=move |ev| {
                            if let Some(value) = UserRole::from_code(&event_target_value(&ev)) {
                                set_role.set(value);
                            }
                        }
                        prop:value=move || role.get().code().to_string()
                    >
                        {UserRole::all()
                            .into_iter()
                            .map(|value| {
                                view! {
                                    <option
                                        value=value.code()
                                        selected=move || role.get() == value
                                    >
                                        {value.display_name()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-field">
                    <label class="form-label" for="user-status">"Status"</label>
                    <select
                        id="user-status"
                        class="form-input"
                        on:change=move |ev| {
                            if let Some(value) = EntityStatus::from_code(&event_target_value(&ev)) {
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
