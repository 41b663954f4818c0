use contracts::domain::a001_user::{User, UserDto};
use contracts::domain::common::DomainEntity;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_user::api;
use crate::domain::a001_user::ui::details::UserForm;
use crate::layout::global_context::use_app_context;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::format_date;
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::shared::table_view::{apply, sort_indicator, CellValue, ColumnDef, TableViewState};
use crate::shared::toast::use_toasts;

const PAGE_SIZE: usize = 10;

fn columns() -> Vec<ColumnDef<User>> {
    vec![
        ColumnDef {
            key: "name",
            header: "Name",
            accessor: |u| CellValue::text(u.name.clone()),
            sortable: true,
        },
        ColumnDef {
            key: "email",
            header: "Email",
            accessor: |u| CellValue::text(u.email.clone()),
            sortable: true,
        },
        ColumnDef {
            key: "role",
            header: "Role",
            accessor: |u| CellValue::text(u.role.code()),
            sortable: true,
        },
        ColumnDef {
            key: "status",
            header: "Status",
            accessor: |u| CellValue::text(u.status.code()),
            sortable: true,
        },
        ColumnDef {
            key: "created_at",
            header: "Created",
            accessor: |u| CellValue::text(u.created_at.format("%Y-%m-%d").to_string()),
            sortable: true,
        },
    ]
}

/// Экран управления пользователями: карточки сводки, таблица с
/// поиском/сортировкой/пагинацией и модальная форма
#[component]
pub fn UsersListPage() -> impl IntoView {
    let ctx = use_app_context();
    let toasts = use_toasts();

    let view_state = RwSignal::new(TableViewState::with_page_size(PAGE_SIZE));
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_form, set_show_form) = signal(false);
    let editing: RwSignal<Option<User>> = RwSignal::new(None);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(data) => {
                    ctx.set_users(data);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to load users: {}", e)));
                    toasts.error("Failed to load users");
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
        ctx.users.with(|col| apply(col.items(), &columns(), &state))
    });

    let total_users = move || ctx.users.with(|col| col.len());
    let active_users =
        move || ctx.users.with(|col| col.items().iter().filter(|u| u.status.is_active()).count());
    let admin_users = move || {
        ctx.users.with(|col| {
            col.items()
                .iter()
                .filter(|u| u.role == contracts::enums::UserRole::Admin)
                .count()
        })
    };

    let open_create = move |_| {
        editing.set(None);
        set_show_form.set(true);
    };

    let on_submit = Callback::new(move |dto: UserDto| {
        set_show_form.set(false);
        match editing.get_untracked() {
            Some(user) => {
                spawn_local(async move {
                    match api::update_user(&user.id, &dto).await {
                        Ok(()) => {
                            ctx.update_user(&user.id, &dto);
                            toasts.success(format!("{} updated successfully", User::element_name()));
                        }
                        Err(e) => {
                            log::error!("Update rejected: {}", e);
                            toasts.error("Failed to update user");
                        }
                    }
                });
            }
            None => {
                spawn_local(async move {
                    match api::create_user(&dto).await {
                        Ok(created) => {
                            ctx.add_user(created);
                            toasts.success(format!("{} created successfully", User::element_name()));
                        }
                        Err(e) => {
                            log::error!("Create rejected: {}", e);
                            toasts.error("Failed to create user");
                        }
                    }
                });
            }
        }
    });

    let on_close = Callback::new(move |_| set_show_form.set(false));

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h1 class="page-title">
                        {icon("users")}
                        {move || t(ctx.language.get(), "userManagement")}
                    </h1>
                    <p class="page-subtitle">"Manage your users and their permissions"</p>
                </div>
                <button class="btn btn-primary" on:click=open_create>
                    {icon("plus")}
                    "Add User"
                </button>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Total Users".to_string()
                    icon_name="users"
                    accent="accent-blue"
                    value=Signal::derive(move || total_users().to_string())
                />
                <StatCard
                    label="Active Users".to_string()
                    icon_name="activity"
                    accent="accent-green"
                    value=Signal::derive(move || active_users().to_string())
                />
                <StatCard
                    label="Admins".to_string()
                    icon_name="alert-triangle"
                    accent="accent-purple"
                    value=Signal::derive(move || admin_users().to_string())
                />
            </div>

            <div class="search-box">
                {icon("search")}
                <input
                    class="form-input search-input"
                    type="text"
                    placeholder=format!("Search {}...", User::list_name().to_lowercase())
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
                                        <td class="table-placeholder" colspan="6">"Loading..."</td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            table
                                .get()
                                .page_rows
                                .into_iter()
                                .map(|user| {
                                    let edit_target = user.clone();
                                    let delete_target = user.clone();
                                    let initial = user
                                        .name
                                        .chars()
                                        .next()
                                        .unwrap_or('?')
                                        .to_uppercase()
                                        .to_string();
                                    view! {
                                        <tr>
                                            <td>
                                                <span class="cell-avatar">{initial}</span>
                                                <span class="cell-strong">{user.name.clone()}</span>
                                            </td>
                                            <td>{user.email.clone()}</td>
                                            <td>
                                                <span class=user.role.badge_class()>
                                                    {user.role.display_name()}
                                                </span>
                                            </td>
                                            <td>
                                                <span class=user.status.badge_class()>
                                                    {user.status.display_name()}
                                                </span>
                                            </td>
                                            <td>{format_date(&user.created_at)}</td>
                                            <td>
                                                <button
                                                    class="icon-btn"
                                                    title="Edit user"
                                                    on:click=move |_| {
                                                        editing.set(Some(edit_target.clone()));
                                                        set_show_form.set(true);
                                                    }
                                                >
                                                    {icon("edit")}
                                                </button>
                                                <button
                                                    class="icon-btn danger"
                                                    title="Delete user"
                                                    on:click=move |_| {
                                                        let confirmed = web_sys::window()
                                                            .and_then(|w| {
                                                                w.confirm_with_message(
                                                                        "Are you sure you want to delete this user?",
                                                                    )
                                                                    .ok()
                                                            })
                                                            .unwrap_or(false);
                                                        if !confirmed {
                                                            return;
                                                        }
                                                        let id = delete_target.id;
                                                        spawn_local(async move {
                                                            match api::delete_user(&id).await {
                                                                Ok(()) => {
                                                                    if ctx.delete_user(&id) {
                                                                        toasts
                                                                            .success(
                                                                                format!("{} deleted successfully", User::element_name()),
                                                                            );
                                                                    }
                                                                }
                                                                Err(e) => {
                                                                    log::error!(
                                                                        "Delete rejected: {}", e
                                                                    );
                                                                    toasts
                                                                        .error("Failed to delete user");
                                                                }
                                                            }
                                                        });
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
                <UserForm user=editing.get() on_submit=on_submit on_close=on_close />
            </Show>
        </div>
    }
}
