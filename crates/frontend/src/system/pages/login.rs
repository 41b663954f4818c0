use contracts::domain::common::message_for;
use contracts::enums::UserRole;
use contracts::system::auth::{AuthUser, LoginForm};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::use_app_context;
use crate::shared::i18n::t;

const LOGIN_LATENCY_MS: u32 = 1000;

/// Форма входа. Аутентификации как таковой нет: после имитации
/// запроса введённая личность сохраняется как администратор.
#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (submitting, set_submitting) = signal(false);
    let errors = RwSignal::new(Vec::new());

    let field_error = move |field: &'static str| {
        errors.with(|errs| message_for(errs, field).map(str::to_string))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = LoginForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };

        let validation = form.validate();
        errors.set(validation.clone());
        if !validation.is_empty() {
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            TimeoutFuture::new(LOGIN_LATENCY_MS).await;
            ctx.login(AuthUser {
                id: "1".to_string(),
                name: form.name.trim().to_string(),
                email: form.email.trim().to_string(),
                role: UserRole::Admin,
            });
            set_submitting.set(false);
        });
    };

    view! {
        <div class="login-screen">
            <form class="card login-card" on:submit=on_submit>
                <h2 class="login-title">
                    {move || t(ctx.language.get(), "welcomeBack")}
                </h2>
                <p class="login-subtitle">
                    {move || t(ctx.language.get(), "signInToAccount")}
                </p>

                <div class="form-field">
                    <label class="form-label" for="login-name">"Full Name"</label>
                    <input
                        id="login-name"
                        class="form-input"
                        type="text"
                        placeholder="Enter your full name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    {move || field_error("name").map(|msg| view! { <p class="form-error">{msg}</p> })}
                </div>

                <div class="form-field">
                    <label class="form-label" for="login-email">"Email Address"</label>
                    <input
                        id="login-email"
                        class="form-input"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    {move || field_error("email").map(|msg| view! { <p class="form-error">{msg}</p> })}
                </div>

                <div class="form-field">
                    <label class="form-label" for="login-password">"Password"</label>
                    <div class="form-input-group">
                        <input
                            id="login-password"
                            class="form-input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="form-input-addon"
                            on:click=move |_| set_show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    {move || {
                        field_error("password").map(|msg| view! { <p class="form-error">{msg}</p> })
                    }}
                </div>

                <button class="btn btn-primary login-submit" type="submit" disabled=submitting>
                    {move || {
                        if submitting.get() {
                            "Signing in...".to_string()
                        } else {
                            t(ctx.language.get(), "signIn").to_string()
                        }
                    }}
                </button>
            </form>
        </div>
    }
}
