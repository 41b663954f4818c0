//! Top-level catch for render-time errors.
//!
//! Offers retry-in-place (clears the collected errors and re-renders)
//! or a full reload. Diagnostic detail is shown only in debug builds.

use leptos::prelude::*;

use crate::shared::icons::icon;

#[component]
pub fn AppErrorBoundary(children: ChildrenFn) -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| {
            let reset = {
                let errors = errors.clone();
                move |_| errors.set(Default::default())
            };
            let reload = move |_| {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().reload();
                }
            };
            let details = cfg!(debug_assertions).then(|| {
                let errors = errors.clone();
                view! {
                    <details class="error-details">
                        <summary>"Error details"</summary>
                        <pre>
                            {move || {
                                errors
                                    .get()
                                    .into_iter()
                                    .map(|(_, error)| error.to_string())
                                    .collect::<Vec<_>>()
                                    .join("\n")
                            }}
                        </pre>
                    </details>
                }
            });

            view! {
                <div class="error-screen">
                    <div class="card error-card">
                        <div class="error-icon">{icon("alert-triangle")}</div>
                        <h2>"Something went wrong"</h2>
                        <p>"We're sorry, but something unexpected happened. Please try again."</p>
                        <button class="btn btn-primary" on:click=reset>
                            {icon("refresh-cw")}
                            "Try Again"
                        </button>
                        <button class="btn btn-secondary" on:click=reload>
                            "Reload Page"
                        </button>
                        {details}
                    </div>
                </div>
            }
        }>
            {children()}
        </ErrorBoundary>
    }
}
