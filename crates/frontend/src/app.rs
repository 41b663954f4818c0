use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::components::error_boundary::AppErrorBoundary;
use crate::shared::toast::{ToastService, Toaster};

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    // Provide ToastService for transient notifications
    provide_context(ToastService::new());

    // Restored preferences take effect on the document once at startup
    Effect::new(move |_| {
        ctx.apply_document_state();
    });

    view! {
        <AppErrorBoundary>
            <AppRoutes />
            <Toaster />
        </AppErrorBoundary>
    }
}
