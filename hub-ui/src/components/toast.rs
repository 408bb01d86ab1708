//! Toast Notification Component
//!
//! Submit results and fetch failures surface here.

use leptos::*;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let success = state.success;
    let error = state.error;

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            {move || {
                success.get().map(|msg| view! {
                    <ToastMessage
                        message=msg
                        bg_class="bg-green-600"
                        icon="✓"
                        on_close=move || success.set(None)
                    />
                })
            }}

            {move || {
                error.get().map(|msg| view! {
                    <ToastMessage
                        message=msg
                        bg_class="bg-red-600"
                        icon="✕"
                        on_close=move || error.set(None)
                    />
                })
            }}
        </div>
    }
}

#[component]
fn ToastMessage<F>(
    #[prop(into)]
    message: String,
    bg_class: &'static str,
    icon: &'static str,
    on_close: F,
) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg animate-slide-in",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
            <button class="ml-2 text-white/70 hover:text-white" on:click=move |_| on_close()>
                "×"
            </button>
        </div>
    }
}
