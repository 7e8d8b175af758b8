use crate::state::toast::{use_toasts, ToastKind};
use leptos::*;

fn toast_classes(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => {
            "bg-status-success-bg border-status-success-border text-status-success-text"
        }
        ToastKind::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_toasts();
    let toasts = store.toasts();
    view! {
        <div class="fixed bottom-4 right-4 z-[80] flex flex-col gap-2 w-80" aria-live="polite">
            <For each=move || toasts.get() key=|toast| toast.id let:toast>
                <div
                    class=format!("border rounded shadow px-4 py-3 flex items-start justify-between gap-3 {}", toast_classes(toast.kind))
                    role=if toast.kind == ToastKind::Error { "alert" } else { "status" }
                >
                    <p class="text-sm">{toast.message.clone()}</p>
                    <button
                        type="button"
                        aria-label="Dismiss"
                        class="text-sm opacity-70 hover:opacity-100"
                        on:click=move |_| store.dismiss(toast.id)
                    >
                        "✕"
                    </button>
                </div>
            </For>
        </div>
    }
}
