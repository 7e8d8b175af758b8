use crate::api::LeaveStatus;
use leptos::*;

pub fn status_classes(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Pending => "bg-status-warning-bg text-status-warning-text",
        LeaveStatus::Approved => "bg-status-success-bg text-status-success-text",
        LeaveStatus::Rejected => "bg-status-error-bg text-status-error-text",
        LeaveStatus::Unknown => "bg-surface-muted text-fg-muted",
    }
}

#[component]
pub fn StatusBadge(status: LeaveStatus) -> impl IntoView {
    view! {
        <span class=format!("inline-flex rounded-full px-2 py-0.5 text-xs font-semibold {}", status_classes(status))>
            {status.label()}
        </span>
    }
}

/// Badge plus approve/reject buttons while the request is still pending.
#[component]
pub fn StatusChip(
    status: LeaveStatus,
    on_change: Callback<LeaveStatus>,
    #[prop(optional, into)] busy: MaybeSignal<bool>,
) -> impl IntoView {
    let decidable = status == LeaveStatus::Pending;
    view! {
        <div class="flex items-center gap-2">
            <StatusBadge status=status />
            <Show when=move || decidable>
                <button
                    type="button"
                    class="text-xs font-semibold text-status-success-text hover:underline disabled:opacity-50"
                    disabled=move || busy.get()
                    on:click=move |_| on_change.call(LeaveStatus::Approved)
                >
                    "Approve"
                </button>
                <button
                    type="button"
                    class="text-xs font-semibold text-status-error-text hover:underline disabled:opacity-50"
                    disabled=move || busy.get()
                    on:click=move |_| on_change.call(LeaveStatus::Rejected)
                >
                    "Reject"
                </button>
            </Show>
        </div>
    }
}
