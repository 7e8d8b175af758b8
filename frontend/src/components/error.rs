use crate::api::ApiError;
use leptos::*;

/// Error box under a form or above a table. Shows the server message when there is one.
#[component]
pub fn InlineErrorMessage(
    error: Signal<Option<ApiError>>,
    #[prop(optional, into)] fallback: Option<String>,
) -> impl IntoView {
    let fallback = fallback.unwrap_or_else(|| crate::api::GENERIC_ERROR_MESSAGE.to_string());
    view! {
        <Show when=move || error.with(Option::is_some) fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2" role="alert">
                {
                    let fallback = fallback.clone();
                    move || {
                        error.get().map(|e| {
                            let code = e.code();
                            view! {
                                <div class="font-bold">{e.user_message(&fallback)}</div>
                                <div class="text-xs opacity-75">{"Code: "}{code}</div>
                            }
                        })
                    }
                }
            </div>
        </Show>
    }
}
