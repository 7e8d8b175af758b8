use leptos::*;

pub const NO_RECORDS: &str = "No records found";

/// Full-width table row shown when a list or search has nothing to show.
#[component]
pub fn EmptyRow(colspan: u32, #[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <tr>
            <td colspan=colspan class="px-4 py-6 text-center text-sm text-fg-muted">
                {message.unwrap_or_else(|| NO_RECORDS.to_string())}
            </td>
        </tr>
    }
}
