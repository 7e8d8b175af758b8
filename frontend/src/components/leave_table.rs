use crate::{
    api::{LeaveRequest, LeaveStatus},
    components::{
        empty_state::EmptyRow,
        status_chip::{StatusBadge, StatusChip},
    },
    utils::time::format_date,
};
use leptos::*;

/// Leave requests as a table. With `on_decide` the rows gain an employee column and
/// approve/reject controls.
#[component]
pub fn LeaveTable(
    rows: Signal<Vec<LeaveRequest>>,
    #[prop(optional)] on_decide: Option<Callback<(String, LeaveStatus)>>,
    #[prop(optional, into)] busy: MaybeSignal<bool>,
) -> impl IntoView {
    let admin = on_decide.is_some();
    let columns = if admin { 6 } else { 5 };
    view! {
        <div class="overflow-x-auto rounded-lg border border-border">
            <table class="min-w-full divide-y divide-border text-sm">
                <thead class="bg-surface-muted text-left text-fg-muted">
                    <tr>
                        {admin.then(|| view! { <th class="px-4 py-2">"Employee"</th> })}
                        <th class="px-4 py-2">"Type"</th>
                        <th class="px-4 py-2">"Period"</th>
                        <th class="px-4 py-2">"Days"</th>
                        <th class="px-4 py-2">"Reason"</th>
                        <th class="px-4 py-2">"Status"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {move || {
                        let rows = rows.get();
                        if rows.is_empty() {
                            return view! { <EmptyRow colspan=columns /> }.into_view();
                        }
                        rows.into_iter()
                            .map(|request| {
                                let status_cell = match on_decide {
                                    Some(on_decide) => {
                                        let id = request.id.clone();
                                        view! {
                                            <StatusChip
                                                status=request.status
                                                on_change=Callback::new(move |status| on_decide.call((id.clone(), status)))
                                                busy=busy
                                            />
                                        }
                                        .into_view()
                                    }
                                    None => view! { <StatusBadge status=request.status /> }.into_view(),
                                };
                                view! {
                                    <tr>
                                        {admin.then(|| view! {
                                            <td class="px-4 py-2">{request.employee_name.clone().unwrap_or_default()}</td>
                                        })}
                                        <td class="px-4 py-2">{request.leave_type.clone()}</td>
                                        <td class="px-4 py-2">
                                            {format!("{} to {}", format_date(request.start_date), format_date(request.end_date))}
                                        </td>
                                        <td class="px-4 py-2">{request.days()}</td>
                                        <td class="px-4 py-2">{request.reason.clone().unwrap_or_default()}</td>
                                        <td class="px-4 py-2">{status_cell}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
