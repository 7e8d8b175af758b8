use crate::{
    api::AttendanceRecord,
    components::empty_state::EmptyRow,
    utils::time::{format_clock, format_date, format_hours},
};
use leptos::*;

#[component]
pub fn AttendanceTable(
    rows: Signal<Vec<AttendanceRecord>>,
    #[prop(optional)] show_employee: bool,
) -> impl IntoView {
    let columns = if show_employee { 5 } else { 4 };
    view! {
        <div class="overflow-x-auto rounded-lg border border-border">
            <table class="min-w-full divide-y divide-border text-sm">
                <thead class="bg-surface-muted text-left text-fg-muted">
                    <tr>
                        {show_employee.then(|| view! { <th class="px-4 py-2">"Employee"</th> })}
                        <th class="px-4 py-2">"Date"</th>
                        <th class="px-4 py-2">"Check-in"</th>
                        <th class="px-4 py-2">"Check-out"</th>
                        <th class="px-4 py-2">"Hours"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {move || {
                        let rows = rows.get();
                        if rows.is_empty() {
                            return view! { <EmptyRow colspan=columns /> }.into_view();
                        }
                        rows.into_iter()
                            .map(|record| {
                                view! {
                                    <tr>
                                        {show_employee.then(|| view! {
                                            <td class="px-4 py-2">{record.employee_name.clone().unwrap_or_default()}</td>
                                        })}
                                        <td class="px-4 py-2">{format_date(record.date)}</td>
                                        <td class="px-4 py-2">{format_clock(record.check_in)}</td>
                                        <td class="px-4 py-2">{format_clock(record.check_out)}</td>
                                        <td class="px-4 py-2">{format_hours(record.worked_hours)}</td>
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
