//! KPI Card Component

use leptos::*;

/// Single dashboard number
#[component]
pub fn KpiCard(
    title: &'static str,
    value: u64,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg p-4 shadow border border-gray-100">
            <span class="text-gray-500 text-sm">{title}</span>
            <div class="text-3xl font-bold mt-2 text-gray-900">{value}</div>
        </div>
    }
}
