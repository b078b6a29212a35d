//! Stat Card Component
//!
//! Displays a single headline number for the current view.

use leptos::*;

/// Stat card component
#[component]
pub fn StatCard(
    /// Caption shown above the value
    label: &'static str,
    /// Headline number
    value: u64,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <span class="text-gray-400 text-sm">{label}</span>
            <div class="text-3xl font-bold mt-2">{value}</div>
        </div>
    }
}
