//! Dashboard Page
//!
//! General interaction view backing both the aggregate page and the
//! per-date pages.

use leptos::*;

use crate::components::{GeneralCharts, InteractionTable, StatCard};
use crate::state::global::AggregateSlice;

/// General interaction view for one slice of the document
#[component]
pub fn Dashboard(
    /// Heading for this view
    title: String,
    /// The slice to render
    slice: AggregateSlice,
) -> impl IntoView {
    let attendees_tracked = slice.interaction_counts.len() as u64;

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 id="page-title" class="text-3xl font-bold">{title}</h1>
                <p class="text-gray-400 mt-1">"Attendee interactions at a glance"</p>
            </div>

            // Summary row
            <section>
                <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                    <StatCard label="Participants" value=slice.total_participants />
                    <StatCard label="Non-Participants" value=slice.total_non_participants />
                    <StatCard label="Attendees Tracked" value=attendees_tracked />
                </div>
            </section>

            // Table and non-participants list
            <InteractionTable slice=slice.clone() />

            // Charts
            <GeneralCharts slice=slice />
        </div>
    }
}
