//! Table Components
//!
//! The general interaction table with its non-participants list, and the
//! special-students summary table.

use leptos::*;
use std::collections::BTreeMap;

use crate::state::global::{special_student_summaries, AggregateSlice, SessionCounts};

/// General interaction table plus the non-participants list.
///
/// Rows exclude attendees with zero interactions and are ordered by count
/// descending; non-participants render in document order.
#[component]
pub fn InteractionTable(slice: AggregateSlice) -> impl IntoView {
    let rows = slice.sorted_interactions();
    let non_participants = slice.non_participants.clone();

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Interactions"</h2>

            <div id="interaction-table">
                {if rows.is_empty() {
                    view! {
                        <p class="text-gray-400 text-sm">"No interactions recorded"</p>
                    }
                    .into_view()
                } else {
                    view! {
                        <table class="w-full text-left">
                            <thead>
                                <tr class="text-gray-400 text-sm border-b border-gray-700">
                                    <th class="py-2">"Attendee"</th>
                                    <th class="py-2">"Interaction Count"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|(attendee, count)| {
                                        view! {
                                            <tr class="border-b border-gray-700 last:border-0">
                                                <td class="py-2">{attendee}</td>
                                                <td class="py-2">{count}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_view()
                }}
            </div>

            <h3 class="text-lg font-semibold mt-6 mb-2">"Non-Participants"</h3>
            {if non_participants.is_empty() {
                view! {
                    <p class="text-gray-400 text-sm">"Everyone participated"</p>
                }
                .into_view()
            } else {
                view! {
                    <ul
                        id="nonParticipantsList"
                        class="list-disc list-inside text-gray-300 space-y-1"
                    >
                        {non_participants
                            .into_iter()
                            .map(|attendee| view! { <li>{attendee}</li> })
                            .collect_view()}
                    </ul>
                }
                .into_view()
            }}
        </section>
    }
}

/// Special-students summary table: one row per student with sessions
/// attended and total interactions, most interactions first.
#[component]
pub fn SpecialStudentsTable(students: BTreeMap<String, SessionCounts>) -> impl IntoView {
    let rows = special_student_summaries(&students);

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Participation Summary"</h2>

            <div id="interaction-table">
                {if rows.is_empty() {
                    view! {
                        <p class="text-gray-400 text-sm">"No special students in this document"</p>
                    }
                    .into_view()
                } else {
                    view! {
                        <table class="w-full text-left">
                            <thead>
                                <tr class="text-gray-400 text-sm border-b border-gray-700">
                                    <th class="py-2">"Special Student"</th>
                                    <th class="py-2">"Sessions Attended"</th>
                                    <th class="py-2">"Total Interactions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|row| {
                                        view! {
                                            <tr class="border-b border-gray-700 last:border-0">
                                                <td class="py-2">{row.name}</td>
                                                <td class="py-2">{row.sessions_attended}</td>
                                                <td class="py-2">{row.total_interactions}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_view()
                }}
            </div>
        </section>
    }
}
