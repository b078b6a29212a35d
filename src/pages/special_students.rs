//! Special Students Page
//!
//! Per-student session attendance and interaction totals.

use leptos::*;
use std::collections::BTreeMap;

use crate::components::{SpecialStudentsCharts, SpecialStudentsTable};
use crate::state::global::SessionCounts;

/// Special-students view
#[component]
pub fn SpecialStudents(
    /// Heading for this view
    title: String,
    /// Student name → session id → interaction count
    students: BTreeMap<String, SessionCounts>,
) -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 id="page-title" class="text-3xl font-bold">{title}</h1>
                <p class="text-gray-400 mt-1">"Session attendance and interaction totals"</p>
            </div>

            <SpecialStudentsTable students=students.clone() />

            <SpecialStudentsCharts students=students />
        </div>
    }
}
