//! Global Application State
//!
//! The typed interaction document, derived table rows, page resolution,
//! and the reactive state shared by all components.

use leptos::*;
use std::collections::BTreeMap;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// The interaction document, once loaded
    pub document: RwSignal<Option<InteractionDocument>>,
    /// True while the document fetch is in flight
    pub loading: RwSignal<bool>,
}

/// Per-student interaction counts keyed by session id
pub type SessionCounts = BTreeMap<String, u64>;

/// Root of the pre-aggregated interaction document.
///
/// Decoded once at load. Every field defaults to empty, so a partially
/// populated document renders empty views instead of failing.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InteractionDocument {
    #[serde(default)]
    pub aggregate: AggregateSlice,
    #[serde(default)]
    pub by_date: BTreeMap<String, AggregateSlice>,
    #[serde(default)]
    pub special_students: BTreeMap<String, SessionCounts>,
}

/// One view's worth of aggregated interaction statistics
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct AggregateSlice {
    /// Interactions per attendee
    #[serde(default)]
    pub interaction_counts: BTreeMap<String, u64>,
    /// Participant count per time bucket
    #[serde(default)]
    pub participation_over_time: BTreeMap<String, u64>,
    /// Attendees with no recorded participation
    #[serde(default)]
    pub non_participants: Vec<String>,
    #[serde(default)]
    pub total_participants: u64,
    #[serde(default)]
    pub total_non_participants: u64,
}

impl AggregateSlice {
    /// Table rows: attendees with at least one interaction, most active
    /// first. Ties keep whatever order the stable sort yields.
    pub fn sorted_interactions(&self) -> Vec<(String, u64)> {
        let mut rows: Vec<(String, u64)> = self
            .interaction_counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(name, count)| (name.clone(), *count))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        rows
    }
}

/// Summary row for one special student
#[derive(Clone, Debug, PartialEq)]
pub struct StudentSummary {
    pub name: String,
    pub sessions_attended: usize,
    pub total_interactions: u64,
}

/// Per-student summaries, sorted by total interactions descending
pub fn special_student_summaries(
    students: &BTreeMap<String, SessionCounts>,
) -> Vec<StudentSummary> {
    let mut rows: Vec<StudentSummary> = students
        .iter()
        .map(|(name, sessions)| StudentSummary {
            name: name.clone(),
            sessions_attended: sessions.len(),
            total_interactions: sessions.values().sum(),
        })
        .collect();
    rows.sort_by(|a, b| b.total_interactions.cmp(&a.total_interactions));
    rows
}

/// The view selected by the `page` query parameter
#[derive(Clone, Debug, PartialEq)]
pub enum Page {
    Aggregate,
    Date(String),
    SpecialStudents,
    NotFound,
}

impl Page {
    /// Resolve the `page` query parameter against the document.
    ///
    /// An absent or empty parameter selects the aggregate view. Anything
    /// that is neither a fixed view nor a known date key is Not Found, a
    /// terminal UI state rather than an error.
    pub fn resolve(param: Option<&str>, doc: &InteractionDocument) -> Page {
        match param {
            None | Some("") | Some("aggregate") => Page::Aggregate,
            Some("special_students") => Page::SpecialStudents,
            Some(date) if doc.by_date.contains_key(date) => Page::Date(date.to_string()),
            Some(_) => Page::NotFound,
        }
    }

    /// Heading shown for this view
    pub fn title(&self) -> String {
        match self {
            Page::Aggregate => "Aggregate Data".to_string(),
            Page::Date(date) => format!("Data for {}", date),
            Page::SpecialStudents => "Special Students Data".to_string(),
            Page::NotFound => "Page Not Found".to_string(),
        }
    }

    /// The slice backing a general (aggregate or per-date) view
    pub fn slice<'a>(&self, doc: &'a InteractionDocument) -> Option<&'a AggregateSlice> {
        match self {
            Page::Aggregate => Some(&doc.aggregate),
            Page::Date(date) => doc.by_date.get(date),
            _ => None,
        }
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        document: create_rw_signal(None),
        loading: create_rw_signal(false),
    };

    provide_context(state);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(counts: &[(&str, u64)]) -> AggregateSlice {
        AggregateSlice {
            interaction_counts: counts
                .iter()
                .map(|(name, count)| (name.to_string(), *count))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_sorted_interactions_filters_and_orders() {
        let slice = AggregateSlice {
            interaction_counts: [
                ("A".to_string(), 3),
                ("B".to_string(), 0),
                ("C".to_string(), 5),
            ]
            .into_iter()
            .collect(),
            non_participants: vec!["D".to_string()],
            total_participants: 8,
            total_non_participants: 1,
            ..Default::default()
        };

        let rows = slice.sorted_interactions();
        assert_eq!(
            rows,
            vec![("C".to_string(), 5), ("A".to_string(), 3)],
            "zero-count attendees are excluded and rows are count-descending"
        );
    }

    #[test]
    fn test_sorted_interactions_empty_slice() {
        assert!(AggregateSlice::default().sorted_interactions().is_empty());
    }

    #[test]
    fn test_special_student_summaries() {
        let students: BTreeMap<String, SessionCounts> = [
            (
                "Dana".to_string(),
                [("s1".to_string(), 2), ("s2".to_string(), 1)]
                    .into_iter()
                    .collect(),
            ),
            (
                "Eli".to_string(),
                [
                    ("s1".to_string(), 4),
                    ("s2".to_string(), 3),
                    ("s3".to_string(), 0),
                ]
                .into_iter()
                .collect(),
            ),
        ]
        .into_iter()
        .collect();

        let rows = special_student_summaries(&students);
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].name, "Eli");
        assert_eq!(rows[0].sessions_attended, 3);
        assert_eq!(rows[0].total_interactions, 7);

        assert_eq!(rows[1].name, "Dana");
        assert_eq!(rows[1].sessions_attended, 2);
        assert_eq!(rows[1].total_interactions, 3);
    }

    #[test]
    fn test_page_resolve_defaults_to_aggregate() {
        let doc = InteractionDocument::default();
        assert_eq!(Page::resolve(None, &doc), Page::Aggregate);
        assert_eq!(Page::resolve(Some(""), &doc), Page::Aggregate);
        assert_eq!(Page::resolve(Some("aggregate"), &doc), Page::Aggregate);
    }

    #[test]
    fn test_page_resolve_known_date() {
        let mut doc = InteractionDocument::default();
        doc.by_date
            .insert("2024-01-01".to_string(), slice(&[("A", 1)]));

        let page = Page::resolve(Some("2024-01-01"), &doc);
        assert_eq!(page, Page::Date("2024-01-01".to_string()));
        assert_eq!(page.title(), "Data for 2024-01-01");
        assert_eq!(
            page.slice(&doc).unwrap().interaction_counts.get("A"),
            Some(&1)
        );
    }

    #[test]
    fn test_page_resolve_unknown_is_not_found() {
        let mut doc = InteractionDocument::default();
        doc.by_date
            .insert("2024-01-01".to_string(), AggregateSlice::default());

        let page = Page::resolve(Some("unknown"), &doc);
        assert_eq!(page, Page::NotFound);
        assert_eq!(page.title(), "Page Not Found");
        assert!(page.slice(&doc).is_none());
    }

    #[test]
    fn test_page_resolve_special_students() {
        let doc = InteractionDocument::default();
        let page = Page::resolve(Some("special_students"), &doc);
        assert_eq!(page, Page::SpecialStudents);
        assert_eq!(page.title(), "Special Students Data");
        assert!(page.slice(&doc).is_none());
    }

    #[test]
    fn test_aggregate_slice_for_empty_document() {
        let doc = InteractionDocument::default();
        let page = Page::resolve(None, &doc);
        assert_eq!(page.slice(&doc), Some(&AggregateSlice::default()));
    }

    #[test]
    fn test_document_decodes_with_missing_fields() {
        let doc: InteractionDocument = serde_json::from_str("{}").unwrap();
        assert_eq!(doc, InteractionDocument::default());

        // A sparse slice decodes to empty defaults, never an error.
        let doc: InteractionDocument =
            serde_json::from_str(r#"{"by_date": {"2024-01-01": {"total_participants": 4}}}"#)
                .unwrap();
        let slice = &doc.by_date["2024-01-01"];
        assert_eq!(slice.total_participants, 4);
        assert!(slice.interaction_counts.is_empty());
        assert!(slice.non_participants.is_empty());
    }

    #[test]
    fn test_document_decodes_full_shape() {
        let doc: InteractionDocument = serde_json::from_str(
            r#"{
                "aggregate": {
                    "interaction_counts": {"Ana": 3, "Ben": 0},
                    "participation_over_time": {"09:00": 5, "09:15": 7},
                    "non_participants": ["Cleo"],
                    "total_participants": 7,
                    "total_non_participants": 1
                },
                "by_date": {"2024-01-01": {"interaction_counts": {"Ana": 2}}},
                "special_students": {"Dana": {"session-1": 2, "session-2": 1}}
            }"#,
        )
        .unwrap();

        assert_eq!(doc.aggregate.interaction_counts.len(), 2);
        assert_eq!(doc.aggregate.participation_over_time["09:15"], 7);
        assert_eq!(doc.aggregate.non_participants, vec!["Cleo".to_string()]);
        assert_eq!(doc.by_date["2024-01-01"].interaction_counts["Ana"], 2);
        assert_eq!(doc.special_students["Dana"]["session-2"], 1);
    }
}
