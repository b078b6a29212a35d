//! Navigation Component
//!
//! Header navigation bar with one link per view in the document.

use leptos::*;

use crate::state::global::{GlobalState, InteractionDocument};

/// A single navigation entry
#[derive(Clone, Debug, PartialEq)]
pub struct NavEntry {
    pub label: String,
    pub href: String,
}

/// Build the link list for a document: the aggregate view, one entry per
/// date key, and the special-students view, in that order. Date strings
/// are used verbatim as labels and URL-encoded as query values.
pub fn nav_links(doc: &InteractionDocument) -> Vec<NavEntry> {
    let mut links = vec![NavEntry {
        label: "Aggregate Data".to_string(),
        href: "?page=aggregate".to_string(),
    }];

    for date in doc.by_date.keys() {
        links.push(NavEntry {
            label: date.clone(),
            href: format!("?page={}", urlencoding::encode(date)),
        });
    }

    links.push(NavEntry {
        label: "Special Students".to_string(),
        href: "?page=special_students".to_string(),
    });

    links
}

/// Navigation header component.
///
/// The link list stays unrendered until the document has loaded.
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <a href="?page=aggregate" class="flex items-center space-x-3">
                        <span class="text-2xl">"🎓"</span>
                        <span class="text-xl font-bold text-white">"ClassPulse"</span>
                    </a>

                    // One link per view
                    <div id="nav-links" class="flex items-center space-x-1 flex-wrap">
                        {move || {
                            state.document.get().map(|doc| {
                                nav_links(&doc)
                                    .into_iter()
                                    .map(|entry| view! { <NavLink entry=entry /> })
                                    .collect_view()
                            })
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(entry: NavEntry) -> impl IntoView {
    view! {
        <a
            href=entry.href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
        >
            {entry.label}
        </a>
    }
}
