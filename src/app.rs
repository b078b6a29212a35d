//! App Root Component
//!
//! Loads the interaction document once on startup and dispatches the
//! selected view from the `page` query parameter.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{Loading, Nav};
use crate::pages::{Dashboard, SpecialStudents};
use crate::state::global::{provide_global_state, GlobalState, Page};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // The one asynchronous step: fetch and decode the document. On failure
    // the error goes to the console and nav and page stay unrendered.
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);
            match api::fetch_interaction_document().await {
                Ok(document) => {
                    state.document.set(Some(document));
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Could not load interaction data: {}", e).into(),
                    );
                }
            }
            state.loading.set(false);
        });
    });

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/*any" view=PageView />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Resolves the `page` query parameter and mounts the matching view
#[component]
fn PageView() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let query = use_query_map();

    view! {
        {move || {
            let loading = state.loading.get();
            match state.document.get() {
                None if loading => view! { <Loading /> }.into_view(),
                // A failed load renders nothing; the error is on the console.
                None => view! {}.into_view(),
                Some(doc) => {
                    let page = query
                        .with(|q| Page::resolve(q.get("page").map(|s| s.as_str()), &doc));
                    match &page {
                        Page::Aggregate | Page::Date(_) => {
                            let slice = page.slice(&doc).cloned().unwrap_or_default();
                            view! { <Dashboard title=page.title() slice=slice /> }.into_view()
                        }
                        Page::SpecialStudents => {
                            view! {
                                <SpecialStudents
                                    title=page.title()
                                    students=doc.special_students.clone()
                                />
                            }
                            .into_view()
                        }
                        Page::NotFound => view! { <NotFound /> }.into_view(),
                    }
                }
            }
        }}
    }
}

/// Terminal view for an unrecognized page value
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 id="page-title" class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">
                "The requested view doesn't exist in this document."
            </p>
            <a
                href="?page=aggregate"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors"
            >
                "Go to Aggregate Data"
            </a>
        </div>
    }
}
