//! ClassPulse Dashboard
//!
//! Classroom attendee interaction dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Aggregate and per-date interaction tables
//! - Participation charts (bar, pie, horizontal bar, line)
//! - Special-students view with per-student session summaries
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It fetches one pre-aggregated JSON document on startup and
//! renders every view from that document.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
