//! State Management
//!
//! Typed interaction document and global application state.

pub mod global;

pub use global::{
    provide_global_state, AggregateSlice, GlobalState, InteractionDocument, Page, SessionCounts,
};
