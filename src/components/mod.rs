//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod nav;
pub mod table;
pub mod chart;
pub mod stat_card;
pub mod loading;

pub use nav::Nav;
pub use table::{InteractionTable, SpecialStudentsTable};
pub use chart::{GeneralCharts, SpecialStudentsCharts};
pub use stat_card::StatCard;
pub use loading::Loading;
