//! Pages
//!
//! Top-level page components for each dashboard view.

pub mod dashboard;
pub mod special_students;

pub use dashboard::Dashboard;
pub use special_students::SpecialStudents;
