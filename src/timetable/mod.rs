//! Timetable domain model.
//!
//! - [`Lesson`]: one subject/teacher/group/time/room assignment (a gene)
//! - [`Schedule`]: a full candidate timetable (an individual)
//! - [`Catalog`]: the read-only entity universes and constraint rules

mod catalog;
mod types;

pub use catalog::Catalog;
pub use types::{Lesson, Schedule};
