//! Genetic-algorithm class timetabling.
//!
//! Searches for a conflict-minimizing weekly timetable by evolving a
//! population of candidate schedules:
//!
//! - **Timetable model**: [`timetable::Lesson`] genes, fixed-length
//!   [`timetable::Schedule`] chromosomes, and the read-only
//!   [`timetable::Catalog`] of subjects, teachers, groups, rooms and rules.
//! - **Genetic Algorithm**: conflict-counting fitness, two-point crossover,
//!   field mutation, pairwise repair and fitness sharing, driven for a fixed
//!   number of generations by [`ga::GaRunner`].
//!
//! The search is best-effort: it returns the best schedule it saw, which is
//! not guaranteed to be conflict-free.
//!
//! # Example
//!
//! ```
//! use u_timetable::ga::{GaConfig, GaRunner};
//! use u_timetable::timetable::Catalog;
//!
//! let catalog = Catalog::new(["Algebra", "Mechanics"], ["Ivanenko", "Petrenko"], ["MAT-21"], ["01", "02"], 4)?
//!     .with_teacher_subjects("Ivanenko", ["Algebra"])
//!     .with_teacher_subjects("Petrenko", ["Mechanics"])
//!     .with_group_subjects("MAT-21", ["Algebra", "Mechanics"]);
//!
//! let config = GaConfig::default()
//!     .with_population_size(50)
//!     .with_max_generations(20)
//!     .with_seed(42);
//! let result = GaRunner::run(&catalog, &config)?;
//!
//! for lesson in &result.best {
//!     println!("{}", catalog.describe(lesson));
//! }
//! println!("fitness: {}", result.best_fitness);
//! # Ok::<(), u_timetable::ConfigError>(())
//! ```
//!
//! # Features
//!
//! - `parallel`: evaluates fitness and niche counts with rayon
//! - `serde`: derives `Serialize`/`Deserialize` on the model, config and result

mod error;
pub mod ga;
pub mod random;
pub mod timetable;

pub use error::ConfigError;
