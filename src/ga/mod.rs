//! Genetic algorithm for class timetabling.
//!
//! Evolves a population of [`Schedule`](crate::timetable::Schedule)s against
//! a [`Catalog`](crate::timetable::Catalog), minimizing conflicts.
//!
//! # Generation cycle
//!
//! 1. Evaluate every schedule ([`fitness`])
//! 2. Record the generation best and copy the top elites
//! 3. Reproduce: uniform parent picks, [`two_point_crossover`] followed by
//!    [`resolve_conflicts`], or plain copies
//! 4. Append adaptively decaying [`mutate`]d copies
//! 5. Rank elites plus offspring by [`fitness_sharing`] and keep the top
//!    `population_size`
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best schedule found and per-generation history
//! - [`ConflictReport`]: Per-term conflict breakdown
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Goldberg & Richardson (1987), "Genetic Algorithms with Sharing for
//!   Multimodal Function Optimization"

mod config;
pub mod fitness;
pub mod operators;
pub mod population;
pub mod repair;
mod runner;
pub mod sharing;
mod types;

pub use config::GaConfig;
pub use fitness::{count_conflicts, fitness, ConflictReport};
pub use operators::{mutate, two_point_crossover};
pub use population::{generate_population, generate_schedule};
pub use repair::resolve_conflicts;
pub use runner::{GaResult, GaRunner};
pub use sharing::{distance, fitness_sharing};
pub use types::GenerationObserver;
