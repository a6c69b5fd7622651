//! Configuration errors.
//!
//! Every condition that makes random draws or crossover point selection
//! impossible is rejected up front, before the first generation runs.

/// Invalid catalog or run configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("subject set must not be empty")]
    EmptySubjects,
    #[error("teacher set must not be empty")]
    EmptyTeachers,
    #[error("group set must not be empty")]
    EmptyGroups,
    #[error("room set must not be empty")]
    EmptyRooms,
    #[error("duplicate {kind} name {name:?}")]
    DuplicateName { kind: &'static str, name: String },
    #[error("{table} has {found} entries, expected {expected}")]
    RuleTableMismatch {
        table: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("classes_per_day must be at least 1, got {0}")]
    InvalidClassesPerDay(u32),
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    #[error("max_generations must be at least 1")]
    ZeroGenerations,
    #[error("{name} must be within [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },
    #[error("mutation_decay must be within (0, 1], got {0}")]
    InvalidDecay(f64),
}
