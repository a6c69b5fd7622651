//! Fitness sharing for diversity-preserving survival.
//!
//! Each individual's fitness is divided by its niche count, the summed
//! similarity to every member of the population (itself included). Crowded
//! regions of the search space are penalized, so survivors stay diverse.
//!
//! # References
//!
//! - Goldberg & Richardson (1987), "Genetic Algorithms with Sharing for
//!   Multimodal Function Optimization"

use std::cmp::Ordering;

use super::fitness::evaluate_population;
use crate::timetable::{Catalog, Lesson, Schedule};

/// Normalized Hamming distance: the fraction of positions whose lessons
/// differ in any field. Lies in `[0, 1]`.
///
/// # Panics
/// Panics if the schedules have different lengths.
pub fn distance(a: &[Lesson], b: &[Lesson]) -> f64 {
    assert_eq!(a.len(), b.len(), "schedules must have equal length");
    if a.is_empty() {
        return 0.0;
    }
    let differing = a.iter().zip(b).filter(|(x, y)| x != y).count();
    differing as f64 / a.len() as f64
}

/// Niche count of every individual: `Σ_other (1 - distance)`.
///
/// Always at least 1, from the individual's own term.
pub fn niche_counts(population: &[Schedule], parallel: bool) -> Vec<f64> {
    let niche = |s: &Schedule| -> f64 {
        population
            .iter()
            .map(|other| 1.0 - distance(s, other))
            .sum()
    };

    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;
        return population.par_iter().map(niche).collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    population.iter().map(niche).collect()
}

/// Shared fitness of every individual: raw fitness over niche count.
pub fn shared_fitness(catalog: &Catalog, population: &[Schedule], parallel: bool) -> Vec<f64> {
    let raw = evaluate_population(catalog, population, parallel);
    let niches = niche_counts(population, parallel);
    raw.iter().zip(&niches).map(|(f, n)| f / n).collect()
}

/// Reorders the population by shared fitness, best first.
///
/// The output has the same cardinality as the input; ties keep their input
/// order. Callers truncate to the survivor count they need.
pub fn fitness_sharing(catalog: &Catalog, population: Vec<Schedule>, parallel: bool) -> Vec<Schedule> {
    let shared = shared_fitness(catalog, &population, parallel);
    let mut ranked: Vec<(f64, Schedule)> = shared.into_iter().zip(population).collect();
    ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    ranked.into_iter().map(|(_, s)| s).collect()
}
