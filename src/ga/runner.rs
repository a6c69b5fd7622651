//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! evaluation → elitism → reproduction → repair → sharing → repeat.

use std::cmp::Ordering;

use log::{debug, info};
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::config::GaConfig;
use super::fitness::{count_conflicts, evaluate_population, ConflictReport};
use super::operators::{mutate, two_point_crossover};
use super::population::generate_population;
use super::repair::resolve_conflicts;
use super::sharing::fitness_sharing;
use super::types::GenerationObserver;
use crate::error::ConfigError;
use crate::random::create_rng;
use crate::timetable::{Catalog, Schedule};

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaResult {
    /// The best schedule seen in any generation.
    pub best: Schedule,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Conflict breakdown of `best`.
    pub best_conflicts: ConflictReport,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best fitness of each generation, in order.
    ///
    /// Entries are per generation, not a running maximum, so they may dip.
    pub fitness_history: Vec<f64>,

    /// Seed the run was driven by. Passing it back via
    /// [`GaConfig::with_seed`] replays the run exactly.
    pub seed: u64,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_timetable::ga::{GaConfig, GaRunner};
/// use u_timetable::timetable::Catalog;
///
/// let catalog = Catalog::new(["Math", "Physics"], ["Ann", "Bob"], ["G1", "G2"], ["01"], 2)
///     .unwrap()
///     .with_teacher_subjects("Ann", ["Math"])
///     .with_teacher_subjects("Bob", ["Physics"]);
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(10)
///     .with_seed(42);
///
/// let result = GaRunner::run(&catalog, &config).unwrap();
/// assert_eq!(result.best.len(), 2);
/// assert_eq!(result.fitness_history.len(), 10);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the catalog or configuration is invalid.
    pub fn run(catalog: &Catalog, config: &GaConfig) -> Result<GaResult, ConfigError> {
        Self::run_with_observer(catalog, config, |_: usize, _: f64| {})
    }

    /// Runs the GA, reporting each generation's best fitness to `observer`.
    pub fn run_with_observer<O: GenerationObserver>(
        catalog: &Catalog,
        config: &GaConfig,
        mut observer: O,
    ) -> Result<GaResult, ConfigError> {
        catalog.validate()?;
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);

        let pop_size = config.population_size;
        let elite_count = config.elite_count();
        debug!(
            "timetable GA: seed={seed}, population={pop_size}, elites={elite_count}, \
             generations={}, lessons={}",
            config.max_generations,
            catalog.subject_count()
        );

        // 1. Initialize population
        let mut population = generate_population(catalog, pop_size, &mut rng);

        let mut best: Option<(Schedule, f64)> = None;
        let mut fitness_history = Vec::with_capacity(config.max_generations);
        let mut mutation_rate = config.mutation_rate;

        // 2. Evolutionary loop
        for gen in 0..config.max_generations {
            // Evaluate
            let scores = evaluate_population(catalog, &population, config.parallel);

            // Generation best, running best
            let gen_best = best_index(&scores);
            let gen_best_fitness = scores[gen_best];
            if best.as_ref().map_or(true, |(_, f)| gen_best_fitness > *f) {
                best = Some((population[gen_best].clone(), gen_best_fitness));
            }
            fitness_history.push(gen_best_fitness);

            info!("generation {}: best fitness = {gen_best_fitness}", gen + 1);
            observer.on_generation(gen + 1, gen_best_fitness);

            // Elite preservation
            let elites = select_elites(&population, &scores, elite_count);

            let average_fitness = scores.iter().sum::<f64>() / scores.len() as f64;
            let decay = config.mutation_decay.powf(average_fitness);

            // Generate offspring; adaptive mutation may overshoot pop_size
            let mut offspring: Vec<Schedule> = Vec::with_capacity(pop_size + 2);
            while offspring.len() < pop_size {
                let parent1 = &population[rng.random_range(0..population.len())];
                let parent2 = &population[rng.random_range(0..population.len())];

                if rng.random_range(0.0..1.0) < config.crossover_rate {
                    let (child1, child2) = two_point_crossover(parent1, parent2, &mut rng);
                    offspring.push(resolve_conflicts(child1));
                    offspring.push(resolve_conflicts(child2));
                } else {
                    offspring.push(parent1.clone());
                    offspring.push(parent2.clone());
                }

                mutation_rate *= decay;
                if rng.random_range(0.0..1.0) < mutation_rate {
                    let idx = rng.random_range(0..offspring.len());
                    let mutant =
                        mutate(catalog, &offspring[idx], config.gene_mutation_rate, &mut rng);
                    offspring.push(mutant);
                }
            }

            // Share over elites ++ offspring, keep the top pop_size
            let mut next = elites;
            next.extend(offspring);
            let mut next = fitness_sharing(catalog, next, config.parallel);
            next.truncate(pop_size);
            population = next;
        }

        let (best, best_fitness) = best.expect("max_generations >= 1 records a best schedule");
        let best_conflicts = count_conflicts(catalog, &best);
        debug!(
            "timetable GA finished: best fitness = {best_fitness}, conflicts = {}",
            best_conflicts.total()
        );

        Ok(GaResult {
            best,
            best_fitness,
            best_conflicts,
            generations: config.max_generations,
            fitness_history,
            seed,
        })
    }
}

/// Index of the highest score; the first one on ties.
fn best_index(scores: &[f64]) -> usize {
    let mut best = 0;
    for (i, &s) in scores.iter().enumerate().skip(1) {
        if s > scores[best] {
            best = i;
        }
    }
    best
}

/// Copies of the `count` highest-scoring individuals, best first.
///
/// Ties keep population order.
fn select_elites(population: &[Schedule], scores: &[f64], count: usize) -> Vec<Schedule> {
    let mut order: Vec<usize> = (0..population.len()).collect();
    order.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));
    order
        .into_iter()
        .take(count)
        .map(|i| population[i].clone())
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timetable::Lesson;

    /// Two subjects, two matched teachers and groups, one room, one slot.
    fn tiny_catalog() -> Catalog {
        Catalog::new(["Math", "Physics"], ["Ann", "Bob"], ["G1", "G2"], ["01"], 1)
            .unwrap()
            .with_teacher_subjects("Ann", ["Math"])
            .with_teacher_subjects("Bob", ["Physics"])
            .with_group_subjects("G1", ["Math"])
            .with_group_subjects("G2", ["Physics"])
    }

    /// Six-subject university catalog.
    fn university_catalog() -> Catalog {
        Catalog::new(
            ["Calculus", "Programming", "Nuclear physics", "Algebra", "Mechanics", "Project management"],
            ["Mykolenko", "Zinchenko", "Mudryk", "Zabarnyi", "Dovbyk", "Tsygankov"],
            ["MAT-21", "PHY-32", "MAT-22", "PHY-31", "PROG-41", "PROG-42"],
            ["01", "02", "03", "04", "05", "06"],
            5,
        )
        .unwrap()
        .with_teacher_subjects("Mykolenko", ["Calculus", "Algebra"])
        .with_teacher_subjects("Zinchenko", ["Programming", "Project management"])
        .with_teacher_subjects("Mudryk", ["Nuclear physics"])
        .with_teacher_subjects("Zabarnyi", ["Mechanics"])
        .with_teacher_subjects("Dovbyk", ["Programming"])
        .with_teacher_subjects("Tsygankov", ["Project management", "Algebra"])
        .with_group_subjects("MAT-21", ["Calculus", "Algebra"])
        .with_group_subjects("MAT-22", ["Calculus", "Algebra"])
        .with_group_subjects("PROG-41", ["Programming", "Project management"])
        .with_group_subjects("PHY-31", ["Nuclear physics"])
        .with_group_subjects("PHY-32", ["Mechanics"])
        .with_group_subjects("PROG-42", ["Programming"])
        .with_teacher_max_hours("Mykolenko", 20)
        .with_teacher_max_hours("Zinchenko", 30)
        .with_teacher_max_hours("Mudryk", 20)
        .with_teacher_max_hours("Zabarnyi", 10)
        .with_teacher_max_hours("Dovbyk", 30)
        .with_teacher_max_hours("Tsygankov", 20)
    }

    #[test]
    fn test_tiny_end_to_end() {
        let catalog = tiny_catalog();
        let config = GaConfig::default()
            .with_population_size(4)
            .with_max_generations(5)
            .with_seed(42)
            .with_parallel(false);

        let result = GaRunner::run(&catalog, &config).unwrap();

        assert_eq!(result.best.len(), 2);
        assert_eq!(result.generations, 5);
        assert_eq!(result.fitness_history.len(), 5);
        assert!(result.best_fitness >= result.fitness_history[0]);
        let max = result
            .fitness_history
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(result.best_fitness, max);
        // One room, one slot: the two lessons always share a room
        assert!(result.best_conflicts.collisions >= 1);
        assert_eq!(result.best_fitness, result.best_conflicts.fitness());
    }

    #[test]
    fn test_running_best_is_monotone() {
        let catalog = university_catalog();
        let config = GaConfig::default()
            .with_population_size(40)
            .with_max_generations(15)
            .with_seed(7)
            .with_parallel(false);

        let mut running = Vec::new();
        let mut so_far = 0.0_f64;
        let result = GaRunner::run_with_observer(&catalog, &config, |_: usize, f: f64| {
            so_far = so_far.max(f);
            running.push(so_far);
        })
        .unwrap();

        for w in running.windows(2) {
            assert!(w[1] >= w[0]);
        }
        assert_eq!(*running.last().unwrap(), result.best_fitness);
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let catalog = university_catalog();
        let config = GaConfig::default()
            .with_population_size(30)
            .with_max_generations(8)
            .with_seed(2024)
            .with_parallel(false);

        let mut log_a = Vec::new();
        let a = GaRunner::run_with_observer(&catalog, &config, |g: usize, f: f64| {
            log_a.push((g, f))
        })
        .unwrap();
        let mut log_b = Vec::new();
        let b = GaRunner::run_with_observer(&catalog, &config, |g: usize, f: f64| {
            log_b.push((g, f))
        })
        .unwrap();

        assert_eq!(log_a, log_b);
        assert_eq!(a.best, b.best);
        assert_eq!(a.best_fitness.to_bits(), b.best_fitness.to_bits());
        assert_eq!(a.fitness_history, b.fitness_history);
    }

    #[test]
    fn test_replay_from_reported_seed() {
        let catalog = tiny_catalog();
        let config = GaConfig::default()
            .with_population_size(6)
            .with_max_generations(3)
            .with_parallel(false);

        let first = GaRunner::run(&catalog, &config).unwrap();
        let replay = GaRunner::run(&catalog, &config.clone().with_seed(first.seed)).unwrap();
        assert_eq!(first.best, replay.best);
        assert_eq!(first.fitness_history, replay.fitness_history);
    }

    #[test]
    fn test_observer_sees_every_generation() {
        let catalog = tiny_catalog();
        let config = GaConfig::default()
            .with_population_size(4)
            .with_max_generations(6)
            .with_seed(1)
            .with_parallel(false);

        let mut generations = Vec::new();
        let result = GaRunner::run_with_observer(&catalog, &config, |g: usize, _: f64| {
            generations.push(g)
        })
        .unwrap();
        assert_eq!(generations, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(result.fitness_history.len(), 6);
    }

    #[test]
    fn test_fitness_within_bounds() {
        let catalog = university_catalog();
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(5)
            .with_seed(3)
            .with_parallel(false);
        let result = GaRunner::run(&catalog, &config).unwrap();
        for &f in &result.fitness_history {
            assert!(f > 0.0 && f <= 1.0);
        }
        for (i, lesson) in result.best.iter().enumerate() {
            assert_eq!(lesson.subject, i);
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let catalog = tiny_catalog();
        let config = GaConfig::default().with_population_size(1);
        assert_eq!(
            GaRunner::run(&catalog, &config).unwrap_err(),
            ConfigError::PopulationTooSmall(1)
        );

        let config = GaConfig::default().with_max_generations(0);
        assert_eq!(
            GaRunner::run(&catalog, &config).unwrap_err(),
            ConfigError::ZeroGenerations
        );
    }

    #[test]
    fn test_single_subject_catalog() {
        let catalog = Catalog::new(["Math"], ["Ann"], ["G1"], ["01"], 3)
            .unwrap()
            .with_teacher_subjects("Ann", ["Math"])
            .with_group_subjects("G1", ["Math"]);
        let config = GaConfig::default()
            .with_population_size(5)
            .with_max_generations(3)
            .with_seed(42)
            .with_parallel(false);
        let result = GaRunner::run(&catalog, &config).unwrap();
        assert_eq!(result.best.len(), 1);
        assert_eq!(result.best_fitness, 1.0);
    }

    #[test]
    fn test_best_index_first_on_ties() {
        assert_eq!(best_index(&[0.5, 0.9, 0.9, 0.1]), 1);
        assert_eq!(best_index(&[0.3]), 0);
    }

    #[test]
    fn test_select_elites_order() {
        let s = |t: usize| vec![Lesson::new(0, t, 0, 1, 0)];
        let population = vec![s(0), s(1), s(2), s(3)];
        let scores = [0.2, 0.5, 0.5, 1.0];
        let elites = select_elites(&population, &scores, 3);
        assert_eq!(elites, vec![s(3), s(1), s(2)]);
        assert!(select_elites(&population, &scores, 0).is_empty());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let catalog = university_catalog();
        let config = GaConfig::default()
            .with_population_size(30)
            .with_max_generations(6)
            .with_seed(99);
        let seq = GaRunner::run(&catalog, &config.clone().with_parallel(false)).unwrap();
        let par = GaRunner::run(&catalog, &config.with_parallel(true)).unwrap();
        assert_eq!(seq.best, par.best);
        assert_eq!(seq.fitness_history, par.fitness_history);
    }
}
