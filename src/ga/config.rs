//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for the timetabling GA.
///
/// # Defaults
///
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 500);
/// assert_eq!(config.max_generations, 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_max_generations(100)
///     .with_elite_ratio(0.1)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaConfig {
    /// Number of individuals at the start and end of every generation.
    pub population_size: usize,

    /// Number of generations to run. There is no early stop.
    pub max_generations: usize,

    /// Fraction of the population copied unchanged as elites (0.0–1.0).
    ///
    /// The elite count is `floor(population_size * elite_ratio)`.
    pub elite_ratio: f64,

    /// Probability of recombining a parent pair (0.0–1.0).
    ///
    /// When crossover is not applied, both parents are copied.
    pub crossover_rate: f64,

    /// Starting probability of appending a mutated copy after each
    /// reproduction step (0.0–1.0).
    ///
    /// Decays over the run, see [`mutation_decay`](Self::mutation_decay).
    pub mutation_rate: f64,

    /// Decay base for the adaptive mutation probability (0.0 exclusive–1.0).
    ///
    /// After each reproduction step the probability is multiplied by
    /// `mutation_decay ^ average_fitness` of the current generation.
    pub mutation_decay: f64,

    /// Per-field redraw probability inside a mutated schedule (0.0–1.0).
    pub gene_mutation_rate: f64,

    /// Whether to evaluate fitness and niche counts in parallel.
    ///
    /// Only effective with the `parallel` feature. Results are identical
    /// to sequential evaluation.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a seed from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 500,
            max_generations: 50,
            elite_ratio: 0.1,
            crossover_rate: 0.8,
            mutation_rate: 0.1,
            mutation_decay: 0.995,
            gene_mutation_rate: 0.1,
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the elite ratio.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the base adaptive mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation decay base.
    pub fn with_mutation_decay(mut self, decay: f64) -> Self {
        self.mutation_decay = decay.clamp(f64::MIN_POSITIVE, 1.0);
        self
    }

    /// Sets the per-field mutation rate.
    pub fn with_gene_mutation_rate(mut self, rate: f64) -> Self {
        self.gene_mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of elites carried into each next generation.
    pub fn elite_count(&self) -> usize {
        (self.population_size as f64 * self.elite_ratio) as usize
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        for (name, value) in [
            ("elite_ratio", self.elite_ratio),
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
            ("gene_mutation_rate", self.gene_mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability { name, value });
            }
        }
        if !(self.mutation_decay > 0.0 && self.mutation_decay <= 1.0) {
            return Err(ConfigError::InvalidDecay(self.mutation_decay));
        }
        Ok(())
    }
}
