//! Progress reporting hook.

/// Receives the best fitness of every generation.
///
/// Observers see results only; they cannot touch the random stream, so a
/// seeded run produces the same numbers with or without one attached.
///
/// Any `FnMut(usize, f64)` closure is an observer:
///
/// ```
/// use u_timetable::ga::GenerationObserver;
///
/// let mut seen = Vec::new();
/// let mut observer = |generation: usize, best: f64| seen.push((generation, best));
/// observer.on_generation(1, 0.25);
/// assert_eq!(seen, vec![(1, 0.25)]);
/// ```
pub trait GenerationObserver {
    /// Called once per generation with its 1-based index and best fitness.
    fn on_generation(&mut self, generation: usize, best_fitness: f64);
}

impl<F: FnMut(usize, f64)> GenerationObserver for F {
    fn on_generation(&mut self, generation: usize, best_fitness: f64) {
        self(generation, best_fitness)
    }
}
