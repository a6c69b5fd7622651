//! Conflict counting and fitness.
//!
//! A schedule's fitness is `1 / (1 + conflicts)`, so it lies in `(0, 1]`
//! and equals 1 exactly for a conflict-free schedule. Conflicts are the sum
//! of four independent terms, see [`ConflictReport`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::timetable::{Catalog, Lesson};

/// Per-term conflict counts for one schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConflictReport {
    /// Pairwise slot collisions. A pair clashing on group, teacher and room
    /// at once contributes 3.
    pub collisions: usize,
    /// Lessons whose teacher is not authorized for the subject.
    pub teacher_mismatches: usize,
    /// Lessons whose group does not take the subject.
    pub group_mismatches: usize,
    /// Consecutive same-teacher runs whose summed `time` exceeds the
    /// teacher's workload limit.
    pub overloads: usize,
}

impl ConflictReport {
    /// Sum of all terms.
    pub fn total(&self) -> usize {
        self.collisions + self.teacher_mismatches + self.group_mismatches + self.overloads
    }

    /// Fitness derived from the total: `1 / (1 + total)`.
    pub fn fitness(&self) -> f64 {
        1.0 / (1.0 + self.total() as f64)
    }
}

/// Counts every conflict term of `schedule` against `catalog`.
pub fn count_conflicts(catalog: &Catalog, schedule: &[Lesson]) -> ConflictReport {
    ConflictReport {
        collisions: count_collisions(schedule),
        teacher_mismatches: schedule
            .iter()
            .filter(|l| !catalog.can_teach(l.teacher, l.subject))
            .count(),
        group_mismatches: schedule
            .iter()
            .filter(|l| !catalog.group_takes(l.group, l.subject))
            .count(),
        overloads: count_overloads(catalog, schedule),
    }
}

/// Fitness of `schedule` in `(0, 1]`, higher is better.
pub fn fitness(catalog: &Catalog, schedule: &[Lesson]) -> f64 {
    count_conflicts(catalog, schedule).fitness()
}

/// Evaluates every schedule, keeping population order.
pub fn evaluate_population<S: AsRef<[Lesson]> + Sync>(
    catalog: &Catalog,
    population: &[S],
    parallel: bool,
) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;
        return population
            .par_iter()
            .map(|s| fitness(catalog, s.as_ref()))
            .collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    population
        .iter()
        .map(|s| fitness(catalog, s.as_ref()))
        .collect()
}

/// Counts group, teacher and room clashes over all unordered pairs.
///
/// Each triggered condition counts separately.
fn count_collisions(schedule: &[Lesson]) -> usize {
    let mut count = 0;
    for (i, a) in schedule.iter().enumerate() {
        for b in &schedule[i + 1..] {
            count += usize::from(a.group_clash(b))
                + usize::from(a.teacher_clash(b))
                + usize::from(a.room_clash(b));
        }
    }
    count
}

/// Counts overloaded runs of consecutive lessons sharing a teacher.
///
/// Lessons of one teacher separated by another teacher's lesson form
/// separate runs and are never summed together. A run's workload is the sum
/// of its `time` values.
fn count_overloads(catalog: &Catalog, schedule: &[Lesson]) -> usize {
    schedule
        .chunk_by(|a, b| a.teacher == b.teacher)
        .filter(|run| {
            let teacher = run[0].teacher;
            let hours: u64 = run.iter().map(|l| u64::from(l.time)).sum();
            catalog
                .max_hours(teacher)
                .is_some_and(|limit| hours > u64::from(limit))
        })
        .count()
}
