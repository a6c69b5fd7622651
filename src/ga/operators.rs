//! Genetic operators for lesson chromosomes.
//!
//! # Crossover
//!
//! - [`two_point_crossover`]: swaps the middle segment between two parents
//!
//! # Mutation
//!
//! - [`mutate`]: redraws each non-subject field with a fixed probability
//!
//! Both operators return new schedules and never change schedule length.

use rand::Rng;

use crate::timetable::{Catalog, Lesson, Schedule};

// ============================================================================
// Crossover
// ============================================================================

/// Two-point crossover.
///
/// Draws `p1` from `[1, n - 1]`, then `p2` from `(p1, n]`, and builds
///
/// - child1 = `parent1[..p1] ++ parent2[p1..p2] ++ parent1[p2..]`
/// - child2 = `parent2[..p1] ++ parent1[p1..p2] ++ parent2[p2..]`
///
/// Schedules shorter than two lessons have no interior cut point and are
/// returned as copies.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn two_point_crossover<R: Rng>(
    parent1: &[Lesson],
    parent2: &[Lesson],
    rng: &mut R,
) -> (Schedule, Schedule) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let p1 = rng.random_range(1..n);
    let p2 = rng.random_range(p1 + 1..=n);

    (
        splice(parent1, parent2, p1, p2),
        splice(parent2, parent1, p1, p2),
    )
}

/// `base` with positions `start..end` taken from `donor`.
fn splice(base: &[Lesson], donor: &[Lesson], start: usize, end: usize) -> Schedule {
    let mut child = Vec::with_capacity(base.len());
    child.extend_from_slice(&base[..start]);
    child.extend_from_slice(&donor[start..end]);
    child.extend_from_slice(&base[end..]);
    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Field mutation.
///
/// For every lesson, each of teacher, group, time and room is independently
/// redrawn uniformly from its domain with probability `rate`. The subject is
/// never touched.
pub fn mutate<R: Rng>(catalog: &Catalog, schedule: &[Lesson], rate: f64, rng: &mut R) -> Schedule {
    schedule
        .iter()
        .map(|lesson| {
            let mut out = *lesson;
            if rng.random_range(0.0..1.0) < rate {
                out.teacher = rng.random_range(0..catalog.teacher_count());
            }
            if rng.random_range(0.0..1.0) < rate {
                out.group = rng.random_range(0..catalog.group_count());
            }
            if rng.random_range(0.0..1.0) < rate {
                out.time = rng.random_range(1..=catalog.classes_per_day());
            }
            if rng.random_range(0.0..1.0) < rate {
                out.room = rng.random_range(0..catalog.room_count());
            }
            out
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
