//! Random population initialization.
//!
//! No validation happens here: a teacher drawn for a subject outside their
//! repertoire is a legal gene that the fitness evaluator penalizes later.

use rand::Rng;

use crate::timetable::{Catalog, Lesson, Schedule};

/// Draws one lesson for `subject` with uniform teacher, group, time and room.
pub fn random_lesson<R: Rng>(catalog: &Catalog, subject: usize, rng: &mut R) -> Lesson {
    Lesson {
        subject,
        teacher: rng.random_range(0..catalog.teacher_count()),
        group: rng.random_range(0..catalog.group_count()),
        time: rng.random_range(1..=catalog.classes_per_day()),
        room: rng.random_range(0..catalog.room_count()),
    }
}

/// Builds one random schedule: position `i` holds the lesson for subject `i`.
pub fn generate_schedule<R: Rng>(catalog: &Catalog, rng: &mut R) -> Schedule {
    (0..catalog.subject_count())
        .map(|subject| random_lesson(catalog, subject, rng))
        .collect()
}

/// Builds `size` independent random schedules.
pub fn generate_population<R: Rng>(catalog: &Catalog, size: usize, rng: &mut R) -> Vec<Schedule> {
    (0..size).map(|_| generate_schedule(catalog, rng)).collect()
}
