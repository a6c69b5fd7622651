//! Single-pass pairwise conflict repair.
//!
//! Walks all unordered lesson pairs `(i, j)`, `i < j`, in the same order as
//! the collision count. A pair sharing slot and group swaps its groups;
//! otherwise a pair sharing slot and teacher swaps its times. Room clashes
//! are left alone.
//!
//! A swap only fires when the two exchanged fields are already equal, so
//! the pass never changes field values and leaves every collision in place.
//! It makes exactly one pass and is never iterated to a fixed point.

use crate::timetable::Schedule;

/// Runs one repair pass and returns the resulting schedule.
///
/// Takes the schedule by value; callers that keep the original for elitism
/// must pass a copy.
pub fn resolve_conflicts(mut schedule: Schedule) -> Schedule {
    let n = schedule.len();
    for i in 0..n {
        for j in i + 1..n {
            let (a, b) = (schedule[i], schedule[j]);
            if a.group_clash(&b) {
                schedule[i].group = b.group;
                schedule[j].group = a.group;
            } else if a.teacher_clash(&b) {
                schedule[i].time = b.time;
                schedule[j].time = a.time;
            }
        }
    }
    schedule
}
