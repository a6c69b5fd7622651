//! Lesson and schedule value types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One scheduled teaching event (a gene).
///
/// Entity fields are indices into the owning [`Catalog`](super::Catalog)
/// tables. Two lessons are the same gene exactly when all fields match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lesson {
    /// Index into the catalog's subject table.
    pub subject: usize,
    /// Index into the catalog's teacher table.
    pub teacher: usize,
    /// Index into the catalog's group table.
    pub group: usize,
    /// Daily class slot in `[1, classes_per_day]`.
    ///
    /// The fitness evaluator also sums this value as the workload units a
    /// teacher accumulates over a run of consecutive lessons.
    pub time: u32,
    /// Index into the catalog's room table.
    pub room: usize,
}

impl Lesson {
    /// Creates a lesson from its field indices.
    pub fn new(subject: usize, teacher: usize, group: usize, time: u32, room: usize) -> Self {
        Self {
            subject,
            teacher,
            group,
            time,
            room,
        }
    }

    /// Same slot and same group.
    pub fn group_clash(&self, other: &Lesson) -> bool {
        self.time == other.time && self.group == other.group
    }

    /// Same slot and same teacher.
    pub fn teacher_clash(&self, other: &Lesson) -> bool {
        self.time == other.time && self.teacher == other.teacher
    }

    /// Same slot and same room.
    pub fn room_clash(&self, other: &Lesson) -> bool {
        self.time == other.time && self.room == other.room
    }
}

/// A candidate timetable (an individual): one lesson per catalog subject.
///
/// Positions carry no meaning beyond being crossover loci.
pub type Schedule = Vec<Lesson>;
