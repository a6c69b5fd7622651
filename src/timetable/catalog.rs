//! Constraint catalog.
//!
//! The catalog holds the finite entity universes a lesson draws from and the
//! rules the fitness evaluator checks lessons against. It is read-only for
//! the whole run; the search engine only ever borrows it.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::Lesson;
use crate::error::ConfigError;

/// Subjects, teachers, groups, rooms and the per-teacher / per-group rules.
///
/// Rule maps are keyed by entity index. A teacher or group without an entry
/// has an empty permitted-subject set, and a teacher without a workload
/// entry has no limit.
///
/// # Example
///
/// ```
/// use u_timetable::timetable::Catalog;
///
/// let catalog = Catalog::new(["Algebra", "Mechanics"], ["Ivanenko"], ["MAT-21"], ["101"], 5)
///     .unwrap()
///     .with_teacher_subjects("Ivanenko", ["Algebra"])
///     .with_group_subjects("MAT-21", ["Algebra", "Mechanics"])
///     .with_teacher_max_hours("Ivanenko", 20);
///
/// assert_eq!(catalog.subject_count(), 2);
/// assert!(catalog.can_teach(0, 0));
/// assert!(!catalog.can_teach(0, 1));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Catalog {
    subjects: Vec<String>,
    teachers: Vec<String>,
    groups: Vec<String>,
    rooms: Vec<String>,
    classes_per_day: u32,
    teacher_subjects: Vec<HashSet<usize>>,
    group_subjects: Vec<HashSet<usize>>,
    teacher_max_hours: Vec<Option<u32>>,
}

impl Catalog {
    /// Creates a catalog with empty rule maps.
    ///
    /// # Errors
    /// Fails if any entity set is empty or holds a name twice, or if
    /// `classes_per_day` is zero.
    pub fn new(
        subjects: impl IntoIterator<Item = impl Into<String>>,
        teachers: impl IntoIterator<Item = impl Into<String>>,
        groups: impl IntoIterator<Item = impl Into<String>>,
        rooms: impl IntoIterator<Item = impl Into<String>>,
        classes_per_day: u32,
    ) -> Result<Self, ConfigError> {
        let subjects: Vec<String> = subjects.into_iter().map(Into::into).collect();
        let teachers: Vec<String> = teachers.into_iter().map(Into::into).collect();
        let groups: Vec<String> = groups.into_iter().map(Into::into).collect();
        let rooms: Vec<String> = rooms.into_iter().map(Into::into).collect();

        let catalog = Self {
            teacher_subjects: vec![HashSet::new(); teachers.len()],
            group_subjects: vec![HashSet::new(); groups.len()],
            teacher_max_hours: vec![None; teachers.len()],
            subjects,
            teachers,
            groups,
            rooms,
            classes_per_day,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Sets the subjects `teacher` is authorized to teach.
    ///
    /// Unknown teacher or subject names are skipped with a warning.
    pub fn with_teacher_subjects(
        mut self,
        teacher: &str,
        subjects: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Self {
        match position(&self.teachers, teacher) {
            Some(t) => {
                let set = self.subject_set(subjects);
                self.teacher_subjects[t] = set;
            }
            None => log::warn!("repertoire for unknown teacher {teacher:?} ignored"),
        }
        self
    }

    /// Sets the subjects `group` is required to take.
    ///
    /// Unknown group or subject names are skipped with a warning.
    pub fn with_group_subjects(
        mut self,
        group: &str,
        subjects: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Self {
        match position(&self.groups, group) {
            Some(g) => {
                let set = self.subject_set(subjects);
                self.group_subjects[g] = set;
            }
            None => log::warn!("curriculum for unknown group {group:?} ignored"),
        }
        self
    }

    /// Sets the maximum workload units for `teacher`.
    pub fn with_teacher_max_hours(mut self, teacher: &str, hours: u32) -> Self {
        match position(&self.teachers, teacher) {
            Some(t) => self.teacher_max_hours[t] = Some(hours),
            None => log::warn!("workload limit for unknown teacher {teacher:?} ignored"),
        }
        self
    }

    fn subject_set(&self, names: impl IntoIterator<Item = impl AsRef<str>>) -> HashSet<usize> {
        names
            .into_iter()
            .filter_map(|name| {
                let name = name.as_ref();
                let idx = position(&self.subjects, name);
                if idx.is_none() {
                    log::warn!("unknown subject {name:?} ignored");
                }
                idx
            })
            .collect()
    }

    /// Checks that every entity set is non-empty with distinct names, that
    /// `classes_per_day >= 1`, and that every rule table has one entry per
    /// teacher or group.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.subjects.is_empty() {
            return Err(ConfigError::EmptySubjects);
        }
        if self.teachers.is_empty() {
            return Err(ConfigError::EmptyTeachers);
        }
        if self.groups.is_empty() {
            return Err(ConfigError::EmptyGroups);
        }
        if self.rooms.is_empty() {
            return Err(ConfigError::EmptyRooms);
        }
        for (kind, names) in [
            ("subject", &self.subjects),
            ("teacher", &self.teachers),
            ("group", &self.groups),
            ("room", &self.rooms),
        ] {
            let mut seen = HashSet::with_capacity(names.len());
            if let Some(name) = names.iter().find(|n| !seen.insert(n.as_str())) {
                return Err(ConfigError::DuplicateName {
                    kind,
                    name: name.clone(),
                });
            }
        }
        if self.classes_per_day < 1 {
            return Err(ConfigError::InvalidClassesPerDay(self.classes_per_day));
        }
        for (table, expected, found) in [
            ("teacher_subjects", self.teachers.len(), self.teacher_subjects.len()),
            ("group_subjects", self.groups.len(), self.group_subjects.len()),
            ("teacher_max_hours", self.teachers.len(), self.teacher_max_hours.len()),
        ] {
            if expected != found {
                return Err(ConfigError::RuleTableMismatch {
                    table,
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }

    /// Number of subjects, which is also the length of every schedule.
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    /// Number of teachers.
    pub fn teacher_count(&self) -> usize {
        self.teachers.len()
    }

    /// Number of student groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Highest class slot; lesson times lie in `[1, classes_per_day]`.
    pub fn classes_per_day(&self) -> u32 {
        self.classes_per_day
    }

    /// Whether `subject` is in the repertoire of `teacher`.
    pub fn can_teach(&self, teacher: usize, subject: usize) -> bool {
        self.teacher_subjects
            .get(teacher)
            .is_some_and(|set| set.contains(&subject))
    }

    /// Whether `subject` is in the curriculum of `group`.
    pub fn group_takes(&self, group: usize, subject: usize) -> bool {
        self.group_subjects
            .get(group)
            .is_some_and(|set| set.contains(&subject))
    }

    /// Workload limit of `teacher`, if one is defined.
    pub fn max_hours(&self, teacher: usize) -> Option<u32> {
        self.teacher_max_hours.get(teacher).copied().flatten()
    }

    /// Name of subject `subject`.
    ///
    /// # Panics
    /// Panics if `subject` is out of range.
    pub fn subject_name(&self, subject: usize) -> &str {
        &self.subjects[subject]
    }

    /// Name of teacher `teacher`.
    ///
    /// # Panics
    /// Panics if `teacher` is out of range.
    pub fn teacher_name(&self, teacher: usize) -> &str {
        &self.teachers[teacher]
    }

    /// Name of group `group`.
    ///
    /// # Panics
    /// Panics if `group` is out of range.
    pub fn group_name(&self, group: usize) -> &str {
        &self.groups[group]
    }

    /// Name of room `room`.
    ///
    /// # Panics
    /// Panics if `room` is out of range.
    pub fn room_name(&self, room: usize) -> &str {
        &self.rooms[room]
    }

    /// Renders a lesson as `subject - teacher - group - time - room`.
    ///
    /// # Panics
    /// Panics if any lesson index is outside the catalog tables.
    pub fn describe(&self, lesson: &Lesson) -> String {
        format!(
            "{} - {} - {} - {} - {}",
            self.subject_name(lesson.subject),
            self.teacher_name(lesson.teacher),
            self.group_name(lesson.group),
            lesson.time,
            self.room_name(lesson.room),
        )
    }
}

fn position(names: &[String], name: &str) -> Option<usize> {
    names.iter().position(|n| n == name)
}
