use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::model::ids::{CourseId, LessonId};

/// Per-user mapping of course to completed lesson ids.
///
/// An absent course key means zero completion; a key is only present while
/// its course has at least one completed lesson. Toggling the last lesson of
/// a course back off removes the key, so two identical toggles restore the
/// prior record exactly.
///
/// Serializes as a flat `course id -> list of lesson ids` map, which is also
/// the persisted document shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressRecord {
    completed: BTreeMap<CourseId, BTreeSet<LessonId>>,
}

impl ProgressRecord {
    /// Creates an empty record (no course started).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips completion of one lesson and returns whether it is now complete.
    ///
    /// Present in the completed set: removed. Absent: added. Repeating the
    /// same toggle twice is a no-op overall.
    pub fn toggle(&mut self, course_id: &CourseId, lesson_id: &LessonId) -> bool {
        let set = self.completed.entry(course_id.clone()).or_default();
        let now_completed = if set.contains(lesson_id) {
            set.remove(lesson_id);
            false
        } else {
            set.insert(lesson_id.clone());
            true
        };
        if set.is_empty() {
            self.completed.remove(course_id);
        }
        now_completed
    }

    /// True if the lesson is recorded as completed for the course.
    #[must_use]
    pub fn is_completed(&self, course_id: &CourseId, lesson_id: &LessonId) -> bool {
        self.completed
            .get(course_id)
            .is_some_and(|set| set.contains(lesson_id))
    }

    /// The completed-lesson set for a course; absent key reads as empty.
    #[must_use]
    pub fn completed_for(&self, course_id: &CourseId) -> Option<&BTreeSet<LessonId>> {
        self.completed.get(course_id)
    }

    /// Number of completed lessons recorded for a course.
    ///
    /// Counts raw entries, including stale ids a course no longer declares;
    /// metrics intersect with the declared lesson list before dividing.
    #[must_use]
    pub fn completed_count(&self, course_id: &CourseId) -> usize {
        self.completed.get(course_id).map_or(0, BTreeSet::len)
    }

    /// True when no course has any completed lesson.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    /// Courses that currently have at least one completed lesson.
    pub fn courses(&self) -> impl Iterator<Item = &CourseId> {
        self.completed.keys()
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
