use std::collections::BTreeSet;
use thiserror::Error;

use crate::model::ids::{CourseId, LessonId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("course id cannot be empty")]
    EmptyId,

    #[error("course title cannot be empty")]
    EmptyTitle,

    #[error("course category cannot be empty")]
    EmptyCategory,

    #[error("lesson id cannot be empty")]
    EmptyLessonId,

    #[error("lesson title cannot be empty")]
    EmptyLessonTitle,

    #[error("duplicate lesson id: {0}")]
    DuplicateLessonId(LessonId),
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// A single lesson within a course. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    id: LessonId,
    title: String,
    content: String,
}

impl Lesson {
    /// Creates a validated lesson.
    ///
    /// # Errors
    ///
    /// Returns `CourseError` if the id or title is empty.
    pub fn new(
        id: LessonId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, CourseError> {
        let title = title.into();
        if id.as_str().trim().is_empty() {
            return Err(CourseError::EmptyLessonId);
        }
        if title.trim().is_empty() {
            return Err(CourseError::EmptyLessonTitle);
        }
        Ok(Self {
            id,
            title,
            content: content.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &LessonId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Builds a lesson from parts known to be valid (catalog seed data).
    pub(crate) fn from_parts(id: &str, title: &str, content: &str) -> Self {
        Self {
            id: LessonId::new(id),
            title: title.to_owned(),
            content: content.to_owned(),
        }
    }
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

/// An offered course: metadata plus an ordered list of lessons.
///
/// Courses are immutable and defined at build time; all dynamic state lives
/// in the per-user `ProgressRecord`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: CourseId,
    title: String,
    description: String,
    category: String,
    lessons: Vec<Lesson>,
}

impl Course {
    /// Creates a validated course.
    ///
    /// # Errors
    ///
    /// Returns `CourseError` if the id, title, or category is empty, or if
    /// two lessons share an id.
    pub fn new(
        id: CourseId,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        lessons: Vec<Lesson>,
    ) -> Result<Self, CourseError> {
        let title = title.into();
        let category = category.into();
        if id.as_str().trim().is_empty() {
            return Err(CourseError::EmptyId);
        }
        if title.trim().is_empty() {
            return Err(CourseError::EmptyTitle);
        }
        if category.trim().is_empty() {
            return Err(CourseError::EmptyCategory);
        }

        let mut seen = BTreeSet::new();
        for lesson in &lessons {
            if !seen.insert(lesson.id().clone()) {
                return Err(CourseError::DuplicateLessonId(lesson.id().clone()));
            }
        }

        Ok(Self {
            id,
            title,
            description: description.into(),
            category,
            lessons,
        })
    }

    #[must_use]
    pub fn id(&self) -> &CourseId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Lessons in their declared display order.
    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    #[must_use]
    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }

    /// True if `lesson_id` is declared by this course.
    #[must_use]
    pub fn declares_lesson(&self, lesson_id: &LessonId) -> bool {
        self.lessons.iter().any(|lesson| lesson.id() == lesson_id)
    }

    /// Builds a course from parts known to be valid (catalog seed data).
    ///
    /// Seed data is asserted against `Course::new` in the catalog tests, so
    /// this skips revalidation at startup.
    pub(crate) fn from_parts(
        id: &str,
        title: &str,
        description: &str,
        category: &str,
        lessons: Vec<Lesson>,
    ) -> Self {
        Self {
            id: CourseId::new(id),
            title: title.to_owned(),
            description: description.to_owned(),
            category: category.to_owned(),
            lessons,
        }
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
