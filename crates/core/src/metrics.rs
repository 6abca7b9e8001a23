//! Derived completion metrics.
//!
//! Pure functions over the catalog and a progress record. Both are total:
//! they never panic, divide by zero, or return anything outside `[0, 100]`.
//! Only lessons the course actually declares are counted, so stale ids left
//! behind by removed lessons can never push a percentage past 100.

use crate::catalog::Catalog;
use crate::model::{Course, ProgressRecord};

/// Completion percentage for one course, rounded to the nearest integer.
///
/// A course with no lessons is 0% complete by definition.
#[must_use]
pub fn course_completion(course: &Course, progress: &ProgressRecord) -> u8 {
    percent(declared_completed(course, progress), course.lesson_count())
}

/// Completion percentage across the whole catalog.
///
/// The ratio is completed lessons over total lessons, not an average of
/// per-course percentages, so longer courses weigh more. An empty catalog
/// (or one with no lessons) is 0%.
#[must_use]
pub fn overall_completion(catalog: &Catalog, progress: &ProgressRecord) -> u8 {
    let completed = catalog
        .courses()
        .iter()
        .map(|course| declared_completed(course, progress))
        .sum();
    percent(completed, catalog.total_lessons())
}

/// Completed lessons intersected with the course's declared lesson list.
fn declared_completed(course: &Course, progress: &ProgressRecord) -> usize {
    match progress.completed_for(course.id()) {
        Some(completed) => course
            .lessons()
            .iter()
            .filter(|lesson| completed.contains(lesson.id()))
            .count(),
        None => 0,
    }
}

fn percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    // completed <= total, so the rounded value fits in [0, 100].
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let rounded = ((completed as f64 / total as f64) * 100.0).round() as u8;
    rounded
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
