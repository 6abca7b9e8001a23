use hub_core::course_completion;
use hub_core::model::{Course, CourseId, ProgressRecord};

/// UI-ready representation of a course for card grids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCardVm {
    pub id: CourseId,
    pub title: String,
    pub category: String,
    pub lesson_count: usize,
    pub percent: u8,
}

impl CourseCardVm {
    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{}% completed", self.percent)
    }

    #[must_use]
    pub fn lesson_count_label(&self) -> String {
        if self.lesson_count == 1 {
            "1 lesson".to_owned()
        } else {
            format!("{} lessons", self.lesson_count)
        }
    }
}

/// Convert one domain course plus the progress snapshot into card data.
#[must_use]
pub fn map_course_card(course: &Course, progress: &ProgressRecord) -> CourseCardVm {
    CourseCardVm {
        id: course.id().clone(),
        title: course.title().to_owned(),
        category: course.category().to_owned(),
        lesson_count: course.lesson_count(),
        percent: course_completion(course, progress),
    }
}
