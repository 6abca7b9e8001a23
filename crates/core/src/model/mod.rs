mod course;
mod ids;
mod progress;

pub use course::{Course, CourseError, Lesson};
pub use ids::{CourseId, LessonId, UserId};
pub use progress::ProgressRecord;
