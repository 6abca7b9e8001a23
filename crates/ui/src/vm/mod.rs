mod content_vm;
mod course_vm;

pub use content_vm::{lesson_html, sanitize_html};
pub use course_vm::{CourseCardVm, map_course_card};
