mod course_card;
mod progress_bar;

pub use course_card::CourseCard;
pub use progress_bar::ProgressBar;
