mod catalog;
mod course_detail;
mod dashboard;
mod home;

pub use catalog::CatalogView;
pub use course_detail::CourseDetailView;
pub use dashboard::DashboardView;
pub use home::HomeView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
