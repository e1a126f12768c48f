pub mod auth;

pub mod users;

pub mod departments;
pub mod designations;
pub mod programs;

pub mod courses;
pub mod staff;
pub mod students;

pub mod admissions;
pub mod attendance;
pub mod enrollments;

pub mod exams;
pub mod grades;

pub mod fees;

pub mod notifications;

pub mod dashboard;

pub use admissions::configure_admissions_routes;
pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use courses::configure_courses_routes;
pub use dashboard::configure_dashboard_routes;
pub use departments::configure_departments_routes;
pub use designations::configure_designations_routes;
pub use enrollments::configure_enrollments_routes;
pub use exams::configure_exams_routes;
pub use fees::configure_fees_routes;
pub use grades::configure_grades_routes;
pub use notifications::configure_notifications_routes;
pub use programs::configure_programs_routes;
pub use staff::configure_staff_routes;
pub use students::configure_students_routes;
pub use users::configure_user_routes;

#[cfg(test)]
mod tests;
