use actix_web::HttpRequest;
use std::sync::Arc;

use crate::storage::Storage;

/// 声明按需从 `app_data` 取存储的服务结构体
macro_rules! storage_service {
    ($name:ident) => {
        pub struct $name {
            storage: Option<std::sync::Arc<dyn $crate::storage::Storage>>,
        }

        impl $name {
            pub fn new_lazy() -> Self {
                Self { storage: None }
            }

            pub(crate) fn get_storage(
                &self,
                request: &actix_web::HttpRequest,
            ) -> std::sync::Arc<dyn $crate::storage::Storage> {
                match &self.storage {
                    Some(storage) => storage.clone(),
                    None => $crate::services::storage_from_request(request),
                }
            }
        }
    };
}

pub mod admissions;
pub mod attendance;
pub mod auth;
pub mod bulk;
pub(crate) mod common;
pub mod courses;
pub mod dashboard;
pub mod departments;
pub mod designations;
pub mod enrollments;
pub mod exams;
pub mod fees;
pub mod grades;
pub mod notifications;
pub mod programs;
pub mod staff;
pub mod students;
pub mod users;

pub use admissions::AdmissionService;
pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use bulk::BulkService;
pub use courses::CourseService;
pub use dashboard::DashboardService;
pub use departments::DepartmentService;
pub use designations::DesignationService;
pub use enrollments::EnrollmentService;
pub use exams::ExamService;
pub use fees::FeeService;
pub use grades::GradeService;
pub use notifications::NotificationService;
pub use programs::ProgramService;
pub use staff::StaffService;
pub use students::StudentService;
pub use users::UserService;

pub(crate) fn storage_from_request(request: &HttpRequest) -> Arc<dyn Storage> {
    request
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone()
}
