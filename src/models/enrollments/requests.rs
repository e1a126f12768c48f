use serde::Deserialize;

use crate::models::common::ListQuery;
use crate::models::common::query::deserialize_opt_number;
use crate::utils::validate::FieldErrors;

pub const MSG_DUPLICATE_ENROLLMENT: &str =
    "This student is already enrolled in this course for this semester/year.";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnrollmentListParams {
    #[serde(flatten)]
    pub query: ListQuery,
    #[serde(default, deserialize_with = "deserialize_opt_number")]
    pub student: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_number")]
    pub course: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_number")]
    pub semester: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_opt_number")]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEnrollmentRequest {
    pub student_id: i64,
    pub course_id: i64,
    pub semester: i32,
    pub year: i32,
}

impl CreateEnrollmentRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_term(&mut errors, Some(self.semester), Some(self.year));
        errors
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEnrollmentRequest {
    pub student_id: Option<i64>,
    pub course_id: Option<i64>,
    pub semester: Option<i32>,
    pub year: Option<i32>,
}

impl UpdateEnrollmentRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_term(&mut errors, self.semester, self.year);
        errors
    }
}

fn check_term(errors: &mut FieldErrors, semester: Option<i32>, year: Option<i32>) {
    if semester.is_some_and(|s| s < 0) {
        errors.add("semester", "Ensure this value is greater than or equal to 0.");
    }
    if year.is_some_and(|y| y < 0) {
        errors.add("year", "Ensure this value is greater than or equal to 0.");
    }
}
