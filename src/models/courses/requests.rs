use serde::Deserialize;

use crate::models::common::ListQuery;
use crate::models::common::query::deserialize_opt_number;
use crate::utils::validate::{FieldErrors, check_opt_text, check_text, validate_decimal};

pub const MIN_SEMESTER: i32 = 1;
pub const MAX_SEMESTER: i32 = 8;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseListParams {
    #[serde(flatten)]
    pub query: ListQuery,
    #[serde(default, deserialize_with = "deserialize_opt_number")]
    pub program: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_number")]
    pub semester: Option<i32>,
    pub code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    pub code: String,
    pub title: String,
    pub credit_hours: f64,
    pub semester: i32,
    pub program_id: i64,
}

impl CreateCourseRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_text(&mut errors, "code", &self.code, 20);
        check_text(&mut errors, "title", &self.title, 150);
        check_credit_hours(&mut errors, self.credit_hours);
        check_semester(&mut errors, self.semester);
        errors
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCourseRequest {
    pub code: Option<String>,
    pub title: Option<String>,
    pub credit_hours: Option<f64>,
    pub semester: Option<i32>,
    pub program_id: Option<i64>,
}

impl UpdateCourseRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_opt_text(&mut errors, "code", self.code.as_deref(), 20);
        check_opt_text(&mut errors, "title", self.title.as_deref(), 150);
        if let Some(hours) = self.credit_hours {
            check_credit_hours(&mut errors, hours);
        }
        if let Some(semester) = self.semester {
            check_semester(&mut errors, semester);
        }
        errors
    }
}

// 学分：一位小数，0 < x <= 99.9
fn check_credit_hours(errors: &mut FieldErrors, hours: f64) {
    if let Err(msg) = validate_decimal(hours, 3, 1) {
        errors.add("credit_hours", msg);
    } else if hours <= 0.0 {
        errors.add("credit_hours", "Ensure this value is greater than 0.");
    }
}

fn check_semester(errors: &mut FieldErrors, semester: i32) {
    if !(MIN_SEMESTER..=MAX_SEMESTER).contains(&semester) {
        errors.add("semester", format!("\"{semester}\" is not a valid choice."));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(credit_hours: f64, semester: i32) -> CreateCourseRequest {
        CreateCourseRequest {
            code: "CS101".to_string(),
            title: "Programming Fundamentals".to_string(),
            credit_hours,
            semester,
            program_id: 1,
        }
    }

    #[test]
    fn test_valid_course() {
        assert!(course(3.0, 1).validate().is_empty());
        assert!(course(99.9, 8).validate().is_empty());
    }

    #[test]
    fn test_credit_hours_bounds() {
        assert!(course(0.0, 1).validate().has("credit_hours"));
        assert!(course(100.0, 1).validate().has("credit_hours"));
        assert!(course(3.25, 1).validate().has("credit_hours"));
    }

    #[test]
    fn test_semester_range() {
        let errors = course(3.0, 9).validate();
        assert_eq!(
            errors.get("semester"),
            Some(&["\"9\" is not a valid choice.".to_string()][..])
        );
        assert!(course(3.0, 0).validate().has("semester"));
    }
}
