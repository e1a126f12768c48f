use serde::Deserialize;

use crate::models::common::ListQuery;
use crate::models::common::query::deserialize_opt_number;
use crate::utils::validate::{FieldErrors, validate_decimal};

pub const MSG_NEGATIVE_MARKS: &str = "Marks cannot be negative";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GradeListParams {
    #[serde(flatten)]
    pub query: ListQuery,
    #[serde(default, deserialize_with = "deserialize_opt_number")]
    pub student: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_number")]
    pub exam: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateGradeRequest {
    pub student_id: i64,
    pub exam_id: i64,
    pub obtained_marks: f64,
}

impl CreateGradeRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_marks(&mut errors, self.obtained_marks);
        errors
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGradeRequest {
    pub student_id: Option<i64>,
    pub exam_id: Option<i64>,
    pub obtained_marks: Option<f64>,
}

impl UpdateGradeRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if let Some(marks) = self.obtained_marks {
            check_marks(&mut errors, marks);
        }
        errors
    }
}

/// 分数不能超过考试总分
pub fn check_marks_within_total(errors: &mut FieldErrors, marks: f64, total_marks: i32) {
    if marks > f64::from(total_marks) {
        errors.add(
            "obtained_marks",
            format!("Obtained marks cannot exceed the exam total of {total_marks}."),
        );
    }
}

// 最多 5 位数字、2 位小数
fn check_marks(errors: &mut FieldErrors, marks: f64) {
    if let Err(msg) = validate_decimal(marks, 5, 2) {
        errors.add("obtained_marks", msg);
    } else if marks < 0.0 {
        errors.add("obtained_marks", MSG_NEGATIVE_MARKS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_marks_message() {
        let req = CreateGradeRequest {
            student_id: 1,
            exam_id: 1,
            obtained_marks: -1.0,
        };
        assert_eq!(
            req.validate().get("obtained_marks"),
            Some(&[MSG_NEGATIVE_MARKS.to_string()][..])
        );
    }

    #[test]
    fn test_marks_against_total() {
        let mut errors = FieldErrors::new();
        check_marks_within_total(&mut errors, 100.0, 100);
        assert!(errors.is_empty());
        check_marks_within_total(&mut errors, 100.5, 100);
        assert!(errors.has("obtained_marks"));
    }
}
