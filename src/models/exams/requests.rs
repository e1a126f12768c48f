use chrono::NaiveDate;
use serde::Deserialize;

use super::entities::ExamType;
use crate::models::common::ListQuery;
use crate::models::common::query::deserialize_opt_number;
use crate::utils::validate::FieldErrors;

pub const DEFAULT_TOTAL_MARKS: i32 = 100;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExamListParams {
    #[serde(flatten)]
    pub query: ListQuery,
    #[serde(default, deserialize_with = "deserialize_opt_number")]
    pub course: Option<i64>,
    pub exam_type: Option<ExamType>,
    #[serde(default, deserialize_with = "deserialize_opt_number")]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateExamRequest {
    pub course_id: i64,
    pub exam_type: ExamType,
    pub date: NaiveDate,
    #[serde(default = "default_total_marks")]
    pub total_marks: i32,
}

fn default_total_marks() -> i32 {
    DEFAULT_TOTAL_MARKS
}

impl CreateExamRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_total_marks(&mut errors, self.total_marks);
        errors
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateExamRequest {
    pub course_id: Option<i64>,
    pub exam_type: Option<ExamType>,
    pub date: Option<NaiveDate>,
    pub total_marks: Option<i32>,
}

impl UpdateExamRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if let Some(total) = self.total_marks {
            check_total_marks(&mut errors, total);
        }
        errors
    }
}

fn check_total_marks(errors: &mut FieldErrors, total: i32) {
    if total < 1 {
        errors.add(
            "total_marks",
            "Ensure this value is greater than or equal to 1.",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_marks_default_and_minimum() {
        let req: CreateExamRequest =
            serde_json::from_str(r#"{"course_id":3,"exam_type":"Quiz","date":"2025-05-02"}"#)
                .unwrap();
        assert_eq!(req.total_marks, 100);
        assert!(req.validate().is_empty());

        let zero = CreateExamRequest {
            total_marks: 0,
            ..req
        };
        assert!(zero.validate().has("total_marks"));
    }
}
