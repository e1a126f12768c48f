use serde::Deserialize;

use super::entities::ProgramType;
use crate::models::common::ListQuery;
use crate::models::common::query::deserialize_opt_number;
use crate::utils::validate::{FieldErrors, check_opt_text, check_text};

pub const DEFAULT_DURATION_YEARS: i32 = 4;

const MSG_POSITIVE: &str = "Ensure this value is greater than or equal to 1.";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgramListParams {
    #[serde(flatten)]
    pub query: ListQuery,
    #[serde(default, deserialize_with = "deserialize_opt_number")]
    pub department: Option<i64>,
    pub program_type: Option<ProgramType>,
    pub code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProgramRequest {
    pub program_number: i32,
    pub name: String,
    pub code: String,
    pub program_type: ProgramType,
    pub department_id: i64,
    #[serde(default = "default_duration")]
    pub duration_years: i32,
    pub description: Option<String>,
}

fn default_duration() -> i32 {
    DEFAULT_DURATION_YEARS
}

impl CreateProgramRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.program_number < 1 {
            errors.add("program_number", MSG_POSITIVE);
        }
        check_text(&mut errors, "name", &self.name, 100);
        check_text(&mut errors, "code", &self.code, 20);
        if self.duration_years < 1 {
            errors.add("duration_years", MSG_POSITIVE);
        }
        errors
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProgramRequest {
    pub program_number: Option<i32>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub program_type: Option<ProgramType>,
    pub department_id: Option<i64>,
    pub duration_years: Option<i32>,
    pub description: Option<String>,
}

impl UpdateProgramRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.program_number.is_some_and(|n| n < 1) {
            errors.add("program_number", MSG_POSITIVE);
        }
        check_opt_text(&mut errors, "name", self.name.as_deref(), 100);
        check_opt_text(&mut errors, "code", self.code.as_deref(), 20);
        if self.duration_years.is_some_and(|d| d < 1) {
            errors.add("duration_years", MSG_POSITIVE);
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_defaults_to_four_years() {
        let req: CreateProgramRequest = serde_json::from_str(
            r#"{"program_number":1,"name":"Computer Science","code":"BSCS","program_type":"BS","department_id":1}"#,
        )
        .unwrap();
        assert_eq!(req.duration_years, 4);
        assert_eq!(req.program_type, ProgramType::Bachelor);
        assert!(req.validate().is_empty());
    }

    #[test]
    fn test_zero_program_number_rejected() {
        let req: CreateProgramRequest = serde_json::from_str(
            r#"{"program_number":0,"name":"X","code":"X","program_type":"PhD","department_id":1,"duration_years":0}"#,
        )
        .unwrap();
        let errors = req.validate();
        assert!(errors.has("program_number"));
        assert!(errors.has("duration_years"));
    }
}
