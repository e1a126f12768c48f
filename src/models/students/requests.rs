use chrono::NaiveDate;
use serde::Deserialize;

use super::entities::Gender;
use crate::models::common::ListQuery;
use crate::models::common::query::{deserialize_opt_bool, deserialize_opt_number};
use crate::utils::validate::{
    FieldErrors, check_email, check_opt_text, check_phone, check_text,
};

pub const MSG_DOB_IN_FUTURE: &str = "Date of birth cannot be in the future.";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentListParams {
    #[serde(flatten)]
    pub query: ListQuery,
    #[serde(default, deserialize_with = "deserialize_opt_number")]
    pub program: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_bool")]
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_opt_number")]
    pub enrollment_year: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    pub registration_no: String,
    pub user_id: Option<i64>,
    pub full_name: String,
    pub gender: Gender,
    pub dob: NaiveDate,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub program_id: i64,
    pub enrollment_year: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl CreateStudentRequest {
    pub fn validate(&self, today: NaiveDate) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_text(&mut errors, "registration_no", &self.registration_no, 30);
        check_text(&mut errors, "full_name", &self.full_name, 150);
        check_dob(&mut errors, self.dob, today);
        check_email(&mut errors, "email", &self.email);
        check_phone(&mut errors, "phone", &self.phone);
        if self.address.trim().is_empty() {
            errors.add("address", crate::utils::validate::MSG_BLANK);
        }
        check_year(&mut errors, self.enrollment_year);
        errors
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStudentRequest {
    pub registration_no: Option<String>,
    pub user_id: Option<i64>,
    pub full_name: Option<String>,
    pub gender: Option<Gender>,
    pub dob: Option<NaiveDate>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub program_id: Option<i64>,
    pub enrollment_year: Option<i32>,
    pub is_active: Option<bool>,
}

impl UpdateStudentRequest {
    pub fn validate(&self, today: NaiveDate) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_opt_text(&mut errors, "registration_no", self.registration_no.as_deref(), 30);
        check_opt_text(&mut errors, "full_name", self.full_name.as_deref(), 150);
        if let Some(dob) = self.dob {
            check_dob(&mut errors, dob, today);
        }
        if let Some(email) = &self.email {
            check_email(&mut errors, "email", email);
        }
        if let Some(phone) = &self.phone {
            check_phone(&mut errors, "phone", phone);
        }
        if self.address.as_deref().is_some_and(|a| a.trim().is_empty()) {
            errors.add("address", crate::utils::validate::MSG_BLANK);
        }
        if let Some(year) = self.enrollment_year {
            check_year(&mut errors, year);
        }
        errors
    }
}

fn check_dob(errors: &mut FieldErrors, dob: NaiveDate, today: NaiveDate) {
    if dob > today {
        errors.add("dob", MSG_DOB_IN_FUTURE);
    }
}

fn check_year(errors: &mut FieldErrors, year: i32) {
    if year < 0 {
        errors.add(
            "enrollment_year",
            "Ensure this value is greater than or equal to 0.",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 18).unwrap()
    }

    fn valid() -> CreateStudentRequest {
        serde_json::from_value(serde_json::json!({
            "registration_no": "REG-001",
            "full_name": "Ali Khan",
            "gender": "Male",
            "dob": "2004-06-15",
            "email": "ali@example.com",
            "phone": "03001234567",
            "address": "Lahore",
            "program_id": 1,
            "enrollment_year": 2024
        }))
        .unwrap()
    }

    #[test]
    fn test_defaults_and_valid() {
        let req = valid();
        assert!(req.is_active);
        assert!(req.user_id.is_none());
        assert!(req.validate(today()).is_empty());
    }

    #[test]
    fn test_future_dob_and_long_phone() {
        let req = CreateStudentRequest {
            dob: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            phone: "+92-300-1234567-99".to_string(),
            ..valid()
        };
        let errors = req.validate(today());
        assert_eq!(
            errors.get("dob"),
            Some(&[MSG_DOB_IN_FUTURE.to_string()][..])
        );
        assert!(errors.has("phone"));
    }

    #[test]
    fn test_unknown_gender_is_a_parse_error() {
        let mut value = serde_json::json!({
            "registration_no": "REG-002",
            "full_name": "Sara",
            "gender": "female",
            "dob": "2004-06-15",
            "email": "sara@example.com",
            "phone": "0300",
            "address": "Karachi",
            "program_id": 1,
            "enrollment_year": 2024
        });
        assert!(serde_json::from_value::<CreateStudentRequest>(value.clone()).is_err());
        value["gender"] = "Female".into();
        assert!(serde_json::from_value::<CreateStudentRequest>(value).is_ok());
    }

    #[test]
    fn test_list_params_from_query_string() {
        let params = actix_web::web::Query::<StudentListParams>::from_query(
            "program=2&is_active=false&enrollment_year=2023&ordering=-enrollment_year",
        )
        .unwrap()
        .into_inner();
        assert_eq!(params.program, Some(2));
        assert_eq!(params.is_active, Some(false));
        assert_eq!(params.enrollment_year, Some(2023));
    }
}
