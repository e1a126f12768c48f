use serde::Deserialize;

use super::entities::StaffType;
use crate::models::common::ListQuery;
use crate::models::common::query::{deserialize_opt_bool, deserialize_opt_number};
use crate::utils::validate::{FieldErrors, check_email, check_opt_text, check_phone, check_text};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaffListParams {
    #[serde(flatten)]
    pub query: ListQuery,
    #[serde(default, deserialize_with = "deserialize_opt_number")]
    pub department: Option<i64>,
    pub staff_type: Option<StaffType>,
    #[serde(default, deserialize_with = "deserialize_opt_bool")]
    pub is_active: Option<bool>,
}

// 入职日期由服务端在创建时写入
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStaffRequest {
    pub user_id: Option<i64>,
    pub full_name: String,
    pub staff_type: StaffType,
    pub designation_id: Option<i64>,
    pub department_id: Option<i64>,
    pub email: String,
    pub phone: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl CreateStaffRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_text(&mut errors, "full_name", &self.full_name, 150);
        check_email(&mut errors, "email", &self.email);
        check_phone(&mut errors, "phone", &self.phone);
        errors
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStaffRequest {
    pub user_id: Option<i64>,
    pub full_name: Option<String>,
    pub staff_type: Option<StaffType>,
    pub designation_id: Option<i64>,
    pub department_id: Option<i64>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateStaffRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_opt_text(&mut errors, "full_name", self.full_name.as_deref(), 150);
        if let Some(email) = &self.email {
            check_email(&mut errors, "email", email);
        }
        if let Some(phone) = &self.phone {
            check_phone(&mut errors, "phone", phone);
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_teaching_choice_uses_hyphen() {
        let req: CreateStaffRequest = serde_json::from_str(
            r#"{"full_name":"Bilal","staff_type":"Non-Teaching","email":"b@x.io","phone":"0300"}"#,
        )
        .unwrap();
        assert_eq!(req.staff_type, StaffType::NonTeaching);
        assert!(req.is_active);
        assert!(req.validate().is_empty());
    }

    #[test]
    fn test_invalid_email_reported() {
        let req = UpdateStaffRequest {
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };
        assert!(req.validate().has("email"));
    }
}
