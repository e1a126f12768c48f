use serde::Deserialize;

use super::entities::{UserRole, UserStatus};
use crate::models::common::ListQuery;
use crate::utils::validate::{
    FieldErrors, check_email, check_opt_text, validate_password, validate_username,
};

// 用户查询参数（来自HTTP请求）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserListParams {
    #[serde(flatten)]
    pub query: ListQuery,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
}

// 用户创建请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    /// 明文密码；交给存储层之前会被替换为哈希
    pub password: String,
    pub role: UserRole,
    pub display_name: Option<String>,
}

impl CreateUserRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if let Err(msg) = validate_username(&self.username) {
            errors.add("username", msg);
        }
        check_email(&mut errors, "email", &self.email);
        let policy = validate_password(&self.password);
        for msg in policy.errors {
            errors.add("password", msg);
        }
        check_opt_text(&mut errors, "display_name", self.display_name.as_deref(), 100);
        errors
    }
}

// 用户更新请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub display_name: Option<String>,
}

impl UpdateUserRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if let Some(email) = &self.email {
            check_email(&mut errors, "email", email);
        }
        if let Some(password) = &self.password {
            for msg in validate_password(password).errors {
                errors.add("password", msg);
            }
        }
        check_opt_text(&mut errors, "display_name", self.display_name.as_deref(), 100);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CreateUserRequest {
        CreateUserRequest {
            username: "lecturer01".to_string(),
            email: "t01@school.edu".to_string(),
            password: "Str0ngPassw0rd".to_string(),
            role: UserRole::Staff,
            display_name: None,
        }
    }

    #[test]
    fn test_valid_user_passes() {
        assert!(valid().validate().is_empty());
    }

    #[test]
    fn test_weak_password_and_bad_email() {
        let req = CreateUserRequest {
            email: "nope".to_string(),
            password: "short".to_string(),
            ..valid()
        };
        let errors = req.validate();
        assert!(errors.has("email"));
        assert!(errors.has("password"));
        assert!(!errors.has("username"));
    }

    #[test]
    fn test_role_parses_lowercase() {
        let req: CreateUserRequest = serde_json::from_str(
            r#"{"username":"student01","email":"s@x.io","password":"Abcdefg123","role":"student"}"#,
        )
        .unwrap();
        assert_eq!(req.role, UserRole::Student);
        assert!(
            serde_json::from_str::<UpdateUserRequest>(r#"{"role":"Teacher"}"#).is_err()
        );
    }
}
