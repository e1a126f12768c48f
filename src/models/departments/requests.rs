use serde::Deserialize;

use crate::models::common::ListQuery;
use crate::utils::validate::{FieldErrors, check_opt_text, check_text};

// 院系列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DepartmentListParams {
    #[serde(flatten)]
    pub query: ListQuery,
    pub code: Option<String>,
    pub name: Option<String>,
}

// 创建院系请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDepartmentRequest {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub hod_id: Option<i64>,
}

impl CreateDepartmentRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_text(&mut errors, "name", &self.name, 100);
        check_text(&mut errors, "code", &self.code, 10);
        errors
    }
}

// 更新院系请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDepartmentRequest {
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub hod_id: Option<i64>,
}

impl UpdateDepartmentRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_opt_text(&mut errors, "name", self.name.as_deref(), 100);
        check_opt_text(&mut errors, "code", self.code.as_deref(), 10);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_length_limit() {
        let req = CreateDepartmentRequest {
            name: "Computer Science".to_string(),
            code: "COMPSCI-DEPT".to_string(),
            description: None,
            hod_id: None,
        };
        let errors = req.validate();
        assert!(errors.has("code"));
        assert!(!errors.has("name"));
    }

    #[test]
    fn test_blank_update_field_rejected() {
        let req = UpdateDepartmentRequest {
            name: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(req.validate().has("name"));
        assert!(UpdateDepartmentRequest::default().validate().is_empty());
    }
}
