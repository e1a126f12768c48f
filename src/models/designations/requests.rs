use serde::Deserialize;

use crate::models::common::ListQuery;
use crate::utils::validate::{FieldErrors, check_opt_text, check_text};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DesignationListParams {
    #[serde(flatten)]
    pub query: ListQuery,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDesignationRequest {
    pub title: String,
}

impl CreateDesignationRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_text(&mut errors, "title", &self.title, 100);
        errors
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDesignationRequest {
    pub title: Option<String>,
}

impl UpdateDesignationRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_opt_text(&mut errors, "title", self.title.as_deref(), 100);
        errors
    }
}
