use serde::Deserialize;

use super::entities::NewNotification;
use crate::models::common::ListQuery;
use crate::models::common::query::{deserialize_opt_bool, deserialize_opt_number};
use crate::utils::validate::{FieldErrors, MSG_BLANK, check_opt_text, check_text};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationListParams {
    #[serde(flatten)]
    pub query: ListQuery,
    #[serde(default, deserialize_with = "deserialize_opt_number")]
    pub recipient_student: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_number")]
    pub recipient_staff: Option<i64>,
    pub notif_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_bool")]
    pub read: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateNotificationRequest {
    pub recipient_student_id: Option<i64>,
    pub recipient_staff_id: Option<i64>,
    pub notif_type: String,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub auto_resolved: bool,
}

impl CreateNotificationRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_text(&mut errors, "notif_type", &self.notif_type, 50);
        check_text(&mut errors, "title", &self.title, 150);
        if self.message.trim().is_empty() {
            errors.add("message", MSG_BLANK);
        }
        errors
    }
}

impl From<CreateNotificationRequest> for NewNotification {
    fn from(req: CreateNotificationRequest) -> Self {
        Self {
            recipient_student_id: req.recipient_student_id,
            recipient_staff_id: req.recipient_staff_id,
            notif_type: req.notif_type,
            title: req.title,
            message: req.message,
            read: req.read,
            auto_resolved: req.auto_resolved,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNotificationRequest {
    pub recipient_student_id: Option<i64>,
    pub recipient_staff_id: Option<i64>,
    pub notif_type: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
    pub read: Option<bool>,
    pub auto_resolved: Option<bool>,
}

impl UpdateNotificationRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_opt_text(&mut errors, "notif_type", self.notif_type.as_deref(), 50);
        check_opt_text(&mut errors, "title", self.title.as_deref(), 150);
        if self.message.as_deref().is_some_and(|m| m.trim().is_empty()) {
            errors.add("message", MSG_BLANK);
        }
        errors
    }
}
