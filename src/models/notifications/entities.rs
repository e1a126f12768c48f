use serde::{Deserialize, Serialize};

// 通知实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub recipient_student_id: Option<i64>,
    pub recipient_staff_id: Option<i64>,
    pub notif_type: String,
    pub title: String,
    pub message: String,
    pub read: bool,
    /// 被后续事件自动处理（如缴费后关闭欠费提醒）
    pub auto_resolved: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 服务端内部生成的通知
#[derive(Debug, Clone, Default)]
pub struct NewNotification {
    pub recipient_student_id: Option<i64>,
    pub recipient_staff_id: Option<i64>,
    pub notif_type: String,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub auto_resolved: bool,
}

impl NewNotification {
    pub fn for_student(student_id: i64, notif_type: &str, title: &str, message: String) -> Self {
        Self {
            recipient_student_id: Some(student_id),
            notif_type: notif_type.to_string(),
            title: title.to_string(),
            message,
            ..Default::default()
        }
    }

    pub fn for_staff(staff_id: i64, notif_type: &str, title: &str, message: String) -> Self {
        Self {
            recipient_staff_id: Some(staff_id),
            notif_type: notif_type.to_string(),
            title: title.to_string(),
            message,
            ..Default::default()
        }
    }

    /// 标记为已读且已自动处理
    pub fn resolved(mut self) -> Self {
        self.read = true;
        self.auto_resolved = true;
        self
    }
}
