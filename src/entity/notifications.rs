//! 通知实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub recipient_student_id: Option<i64>,
    pub recipient_staff_id: Option<i64>,
    pub notif_type: String,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub auto_resolved: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::RecipientStudentId",
        to = "super::students::Column::Id"
    )]
    RecipientStudent,
    #[sea_orm(
        belongs_to = "super::staff::Entity",
        from = "Column::RecipientStaffId",
        to = "super::staff::Column::Id"
    )]
    RecipientStaff,
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_notification(self) -> crate::models::notifications::entities::Notification {
        crate::models::notifications::entities::Notification {
            id: self.id,
            recipient_student_id: self.recipient_student_id,
            recipient_staff_id: self.recipient_staff_id,
            notif_type: self.notif_type,
            title: self.title,
            message: self.message,
            read: self.read,
            auto_resolved: self.auto_resolved,
            created_at: super::from_timestamp(self.created_at),
            updated_at: super::from_timestamp(self.updated_at),
        }
    }
}
