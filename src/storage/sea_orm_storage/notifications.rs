//! 通知存储操作

use super::SeaOrmStorage;
use super::query::{apply_ordering, apply_scope, fetch_page, like_term};
use crate::entity::notifications::{ActiveModel, Column, Entity as Notifications};
use crate::errors::{EduSystemError, Result};
use crate::models::{
    PaginatedResponse, RowScope,
    notifications::{
        entities::{NewNotification, Notification},
        requests::{NotificationListParams, UpdateNotificationRequest},
    },
};
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, Order, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建通知
    pub async fn create_notification_impl(&self, new: NewNotification) -> Result<Notification> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            recipient_student_id: Set(new.recipient_student_id),
            recipient_staff_id: Set(new.recipient_staff_id),
            notif_type: Set(new.notif_type),
            title: Set(new.title),
            message: Set(new.message),
            read: Set(new.read),
            auto_resolved: Set(new.auto_resolved),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSystemError::from_write(e, "创建通知失败"))?;

        Ok(result.into_notification())
    }

    /// 通过 ID 获取通知
    pub async fn get_notification_by_id_impl(&self, id: i64) -> Result<Option<Notification>> {
        let result = Notifications::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询通知失败: {e}")))?;

        Ok(result.map(|m| m.into_notification()))
    }

    /// 分页列出通知
    pub async fn list_notifications_with_pagination_impl(
        &self,
        params: NotificationListParams,
        scope: RowScope,
    ) -> Result<PaginatedResponse<Notification>> {
        let mut select = apply_scope(Notifications::find(), Column::RecipientStudentId, scope);

        if let Some(term) = params.query.search_term() {
            select = select.filter(
                Condition::any()
                    .add(Column::Title.like(like_term(term)))
                    .add(Column::Message.like(like_term(term))),
            );
        }

        if let Some(student_id) = params.recipient_student {
            select = select.filter(Column::RecipientStudentId.eq(student_id));
        }
        if let Some(staff_id) = params.recipient_staff {
            select = select.filter(Column::RecipientStaffId.eq(staff_id));
        }
        if let Some(notif_type) = params.notif_type {
            select = select.filter(Column::NotifType.eq(notif_type));
        }
        if let Some(read) = params.read {
            select = select.filter(Column::Read.eq(read));
        }

        let select = apply_ordering(
            select,
            &params.query.ordering_fields(),
            &[("created_at", Column::CreatedAt)],
            &[(Column::CreatedAt, Order::Desc), (Column::Id, Order::Desc)],
        );

        let page = fetch_page(&self.db, select, &params.query.pagination, "通知").await?;
        Ok(page.map(|m| m.into_notification()))
    }

    /// 更新通知
    pub async fn update_notification_impl(
        &self,
        id: i64,
        update: UpdateNotificationRequest,
    ) -> Result<Option<Notification>> {
        if self.get_notification_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(student_id) = update.recipient_student_id {
            model.recipient_student_id = Set(Some(student_id));
        }
        if let Some(staff_id) = update.recipient_staff_id {
            model.recipient_staff_id = Set(Some(staff_id));
        }
        if let Some(notif_type) = update.notif_type {
            model.notif_type = Set(notif_type);
        }
        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(message) = update.message {
            model.message = Set(message);
        }
        if let Some(read) = update.read {
            model.read = Set(read);
        }
        if let Some(auto_resolved) = update.auto_resolved {
            model.auto_resolved = Set(auto_resolved);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EduSystemError::from_write(e, "更新通知失败"))?;

        self.get_notification_by_id_impl(id).await
    }

    /// 删除通知
    pub async fn delete_notification_impl(&self, id: i64) -> Result<bool> {
        let result = Notifications::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除通知失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 把学生某类未读通知标记为已读且已自动处理
    pub async fn resolve_unread_notifications_impl(
        &self,
        student_id: i64,
        notif_type: &str,
    ) -> Result<u64> {
        let result = Notifications::update_many()
            .col_expr(Column::Read, Expr::value(true))
            .col_expr(Column::AutoResolved, Expr::value(true))
            .col_expr(Column::UpdatedAt, Expr::value(chrono::Utc::now().timestamp()))
            .filter(Column::RecipientStudentId.eq(student_id))
            .filter(Column::NotifType.eq(notif_type))
            .filter(Column::Read.eq(false))
            .exec(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("更新通知状态失败: {e}")))?;

        Ok(result.rows_affected)
    }
}
