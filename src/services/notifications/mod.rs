pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod mark_read;
pub(crate) mod triggers;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::notifications::requests::{
    CreateNotificationRequest, NotificationListParams, UpdateNotificationRequest,
};
use crate::services::common::check_reference;
use crate::storage::{RecordKind, Storage};
use crate::utils::validate::FieldErrors;

storage_service!(NotificationService);

impl NotificationService {
    pub async fn list_notifications(
        &self,
        query: NotificationListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_notifications(self, query, request).await
    }

    pub async fn create_notification(
        &self,
        notification_data: CreateNotificationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_notification(self, notification_data, request).await
    }

    pub async fn get_notification(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_notification(self, id, request).await
    }

    pub async fn update_notification(
        &self,
        id: i64,
        update_data: UpdateNotificationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_notification(self, id, update_data, request).await
    }

    pub async fn delete_notification(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_notification(self, id, request).await
    }

    pub async fn mark_notification_read(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        mark_read::mark_notification_read(self, id, request).await
    }
}

pub(crate) async fn validate_new_notification(
    storage: &Arc<dyn Storage>,
    req: &CreateNotificationRequest,
) -> Result<FieldErrors> {
    let mut errors = req.validate();
    check_reference(
        storage,
        &mut errors,
        "recipient_student_id",
        RecordKind::Student,
        req.recipient_student_id,
    )
    .await?;
    check_reference(
        storage,
        &mut errors,
        "recipient_staff_id",
        RecordKind::Staff,
        req.recipient_staff_id,
    )
    .await?;
    Ok(errors)
}

pub(crate) async fn validate_notification_update(
    storage: &Arc<dyn Storage>,
    _id: i64,
    req: &UpdateNotificationRequest,
) -> Result<FieldErrors> {
    let mut errors = req.validate();
    check_reference(
        storage,
        &mut errors,
        "recipient_student_id",
        RecordKind::Student,
        req.recipient_student_id,
    )
    .await?;
    check_reference(
        storage,
        &mut errors,
        "recipient_staff_id",
        RecordKind::Staff,
        req.recipient_staff_id,
    )
    .await?;
    Ok(errors)
}
