pub mod create;
pub mod deactivate;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::staff::requests::{CreateStaffRequest, StaffListParams, UpdateStaffRequest};
use crate::services::common::{check_reference, check_unique};
use crate::storage::{RecordKind, Storage, UniqueField};
use crate::utils::validate::FieldErrors;

storage_service!(StaffService);

impl StaffService {
    pub async fn list_staff(
        &self,
        query: StaffListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_staff(self, query, request).await
    }

    pub async fn create_staff(
        &self,
        staff_data: CreateStaffRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_staff(self, staff_data, request).await
    }

    pub async fn get_staff(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_staff(self, id, request).await
    }

    pub async fn update_staff(
        &self,
        id: i64,
        update_data: UpdateStaffRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_staff(self, id, update_data, request).await
    }

    pub async fn delete_staff(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::delete_staff(self, id, request).await
    }

    pub async fn deactivate_staff(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        deactivate::deactivate_staff(self, id, request).await
    }
}

pub(crate) async fn validate_new_staff(
    storage: &Arc<dyn Storage>,
    req: &CreateStaffRequest,
) -> Result<FieldErrors> {
    let mut errors = req.validate();
    check_reference(storage, &mut errors, "user_id", RecordKind::User, req.user_id).await?;
    check_reference(
        storage,
        &mut errors,
        "designation_id",
        RecordKind::Designation,
        req.designation_id,
    )
    .await?;
    check_reference(
        storage,
        &mut errors,
        "department_id",
        RecordKind::Department,
        req.department_id,
    )
    .await?;
    check_unique(
        storage,
        &mut errors,
        UniqueField::StaffEmail,
        Some(req.email.clone()),
        None,
    )
    .await?;
    check_unique(
        storage,
        &mut errors,
        UniqueField::StaffPhone,
        Some(req.phone.clone()),
        None,
    )
    .await?;
    check_unique(storage, &mut errors, UniqueField::StaffUser, req.user_id, None).await?;
    Ok(errors)
}

pub(crate) async fn validate_staff_update(
    storage: &Arc<dyn Storage>,
    id: i64,
    req: &UpdateStaffRequest,
) -> Result<FieldErrors> {
    let mut errors = req.validate();
    check_reference(storage, &mut errors, "user_id", RecordKind::User, req.user_id).await?;
    check_reference(
        storage,
        &mut errors,
        "designation_id",
        RecordKind::Designation,
        req.designation_id,
    )
    .await?;
    check_reference(
        storage,
        &mut errors,
        "department_id",
        RecordKind::Department,
        req.department_id,
    )
    .await?;
    check_unique(storage, &mut errors, UniqueField::StaffEmail, req.email.clone(), Some(id)).await?;
    check_unique(storage, &mut errors, UniqueField::StaffPhone, req.phone.clone(), Some(id)).await?;
    check_unique(storage, &mut errors, UniqueField::StaffUser, req.user_id, Some(id)).await?;
    Ok(errors)
}
