pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod mark_paid;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::fees::requests::{CreateFeeRequest, FeeListParams, UpdateFeeRequest};
use crate::services::common::check_reference;
use crate::storage::{RecordKind, Storage};
use crate::utils::validate::FieldErrors;

storage_service!(FeeService);

impl FeeService {
    pub async fn list_fees(
        &self,
        query: FeeListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_fees(self, query, request).await
    }

    pub async fn create_fee(
        &self,
        fee_data: CreateFeeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_fee(self, fee_data, request).await
    }

    pub async fn get_fee(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_fee(self, id, request).await
    }

    pub async fn update_fee(
        &self,
        id: i64,
        update_data: UpdateFeeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_fee(self, id, update_data, request).await
    }

    pub async fn delete_fee(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::delete_fee(self, id, request).await
    }

    pub async fn mark_fee_paid(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        mark_paid::mark_fee_paid(self, id, request).await
    }
}

pub(crate) async fn validate_new_fee(
    storage: &Arc<dyn Storage>,
    req: &CreateFeeRequest,
) -> Result<FieldErrors> {
    let mut errors = req.validate();
    check_reference(
        storage,
        &mut errors,
        "student_id",
        RecordKind::Student,
        Some(req.student_id),
    )
    .await?;
    Ok(errors)
}

pub(crate) async fn validate_fee_update(
    storage: &Arc<dyn Storage>,
    _id: i64,
    req: &UpdateFeeRequest,
) -> Result<FieldErrors> {
    let mut errors = req.validate();
    check_reference(storage, &mut errors, "student_id", RecordKind::Student, req.student_id).await?;
    Ok(errors)
}
