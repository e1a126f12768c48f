pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::designations::requests::{
    CreateDesignationRequest, DesignationListParams, UpdateDesignationRequest,
};
use crate::storage::Storage;
use crate::utils::validate::FieldErrors;

storage_service!(DesignationService);

impl DesignationService {
    pub async fn list_designations(
        &self,
        query: DesignationListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_designations(self, query, request).await
    }

    pub async fn create_designation(
        &self,
        designation_data: CreateDesignationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_designation(self, designation_data, request).await
    }

    pub async fn get_designation(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_designation(self, id, request).await
    }

    pub async fn update_designation(
        &self,
        id: i64,
        update_data: UpdateDesignationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_designation(self, id, update_data, request).await
    }

    pub async fn delete_designation(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_designation(self, id, request).await
    }
}

pub(crate) async fn validate_new_designation(
    _storage: &Arc<dyn Storage>,
    req: &CreateDesignationRequest,
) -> Result<FieldErrors> {
    Ok(req.validate())
}

pub(crate) async fn validate_designation_update(
    _storage: &Arc<dyn Storage>,
    _id: i64,
    req: &UpdateDesignationRequest,
) -> Result<FieldErrors> {
    Ok(req.validate())
}
