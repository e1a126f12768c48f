use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::DashboardService;
use crate::models::dashboard::{DashboardQuery, DashboardResponse, FilterInfo};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::today;

pub async fn get_dashboard(
    service: &DashboardService,
    query: DashboardQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let resolved = match query.resolve(today()) {
        Ok(resolved) => resolved,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::InvalidFilter, msg)));
        }
    };
    debug!("Dashboard window: {:?}", resolved.window);

    let storage = service.get_storage(request);
    let counts = storage.dashboard_counts(resolved.window).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        DashboardResponse {
            counts,
            filter_info: FilterInfo::from(&resolved),
        },
        "Dashboard statistics retrieved successfully",
    )))
}
