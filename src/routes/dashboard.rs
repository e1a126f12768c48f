use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequirePermission, Resource};
use crate::models::dashboard::DashboardQuery;
use crate::services::DashboardService;

static DASHBOARD_SERVICE: Lazy<DashboardService> = Lazy::new(DashboardService::new_lazy);

pub async fn get_dashboard(
    req: HttpRequest,
    query: web::Query<DashboardQuery>,
) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE
        .get_dashboard(query.into_inner(), &req)
        .await
}

pub fn configure_dashboard_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/dashboard")
            .wrap(RequirePermission::new(Resource::Dashboard))
            .wrap(middlewares::RequireJWT)
            .route(web::get().to(get_dashboard)),
    );
}
