pub mod stats;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::dashboard::DashboardQuery;

storage_service!(DashboardService);

impl DashboardService {
    // 按时间窗口统计各类记录
    pub async fn get_dashboard(
        &self,
        query: DashboardQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        stats::get_dashboard(self, query, request).await
    }
}
