use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequirePermission, Resource};
use crate::models::notifications::requests::{
    CreateNotificationRequest, NotificationListParams, UpdateNotificationRequest,
};
use crate::services::NotificationService;
use crate::utils::SafeIDI64;

static NOTIFICATION_SERVICE: Lazy<NotificationService> = Lazy::new(NotificationService::new_lazy);

pub async fn list_notifications(
    req: HttpRequest,
    query: web::Query<NotificationListParams>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE.list_notifications(query.into_inner(), &req).await
}

pub async fn create_notification(
    req: HttpRequest,
    notification_data: web::Json<CreateNotificationRequest>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE.create_notification(notification_data.into_inner(), &req).await
}

pub async fn get_notification(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE.get_notification(id.0, &req).await
}

pub async fn update_notification(
    req: HttpRequest,
    id: SafeIDI64,
    update_data: web::Json<UpdateNotificationRequest>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .update_notification(id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_notification(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE.delete_notification(id.0, &req).await
}

pub async fn mark_notification_read(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE.mark_notification_read(id.0, &req).await
}

// 配置路由
pub fn configure_notifications_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/notifications")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/{id}/mark_read")
                    .wrap(RequirePermission::new(Resource::NotificationRead))
                    .route(web::post().to(mark_notification_read)),
            )
            .service(
                web::scope("")
                    .wrap(RequirePermission::new(Resource::Notifications))
                    .route("", web::get().to(list_notifications))
                    .route("", web::post().to(create_notification))
                    .route("/{id}", web::get().to(get_notification))
                    .route("/{id}", web::put().to(update_notification))
                    .route("/{id}", web::delete().to(delete_notification)),
            ),
    );
}
