use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::middlewares::{self, RequirePermission, Resource};
use crate::models::courses::requests::{CourseListParams, CreateCourseRequest, UpdateCourseRequest};
use crate::services::{BulkService, CourseService};
use crate::utils::SafeIDI64;

static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);
static BULK_SERVICE: Lazy<BulkService> = Lazy::new(BulkService::new_lazy);

pub async fn list_courses(
    req: HttpRequest,
    query: web::Query<CourseListParams>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(query.into_inner(), &req).await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.create_course(course_data.into_inner(), &req).await
}

pub async fn get_course(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(id.0, &req).await
}

pub async fn update_course(
    req: HttpRequest,
    id: SafeIDI64,
    update_data: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course(id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_course(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(id.0, &req).await
}

pub async fn bulk_create_courses(
    req: HttpRequest,
    items: web::Json<Vec<Value>>,
) -> ActixResult<HttpResponse> {
    BULK_SERVICE.create_courses(items.into_inner(), &req).await
}

pub async fn bulk_update_courses(
    req: HttpRequest,
    items: web::Json<Vec<Value>>,
) -> ActixResult<HttpResponse> {
    BULK_SERVICE.update_courses(items.into_inner(), &req).await
}

// 配置路由
pub fn configure_courses_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/courses")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("/bulk")
                    .wrap(RequirePermission::new(Resource::Bulk))
                    .route("", web::post().to(bulk_create_courses))
                    .route("", web::put().to(bulk_update_courses)),
            )
            .service(
                web::scope("")
                    .wrap(RequirePermission::new(Resource::Courses))
                    .route("", web::get().to(list_courses))
                    .route("", web::post().to(create_course))
                    .route("/{id}", web::get().to(get_course))
                    .route("/{id}", web::put().to(update_course))
                    .route("/{id}", web::delete().to(delete_course)),
            ),
    );
}
