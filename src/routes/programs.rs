use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequirePermission, Resource};
use crate::models::programs::requests::{
    CreateProgramRequest, ProgramListParams, UpdateProgramRequest,
};
use crate::services::ProgramService;
use crate::utils::SafeIDI64;

static PROGRAM_SERVICE: Lazy<ProgramService> = Lazy::new(ProgramService::new_lazy);

pub async fn list_programs(
    req: HttpRequest,
    query: web::Query<ProgramListParams>,
) -> ActixResult<HttpResponse> {
    PROGRAM_SERVICE.list_programs(query.into_inner(), &req).await
}

pub async fn create_program(
    req: HttpRequest,
    program_data: web::Json<CreateProgramRequest>,
) -> ActixResult<HttpResponse> {
    PROGRAM_SERVICE.create_program(program_data.into_inner(), &req).await
}

pub async fn get_program(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    PROGRAM_SERVICE.get_program(id.0, &req).await
}

pub async fn update_program(
    req: HttpRequest,
    id: SafeIDI64,
    update_data: web::Json<UpdateProgramRequest>,
) -> ActixResult<HttpResponse> {
    PROGRAM_SERVICE
        .update_program(id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_program(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    PROGRAM_SERVICE.delete_program(id.0, &req).await
}

// 配置路由
pub fn configure_programs_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/programs")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(RequirePermission::new(Resource::Programs))
                    .route("", web::get().to(list_programs))
                    .route("", web::post().to(create_program))
                    .route("/{id}", web::get().to(get_program))
                    .route("/{id}", web::put().to(update_program))
                    .route("/{id}", web::delete().to(delete_program)),
            ),
    );
}
