/*!
 * 资源权限中间件
 *
 * 按「资源 × 角色 × HTTP 方法」的白名单放行请求，必须套在 `RequireJWT` 之内。
 *
 * ```rust,ignore
 * web::scope("/api/fees")
 *     .wrap(RequirePermission::new(Resource::Fees))
 *     .wrap(RequireJWT)
 * ```
 *
 * 学生角色能访问的资源还要在服务层叠加行级范围（见 `RowScope`）。
 */

use crate::models::ErrorCode;
use crate::models::users::entities::{User, UserRole};
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::{Method, StatusCode},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

use super::create_error_response;

/// 受保护的资源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Users,
    Departments,
    Designations,
    Programs,
    Courses,
    Students,
    Staff,
    Admissions,
    Enrollments,
    Attendance,
    Exams,
    Grades,
    Fees,
    Notifications,
    /// `POST /api/notifications/{id}/mark_read/`
    NotificationRead,
    Bulk,
    Dashboard,
}

enum Allowed {
    Nothing,
    ReadOnly,
    Only(&'static [Method]),
    All,
}

fn allowed_for(resource: Resource, role: UserRole) -> Allowed {
    use Resource::*;

    match (resource, role) {
        (NotificationRead, _) => Allowed::Only(&[Method::POST]),
        (Bulk, UserRole::Admin | UserRole::Staff) => Allowed::Only(&[Method::POST, Method::PUT]),
        (Dashboard, UserRole::Admin | UserRole::Staff) => Allowed::ReadOnly,
        (Bulk | Dashboard, UserRole::Student) => Allowed::Nothing,
        (_, UserRole::Admin) => Allowed::All,
        (Users | Designations | Staff, UserRole::Staff) => Allowed::Nothing,
        (_, UserRole::Staff) => Allowed::All,
        (Students | Enrollments | Grades | Fees | Notifications, UserRole::Student) => {
            Allowed::ReadOnly
        }
        (_, UserRole::Student) => Allowed::Nothing,
    }
}

/// 角色能否以 `method` 访问 `resource`，HEAD 按 GET 处理
pub fn is_allowed(resource: Resource, role: UserRole, method: &Method) -> bool {
    let method = if method == Method::HEAD {
        &Method::GET
    } else {
        method
    };

    match allowed_for(resource, role) {
        Allowed::Nothing => false,
        Allowed::ReadOnly => method == Method::GET,
        Allowed::Only(methods) => methods.contains(method),
        Allowed::All => [Method::GET, Method::POST, Method::PUT, Method::DELETE].contains(method),
    }
}

#[derive(Clone)]
pub struct RequirePermission {
    resource: Resource,
}

impl RequirePermission {
    pub fn new(resource: Resource) -> Self {
        Self { resource }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequirePermission
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequirePermissionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequirePermissionMiddleware {
            service: Rc::new(service),
            resource: self.resource,
        }))
    }
}

pub struct RequirePermissionMiddleware<S> {
    service: Rc<S>,
    resource: Resource,
}

impl<S, B> Service<ServiceRequest> for RequirePermissionMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let resource = self.resource;

        Box::pin(async move {
            let role = req.extensions().get::<User>().map(|user| user.role);

            let Some(role) = role else {
                info!(
                    "Permission check without authenticated user: {}",
                    req.path()
                );
                return Ok(req.into_response(
                    create_error_response(
                        StatusCode::UNAUTHORIZED,
                        ErrorCode::Unauthorized,
                        "Authentication credentials were not provided.",
                    )
                    .map_into_right_body(),
                ));
            };

            if !is_allowed(resource, role, req.method()) {
                info!(
                    "Role {} denied {} on {:?} ({})",
                    role,
                    req.method(),
                    resource,
                    req.path()
                );
                return Ok(req.into_response(
                    create_error_response(
                        StatusCode::FORBIDDEN,
                        ErrorCode::Forbidden,
                        "You do not have permission to perform this action.",
                    )
                    .map_into_right_body(),
                ));
            }

            let res = srv.call(req).await?.map_into_left_body();
            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Method; 4] = [Method::GET, Method::POST, Method::PUT, Method::DELETE];

    #[test]
    fn test_admin_has_full_crud() {
        for resource in [Resource::Users, Resource::Staff, Resource::Fees] {
            for method in &ALL {
                assert!(is_allowed(resource, UserRole::Admin, method));
            }
        }
        assert!(!is_allowed(Resource::Courses, UserRole::Admin, &Method::PATCH));
    }

    #[test]
    fn test_staff_is_kept_out_of_accounts_and_hr() {
        for resource in [Resource::Users, Resource::Designations, Resource::Staff] {
            assert!(!is_allowed(resource, UserRole::Staff, &Method::GET));
        }
        assert!(is_allowed(Resource::Grades, UserRole::Staff, &Method::DELETE));
        assert!(is_allowed(Resource::Admissions, UserRole::Staff, &Method::POST));
    }

    #[test]
    fn test_student_is_read_only_on_own_resources() {
        for resource in [
            Resource::Students,
            Resource::Enrollments,
            Resource::Grades,
            Resource::Fees,
            Resource::Notifications,
        ] {
            assert!(is_allowed(resource, UserRole::Student, &Method::GET));
            assert!(is_allowed(resource, UserRole::Student, &Method::HEAD));
            assert!(!is_allowed(resource, UserRole::Student, &Method::POST));
            assert!(!is_allowed(resource, UserRole::Student, &Method::DELETE));
        }
        for resource in [Resource::Courses, Resource::Exams, Resource::Attendance] {
            assert!(!is_allowed(resource, UserRole::Student, &Method::GET));
        }
    }

    #[test]
    fn test_special_resources() {
        for role in [UserRole::Admin, UserRole::Staff, UserRole::Student] {
            assert!(is_allowed(Resource::NotificationRead, role, &Method::POST));
            assert!(!is_allowed(Resource::NotificationRead, role, &Method::GET));
        }
        assert!(is_allowed(Resource::Bulk, UserRole::Staff, &Method::PUT));
        assert!(!is_allowed(Resource::Bulk, UserRole::Admin, &Method::GET));
        assert!(!is_allowed(Resource::Bulk, UserRole::Student, &Method::POST));
        assert!(is_allowed(Resource::Dashboard, UserRole::Staff, &Method::GET));
        assert!(!is_allowed(Resource::Dashboard, UserRole::Admin, &Method::POST));
        assert!(!is_allowed(Resource::Dashboard, UserRole::Student, &Method::GET));
    }
}
