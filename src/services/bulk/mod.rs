//! 学生与课程的批量创建/更新
//!
//! 先逐条校验全部条目，任一条失败则整批拒绝；全部通过后在一个事务里写入。

pub mod batch;
pub mod courses;
pub mod students;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;

storage_service!(BulkService);

impl BulkService {
    // 批量创建学生
    pub async fn create_students(
        &self,
        items: Vec<Value>,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        students::bulk_create_students(self, items, request).await
    }

    // 批量更新学生
    pub async fn update_students(
        &self,
        items: Vec<Value>,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        students::bulk_update_students(self, items, request).await
    }

    // 批量创建课程
    pub async fn create_courses(
        &self,
        items: Vec<Value>,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        courses::bulk_create_courses(self, items, request).await
    }

    // 批量更新课程
    pub async fn update_courses(
        &self,
        items: Vec<Value>,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        courses::bulk_update_courses(self, items, request).await
    }
}
