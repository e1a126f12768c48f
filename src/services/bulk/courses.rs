use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use tracing::info;

use super::BulkService;
use super::batch::{
    BatchErrors, BatchUniqueness, batch_size_error, item_id, parse_item, persist_failed,
};
use crate::models::ApiResponse;
use crate::models::courses::entities::CourseResponse;
use crate::models::courses::requests::{CreateCourseRequest, UpdateCourseRequest};
use crate::services::courses::{validate_course_update, validate_new_course};
use crate::storage::RecordKind;
use crate::utils::validate::FieldErrors;

pub async fn bulk_create_courses(
    service: &BulkService,
    items: Vec<Value>,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(resp) = batch_size_error(items.len()) {
        return Ok(resp);
    }
    let storage = service.get_storage(request);

    let mut failures = BatchErrors::default();
    let mut seen = BatchUniqueness::default();
    let mut valid = Vec::with_capacity(items.len());

    for (index, value) in items.into_iter().enumerate() {
        let item = match parse_item::<CreateCourseRequest>(value) {
            Ok(item) => item,
            Err(errors) => {
                failures.record(index, errors);
                continue;
            }
        };

        let mut errors = validate_new_course(&storage, &item).await?;
        seen.check(&mut errors, "code", Some(item.code.clone()), index);
        failures.record(index, errors);
        valid.push(item);
    }

    if !failures.is_empty() {
        return Ok(failures.into_response("course create"));
    }

    match storage.bulk_create_courses(valid).await {
        Ok(courses) => {
            info!("Bulk created {} courses", courses.len());
            let data: Vec<CourseResponse> =
                courses.into_iter().map(CourseResponse::from).collect();
            Ok(HttpResponse::Created().json(ApiResponse::success(
                data,
                "Courses created successfully",
            )))
        }
        Err(e) => Ok(persist_failed("course create", e)),
    }
}

pub async fn bulk_update_courses(
    service: &BulkService,
    items: Vec<Value>,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(resp) = batch_size_error(items.len()) {
        return Ok(resp);
    }
    let storage = service.get_storage(request);

    let mut failures = BatchErrors::default();
    let mut seen = BatchUniqueness::default();
    let mut valid = Vec::with_capacity(items.len());

    for (index, value) in items.into_iter().enumerate() {
        let mut errors = FieldErrors::new();
        let id = item_id(&value, &mut errors);
        let item = match parse_item::<UpdateCourseRequest>(value) {
            Ok(item) => item,
            Err(parse_errors) => {
                errors.merge(parse_errors);
                failures.record(index, errors);
                continue;
            }
        };
        let Some(id) = id else {
            failures.record(index, errors);
            continue;
        };

        if !storage.record_exists(RecordKind::Course, id).await? {
            errors.add("id", format!("Course with id {id} does not exist."));
            failures.record(index, errors);
            continue;
        }

        errors.merge(validate_course_update(&storage, id, &item).await?);
        seen.check(&mut errors, "id", Some(id.to_string()), index);
        seen.check(&mut errors, "code", item.code.clone(), index);
        failures.record(index, errors);
        valid.push((id, item));
    }

    if !failures.is_empty() {
        return Ok(failures.into_response("course update"));
    }

    match storage.bulk_update_courses(valid).await {
        Ok(courses) => {
            info!("Bulk updated {} courses", courses.len());
            let data: Vec<CourseResponse> =
                courses.into_iter().map(CourseResponse::from).collect();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                data,
                "Courses updated successfully",
            )))
        }
        Err(e) => Ok(persist_failed("course update", e)),
    }
}
