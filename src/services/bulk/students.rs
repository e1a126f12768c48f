use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use tracing::info;

use super::BulkService;
use super::batch::{
    BatchErrors, BatchUniqueness, batch_size_error, item_id, parse_item, persist_failed,
};
use crate::models::ApiResponse;
use crate::models::students::entities::StudentResponse;
use crate::models::students::requests::{CreateStudentRequest, UpdateStudentRequest};
use crate::services::common::today;
use crate::services::students::{validate_new_student, validate_student_update};
use crate::storage::RecordKind;
use crate::utils::validate::FieldErrors;

pub async fn bulk_create_students(
    service: &BulkService,
    items: Vec<Value>,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(resp) = batch_size_error(items.len()) {
        return Ok(resp);
    }
    let storage = service.get_storage(request);
    let today = today();

    let mut failures = BatchErrors::default();
    let mut seen = BatchUniqueness::default();
    let mut valid = Vec::with_capacity(items.len());

    for (index, value) in items.into_iter().enumerate() {
        let item = match parse_item::<CreateStudentRequest>(value) {
            Ok(item) => item,
            Err(errors) => {
                failures.record(index, errors);
                continue;
            }
        };

        let mut errors = validate_new_student(&storage, &item, today).await?;
        seen.check(&mut errors, "registration_no", Some(item.registration_no.clone()), index);
        seen.check(&mut errors, "email", Some(item.email.clone()), index);
        seen.check(&mut errors, "phone", Some(item.phone.clone()), index);
        seen.check(&mut errors, "user_id", item.user_id.map(|id| id.to_string()), index);
        failures.record(index, errors);
        valid.push(item);
    }

    if !failures.is_empty() {
        return Ok(failures.into_response("student create"));
    }

    match storage.bulk_create_students(valid).await {
        Ok(students) => {
            info!("Bulk created {} students", students.len());
            let data: Vec<StudentResponse> =
                students.into_iter().map(StudentResponse::from).collect();
            Ok(HttpResponse::Created().json(ApiResponse::success(
                data,
                "Students created successfully",
            )))
        }
        Err(e) => Ok(persist_failed("student create", e)),
    }
}

pub async fn bulk_update_students(
    service: &BulkService,
    items: Vec<Value>,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(resp) = batch_size_error(items.len()) {
        return Ok(resp);
    }
    let storage = service.get_storage(request);
    let today = today();

    let mut failures = BatchErrors::default();
    let mut seen = BatchUniqueness::default();
    let mut valid = Vec::with_capacity(items.len());

    for (index, value) in items.into_iter().enumerate() {
        let mut errors = FieldErrors::new();
        let id = item_id(&value, &mut errors);
        let item = match parse_item::<UpdateStudentRequest>(value) {
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

        if !storage.record_exists(RecordKind::Student, id).await? {
            errors.add("id", format!("Student with id {id} does not exist."));
            failures.record(index, errors);
            continue;
        }

        errors.merge(validate_student_update(&storage, id, &item, today).await?);
        seen.check(&mut errors, "id", Some(id.to_string()), index);
        seen.check(&mut errors, "registration_no", item.registration_no.clone(), index);
        seen.check(&mut errors, "email", item.email.clone(), index);
        seen.check(&mut errors, "phone", item.phone.clone(), index);
        seen.check(&mut errors, "user_id", item.user_id.map(|id| id.to_string()), index);
        failures.record(index, errors);
        valid.push((id, item));
    }

    if !failures.is_empty() {
        return Ok(failures.into_response("student update"));
    }

    match storage.bulk_update_students(valid).await {
        Ok(students) => {
            info!("Bulk updated {} students", students.len());
            let data: Vec<StudentResponse> =
                students.into_iter().map(StudentResponse::from).collect();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                data,
                "Students updated successfully",
            )))
        }
        Err(e) => Ok(persist_failed("student update", e)),
    }
}
