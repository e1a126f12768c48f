//! 路由层端到端测试：内存 SQLite + Moka 缓存

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::middleware::NormalizePath;
use actix_web::{App, test, web};
use chrono::NaiveDate;
use serde_json::{Value, json};

use crate::cache::ObjectCache;
use crate::cache::object_cache::moka::MokaCacheWrapper;
use crate::models::common::RowScope;
use crate::models::courses::requests::CreateCourseRequest;
use crate::models::departments::requests::CreateDepartmentRequest;
use crate::models::enrollments::requests::CreateEnrollmentRequest;
use crate::models::exams::entities::ExamType;
use crate::models::exams::requests::CreateExamRequest;
use crate::models::fees::requests::CreateFeeRequest;
use crate::models::grades::requests::CreateGradeRequest;
use crate::models::notifications::entities::NewNotification;
use crate::models::notifications::requests::NotificationListParams;
use crate::models::programs::entities::ProgramType;
use crate::models::programs::requests::CreateProgramRequest;
use crate::models::students::entities::{Gender, Student};
use crate::models::students::requests::CreateStudentRequest;
use crate::models::users::entities::{User, UserRole};
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use crate::storage::sea_orm_storage::SeaOrmStorage;
use crate::utils::jwt::{JwtUtils, REFRESH_TOKEN};
use crate::utils::{json_error_handler, query_error_handler};

async fn setup_storage() -> Arc<dyn Storage> {
    Arc::new(SeaOrmStorage::in_memory().await.unwrap())
}

// 只挂载被测路由；缓存用进程内 Moka
macro_rules! init_app {
    ($storage:expr) => {{
        let storage: Arc<dyn Storage> = $storage;
        let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::new().unwrap());
        test::init_service(
            App::new()
                .wrap(NormalizePath::trim())
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::Data::new(storage))
                .app_data(web::Data::new(cache))
                .configure(super::configure_auth_routes)
                .configure(super::configure_students_routes)
                .configure(super::configure_courses_routes)
                .configure(super::configure_enrollments_routes)
                .configure(super::configure_exams_routes)
                .configure(super::configure_grades_routes)
                .configure(super::configure_fees_routes)
                .configure(super::configure_notifications_routes)
                .configure(super::configure_dashboard_routes),
        )
        .await
    }};
}

async fn create_user(storage: &Arc<dyn Storage>, username: &str, role: UserRole) -> User {
    storage
        .create_user(CreateUserRequest {
            username: username.to_string(),
            email: format!("{username}@school.edu"),
            // 这些测试不走密码登录
            password: "unused-hash".to_string(),
            role,
            display_name: None,
        })
        .await
        .unwrap()
}

async fn create_program(storage: &Arc<dyn Storage>) -> i64 {
    let department = storage
        .create_department(CreateDepartmentRequest {
            name: "Computer Science".to_string(),
            code: "CS".to_string(),
            description: None,
            hod_id: None,
        })
        .await
        .unwrap();
    storage
        .create_program(CreateProgramRequest {
            program_number: 1,
            name: "Software Engineering".to_string(),
            code: "BSSE".to_string(),
            program_type: ProgramType::Bachelor,
            department_id: department.id,
            duration_years: 4,
            description: None,
        })
        .await
        .unwrap()
        .id
}

fn student_request(n: u32, program_id: i64, user_id: Option<i64>) -> CreateStudentRequest {
    CreateStudentRequest {
        registration_no: format!("REG-{n:03}"),
        user_id,
        full_name: format!("Student {n}"),
        gender: Gender::Female,
        dob: NaiveDate::from_ymd_opt(2004, 5, 17).unwrap(),
        email: format!("student{n}@school.edu"),
        phone: format!("0300{n:07}"),
        address: "12 Campus Road".to_string(),
        program_id,
        enrollment_year: 2024,
        is_active: true,
    }
}

async fn create_student(
    storage: &Arc<dyn Storage>,
    n: u32,
    program_id: i64,
    user_id: Option<i64>,
) -> Student {
    storage
        .create_student(student_request(n, program_id, user_id))
        .await
        .unwrap()
}

fn bearer(user: &User) -> (&'static str, String) {
    let token = JwtUtils::generate_access_token(user.id, user.role.as_str()).unwrap();
    ("Authorization", format!("Bearer {token}"))
}

fn student_json(n: u32, program_id: i64) -> Value {
    json!({
        "registration_no": format!("REG-{n:03}"),
        "full_name": format!("Student {n}"),
        "gender": "Male",
        "dob": "2003-01-20",
        "email": format!("student{n}@school.edu"),
        "phone": format!("0311{n:07}"),
        "address": "7 Library Lane",
        "program_id": program_id,
        "enrollment_year": 2023
    })
}

#[actix_web::test]
async fn test_bulk_create_rejects_whole_batch() {
    let storage = setup_storage().await;
    let admin = create_user(&storage, "admin", UserRole::Admin).await;
    let program_id = create_program(&storage).await;
    let app = init_app!(storage.clone());

    let mut duplicate = student_json(2, program_id);
    duplicate["registration_no"] = json!("REG-001");
    let req = test::TestRequest::post()
        .uri("/api/students/bulk/")
        .insert_header(bearer(&admin))
        .set_json(json!([student_json(1, program_id), duplicate]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    let failures = body["data"].as_array().unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0]["index"], 1);
    assert!(failures[0]["errors"]["registration_no"].is_array());

    let counts = storage.dashboard_counts(None).await.unwrap();
    assert_eq!(counts.total_students, 0);
}

#[actix_web::test]
async fn test_bulk_create_persists_valid_batch() {
    let storage = setup_storage().await;
    let staff = create_user(&storage, "registrar", UserRole::Staff).await;
    let program_id = create_program(&storage).await;
    let app = init_app!(storage.clone());

    let req = test::TestRequest::post()
        .uri("/api/students/bulk")
        .insert_header(bearer(&staff))
        .set_json(json!([student_json(1, program_id), student_json(2, program_id)]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let counts = storage.dashboard_counts(None).await.unwrap();
    assert_eq!(counts.total_students, 2);
}

#[actix_web::test]
async fn test_student_sees_only_own_record() {
    let storage = setup_storage().await;
    let learner = create_user(&storage, "learner", UserRole::Student).await;
    let program_id = create_program(&storage).await;
    let own = create_student(&storage, 1, program_id, Some(learner.id)).await;
    let other = create_student(&storage, 2, program_id, None).await;
    let app = init_app!(storage);

    let req = test::TestRequest::get()
        .uri("/api/students/")
        .insert_header(bearer(&learner))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], own.id);

    let req = test::TestRequest::get()
        .uri(&format!("/api/students/{}/", other.id))
        .insert_header(bearer(&learner))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // 学生角色只读
    let req = test::TestRequest::post()
        .uri("/api/students/")
        .insert_header(bearer(&learner))
        .set_json(student_json(3, program_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

async fn create_fee(storage: &Arc<dyn Storage>, student_id: i64, amount: f64) -> i64 {
    storage
        .create_fee(CreateFeeRequest {
            student_id,
            amount,
            due_date: NaiveDate::from_ymd_opt(2099, 1, 31).unwrap(),
            is_paid: false,
            payment_date: None,
        })
        .await
        .unwrap()
        .id
}

#[actix_web::test]
async fn test_student_fee_rows_are_scoped() {
    let storage = setup_storage().await;
    let learner = create_user(&storage, "learner", UserRole::Student).await;
    let program_id = create_program(&storage).await;
    let own = create_student(&storage, 1, program_id, Some(learner.id)).await;
    let other = create_student(&storage, 2, program_id, None).await;
    let own_fee = create_fee(&storage, own.id, 1500.0).await;
    let other_fee = create_fee(&storage, other.id, 900.0).await;
    let app = init_app!(storage);

    let req = test::TestRequest::get()
        .uri("/api/fees")
        .insert_header(bearer(&learner))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], own_fee);

    let req = test::TestRequest::get()
        .uri(&format!("/api/fees/{other_fee}"))
        .insert_header(bearer(&learner))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_student_without_record_sees_nothing() {
    let storage = setup_storage().await;
    let learner = create_user(&storage, "unlinked", UserRole::Student).await;
    let program_id = create_program(&storage).await;
    let student = create_student(&storage, 1, program_id, None).await;
    create_fee(&storage, student.id, 500.0).await;
    let app = init_app!(storage);

    let req = test::TestRequest::get()
        .uri("/api/fees/")
        .insert_header(bearer(&learner))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn test_missing_token_is_unauthorized() {
    let storage = setup_storage().await;
    let app = init_app!(storage);

    let req = test::TestRequest::get().uri("/api/students").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_expired_refresh_token_rejected() {
    let storage = setup_storage().await;
    let admin = create_user(&storage, "admin", UserRole::Admin).await;
    let app = init_app!(storage);

    let expired = JwtUtils::generate_token_with_expiry(
        admin.id,
        admin.role.as_str(),
        REFRESH_TOKEN,
        chrono::Duration::hours(-2),
    )
    .unwrap();
    let req = test::TestRequest::post()
        .uri("/api/token/refresh/")
        .set_json(json!({ "refresh": expired }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Token is expired");
}

#[actix_web::test]
async fn test_dashboard_filters() {
    let storage = setup_storage().await;
    let admin = create_user(&storage, "admin", UserRole::Admin).await;
    let learner = create_user(&storage, "learner", UserRole::Student).await;
    let program_id = create_program(&storage).await;
    let first = create_student(&storage, 1, program_id, None).await;
    create_student(&storage, 2, program_id, None).await;
    create_student(&storage, 3, program_id, None).await;
    create_fee(&storage, first.id, 250.0).await;
    let app = init_app!(storage);

    let req = test::TestRequest::get()
        .uri("/api/dashboard/?filter=today")
        .insert_header(bearer(&admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let data = &body["data"];
    assert_eq!(data["total_students"], 3);
    assert_eq!(data["total_fees"], 1);
    assert_eq!(data["filter_info"]["filter_type"], "today");
    let today = chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string();
    assert_eq!(data["filter_info"]["start_date"], today.as_str());
    assert_eq!(data["filter_info"]["end_date"], today.as_str());

    let req = test::TestRequest::get()
        .uri("/api/dashboard?filter=custom&start=2024-03-10&end=2024-03-01")
        .insert_header(bearer(&admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/api/dashboard")
        .insert_header(bearer(&learner))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_dashboard_rejects_out_of_range_year() {
    let storage = setup_storage().await;
    let admin = create_user(&storage, "admin", UserRole::Admin).await;
    let app = init_app!(storage);

    let req = test::TestRequest::get()
        .uri("/api/dashboard?filter=custom&start=2024-01-01&end=%2B262142-12-31")
        .insert_header(bearer(&admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/api/dashboard?filter=custom&start=2024-01-01&end=9999-12-31")
        .insert_header(bearer(&admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_page_far_past_the_end_is_empty() {
    let storage = setup_storage().await;
    let admin = create_user(&storage, "admin", UserRole::Admin).await;
    let program_id = create_program(&storage).await;
    create_student(&storage, 1, program_id, None).await;
    let app = init_app!(storage);

    let req = test::TestRequest::get()
        .uri(&format!("/api/students?page={}", i64::MAX))
        .insert_header(bearer(&admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 0);
    assert_eq!(body["data"]["pagination"]["total"], 1);
}

#[actix_web::test]
async fn test_refresh_token_cannot_be_replayed() {
    let storage = setup_storage().await;
    let admin = create_user(&storage, "admin", UserRole::Admin).await;
    let app = init_app!(storage);

    let refresh = JwtUtils::generate_refresh_token(admin.id, admin.role.as_str()).unwrap();
    let req = test::TestRequest::post()
        .uri("/api/token/refresh")
        .set_json(json!({ "refresh": refresh }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["data"]["refresh"].is_string());

    // 已轮换的 token 再次使用
    let req = test::TestRequest::post()
        .uri("/api/token/refresh")
        .set_json(json!({ "refresh": refresh }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Token is blacklisted");
}

async fn create_course(storage: &Arc<dyn Storage>, code: &str, program_id: i64) -> i64 {
    storage
        .create_course(CreateCourseRequest {
            code: code.to_string(),
            title: format!("Course {code}"),
            credit_hours: 3.0,
            semester: 1,
            program_id,
        })
        .await
        .unwrap()
        .id
}

async fn enroll(storage: &Arc<dyn Storage>, student_id: i64, course_id: i64) -> i64 {
    storage
        .create_enrollment(CreateEnrollmentRequest {
            student_id,
            course_id,
            semester: 1,
            year: 2024,
        })
        .await
        .unwrap()
        .id
}

// 列表只含自己的行，别人的行按 404 处理
macro_rules! assert_scoped {
    ($app:expr, $user:expr, $path:expr, $own:expr, $other:expr) => {{
        let path: &str = $path;
        let req = test::TestRequest::get()
            .uri(path)
            .insert_header(bearer($user))
            .to_request();
        let body: Value = test::call_and_read_body_json($app, req).await;
        let items = body["data"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 1, "{path}");
        assert_eq!(items[0]["id"], $own, "{path}");

        let req = test::TestRequest::get()
            .uri(&format!("{path}/{}", $own))
            .insert_header(bearer($user))
            .to_request();
        assert_eq!(test::call_service($app, req).await.status(), StatusCode::OK, "{path}");

        let req = test::TestRequest::get()
            .uri(&format!("{path}/{}", $other))
            .insert_header(bearer($user))
            .to_request();
        assert_eq!(
            test::call_service($app, req).await.status(),
            StatusCode::NOT_FOUND,
            "{path}"
        );
    }};
}

#[actix_web::test]
async fn test_student_academic_rows_are_scoped() {
    let storage = setup_storage().await;
    let learner = create_user(&storage, "learner", UserRole::Student).await;
    let program_id = create_program(&storage).await;
    let own = create_student(&storage, 1, program_id, Some(learner.id)).await;
    let other = create_student(&storage, 2, program_id, None).await;
    let course_id = create_course(&storage, "CS101", program_id).await;
    let own_enrollment = enroll(&storage, own.id, course_id).await;
    let other_enrollment = enroll(&storage, other.id, course_id).await;

    let exam = storage
        .create_exam(CreateExamRequest {
            course_id,
            exam_type: ExamType::Midterm,
            date: NaiveDate::from_ymd_opt(2024, 10, 14).unwrap(),
            total_marks: 100,
        })
        .await
        .unwrap();
    let mut grade_ids = Vec::new();
    for (student_id, marks) in [(own.id, 71.5), (other.id, 88.0)] {
        let grade = storage
            .create_grade(CreateGradeRequest {
                student_id,
                exam_id: exam.id,
                obtained_marks: marks,
            })
            .await
            .unwrap();
        grade_ids.push(grade.id);
    }

    let mut notice_ids = Vec::new();
    for student_id in [own.id, other.id] {
        let notice = storage
            .create_notification(NewNotification::for_student(
                student_id,
                "Exam",
                "New Exam Scheduled",
                "Midterm next week.".to_string(),
            ))
            .await
            .unwrap();
        notice_ids.push(notice.id);
    }
    let app = init_app!(storage.clone());

    assert_scoped!(&app, &learner, "/api/enrollments", own_enrollment, other_enrollment);
    assert_scoped!(&app, &learner, "/api/grades", grade_ids[0], grade_ids[1]);
    assert_scoped!(&app, &learner, "/api/notifications", notice_ids[0], notice_ids[1]);

    // 别人的通知不能标记已读，且保持未读
    let req = test::TestRequest::post()
        .uri(&format!("/api/notifications/{}/mark_read", notice_ids[1]))
        .insert_header(bearer(&learner))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let untouched = storage.get_notification_by_id(notice_ids[1]).await.unwrap().unwrap();
    assert!(!untouched.read);

    let req = test::TestRequest::post()
        .uri(&format!("/api/notifications/{}/mark_read", notice_ids[0]))
        .insert_header(bearer(&learner))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let marked = storage.get_notification_by_id(notice_ids[0]).await.unwrap().unwrap();
    assert!(marked.read);
}

#[actix_web::test]
async fn test_bulk_update_unknown_id_changes_nothing() {
    let storage = setup_storage().await;
    let admin = create_user(&storage, "admin", UserRole::Admin).await;
    let program_id = create_program(&storage).await;
    let first = create_student(&storage, 1, program_id, None).await;
    let app = init_app!(storage.clone());

    let req = test::TestRequest::put()
        .uri("/api/students/bulk")
        .insert_header(bearer(&admin))
        .set_json(json!([
            { "id": first.id, "full_name": "Renamed Student" },
            { "id": first.id + 1000, "full_name": "Nobody" }
        ]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    let failures = body["data"].as_array().unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0]["index"], 1);
    assert!(failures[0]["errors"]["id"].is_array());

    let stored = storage.get_student_by_id(first.id).await.unwrap().unwrap();
    assert_eq!(stored.full_name, "Student 1");
}

#[actix_web::test]
async fn test_bulk_update_duplicate_in_batch_changes_nothing() {
    let storage = setup_storage().await;
    let staff = create_user(&storage, "registrar", UserRole::Staff).await;
    let program_id = create_program(&storage).await;
    let first = create_student(&storage, 1, program_id, None).await;
    let second = create_student(&storage, 2, program_id, None).await;
    let app = init_app!(storage.clone());

    let req = test::TestRequest::put()
        .uri("/api/students/bulk/")
        .insert_header(bearer(&staff))
        .set_json(json!([
            { "id": first.id, "email": "shared@school.edu" },
            { "id": second.id, "email": "shared@school.edu" }
        ]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    let failures = body["data"].as_array().unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0]["index"], 1);
    assert!(failures[0]["errors"]["email"].is_array());

    for (id, email) in [(first.id, "student1@school.edu"), (second.id, "student2@school.edu")] {
        let stored = storage.get_student_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.email, email);
    }

    // 合法批次整体写入
    let req = test::TestRequest::put()
        .uri("/api/students/bulk")
        .insert_header(bearer(&staff))
        .set_json(json!([
            { "id": first.id, "email": "first@school.edu" },
            { "id": second.id, "email": "second@school.edu" }
        ]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let stored = storage.get_student_by_id(second.id).await.unwrap().unwrap();
    assert_eq!(stored.email, "second@school.edu");
}

fn course_json(code: &str, program_id: i64) -> Value {
    json!({
        "code": code,
        "title": format!("Course {code}"),
        "credit_hours": 3.0,
        "semester": 2,
        "program_id": program_id
    })
}

#[actix_web::test]
async fn test_bulk_courses() {
    let storage = setup_storage().await;
    let admin = create_user(&storage, "admin", UserRole::Admin).await;
    let learner = create_user(&storage, "learner", UserRole::Student).await;
    let program_id = create_program(&storage).await;
    let existing = create_course(&storage, "CS100", program_id).await;
    let app = init_app!(storage.clone());

    let req = test::TestRequest::post()
        .uri("/api/courses/bulk")
        .insert_header(bearer(&admin))
        .set_json(json!([course_json("CS201", program_id), course_json("CS202", program_id)]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let created = body["data"].as_array().unwrap();
    assert_eq!(created.len(), 2);
    assert_eq!(created[1]["code"], "CS202");

    // 已存在的课程代码和不存在的专业都会让整批失败
    let req = test::TestRequest::post()
        .uri("/api/courses/bulk")
        .insert_header(bearer(&admin))
        .set_json(json!([
            course_json("CS301", program_id),
            course_json("CS100", program_id),
            course_json("CS302", program_id + 50)
        ]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    let failures = body["data"].as_array().unwrap();
    assert_eq!(failures.len(), 2);
    assert!(failures[0]["errors"]["code"].is_array());
    assert!(failures[1]["errors"]["program_id"].is_array());

    let req = test::TestRequest::get()
        .uri("/api/courses?page_size=50")
        .insert_header(bearer(&admin))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["pagination"]["total"], 3);

    let req = test::TestRequest::put()
        .uri("/api/courses/bulk")
        .insert_header(bearer(&admin))
        .set_json(json!([{ "id": existing, "title": "Discrete Mathematics" }]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let course = storage.get_course_by_id(existing).await.unwrap().unwrap();
    assert_eq!(course.title, "Discrete Mathematics");

    let req = test::TestRequest::post()
        .uri("/api/courses/bulk")
        .insert_header(bearer(&learner))
        .set_json(json!([course_json("CS401", program_id)]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_mark_paid_resolves_fee_notices() {
    let storage = setup_storage().await;
    let staff = create_user(&storage, "accounts", UserRole::Staff).await;
    let program_id = create_program(&storage).await;
    let student = create_student(&storage, 1, program_id, None).await;
    let fee_id = create_fee(&storage, student.id, 1200.0).await;

    let fee_notice = storage
        .create_notification(NewNotification::for_student(
            student.id,
            "Fee",
            "New Fee Assigned",
            "A new fee of 1200.00 is due on 2099-01-31.".to_string(),
        ))
        .await
        .unwrap();
    let exam_notice = storage
        .create_notification(NewNotification::for_student(
            student.id,
            "Exam",
            "New Exam Scheduled",
            "Final exam in December.".to_string(),
        ))
        .await
        .unwrap();
    let app = init_app!(storage.clone());

    let req = test::TestRequest::post()
        .uri(&format!("/api/fees/{fee_id}/mark_paid"))
        .insert_header(bearer(&staff))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let fee = storage.get_fee_by_id(fee_id).await.unwrap().unwrap();
    assert!(fee.is_paid);
    assert!(fee.payment_date.is_some());

    let resolved = storage.get_notification_by_id(fee_notice.id).await.unwrap().unwrap();
    assert!(resolved.read && resolved.auto_resolved);
    // 其他类型的通知不受影响
    let unrelated = storage.get_notification_by_id(exam_notice.id).await.unwrap().unwrap();
    assert!(!unrelated.read && !unrelated.auto_resolved);

    let params = NotificationListParams {
        notif_type: Some("Fee".to_string()),
        ..Default::default()
    };
    let fee_notices = storage
        .list_notifications_with_pagination(params, RowScope::Student(Some(student.id)))
        .await
        .unwrap();
    assert_eq!(fee_notices.items.len(), 2);
    let paid = fee_notices
        .items
        .iter()
        .find(|n| n.title == "Fee Paid")
        .unwrap();
    assert!(paid.read && paid.auto_resolved);
}

#[actix_web::test]
async fn test_exam_notice_reaches_deactivated_students() {
    let storage = setup_storage().await;
    let staff = create_user(&storage, "faculty", UserRole::Staff).await;
    let program_id = create_program(&storage).await;
    let active = create_student(&storage, 1, program_id, None).await;
    let inactive = storage
        .create_student(CreateStudentRequest {
            is_active: false,
            ..student_request(2, program_id, None)
        })
        .await
        .unwrap();
    let course_id = create_course(&storage, "CS110", program_id).await;
    let app = init_app!(storage.clone());

    let req = test::TestRequest::post()
        .uri("/api/exams")
        .insert_header(bearer(&staff))
        .set_json(json!({
            "course_id": course_id,
            "exam_type": "Final",
            "date": "2024-12-16"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    for student_id in [active.id, inactive.id] {
        let params = NotificationListParams {
            notif_type: Some("Exam".to_string()),
            ..Default::default()
        };
        let notices = storage
            .list_notifications_with_pagination(params, RowScope::Student(Some(student_id)))
            .await
            .unwrap();
        assert_eq!(notices.items.len(), 1, "student {student_id}");
        assert_eq!(notices.items[0].title, "New Exam Scheduled");
    }
}
