//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod academics;
mod admissions;
mod bulk;
mod courses;
mod dashboard;
mod departments;
mod fees;
mod lookups;
mod notifications;
mod programs;
mod query;
mod staff;
mod students;
mod token_blacklist;
mod users;

use crate::config::AppConfig;
use crate::errors::{EduSystemError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        let storage = Self::from_connection(db).await?;
        info!("SeaORM 存储初始化完成，数据库: {}", db_url);
        Ok(storage)
    }

    /// 在已有连接上运行迁移并构建存储
    pub async fn from_connection(db: DatabaseConnection) -> Result<Self> {
        Migrator::up(&db, None)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        Ok(Self { db })
    }

    /// 内存 SQLite，供测试使用
    ///
    /// 只开一个连接，否则每个连接都会拿到各自独立的空库。
    #[cfg(test)]
    pub async fn in_memory() -> Result<Self> {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1).sqlx_logging(false);
        let db = Database::connect(opt)
            .await
            .map_err(|e| EduSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;
        Self::from_connection(db).await
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| EduSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| EduSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| EduSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(EduSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    PaginatedResponse, RowScope,
    admissions::{
        entities::Admission,
        requests::{AdmissionListParams, CreateAdmissionRequest, UpdateAdmissionRequest},
    },
    attendance::{
        entities::Attendance,
        requests::{AttendanceListParams, CreateAttendanceRequest, UpdateAttendanceRequest},
    },
    courses::{
        entities::Course,
        requests::{CourseListParams, CreateCourseRequest, UpdateCourseRequest},
    },
    dashboard::{DashboardCounts, DateWindow},
    departments::{
        entities::Department,
        requests::{CreateDepartmentRequest, DepartmentListParams, UpdateDepartmentRequest},
    },
    designations::{
        entities::Designation,
        requests::{CreateDesignationRequest, DesignationListParams, UpdateDesignationRequest},
    },
    enrollments::{
        entities::Enrollment,
        requests::{CreateEnrollmentRequest, EnrollmentListParams, UpdateEnrollmentRequest},
    },
    exams::{
        entities::Exam,
        requests::{CreateExamRequest, ExamListParams, UpdateExamRequest},
    },
    fees::{
        entities::Fee,
        requests::{CreateFeeRequest, FeeListParams, UpdateFeeRequest},
    },
    grades::{
        entities::Grade,
        requests::{CreateGradeRequest, GradeListParams, UpdateGradeRequest},
    },
    notifications::{
        entities::{NewNotification, Notification},
        requests::{NotificationListParams, UpdateNotificationRequest},
    },
    programs::{
        entities::Program,
        requests::{CreateProgramRequest, ProgramListParams, UpdateProgramRequest},
    },
    staff::{
        entities::Staff,
        requests::{CreateStaffRequest, StaffListParams, UpdateStaffRequest},
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListParams, UpdateStudentRequest},
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListParams},
    },
};
use crate::storage::{RecordKind, Storage, UniqueField};
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(
        &self,
        params: UserListParams,
    ) -> Result<PaginatedResponse<User>> {
        self.list_users_with_pagination_impl(params).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 令牌黑名单
    async fn blacklist_token(&self, jti: &str, user_id: i64, expires_at: i64) -> Result<()> {
        self.blacklist_token_impl(jti, user_id, expires_at).await
    }

    async fn is_token_blacklisted(&self, jti: &str) -> Result<bool> {
        self.is_token_blacklisted_impl(jti).await
    }

    async fn purge_expired_tokens(&self, now: i64) -> Result<u64> {
        self.purge_expired_tokens_impl(now).await
    }

    // 校验辅助
    async fn record_exists(&self, kind: RecordKind, id: i64) -> Result<bool> {
        self.record_exists_impl(kind, id).await
    }

    async fn unique_value_taken(
        &self,
        field: UniqueField,
        value: sea_orm::Value,
        exclude_id: Option<i64>,
    ) -> Result<bool> {
        self.unique_value_taken_impl(field, value, exclude_id).await
    }

    async fn enrollment_exists(
        &self,
        student_id: i64,
        course_id: i64,
        semester: i32,
        year: i32,
        exclude_id: Option<i64>,
    ) -> Result<bool> {
        self.enrollment_exists_impl(student_id, course_id, semester, year, exclude_id)
            .await
    }

    async fn attendance_exists(
        &self,
        student_id: i64,
        course_id: i64,
        date: NaiveDate,
        exclude_id: Option<i64>,
    ) -> Result<bool> {
        self.attendance_exists_impl(student_id, course_id, date, exclude_id)
            .await
    }

    // 院系模块
    async fn create_department(&self, req: CreateDepartmentRequest) -> Result<Department> {
        self.create_department_impl(req).await
    }

    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>> {
        self.get_department_by_id_impl(id).await
    }

    async fn list_departments_with_pagination(
        &self,
        params: DepartmentListParams,
    ) -> Result<PaginatedResponse<Department>> {
        self.list_departments_with_pagination_impl(params).await
    }

    async fn update_department(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>> {
        self.update_department_impl(id, update).await
    }

    async fn delete_department(&self, id: i64) -> Result<bool> {
        self.delete_department_impl(id).await
    }

    // 职务模块
    async fn create_designation(&self, req: CreateDesignationRequest) -> Result<Designation> {
        self.create_designation_impl(req).await
    }

    async fn get_designation_by_id(&self, id: i64) -> Result<Option<Designation>> {
        self.get_designation_by_id_impl(id).await
    }

    async fn list_designations_with_pagination(
        &self,
        params: DesignationListParams,
    ) -> Result<PaginatedResponse<Designation>> {
        self.list_designations_with_pagination_impl(params).await
    }

    async fn update_designation(
        &self,
        id: i64,
        update: UpdateDesignationRequest,
    ) -> Result<Option<Designation>> {
        self.update_designation_impl(id, update).await
    }

    async fn delete_designation(&self, id: i64) -> Result<bool> {
        self.delete_designation_impl(id).await
    }

    // 专业模块
    async fn create_program(&self, req: CreateProgramRequest) -> Result<Program> {
        self.create_program_impl(req).await
    }

    async fn get_program_by_id(&self, id: i64) -> Result<Option<Program>> {
        self.get_program_by_id_impl(id).await
    }

    async fn list_programs_with_pagination(
        &self,
        params: ProgramListParams,
    ) -> Result<PaginatedResponse<Program>> {
        self.list_programs_with_pagination_impl(params).await
    }

    async fn update_program(
        &self,
        id: i64,
        update: UpdateProgramRequest,
    ) -> Result<Option<Program>> {
        self.update_program_impl(id, update).await
    }

    async fn delete_program(&self, id: i64) -> Result<bool> {
        self.delete_program_impl(id).await
    }

    // 课程模块
    async fn create_course(&self, req: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(req).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn list_courses_with_pagination(
        &self,
        params: CourseListParams,
    ) -> Result<PaginatedResponse<Course>> {
        self.list_courses_with_pagination_impl(params).await
    }

    async fn update_course(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        self.update_course_impl(id, update).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    async fn bulk_create_courses(&self, items: Vec<CreateCourseRequest>) -> Result<Vec<Course>> {
        self.bulk_create_courses_impl(items).await
    }

    async fn bulk_update_courses(
        &self,
        items: Vec<(i64, UpdateCourseRequest)>,
    ) -> Result<Vec<Course>> {
        self.bulk_update_courses_impl(items).await
    }

    // 学生模块
    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(req).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_user_id(&self, user_id: i64) -> Result<Option<Student>> {
        self.get_student_by_user_id_impl(user_id).await
    }

    async fn list_students_with_pagination(
        &self,
        params: StudentListParams,
        scope: RowScope,
    ) -> Result<PaginatedResponse<Student>> {
        self.list_students_with_pagination_impl(params, scope).await
    }

    async fn list_student_ids_by_program(&self, program_id: i64) -> Result<Vec<i64>> {
        self.list_student_ids_by_program_impl(program_id).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    async fn bulk_create_students(
        &self,
        items: Vec<CreateStudentRequest>,
    ) -> Result<Vec<Student>> {
        self.bulk_create_students_impl(items).await
    }

    async fn bulk_update_students(
        &self,
        items: Vec<(i64, UpdateStudentRequest)>,
    ) -> Result<Vec<Student>> {
        self.bulk_update_students_impl(items).await
    }

    // 教职工模块
    async fn create_staff(&self, req: CreateStaffRequest) -> Result<Staff> {
        self.create_staff_impl(req).await
    }

    async fn get_staff_by_id(&self, id: i64) -> Result<Option<Staff>> {
        self.get_staff_by_id_impl(id).await
    }

    async fn list_staff_with_pagination(
        &self,
        params: StaffListParams,
    ) -> Result<PaginatedResponse<Staff>> {
        self.list_staff_with_pagination_impl(params).await
    }

    async fn update_staff(&self, id: i64, update: UpdateStaffRequest) -> Result<Option<Staff>> {
        self.update_staff_impl(id, update).await
    }

    async fn delete_staff(&self, id: i64) -> Result<bool> {
        self.delete_staff_impl(id).await
    }

    // 录取模块
    async fn create_admission(&self, req: CreateAdmissionRequest) -> Result<Admission> {
        self.create_admission_impl(req).await
    }

    async fn get_admission_by_id(&self, id: i64) -> Result<Option<Admission>> {
        self.get_admission_by_id_impl(id).await
    }

    async fn list_admissions_with_pagination(
        &self,
        params: AdmissionListParams,
    ) -> Result<PaginatedResponse<Admission>> {
        self.list_admissions_with_pagination_impl(params).await
    }

    async fn update_admission(
        &self,
        id: i64,
        update: UpdateAdmissionRequest,
    ) -> Result<Option<Admission>> {
        self.update_admission_impl(id, update).await
    }

    async fn delete_admission(&self, id: i64) -> Result<bool> {
        self.delete_admission_impl(id).await
    }

    // 选课模块
    async fn create_enrollment(&self, req: CreateEnrollmentRequest) -> Result<Enrollment> {
        self.create_enrollment_impl(req).await
    }

    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>> {
        self.get_enrollment_by_id_impl(id).await
    }

    async fn list_enrollments_with_pagination(
        &self,
        params: EnrollmentListParams,
        scope: RowScope,
    ) -> Result<PaginatedResponse<Enrollment>> {
        self.list_enrollments_with_pagination_impl(params, scope)
            .await
    }

    async fn update_enrollment(
        &self,
        id: i64,
        update: UpdateEnrollmentRequest,
    ) -> Result<Option<Enrollment>> {
        self.update_enrollment_impl(id, update).await
    }

    async fn delete_enrollment(&self, id: i64) -> Result<bool> {
        self.delete_enrollment_impl(id).await
    }

    // 考勤模块
    async fn create_attendance(&self, req: CreateAttendanceRequest) -> Result<Attendance> {
        self.create_attendance_impl(req).await
    }

    async fn get_attendance_by_id(&self, id: i64) -> Result<Option<Attendance>> {
        self.get_attendance_by_id_impl(id).await
    }

    async fn list_attendance_with_pagination(
        &self,
        params: AttendanceListParams,
    ) -> Result<PaginatedResponse<Attendance>> {
        self.list_attendance_with_pagination_impl(params).await
    }

    async fn update_attendance(
        &self,
        id: i64,
        update: UpdateAttendanceRequest,
    ) -> Result<Option<Attendance>> {
        self.update_attendance_impl(id, update).await
    }

    async fn delete_attendance(&self, id: i64) -> Result<bool> {
        self.delete_attendance_impl(id).await
    }

    // 考试模块
    async fn create_exam(&self, req: CreateExamRequest) -> Result<Exam> {
        self.create_exam_impl(req).await
    }

    async fn get_exam_by_id(&self, id: i64) -> Result<Option<Exam>> {
        self.get_exam_by_id_impl(id).await
    }

    async fn list_exams_with_pagination(
        &self,
        params: ExamListParams,
    ) -> Result<PaginatedResponse<Exam>> {
        self.list_exams_with_pagination_impl(params).await
    }

    async fn update_exam(&self, id: i64, update: UpdateExamRequest) -> Result<Option<Exam>> {
        self.update_exam_impl(id, update).await
    }

    async fn delete_exam(&self, id: i64) -> Result<bool> {
        self.delete_exam_impl(id).await
    }

    // 成绩模块
    async fn create_grade(&self, req: CreateGradeRequest) -> Result<Grade> {
        self.create_grade_impl(req).await
    }

    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>> {
        self.get_grade_by_id_impl(id).await
    }

    async fn list_grades_with_pagination(
        &self,
        params: GradeListParams,
        scope: RowScope,
    ) -> Result<PaginatedResponse<Grade>> {
        self.list_grades_with_pagination_impl(params, scope).await
    }

    async fn update_grade(&self, id: i64, update: UpdateGradeRequest) -> Result<Option<Grade>> {
        self.update_grade_impl(id, update).await
    }

    async fn delete_grade(&self, id: i64) -> Result<bool> {
        self.delete_grade_impl(id).await
    }

    // 费用模块
    async fn create_fee(&self, req: CreateFeeRequest) -> Result<Fee> {
        self.create_fee_impl(req).await
    }

    async fn get_fee_by_id(&self, id: i64) -> Result<Option<Fee>> {
        self.get_fee_by_id_impl(id).await
    }

    async fn list_fees_with_pagination(
        &self,
        params: FeeListParams,
        scope: RowScope,
    ) -> Result<PaginatedResponse<Fee>> {
        self.list_fees_with_pagination_impl(params, scope).await
    }

    async fn update_fee(&self, id: i64, update: UpdateFeeRequest) -> Result<Option<Fee>> {
        self.update_fee_impl(id, update).await
    }

    async fn delete_fee(&self, id: i64) -> Result<bool> {
        self.delete_fee_impl(id).await
    }

    // 通知模块
    async fn create_notification(&self, notification: NewNotification) -> Result<Notification> {
        self.create_notification_impl(notification).await
    }

    async fn get_notification_by_id(&self, id: i64) -> Result<Option<Notification>> {
        self.get_notification_by_id_impl(id).await
    }

    async fn list_notifications_with_pagination(
        &self,
        params: NotificationListParams,
        scope: RowScope,
    ) -> Result<PaginatedResponse<Notification>> {
        self.list_notifications_with_pagination_impl(params, scope)
            .await
    }

    async fn update_notification(
        &self,
        id: i64,
        update: UpdateNotificationRequest,
    ) -> Result<Option<Notification>> {
        self.update_notification_impl(id, update).await
    }

    async fn delete_notification(&self, id: i64) -> Result<bool> {
        self.delete_notification_impl(id).await
    }

    async fn resolve_unread_notifications(
        &self,
        student_id: i64,
        notif_type: &str,
    ) -> Result<u64> {
        self.resolve_unread_notifications_impl(student_id, notif_type)
            .await
    }

    // 仪表盘
    async fn dashboard_counts(&self, window: Option<DateWindow>) -> Result<DashboardCounts> {
        self.dashboard_counts_impl(window).await
    }
}
