use chrono::NaiveDate;
use serde::Deserialize;

use super::entities::AttendanceStatus;
use crate::models::common::ListQuery;
use crate::models::common::query::deserialize_opt_number;

pub const MSG_DUPLICATE_ATTENDANCE: &str = "Attendance already exists for this student/course/date.";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttendanceListParams {
    #[serde(flatten)]
    pub query: ListQuery,
    #[serde(default, deserialize_with = "deserialize_opt_number")]
    pub student: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_number")]
    pub course: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_number")]
    pub date: Option<NaiveDate>,
    pub status: Option<AttendanceStatus>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAttendanceRequest {
    pub student_id: i64,
    pub course_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAttendanceRequest {
    pub student_id: Option<i64>,
    pub course_id: Option<i64>,
    pub date: Option<NaiveDate>,
    pub status: Option<AttendanceStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_filter_parses_iso_date() {
        let params = actix_web::web::Query::<AttendanceListParams>::from_query(
            "date=2025-03-01&status=Leave",
        )
        .unwrap()
        .into_inner();
        assert_eq!(params.date, NaiveDate::from_ymd_opt(2025, 3, 1));
        assert_eq!(params.status, Some(AttendanceStatus::Leave));
        assert!(
            actix_web::web::Query::<AttendanceListParams>::from_query("date=03/01/2025").is_err()
        );
    }
}
