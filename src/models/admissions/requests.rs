use serde::Deserialize;

use super::entities::AdmissionStatus;
use crate::models::common::ListQuery;
use crate::models::common::query::deserialize_opt_number;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdmissionListParams {
    #[serde(flatten)]
    pub query: ListQuery,
    pub status: Option<AdmissionStatus>,
    #[serde(default, deserialize_with = "deserialize_opt_number")]
    pub program: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_number")]
    pub student: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAdmissionRequest {
    pub student_id: i64,
    pub program_id: i64,
    #[serde(default = "default_status")]
    pub status: AdmissionStatus,
}

fn default_status() -> AdmissionStatus {
    AdmissionStatus::Pending
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAdmissionRequest {
    pub student_id: Option<i64>,
    pub program_id: Option<i64>,
    pub status: Option<AdmissionStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults_to_pending() {
        let req: CreateAdmissionRequest =
            serde_json::from_str(r#"{"student_id":1,"program_id":2}"#).unwrap();
        assert_eq!(req.status, AdmissionStatus::Pending);
        assert!(
            serde_json::from_str::<CreateAdmissionRequest>(
                r#"{"student_id":1,"program_id":2,"status":"Waitlisted"}"#
            )
            .is_err()
        );
    }
}
