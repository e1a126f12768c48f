use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// 费用记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fee {
    pub id: i64,
    pub student_id: i64,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub is_paid: bool,
    pub payment_date: Option<NaiveDate>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Fee {
    pub fn status(&self) -> &'static str {
        if self.is_paid { "Paid" } else { "Unpaid" }
    }

    pub fn is_overdue_on(&self, today: NaiveDate) -> bool {
        !self.is_paid && self.due_date < today
    }
}

// 费用响应（附带派生状态）
#[derive(Debug, Clone, Serialize)]
pub struct FeeResponse {
    #[serde(flatten)]
    pub fee: Fee,
    pub status: &'static str,
    pub is_overdue: bool,
}

impl From<Fee> for FeeResponse {
    fn from(fee: Fee) -> Self {
        let status = fee.status();
        let is_overdue = fee.is_overdue_on(chrono::Utc::now().date_naive());
        Self {
            fee,
            status,
            is_overdue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_overdue() {
        let today = NaiveDate::from_ymd_opt(2025, 10, 18).unwrap();
        let mut fee = Fee {
            id: 1,
            student_id: 1,
            amount: 1500.0,
            due_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            is_paid: false,
            payment_date: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        assert_eq!(fee.status(), "Unpaid");
        assert!(fee.is_overdue_on(today));
        assert!(!fee.is_overdue_on(NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()));

        fee.is_paid = true;
        assert_eq!(fee.status(), "Paid");
        assert!(!fee.is_overdue_on(today));
    }
}
