use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::common::ListQuery;
use crate::models::common::query::{deserialize_opt_bool, deserialize_opt_number};
use crate::utils::validate::{FieldErrors, validate_decimal};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeeListParams {
    #[serde(flatten)]
    pub query: ListQuery,
    #[serde(default, deserialize_with = "deserialize_opt_number")]
    pub student: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_bool")]
    pub is_paid: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFeeRequest {
    pub student_id: i64,
    pub amount: f64,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub is_paid: bool,
    pub payment_date: Option<NaiveDate>,
}

impl CreateFeeRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_amount(&mut errors, self.amount);
        errors
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFeeRequest {
    pub student_id: Option<i64>,
    pub amount: Option<f64>,
    pub due_date: Option<NaiveDate>,
    pub is_paid: Option<bool>,
    pub payment_date: Option<NaiveDate>,
}

impl UpdateFeeRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if let Some(amount) = self.amount {
            check_amount(&mut errors, amount);
        }
        errors
    }
}

// 金额：最多 10 位数字、2 位小数，且非负
fn check_amount(errors: &mut FieldErrors, amount: f64) {
    if let Err(msg) = validate_decimal(amount, 10, 2) {
        errors.add("amount", msg);
    } else if amount < 0.0 {
        errors.add("amount", "Ensure this value is greater than or equal to 0.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_rules() {
        let mut req: CreateFeeRequest =
            serde_json::from_str(r#"{"student_id":1,"amount":2500.50,"due_date":"2025-11-01"}"#)
                .unwrap();
        assert!(!req.is_paid);
        assert!(req.validate().is_empty());

        req.amount = -10.0;
        assert!(req.validate().has("amount"));
        req.amount = 10.005;
        assert!(req.validate().has("amount"));
    }
}
