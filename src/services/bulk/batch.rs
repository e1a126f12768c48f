use actix_web::HttpResponse;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::errors::EduSystemError;
use crate::models::bulk::{BulkItemError, NON_FIELD_ERRORS};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::FieldErrors;

/// 条目数必须在 `1..=max_items` 之间
pub(crate) fn check_batch_size(len: usize, max_items: usize) -> Result<(), String> {
    if len == 0 {
        Err("Expected a non-empty list of items.".to_string())
    } else if len > max_items {
        Err(format!("Too many items: at most {max_items} per request."))
    } else {
        Ok(())
    }
}

pub(crate) fn batch_size_error(len: usize) -> Option<HttpResponse> {
    check_batch_size(len, AppConfig::get().bulk.max_items)
        .err()
        .map(|msg| {
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        })
}

/// 反序列化单条记录，失败信息挂在 `non_field_errors` 下
pub(crate) fn parse_item<T: DeserializeOwned>(value: Value) -> Result<T, FieldErrors> {
    serde_json::from_value(value).map_err(|e| {
        let mut errors = FieldErrors::new();
        errors.add(NON_FIELD_ERRORS, e.to_string());
        errors
    })
}

/// 取更新条目的 `id`
pub(crate) fn item_id(value: &Value, errors: &mut FieldErrors) -> Option<i64> {
    match value.get("id") {
        None | Some(Value::Null) => {
            errors.add("id", "This field is required.");
            None
        }
        Some(raw) => {
            let id = raw.as_i64().filter(|id| *id > 0);
            if id.is_none() {
                errors.add("id", "A valid integer is required.");
            }
            id
        }
    }
}

/// 批次内的重复值检查
#[derive(Debug, Default)]
pub(crate) struct BatchUniqueness {
    seen: HashMap<(&'static str, String), usize>,
}

impl BatchUniqueness {
    /// 记录 `index` 条目的值；若之前的条目已用过同一值则报错
    pub fn check(
        &mut self,
        errors: &mut FieldErrors,
        field: &'static str,
        value: Option<String>,
        index: usize,
    ) {
        let Some(value) = value else {
            return;
        };
        match self.seen.entry((field, value)) {
            Entry::Occupied(first) => errors.add(
                field,
                format!("Duplicate value within this batch (item {}).", first.get()),
            ),
            Entry::Vacant(slot) => {
                slot.insert(index);
            }
        }
    }
}

/// 收集各条目的错误
#[derive(Debug, Default)]
pub(crate) struct BatchErrors(Vec<BulkItemError>);

impl BatchErrors {
    pub fn record(&mut self, index: usize, errors: FieldErrors) {
        if !errors.is_empty() {
            self.0.push(BulkItemError { index, errors });
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_response(self, what: &str) -> HttpResponse {
        info!("Bulk {} rejected: {} invalid item(s)", what, self.0.len());
        HttpResponse::BadRequest().json(ApiResponse::error(
            ErrorCode::BulkValidationFailed,
            self.0,
            "Bulk validation failed; no changes were applied.",
        ))
    }
}

/// 事务写入失败
pub(crate) fn persist_failed(what: &str, err: EduSystemError) -> HttpResponse {
    error!("Bulk {} failed and was rolled back: {}", what, err);
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::BulkPersistFailed,
        "Bulk operation failed; no changes were applied.",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Item {
        code: String,
    }

    #[test]
    fn test_batch_size_bounds() {
        assert!(check_batch_size(0, 500).is_err());
        assert!(check_batch_size(1, 500).is_ok());
        assert!(check_batch_size(500, 500).is_ok());
        assert!(check_batch_size(501, 500).is_err());
    }

    #[test]
    fn test_parse_item_reports_shape_errors() {
        let ok: Item = parse_item(json!({"code": "CS101"})).unwrap();
        assert_eq!(ok.code, "CS101");

        let errors = parse_item::<Item>(json!({"code": 5})).unwrap_err();
        assert!(errors.has(NON_FIELD_ERRORS));
        assert!(parse_item::<Item>(json!("CS101")).is_err());
    }

    #[test]
    fn test_item_id() {
        let mut errors = FieldErrors::new();
        assert_eq!(item_id(&json!({"id": 7}), &mut errors), Some(7));
        assert!(errors.is_empty());

        assert_eq!(item_id(&json!({"title": "x"}), &mut errors), None);
        assert_eq!(errors.get("id"), Some(&["This field is required.".to_string()][..]));

        let mut errors = FieldErrors::new();
        assert_eq!(item_id(&json!({"id": "7"}), &mut errors), None);
        assert!(errors.has("id"));
    }

    #[test]
    fn test_batch_uniqueness_points_at_first_item() {
        let mut seen = BatchUniqueness::default();
        let mut first = FieldErrors::new();
        seen.check(&mut first, "code", Some("CS101".to_string()), 0);
        assert!(first.is_empty());

        let mut second = FieldErrors::new();
        seen.check(&mut second, "code", Some("CS101".to_string()), 3);
        seen.check(&mut second, "code", None, 3);
        assert_eq!(
            second.get("code"),
            Some(&["Duplicate value within this batch (item 0).".to_string()][..])
        );
    }

    #[test]
    fn test_batch_errors_skip_clean_items() {
        let mut batch = BatchErrors::default();
        batch.record(0, FieldErrors::new());
        assert!(batch.is_empty());

        let mut errors = FieldErrors::new();
        errors.add("email", "bad");
        batch.record(2, errors);
        assert!(!batch.is_empty());
        assert_eq!(batch.into_response("students").status(), 400);
    }
}
