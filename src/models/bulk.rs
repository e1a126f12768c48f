use serde::Serialize;

use crate::utils::validate::FieldErrors;

/// 批量请求中单条记录的校验错误
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BulkItemError {
    pub index: usize,
    pub errors: FieldErrors,
}

/// 解析失败等与具体字段无关的错误放在这个键下
pub const NON_FIELD_ERRORS: &str = "non_field_errors";
