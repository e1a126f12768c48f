use actix_web::{
    FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError,
};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 路径参数 `{id}` 的安全提取器
///
/// 非正整数直接返回 400，避免落到处理函数里。
#[derive(Debug, Clone, Copy)]
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(parse_id(req.match_info().get("id")))
    }
}

fn parse_id(raw: Option<&str>) -> Result<SafeIDI64, actix_web::Error> {
    match raw.and_then(|s| s.parse::<i64>().ok()) {
        Some(id) if id > 0 => Ok(SafeIDI64(id)),
        _ => {
            let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Invalid id in path",
            ));
            Err(InternalError::from_response("invalid id", response).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id(Some("42")).unwrap().0, 42);
        assert!(parse_id(Some("0")).is_err());
        assert!(parse_id(Some("-1")).is_err());
        assert!(parse_id(Some("abc")).is_err());
        assert!(parse_id(None).is_err());
    }
}
