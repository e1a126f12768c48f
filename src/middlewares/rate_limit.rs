/*!
 * 速率限制中间件
 *
 * 用于令牌端点，限制同一客户端在时间窗口内的请求次数。
 *
 * ```rust,ignore
 * web::resource("/token")
 *     .wrap(RateLimit::token())
 *     .route(web::post().to(login))
 * ```
 *
 * 计数按 `前缀:ip:<地址>` 归并，固定窗口，超过后返回 429 并带 `Retry-After`。
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::CONTENT_TYPE,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::future::Cache;
use once_cell::sync::Lazy;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::warn;

use crate::models::{ApiResponse, ErrorCode};

/// 键: 前缀:ip，值: (窗口起点, 计数)
static RATE_LIMIT_CACHE: Lazy<Cache<String, (Instant, u32)>> = Lazy::new(|| {
    Cache::builder()
        .time_to_idle(Duration::from_secs(600))
        .max_capacity(100_000)
        .build()
});

#[derive(Clone)]
pub struct RateLimit {
    max_requests: u32,
    window_secs: u64,
    key_prefix: String,
}

impl RateLimit {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window_secs,
            key_prefix: String::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.key_prefix = prefix.to_string();
        self
    }

    /// 登录（获取令牌）：10次/分钟/IP
    pub fn token() -> Self {
        Self::new(10, 60).with_prefix("token")
    }

    /// 刷新令牌：20次/分钟/IP
    pub fn refresh_token() -> Self {
        Self::new(20, 60).with_prefix("refresh")
    }

    fn cache_key(&self, client: &str) -> String {
        if self.key_prefix.is_empty() {
            format!("ip:{client}")
        } else {
            format!("{}:ip:{}", self.key_prefix, client)
        }
    }
}

/// 计算窗口内的新计数；返回 None 表示已超限
fn next_count(
    entry: Option<(Instant, u32)>,
    now: Instant,
    window: Duration,
    max_requests: u32,
) -> Option<(Instant, u32)> {
    match entry {
        Some((start, count)) if now.duration_since(start) < window => {
            (count < max_requests).then_some((start, count + 1))
        }
        _ => Some((now, 1)),
    }
}

/// 取客户端 IP。部署在反向代理后面时依赖代理写入的转发头
fn extract_client_ip(req: &ServiceRequest) -> String {
    let connection_ip = req
        .connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string());

    if let Some(ref ip) = connection_ip
        && is_valid_ip(ip)
    {
        return ip.clone();
    }

    if let Some(forwarded) = req.headers().get("X-Forwarded-For")
        && let Ok(value) = forwarded.to_str()
        && let Some(ip) = value.split(',').next()
    {
        let ip = ip.trim();
        if is_valid_ip(ip) {
            return ip.to_string();
        }
    }

    connection_ip.unwrap_or_else(|| "unknown".to_string())
}

fn is_valid_ip(ip: &str) -> bool {
    ip.parse::<std::net::IpAddr>().is_ok()
}

fn create_rate_limit_response(retry_after: u64) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .insert_header(("Retry-After", retry_after.to_string()))
        .json(ApiResponse::<()>::error_empty(
            ErrorCode::RateLimitExceeded,
            "Request was throttled. Please try again later.",
        ))
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            limit: self.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    limit: RateLimit,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let limit = self.limit.clone();

        Box::pin(async move {
            let cache_key = limit.cache_key(&extract_client_ip(&req));
            let window = Duration::from_secs(limit.window_secs);
            let entry = RATE_LIMIT_CACHE.get(&cache_key).await;

            match next_count(entry, Instant::now(), window, limit.max_requests) {
                Some(next) => {
                    RATE_LIMIT_CACHE.insert(cache_key, next).await;
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                None => {
                    warn!(
                        "Rate limit exceeded for key: {} (limit {}/{}s)",
                        cache_key, limit.max_requests, limit.window_secs
                    );
                    Ok(req.into_response(
                        create_rate_limit_response(limit.window_secs).map_into_right_body(),
                    ))
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_presets() {
        let token = RateLimit::token();
        assert_eq!(token.max_requests, 10);
        assert_eq!(token.window_secs, 60);
        assert_eq!(token.cache_key("1.2.3.4"), "token:ip:1.2.3.4");

        let refresh = RateLimit::refresh_token();
        assert_eq!(refresh.max_requests, 20);
        assert_eq!(RateLimit::new(1, 1).cache_key("::1"), "ip:::1");
    }

    #[test]
    fn test_fixed_window_counting() {
        let window = Duration::from_secs(60);
        let start = Instant::now();

        let first = next_count(None, start, window, 2).unwrap();
        assert_eq!(first.1, 1);
        let second = next_count(Some(first), start, window, 2).unwrap();
        assert_eq!(second.1, 2);
        assert!(next_count(Some(second), start, window, 2).is_none());

        // 窗口过后重新计数
        let later = start + Duration::from_secs(61);
        let reset = next_count(Some(second), later, window, 2).unwrap();
        assert_eq!(reset, (later, 1));
    }
}
