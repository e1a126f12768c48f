//! Redis 缓存后端
//!
//! 所有键写在 `cache.redis.key_prefix` 之下，多个实例可以共用一个 Redis。
//! `invalidate_all` 只清理本前缀下的键。

use async_trait::async_trait;
use redis::{AsyncCommands, aio::MultiplexedConnection};
use tracing::{debug, error, info};

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("redis", RedisObjectCache);

// SCAN 每批返回的键数量提示
const SCAN_BATCH: usize = 200;

pub struct RedisObjectCache {
    client: redis::Client,
    key_prefix: String,
    default_ttl: u64,
}

impl RedisObjectCache {
    /// 按全局配置创建，并 PING 一次确认可用
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        let redis_config = &config.cache.redis;
        let cache = Self::from_settings(
            &redis_config.url,
            &redis_config.key_prefix,
            config.cache.default_ttl,
        )?;

        let mut conn = cache
            .client
            .get_connection()
            .map_err(|e| format!("Redis connection to {} failed: {e}", redis_config.url))?;
        redis::cmd("PING")
            .query::<String>(&mut conn)
            .map_err(|e| format!("Redis ping failed: {e}"))?;

        info!(
            "Redis cache ready at {} (prefix '{}', TTL {}s)",
            redis_config.url, cache.key_prefix, cache.default_ttl
        );
        Ok(cache)
    }

    /// 只解析地址，不建立连接
    pub fn from_settings(url: &str, key_prefix: &str, default_ttl: u64) -> Result<Self, String> {
        let client =
            redis::Client::open(url).map_err(|e| format!("Invalid Redis URL '{url}': {e}"))?;
        Ok(Self {
            client,
            key_prefix: key_prefix.to_string(),
            default_ttl,
        })
    }

    async fn connection(&self) -> Option<MultiplexedConnection> {
        match self.client.get_multiplexed_async_connection().await {
            Ok(conn) => Some(conn),
            Err(e) => {
                error!("Failed to get Redis connection: {}", e);
                None
            }
        }
    }

    fn prefixed(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }

    fn effective_ttl(&self, ttl: u64) -> u64 {
        match ttl {
            0 => self.default_ttl.max(1),
            ttl => ttl,
        }
    }

    /// 匹配本前缀下所有键的 SCAN 模式，前缀里的通配符按字面量处理
    fn scan_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.key_prefix.len() + 1);
        for c in self.key_prefix.chars() {
            if matches!(c, '*' | '?' | '[' | ']' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('*');
        pattern
    }

    async fn delete_by_pattern(
        conn: &mut MultiplexedConnection,
        pattern: &str,
    ) -> redis::RedisResult<usize> {
        let mut cursor: u64 = 0;
        let mut removed = 0;
        loop {
            let (next, keys): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH)
                .query_async(conn)
                .await?;
            if !keys.is_empty() {
                removed += keys.len();
                conn.del::<Vec<String>, i64>(keys).await?;
            }
            if next == 0 {
                return Ok(removed);
            }
            cursor = next;
        }
    }
}

#[async_trait]
impl ObjectCache for RedisObjectCache {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        let Some(mut conn) = self.connection().await else {
            return CacheResult::ExistsButNoValue;
        };

        match conn.get::<String, Option<String>>(self.prefixed(key)).await {
            Ok(Some(data)) => CacheResult::Found(data),
            Ok(None) => CacheResult::NotFound,
            Err(e) => {
                error!("Failed to get key '{}': {}", key, e);
                CacheResult::ExistsButNoValue
            }
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        let Some(mut conn) = self.connection().await else {
            return;
        };

        let ttl = self.effective_ttl(ttl);
        if let Err(e) = conn
            .set_ex::<String, String, ()>(self.prefixed(&key), value, ttl)
            .await
        {
            error!("Failed to insert key '{}' into cache: {}", key, e);
        } else {
            debug!("Cached '{}' for {}s", key, ttl);
        }
    }

    async fn remove(&self, key: &str) {
        let Some(mut conn) = self.connection().await else {
            return;
        };

        if let Err(e) = conn.del::<String, i64>(self.prefixed(key)).await {
            error!("Failed to remove key '{}': {}", key, e);
        }
    }

    async fn invalidate_all(&self) {
        let Some(mut conn) = self.connection().await else {
            return;
        };

        match Self::delete_by_pattern(&mut conn, &self.scan_pattern()).await {
            Ok(removed) => info!(
                "Removed {} cached entries under prefix '{}'",
                removed, self.key_prefix
            ),
            Err(e) => error!(
                "Failed to clear cache prefix '{}': {}",
                self.key_prefix, e
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::user_cache_key;

    fn cache(prefix: &str, ttl: u64) -> RedisObjectCache {
        RedisObjectCache::from_settings("redis://127.0.0.1:6379/0", prefix, ttl).unwrap()
    }

    #[test]
    fn test_user_entries_live_under_prefix() {
        let cache = cache("edusystem:", 300);
        assert_eq!(cache.prefixed(&user_cache_key(42)), "edusystem:user:42");
    }

    #[test]
    fn test_scan_pattern_escapes_prefix_wildcards() {
        assert_eq!(cache("edusystem:", 300).scan_pattern(), "edusystem:*");
        assert_eq!(cache("tenant[1]*:", 300).scan_pattern(), r"tenant\[1\]\*:*");
    }

    #[test]
    fn test_zero_ttl_uses_default() {
        let configured = cache("p:", 300);
        assert_eq!(configured.effective_ttl(0), 300);
        assert_eq!(configured.effective_ttl(30), 30);
        // SETEX 不接受 0
        assert_eq!(cache("p:", 0).effective_ttl(0), 1);
    }

    #[test]
    fn test_invalid_url_rejected() {
        assert!(RedisObjectCache::from_settings("not a url", "p:", 60).is_err());
    }
}
