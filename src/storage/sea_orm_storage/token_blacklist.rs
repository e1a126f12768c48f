//! 刷新令牌黑名单

use super::SeaOrmStorage;
use crate::entity::token_blacklist::{ActiveModel, Column, Entity as TokenBlacklist};
use crate::errors::{EduSystemError, Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 拉黑令牌
    pub async fn blacklist_token_impl(
        &self,
        jti: &str,
        user_id: i64,
        expires_at: i64,
    ) -> Result<()> {
        let model = ActiveModel {
            jti: Set(jti.to_string()),
            user_id: Set(user_id),
            expires_at: Set(expires_at),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| EduSystemError::from_write(e, "写入令牌黑名单失败"))?;

        Ok(())
    }

    /// 令牌是否已被拉黑
    pub async fn is_token_blacklisted_impl(&self, jti: &str) -> Result<bool> {
        let count = TokenBlacklist::find()
            .filter(Column::Jti.eq(jti))
            .count(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询令牌黑名单失败: {e}")))?;

        Ok(count > 0)
    }

    /// 删除已过期的记录，过期令牌本身就无法通过校验
    pub async fn purge_expired_tokens_impl(&self, now: i64) -> Result<u64> {
        let result = TokenBlacklist::delete_many()
            .filter(Column::ExpiresAt.lt(now))
            .exec(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("清理令牌黑名单失败: {e}")))?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_second_blacklist_of_same_jti_conflicts() {
        let storage = SeaOrmStorage::in_memory().await.unwrap();
        let exp = chrono::Utc::now().timestamp() + 3600;
        storage.blacklist_token_impl("jti-1", 1, exp).await.unwrap();

        let err = storage.blacklist_token_impl("jti-1", 1, exp).await.unwrap_err();
        assert!(matches!(err, EduSystemError::Conflict(_)));
        assert!(storage.is_token_blacklisted_impl("jti-1").await.unwrap());
    }

    #[tokio::test]
    async fn test_purge_only_removes_expired() {
        let storage = SeaOrmStorage::in_memory().await.unwrap();
        storage.blacklist_token_impl("old", 1, 100).await.unwrap();
        storage.blacklist_token_impl("fresh", 1, 10_000).await.unwrap();

        assert_eq!(storage.purge_expired_tokens_impl(5_000).await.unwrap(), 1);
        assert!(!storage.is_token_blacklisted_impl("old").await.unwrap());
        assert!(storage.is_token_blacklisted_impl("fresh").await.unwrap());
    }
}
