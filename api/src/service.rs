//! 数据库目录服务模块

use async_trait::async_trait;
use sqlx::MySqlPool;

use common::errors::AppResult;
use common::models::DatabaseRecord;

/// 目录服务 Trait
#[async_trait]
pub trait CatalogServiceTrait: Send + Sync {
    /// 列出服务器上可见的数据库
    async fn list_databases(&self) -> AppResult<Vec<DatabaseRecord>>;
}

/// MySQL 数据库目录服务
pub struct CatalogService {
    pool: MySqlPool,
}

impl CatalogService {
    /// 创建新的目录服务实例
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogServiceTrait for CatalogService {
    async fn list_databases(&self) -> AppResult<Vec<DatabaseRecord>> {
        let names: Vec<String> = sqlx::query_scalar("SHOW DATABASES")
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(count = names.len(), "数据库列表查询完成");
        Ok(records_from_names(names))
    }
}

/// Maps server-returned names to wire records, preserving server order.
pub fn records_from_names(names: Vec<String>) -> Vec<DatabaseRecord> {
    names.into_iter().map(DatabaseRecord::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_preserved() {
        let records = records_from_names(vec![
            "information_schema".to_string(),
            "mysql".to_string(),
            "logicinfo".to_string(),
        ]);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["information_schema", "mysql", "logicinfo"]);
    }

    #[test]
    fn test_length_matches_server_result() {
        let records = records_from_names(vec!["a".into(), "b".into()]);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| !r.name.is_empty()));
    }

    #[test]
    fn test_empty_server_result() {
        assert!(records_from_names(Vec::new()).is_empty());
    }
}
