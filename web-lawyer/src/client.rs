//! API 客户端模块

use std::time::Duration;

use common::errors::{AppError, AppResult};
use common::models::DatabaseRecord;

/// HTTP client for the database listing API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// 创建新的 API 客户端实例
    pub fn new(base_url: String) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AppError::Http(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// 获取数据库名称列表（保持服务端返回顺序）
    pub async fn fetch_databases(&self) -> AppResult<Vec<DatabaseRecord>> {
        let url = format!("{}/databases", self.base_url);

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(AppError::Http(format!("HTTP {}", response.status())));
        }

        let records = response.json().await?;
        Ok(records)
    }
}
