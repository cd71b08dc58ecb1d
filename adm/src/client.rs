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

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::{routing::get, Json, Router};
    use tokio::net::TcpListener;

    /// Serves the given router on an ephemeral port and returns its base URL.
    async fn serve(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_fetch_preserves_order() {
        let app = Router::new().route(
            "/databases",
            get(|| async {
                Json(vec![
                    DatabaseRecord::new("mysql"),
                    DatabaseRecord::new("logicinfo"),
                ])
            }),
        );
        let base_url = serve(app).await;

        let client = ApiClient::new(base_url).unwrap();
        let records = client.fetch_databases().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "mysql");
        assert_eq!(records[1].name, "logicinfo");
    }

    #[tokio::test]
    async fn test_server_error_is_reported() {
        let app = Router::new().route(
            "/databases",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base_url = serve(app).await;

        let client = ApiClient::new(base_url).unwrap();
        let result = client.fetch_databases().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_refused_connection_is_an_error_not_a_panic() {
        let client = ApiClient::new("http://127.0.0.1:9".to_string()).unwrap();
        let result = client.fetch_databases().await;
        assert!(matches!(result, Err(AppError::Http(_))));
    }
}
