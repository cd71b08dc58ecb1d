//! Handler模块

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;
use common::errors::AppError;
use common::models::DatabaseRecord;

/// 列出服务器上可见的数据库
///
/// 响应体为裸 JSON 数组（`SHOW DATABASES` 结果的直接透传），不做包装。
#[utoipa::path(
    get,
    path = "/databases",
    tag = "databases",
    responses(
        (status = 200, description = "数据库名称列表", body = Vec<DatabaseRecord>),
        (status = 500, description = "连接或查询失败，响应体为纯文本错误信息")
    )
)]
pub async fn list_databases(
    State(state): State<AppState>,
) -> Result<Json<Vec<DatabaseRecord>>, AppError> {
    let records = state.catalog.list_databases().await?;
    Ok(Json(records))
}

/// 健康检查端点
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "服务运行正常", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

/// 健康检查响应
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// 服务状态
    pub status: String,
    /// 服务名称
    pub service: String,
    /// 服务版本
    pub version: String,
    /// 当前时间戳
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check_reports_healthy() {
        let Json(health) = health_check().await;
        assert_eq!(health.status, "healthy");
        assert_eq!(health.service, "api");
    }
}
