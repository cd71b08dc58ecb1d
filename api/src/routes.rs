//! 路由模块

use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

/// 创建 API 路由
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/databases", get(handlers::list_databases))
        .route("/api/health", get(handlers::health_check))
}
