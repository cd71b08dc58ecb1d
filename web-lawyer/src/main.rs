//! web-lawyer 品牌客户端
//!
//! 与 adm 客户端行为一致，仅标题不同：启动时向 API 服务发起一次 GET 请求，
//! 获取数据库名称列表并按顺序渲染。获取失败时列表保持为空，不中断退出。

mod client;
mod view;

use client::ApiClient;
use common::config::{load_dotenv, ClientConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (if present) before anything else
    load_dotenv();

    // 初始化日志追踪
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    // 加载配置
    let config = ClientConfig::load();
    let client = ApiClient::new(config.api_base_url)?;

    // 单次获取；失败时保持空列表
    let databases = match client.fetch_databases().await {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(error = %e, "获取数据库列表失败");
            Vec::new()
        }
    };

    print!("{}", view::render(&databases));
    Ok(())
}
