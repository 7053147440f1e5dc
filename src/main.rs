//! OpenTransit - 公交运行指标客户端服务

use std::sync::Arc;

use opentransit::config::{load_config, print_config, AppConfig};
use opentransit::infrastructure::adapters::{
    HttpMetricsClient, HttpMetricsClientConfig, HttpObjectStore, HttpObjectStoreConfig,
};
use opentransit::infrastructure::events::EventPublisher;
use opentransit::infrastructure::http::{AppState, HttpServer, ObjectStoreSettings};
use opentransit::infrastructure::memory::InMemoryStore;

fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},opentransit={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("OpenTransit metrics client service");
    print_config(&config);

    // 创建外部服务客户端
    let metrics_config = HttpMetricsClientConfig::new(&config.metrics.base_url)
        .with_timeout(config.metrics.timeout_secs);
    let metrics_api = Arc::new(
        HttpMetricsClient::new(metrics_config)
            .map_err(|e| anyhow::anyhow!("Failed to create metrics client: {}", e))?,
    );

    let object_store = Arc::new(
        HttpObjectStore::new(HttpObjectStoreConfig {
            timeout_secs: config.object_store.timeout_secs,
        })
        .map_err(|e| anyhow::anyhow!("Failed to create object store client: {}", e))?,
    );

    // 创建事件发布器与 Store
    let event_publisher = EventPublisher::new().arc();
    let store = Arc::new(InMemoryStore::new(event_publisher.clone()));

    let settings = ObjectStoreSettings {
        layout: config.object_store.layout(),
        routes_url: config.object_store.routes_url.clone(),
    };
    let state = Arc::new(AppState::new(
        metrics_api,
        object_store,
        store,
        event_publisher,
        settings,
    ));

    // 启动时拉取线路列表
    let startup_state = state.clone();
    tokio::spawn(async move {
        startup_state.routes_handler.fetch_routes().await;
    });

    let server = HttpServer::new(config.server.clone(), state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
