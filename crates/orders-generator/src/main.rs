//! 订单生成器入口
//!
//! 加载配置、初始化日志后启动生成服务，直到收到 Ctrl+C 或 SIGTERM。
//! 所有致命错误都汇总到 `main` 统一记录并以非零状态退出。

use std::process::ExitCode;
use std::time::Duration;

use orders_generator::error::Result;
use orders_generator::repository::PgOrderStore;
use orders_generator::service::GeneratorService;
use orders_shared::config::{AppConfig, ObservabilityConfig};
use orders_shared::database::Database;
use orders_shared::error::InfraError;
use orders_shared::{observability, signal};
use tracing::{error, info};

const SERVICE_NAME: &str = "orders-generator";

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load(SERVICE_NAME) {
        Ok(config) => config,
        Err(e) => {
            // 配置加载失败时仍用默认日志配置把错误记下来
            let _ = observability::init(&ObservabilityConfig::default());
            error!(code = e.code(), error = %e, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = observability::init(&config.observability) {
        // 日志系统不可用，只能直接写 stderr
        eprintln!("orders-generator: {}", e);
        return ExitCode::FAILURE;
    }
    info!(
        environment = %config.environment,
        table = %config.generator.table,
        "Starting orders-generator..."
    );

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = e.code(), error = %e, "Fatal error, terminating");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: AppConfig) -> Result<()> {
    config.generator.validate()?;

    // 等待依赖的数据库容器启动
    let delay = Duration::from_secs(config.generator.startup_delay_secs);
    info!(?delay, "Waiting before connecting to database");
    tokio::time::sleep(delay).await;

    let db_config = config.database.clone();
    let table = config.generator.table.clone();
    let mut service = GeneratorService::bootstrap(
        move || async move {
            let db = Database::connect(&db_config).await?;
            Ok::<_, InfraError>(PgOrderStore::new(db, table))
        },
        &config.generator,
    )
    .await?;

    let (tx, rx) = signal::shutdown_channel();
    signal::spawn_signal_listener(tx)?;

    service.run(rx).await;

    let stats = service.shutdown().await?;
    info!(
        attempted = stats.attempted,
        inserted = stats.inserted,
        failed = stats.failed,
        "Service shutdown complete"
    );

    Ok(())
}
