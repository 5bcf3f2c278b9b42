//! 数据库连接管理模块
//!
//! 生成器只持有一个 PostgreSQL 连接。建立连接只尝试一次，失败立即返回原始错误。

use crate::config::DatabaseConfig;
use crate::error::{InfraError, Result};
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;
use std::str::FromStr;
use std::time::Duration;
use tokio::sync::{MappedMutexGuard, Mutex, MutexGuard};
use tracing::{info, instrument, warn};

/// 单连接包装
///
/// 连接放在互斥锁里供 `&self` 方法使用，`close` 之后取出并关闭。
pub struct Database {
    conn: Mutex<Option<PgConnection>>,
}

impl Database {
    /// 建立数据库连接
    ///
    /// 不重试：连接被拒绝等错误原样返回，`connect_timeout_seconds` 只限制单次尝试的时长。
    #[instrument(skip(config))]
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        info!("Connecting to database...");

        let options = PgConnectOptions::from_str(&config.url)?;
        let seconds = config.connect_timeout_seconds;
        let conn = tokio::time::timeout(
            Duration::from_secs(seconds),
            PgConnection::connect_with(&options),
        )
        .await
        .map_err(|_| InfraError::ConnectTimeout { seconds })??;

        info!("Database connection established");

        Ok(Self {
            conn: Mutex::new(Some(conn)),
        })
    }

    /// 获取连接，连接已关闭时返回 `ConnectionClosed`
    pub async fn connection(&self) -> Result<MappedMutexGuard<'_, PgConnection>> {
        MutexGuard::try_map(self.conn.lock().await, |conn| conn.as_mut())
            .map_err(|_| InfraError::ConnectionClosed)
    }

    /// 存活检查
    pub async fn health_check(&self) -> Result<()> {
        let mut conn = self.connection().await?;
        sqlx::query("SELECT 1")
            .execute(&mut *conn)
            .await
            .map(|_| ())
            .map_err(InfraError::from)
    }

    /// 关闭连接
    pub async fn close(&self) {
        let Some(conn) = self.conn.lock().await.take() else {
            return;
        };

        if let Err(e) = conn.close().await {
            warn!(error = %e, "Error while closing database connection");
        }
        info!("Database connection closed");
    }
}
