//! 统一错误处理模块
//!
//! 定义基础设施层（配置、数据库、日志）共享的错误类型，使用 thiserror 提供良好的错误信息。

use thiserror::Error;

/// 基础设施错误类型
#[derive(Debug, Error)]
pub enum InfraError {
    // ==================== 数据库错误 ====================
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("timed out connecting to database after {seconds}s")]
    ConnectTimeout { seconds: u64 },

    #[error("database connection is closed")]
    ConnectionClosed,

    // ==================== 配置错误 ====================
    #[error("failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid configuration: {field} - {message}")]
    InvalidConfig { field: String, message: String },

    // ==================== 可观测性错误 ====================
    #[error("failed to initialize logging: {0}")]
    Observability(String),

    // ==================== 信号错误 ====================
    #[error("failed to install signal handler: {0}")]
    Signal(#[source] std::io::Error),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, InfraError>;

impl InfraError {
    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::Database(_) => "DATABASE_ERROR",
            Self::ConnectTimeout { .. } => "CONNECT_TIMEOUT",
            Self::ConnectionClosed => "CONNECTION_CLOSED",
            Self::Config(_) => "CONFIG_ERROR",
            Self::InvalidConfig { .. } => "INVALID_CONFIG",
            Self::Observability(_) => "OBSERVABILITY_ERROR",
            Self::Signal(_) => "SIGNAL_ERROR",
        }
    }

    /// 构造配置校验错误
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }
}
