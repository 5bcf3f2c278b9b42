//! 生成器错误类型
//!
//! 按失败的步骤划分错误：启动和关闭阶段的错误都是致命的，
//! 只有单次插入失败可以忽略并继续下一轮。

use orders_shared::error::InfraError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to connect to database: {0}")]
    Connect(#[source] InfraError),

    #[error("database liveness check failed: {0}")]
    Liveness(#[source] InfraError),

    #[error("failed to create table {table}: {source}")]
    CreateTable {
        table: String,
        #[source]
        source: InfraError,
    },

    #[error("failed to insert order: {0}")]
    Insert(#[source] InfraError),

    #[error("failed to drop table {table}: {source}")]
    DropTable {
        table: String,
        #[source]
        source: InfraError,
    },

    #[error(transparent)]
    Infra(#[from] InfraError),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

impl GeneratorError {
    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::Connect(_) => "CONNECT_FAILED",
            Self::Liveness(_) => "LIVENESS_FAILED",
            Self::CreateTable { .. } => "CREATE_TABLE_FAILED",
            Self::Insert(_) => "INSERT_FAILED",
            Self::DropTable { .. } => "DROP_TABLE_FAILED",
            Self::Infra(e) => e.code(),
        }
    }
}
