//! 共享库
//!
//! 包含生成器使用的配置、错误处理、数据库连接、日志初始化和关闭信号等基础设施代码。

pub mod config;
pub mod database;
pub mod error;
pub mod observability;
pub mod signal;
