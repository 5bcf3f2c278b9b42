//! 服务层
//!
//! 生成器的生命周期：启动（连接、存活检查、建表）→ 定时插入 → 关闭（删表、断开连接）。

mod generator_service;

pub use generator_service::{GeneratorService, RunStats};
