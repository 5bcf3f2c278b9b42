//! Orders Generator
//!
//! 为下游系统（如 CDC 或分析演示）持续产生订单数据：启动时建表，
//! 按固定间隔插入随机订单，收到中断信号后删表退出。
//!
//! # 主要模块
//!
//! - `models`: 订单模型与随机生成
//! - `repository`: 订单表存储接口及 PostgreSQL 实现
//! - `service`: 生成服务的启动、主循环与关闭

pub mod error;
pub mod models;
pub mod repository;
pub mod service;
