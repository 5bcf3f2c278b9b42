//! 仓储 Trait 定义
//!
//! 服务层依赖此接口而非具体的 PostgreSQL 实现，便于注入故障进行 mock 测试

use async_trait::async_trait;
use orders_shared::error::Result;

use crate::models::NewOrder;

/// 订单表存储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// 往返一次数据库，确认连接可用
    async fn ping(&self) -> Result<()>;

    async fn create_table(&self) -> Result<()>;

    /// 插入一行订单，返回数据库分配的 `order_id`
    async fn insert_order(&self, order: &NewOrder) -> Result<i32>;

    async fn drop_table(&self) -> Result<()>;

    async fn close(&self);
}
