//! 订单生成服务
//!
//! 启动阶段的每一步失败都直接返回致命错误，由调用方决定退出；
//! 主循环中单行插入失败只记录日志，下一轮照常执行。

use std::future::Future;
use std::time::Duration;

use orders_shared::config::GeneratorConfig;
use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};

use crate::error::{GeneratorError, Result};
use crate::models::{NewOrder, Order};
use crate::repository::OrderStore;

/// 一次运行的统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub attempted: u64,
    pub inserted: u64,
    pub failed: u64,
    /// 最近一次成功插入的订单 ID
    pub last_order_id: Option<i32>,
}

/// 订单生成服务
///
/// 持有唯一的存储连接。`shutdown` 消费自身，因此删表最多执行一次。
pub struct GeneratorService<S: OrderStore> {
    store: S,
    table: String,
    insert_interval: Duration,
    stats: RunStats,
}

impl<S: OrderStore> GeneratorService<S> {
    /// 启动服务：建立连接、存活检查、建表
    ///
    /// 任一步失败立即返回，后续步骤不会执行。
    #[instrument(skip(connect, config), fields(table = %config.table))]
    pub async fn bootstrap<F, Fut>(connect: F, config: &GeneratorConfig) -> Result<Self>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = orders_shared::error::Result<S>>,
    {
        let store = connect().await.map_err(GeneratorError::Connect)?;
        store.ping().await.map_err(GeneratorError::Liveness)?;

        store
            .create_table()
            .await
            .map_err(|source| GeneratorError::CreateTable {
                table: config.table.clone(),
                source,
            })?;
        info!("table created");

        Ok(Self {
            store,
            table: config.table.clone(),
            insert_interval: Duration::from_secs(config.insert_interval_secs),
            stats: RunStats::default(),
        })
    }

    /// 主循环：每轮插入一行，然后等待下一轮或关闭信号
    ///
    /// 每轮开始前检查关闭标志；关闭信号只在两次插入之间生效，
    /// 进行中的插入总会完成。发送端被丢弃同样视为关闭。
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) -> RunStats {
        info!(
            table = %self.table,
            interval = ?self.insert_interval,
            "Generating orders"
        );

        loop {
            if *shutdown.borrow() {
                break;
            }

            match self.insert_once().await {
                Ok(order) => debug!(
                    order_id = order.order_id,
                    customer_id = order.customer_id,
                    amount = order.amount,
                    city = %order.city,
                    "order inserted"
                ),
                Err(e) => error!(code = e.code(), error = %e, "failed to insert order"),
            }

            tokio::select! {
                // 偏向关闭信号，保证收到关闭时不再开始新的插入
                biased;

                _ = shutdown.wait_for(|stop| *stop) => break,
                _ = tokio::time::sleep(self.insert_interval) => {}
            }
        }

        info!("application stopped");
        self.stats.clone()
    }

    /// 生成并插入一行随机订单
    async fn insert_once(&mut self) -> Result<Order> {
        let order = NewOrder::random();
        self.stats.attempted += 1;

        let order_id = match self.store.insert_order(&order).await {
            Ok(id) => id,
            Err(e) => {
                self.stats.failed += 1;
                return Err(GeneratorError::Insert(e));
            }
        };

        if let Some(last) = self.stats.last_order_id {
            if order_id <= last {
                warn!(order_id, last_order_id = last, "order_id is not increasing");
            }
        }

        self.stats.inserted += 1;
        self.stats.last_order_id = Some(order_id);
        Ok(order.into_order(order_id))
    }

    /// 关闭服务：删表后关闭连接
    ///
    /// 删表失败时直接返回致命错误，连接不会被显式关闭。
    pub async fn shutdown(self) -> Result<RunStats> {
        self.store
            .drop_table()
            .await
            .map_err(|source| GeneratorError::DropTable {
                table: self.table.clone(),
                source,
            })?;
        info!(table = %self.table, "table dropped");

        self.store.close().await;
        Ok(self.stats)
    }
}
