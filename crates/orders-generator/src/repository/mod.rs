//! 数据库仓储层
//!
//! 封装订单表的 DDL 和单行插入。服务层只依赖 `OrderStore` trait。

mod order_repo;
mod traits;

pub use order_repo::PgOrderStore;
pub use traits::*;
