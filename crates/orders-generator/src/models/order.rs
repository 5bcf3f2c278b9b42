//! 订单模型
//!
//! 生成器每轮写入一行随机订单。`order_id` 由数据库分配，生成器只负责其余字段。

use rand::Rng;
use std::ops::RangeInclusive;

/// 订单城市的固定集合
pub const CITIES: [&str; 6] = [
    "New Delhi",
    "Seattle",
    "New York",
    "Austin",
    "Chicago",
    "Cleveland",
];

/// 客户 ID 取值范围
pub const CUSTOMER_ID_RANGE: RangeInclusive<i32> = 1..=1000;

/// 订单金额取值范围
pub const AMOUNT_RANGE: RangeInclusive<i32> = 100..=199;

/// 待插入的订单
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub customer_id: i32,
    pub amount: i32,
    pub city: &'static str,
}

/// 已写入数据库的订单
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub order_id: i32,
    pub customer_id: i32,
    pub amount: i32,
    pub city: String,
}

impl NewOrder {
    /// 使用线程本地随机数生成器生成随机订单
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    /// 使用指定随机数生成器生成随机订单，各字段均匀分布
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            customer_id: rng.random_range(CUSTOMER_ID_RANGE),
            amount: rng.random_range(AMOUNT_RANGE),
            city: CITIES[rng.random_range(0..CITIES.len())],
        }
    }

    /// 附加数据库分配的 ID
    pub fn into_order(self, order_id: i32) -> Order {
        Order {
            order_id,
            customer_id: self.customer_id,
            amount: self.amount,
            city: self.city.to_string(),
        }
    }
}
