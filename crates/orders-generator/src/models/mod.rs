//! 订单数据模型

pub mod order;

pub use order::{AMOUNT_RANGE, CITIES, CUSTOMER_ID_RANGE, NewOrder, Order};
