//! 订单仓储
//!
//! 基于 PostgreSQL 的订单表实现。表名来自已校验的配置，直接拼接进语句，
//! 字段值一律走参数绑定。

use async_trait::async_trait;
use orders_shared::database::Database;
use orders_shared::error::Result;

use super::traits::OrderStore;
use crate::models::{NewOrder, Order};

fn create_sql(table: &str) -> String {
    format!(
        r#"
        CREATE TABLE {table} (
            order_id SERIAL NOT NULL PRIMARY KEY,
            customer_id INTEGER NOT NULL,
            amount INTEGER NOT NULL,
            city VARCHAR(255) NOT NULL
        )
        "#
    )
}

fn insert_sql(table: &str) -> String {
    format!(
        "INSERT INTO {table} (customer_id, amount, city) VALUES ($1, $2, $3) RETURNING order_id"
    )
}

fn drop_sql(table: &str) -> String {
    format!("DROP TABLE {table}")
}

/// 订单仓储
pub struct PgOrderStore {
    db: Database,
    table: String,
}

impl PgOrderStore {
    /// 创建仓储
    ///
    /// `table` 必须已通过 `GeneratorConfig::validate` 校验
    pub fn new(db: Database, table: impl Into<String>) -> Self {
        Self {
            db,
            table: table.into(),
        }
    }

    /// 按插入顺序列出所有订单
    pub async fn list_orders(&self) -> Result<Vec<Order>> {
        let mut conn = self.db.connection().await?;
        let rows = sqlx::query_as::<_, (i32, i32, i32, String)>(&format!(
            "SELECT order_id, customer_id, amount, city FROM {} ORDER BY order_id ASC",
            self.table
        ))
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(order_id, customer_id, amount, city)| Order {
                order_id,
                customer_id,
                amount,
                city,
            })
            .collect())
    }

    /// 目标表当前是否存在
    pub async fn table_exists(&self) -> Result<bool> {
        let mut conn = self.db.connection().await?;
        let exists: bool = sqlx::query_scalar("SELECT to_regclass($1) IS NOT NULL")
            .bind(&self.table)
            .fetch_one(&mut *conn)
            .await?;

        Ok(exists)
    }
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn ping(&self) -> Result<()> {
        self.db.health_check().await
    }

    async fn create_table(&self) -> Result<()> {
        let mut conn = self.db.connection().await?;
        sqlx::query(&create_sql(&self.table))
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    async fn insert_order(&self, order: &NewOrder) -> Result<i32> {
        let mut conn = self.db.connection().await?;
        let order_id: i32 = sqlx::query_scalar(&insert_sql(&self.table))
            .bind(order.customer_id)
            .bind(order.amount)
            .bind(order.city)
            .fetch_one(&mut *conn)
            .await?;

        Ok(order_id)
    }

    async fn drop_table(&self) -> Result<()> {
        let mut conn = self.db.connection().await?;
        sqlx::query(&drop_sql(&self.table))
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    async fn close(&self) {
        self.db.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_sql_schema() {
        let sql = create_sql("inventory.orders_info");
        assert!(sql.contains("CREATE TABLE inventory.orders_info"));
        assert!(sql.contains("order_id SERIAL NOT NULL PRIMARY KEY"));
        assert!(sql.contains("customer_id INTEGER NOT NULL"));
        assert!(sql.contains("amount INTEGER NOT NULL"));
        assert!(sql.contains("city VARCHAR(255) NOT NULL"));
    }

    #[test]
    fn test_insert_sql_is_parameterized() {
        let sql = insert_sql("orders");
        assert_eq!(
            sql,
            "INSERT INTO orders (customer_id, amount, city) VALUES ($1, $2, $3) RETURNING order_id"
        );
    }

    #[test]
    fn test_drop_sql() {
        assert_eq!(drop_sql("inventory.orders_info"), "DROP TABLE inventory.orders_info");
    }
}
