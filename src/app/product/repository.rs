//! 产品持久化
//!
//! [`ProductRepository`] 是处理器与存储之间唯一的接口。提供两种实现：
//! 基于 SQLite 的 [`SqliteProductRepository`] 和进程内的 [`MemoryProductRepository`]。

use std::collections::BTreeMap;

use async_trait::async_trait;
use sqlx::SqlitePool;
use thiserror::Error;
use tokio::sync::RwLock;

use super::model::Product;

/// 存储层错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 按插入顺序返回全部产品
    async fn find_all(&self) -> Result<Vec<Product>, StoreError>;

    /// 不存在时返回 `Ok(None)`
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, StoreError>;

    /// `id` 为空时插入并分配新 id，否则覆盖该 id 的记录
    async fn save(&self, product: &Product) -> Result<Product, StoreError>;

    /// 返回是否删除了记录
    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError>;

    async fn delete(&self, product: &Product) -> Result<bool, StoreError> {
        match product.id {
            Some(id) => self.delete_by_id(id).await,
            None => Ok(false),
        }
    }

    /// 检查存储是否可用
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// SQLite 实现，表结构见 [`crate::infrastructure::database`]
#[derive(Clone)]
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let products =
            sqlx::query_as::<_, Product>("SELECT id, name, price FROM products ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(products)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, StoreError> {
        let product =
            sqlx::query_as::<_, Product>("SELECT id, name, price FROM products WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(product)
    }

    async fn save(&self, product: &Product) -> Result<Product, StoreError> {
        let saved = match product.id {
            None => {
                sqlx::query_as::<_, Product>(
                    "INSERT INTO products (name, price) VALUES (?, ?) RETURNING id, name, price",
                )
                .bind(&product.name)
                .bind(product.price)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query_as::<_, Product>(
                    r#"
                    INSERT INTO products (id, name, price) VALUES (?, ?, ?)
                    ON CONFLICT(id) DO UPDATE SET name = excluded.name, price = excluded.price
                    RETURNING id, name, price
                    "#,
                )
                .bind(id)
                .bind(&product.name)
                .bind(product.price)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[derive(Default)]
struct MemoryTable {
    next_id: i64,
    rows: BTreeMap<i64, Product>,
}

/// 进程内实现，id 单调递增且不复用
#[derive(Default)]
pub struct MemoryProductRepository {
    table: RwLock<MemoryTable>,
}

impl MemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, StoreError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn save(&self, product: &Product) -> Result<Product, StoreError> {
        let mut table = self.table.write().await;
        let id = match product.id {
            Some(id) => id,
            None => {
                table.next_id += 1;
                table.next_id
            }
        };
        table.next_id = table.next_id.max(id);

        let saved = Product {
            id: Some(id),
            ..product.clone()
        };
        table.rows.insert(id, saved.clone());
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::DatabaseConfig;
    use crate::infrastructure::database::DatabaseManager;

    async fn sqlite_repo() -> SqliteProductRepository {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            ..DatabaseConfig::default()
        };
        let db = DatabaseManager::connect(&config).await.unwrap();
        db.init_schema().await.unwrap();
        SqliteProductRepository::new(db.get_pool().clone())
    }

    async fn exercise(repo: &dyn ProductRepository) {
        assert!(repo.find_all().await.unwrap().is_empty());
        assert_eq!(repo.find_by_id(999).await.unwrap(), None);

        let first = repo.save(&Product::new("Product1", 10.0)).await.unwrap();
        let second = repo.save(&Product::new("Product2", 20.0)).await.unwrap();
        let first_id = first.id.unwrap();
        assert!(second.id.unwrap() > first_id);

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Product1", "Product2"]);

        let mut changed = first.clone();
        changed.name = "Renamed".to_string();
        changed.price = 11.5;
        let updated = repo.save(&changed).await.unwrap();
        assert_eq!(updated.id, Some(first_id));
        assert_eq!(
            repo.find_by_id(first_id).await.unwrap().unwrap().name,
            "Renamed"
        );
        assert_eq!(repo.find_all().await.unwrap().len(), 2);

        assert!(repo.delete(&updated).await.unwrap());
        assert!(!repo.delete_by_id(first_id).await.unwrap());
        assert_eq!(repo.find_by_id(first_id).await.unwrap(), None);

        // 已删除的 id 不会被复用
        let third = repo.save(&Product::new("Product3", 30.0)).await.unwrap();
        assert!(third.id.unwrap() > second.id.unwrap());
    }

    #[tokio::test]
    async fn test_sqlite_repository() {
        let repo = sqlite_repo().await;
        exercise(&repo).await;
        repo.ping().await.unwrap();
    }

    #[tokio::test]
    async fn test_sqlite_ping_after_close() {
        let repo = sqlite_repo().await;
        repo.pool.close().await;
        assert!(repo.ping().await.is_err());
    }

    #[tokio::test]
    async fn test_memory_repository() {
        let repo = MemoryProductRepository::new();
        exercise(&repo).await;
    }

    #[tokio::test]
    async fn test_delete_unsaved_product() {
        let repo = MemoryProductRepository::new();
        assert!(!repo.delete(&Product::new("Draft", 1.0)).await.unwrap());
    }
}
