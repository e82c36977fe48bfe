//! 产品业务服务

use std::sync::Arc;

use tracing::{debug, info};

use super::error::ProductError;
use super::model::{NewProduct, Product};
use super::repository::ProductRepository;

#[derive(Clone)]
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Product>, ProductError> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn find(&self, id: i64) -> Result<Option<Product>, ProductError> {
        Ok(self.repo.find_by_id(id).await?)
    }

    /// 记录必须存在，否则返回 [`ProductError::NotFound`]
    pub async fn require(&self, id: i64) -> Result<Product, ProductError> {
        match self.find(id).await? {
            Some(product) => Ok(product),
            None => {
                debug!(product_id = id, "product not found");
                Err(ProductError::not_found(id))
            }
        }
    }

    pub async fn create(&self, new: NewProduct) -> Result<Product, ProductError> {
        let product = self.repo.save(&Product::from(new)).await?;
        info!(product_id = ?product.id, name = %product.name, "Created product");
        Ok(product)
    }

    /// 覆盖已取出的记录的名称和价格
    pub async fn update(
        &self,
        mut existing: Product,
        update: NewProduct,
    ) -> Result<Product, ProductError> {
        existing.apply(update);
        let product = self.repo.save(&existing).await?;
        info!(product_id = ?product.id, name = %product.name, "Updated product");
        Ok(product)
    }

    pub async fn replace(&self, id: i64, update: NewProduct) -> Result<Product, ProductError> {
        let existing = self.require(id).await?;
        self.update(existing, update).await
    }

    pub async fn ping(&self) -> Result<(), ProductError> {
        Ok(self.repo.ping().await?)
    }

    pub async fn remove(&self, id: i64) -> Result<(), ProductError> {
        let existing = self.require(id).await?;
        self.repo.delete(&existing).await?;
        info!(product_id = id, "Deleted product");
        Ok(())
    }
}
