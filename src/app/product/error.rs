//! 产品领域错误

use thiserror::Error;

use super::repository::StoreError;
use crate::core::error::CoreError;

#[derive(Debug, Error)]
pub enum ProductError {
    /// 指定 id 没有对应的记录
    #[error("Product not found with ID: {id}")]
    NotFound { id: i64 },

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl ProductError {
    pub fn not_found(id: i64) -> Self {
        ProductError::NotFound { id }
    }
}

impl From<ProductError> for CoreError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound { .. } => CoreError::NotFound(err.to_string()),
            ProductError::Storage(e) => CoreError::InternalServerError(e.to_string()),
        }
    }
}
