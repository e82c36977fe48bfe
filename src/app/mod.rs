//! 应用层

pub mod product;

use std::sync::Arc;

use axum::{extract::State, response::Json};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::info;

use crate::core::error::CoreError;
use crate::infrastructure::{
    config::{Backend, Config},
    database::DatabaseManager,
    templates::Templates,
};
use product::repository::{MemoryProductRepository, ProductRepository, SqliteProductRepository};
use product::service::ProductService;

/// 启动阶段错误
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

/// 处理器共享状态
#[derive(Clone)]
pub struct AppState {
    pub products: ProductService,
    pub templates: Templates,
}

impl AppState {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Result<Self, StartupError> {
        Ok(Self {
            products: ProductService::new(repo),
            templates: Templates::new()?,
        })
    }

    /// 按配置选择存储后端并建表
    pub async fn from_config(config: &Config) -> Result<Self, StartupError> {
        let repo: Arc<dyn ProductRepository> = match config.database.backend {
            Backend::Sqlite => {
                let db = DatabaseManager::connect(&config.database).await?;
                db.init_schema().await?;
                Arc::new(SqliteProductRepository::new(db.get_pool().clone()))
            }
            Backend::Memory => {
                info!("Using in-memory product store");
                Arc::new(MemoryProductRepository::new())
            }
        };
        Self::new(repo)
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, CoreError> {
    state.products.ping().await?;
    Ok(Json(json!({ "status": "healthy" })))
}
