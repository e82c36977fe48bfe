//! # 产品目录服务
//!
//! 基于 axum 的分层 Web 应用：
//! - `app`: 产品的 JSON API 与 HTML 表单页面
//! - `core`: 错误转换、请求提取器、校验与中间件
//! - `infrastructure`: 配置、日志、数据库与模板

pub mod app;
pub mod core;
pub mod infrastructure;

use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::app::{health_check, product, AppState};
use crate::core::middleware::request_logging_middleware;

/// 组装全部路由和中间件
pub fn create_app(state: AppState, timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(product::handler::routes())
        .merge(product::web::routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_logging_middleware))
                .layer(TimeoutLayer::new(timeout)),
        )
        .with_state(state)
}
