#![allow(dead_code)]

use std::time::Duration;

use axum_test::TestServer;
use product_catalog::app::AppState;
use product_catalog::create_app;
use product_catalog::infrastructure::config::{Backend, Config};

/// 每个测试使用独立的存储，SQLite 时为内存数据库
pub async fn create_test_server_with(backend: Backend) -> TestServer {
    let mut config = Config::default();
    config.database.backend = backend;
    config.database.url = "sqlite::memory:".to_string();

    let state = AppState::from_config(&config)
        .await
        .expect("Failed to create test state");
    let app = create_app(state, Duration::from_secs(5));
    TestServer::new(app).expect("Failed to start test server")
}

pub async fn create_test_server() -> TestServer {
    create_test_server_with(Backend::Sqlite).await
}
