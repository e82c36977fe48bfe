//! 基础设施层

pub mod config;
pub mod database;
pub mod logger;
pub mod templates;
