//! 产品模块
//!
//! JSON API 位于 `handler`，HTML 表单页面位于 `web`，两者共用 `service`。

pub mod error;
pub mod flash;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;
pub mod web;
