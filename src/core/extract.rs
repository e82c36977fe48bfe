//! 提取器，解析失败时返回 [`CoreError`] 而不是 axum 默认的纯文本响应

use axum::extract::{FromRequest, FromRequestParts};

use super::error::CoreError;

/// JSON 请求体
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(CoreError))]
pub struct ApiJson<T>(pub T);

/// 路径参数
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(CoreError))]
pub struct ApiPath<T>(pub T);
