//! 核心模块：错误、提取器、中间件与校验

pub mod error;
pub mod extract;
pub mod middleware;
pub mod validation;
