//! 日志基础设施

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::LoggingConfig;

pub struct Logger;

impl Logger {
    /// 安装全局 subscriber；已安装时返回错误
    pub fn init(config: &LoggingConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(&config.level));

        let registry = tracing_subscriber::registry().with(filter);
        if config.json {
            registry.with(fmt::layer().json()).try_init()
        } else {
            registry.with(fmt::layer().with_target(false).compact()).try_init()
        }
    }
}

/// 每个请求只由 `request_logging_middleware` 记录一次，不额外打开 `tower_http`
fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::new(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_uses_configured_level_only() {
        let filter = default_filter("info").to_string();
        assert_eq!(filter, "info");
        assert!(!filter.contains("tower_http"));
    }
}
