//! 配置加载
//!
//! 优先级：命令行 / 环境变量 > 配置文件 > 默认值。

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

const CONFIG_PATHS: [&str; 2] = ["config.toml", "./config/config.toml"];
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// 服务配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub http: HttpConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    pub port: u16,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
}

/// 存储后端
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Sqlite,
    Memory,
}

/// 数据库配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub backend: Backend,
    pub url: String,
    pub max_connections: u32,
    /// 获取连接超时（秒）
    pub acquire_timeout_seconds: u64,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)，`RUST_LOG` 优先
    pub level: String,
    /// 输出 JSON 格式
    pub json: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8080,
            timeout_seconds: 30,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Sqlite,
            url: "sqlite://products.db".to_string(),
            max_connections: 5,
            acquire_timeout_seconds: 8,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl HttpConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .map_err(|e| ConfigError::Validation(format!("invalid bind address: {}", e)))
    }
}

/// 命令行或环境变量给出的覆盖项
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub database_url: Option<String>,
    pub port: Option<u16>,
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::FileWrite(e.to_string()))?;
        }

        fs::write(path.as_ref(), content).map_err(|e| ConfigError::FileWrite(e.to_string()))
    }

    /// 指定路径优先，否则查找默认位置，都没有时使用默认配置
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match Self::discover() {
            Some(found) => Self::load_from_file(found),
            None => Ok(Self::default()),
        }
    }

    /// 第一个存在的默认配置文件
    pub fn discover() -> Option<PathBuf> {
        CONFIG_PATHS
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(url) = overrides.database_url {
            self.database.url = url;
        }
        if let Some(port) = overrides.port {
            self.http.port = port;
        }
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.bind_address.is_empty() {
            return Err(ConfigError::Validation("bind address must not be empty".to_string()));
        }
        if self.http.port == 0 {
            return Err(ConfigError::Validation("port must be greater than 0".to_string()));
        }
        self.http.socket_addr()?;

        if self.database.backend == Backend::Sqlite {
            if self.database.url.is_empty() {
                return Err(ConfigError::Validation("database url must not be empty".to_string()));
            }
            if self.database.max_connections == 0 {
                return Err(ConfigError::Validation(
                    "max_connections must be greater than 0".to_string(),
                ));
            }
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "invalid log level: {}, expected one of {:?}",
                self.logging.level, LOG_LEVELS
            )));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileRead(String),
    #[error("failed to write config file: {0}")]
    FileWrite(String),
    #[error("failed to parse config: {0}")]
    Parse(String),
    #[error("failed to serialize config: {0}")]
    Serialize(String),
    #[error("invalid config: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.database.backend, Backend::Sqlite);
        assert_eq!(config.database.url, "sqlite://products.db");
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.http.port = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.database.url = String::new();
        assert!(config.validate().is_err());

        // 内存后端不需要 url
        config.database.backend = Backend::Memory;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_save_load() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.http.port = 9090;
        config.save_to_file(&config_path).unwrap();

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            "[database]\nbackend = \"memory\"\n\n[logging]\njson = true\n",
        )
        .unwrap();

        let loaded = Config::load_from_file(&config_path).unwrap();
        assert_eq!(loaded.database.backend, Backend::Memory);
        assert_eq!(loaded.database.max_connections, 5);
        assert!(loaded.logging.json);
        assert_eq!(loaded.http, HttpConfig::default());
    }

    #[test]
    fn test_overrides() {
        let mut config = Config::default();
        config.apply(Overrides {
            database_url: Some("sqlite::memory:".to_string()),
            port: Some(3000),
        });
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.http.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead(_)));
    }
}
