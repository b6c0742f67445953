//! # Pure Data Module / 纯数据模块
//!
//! Configuration DTOs and the TOML → DTO mapping. No validation and no
//! default calculation happen here; the bootstrap layer decides what an empty
//! value means.
//!
//! 配置 DTO 与 TOML → DTO 映射。此处不做验证，也不计算默认值。

/// Endpoint the wizard posts to when nothing else is configured.
pub const DEFAULT_PREDICT_ENDPOINT: &str = "http://127.0.0.1:5000/predict";

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Prediction endpoint URL (may be empty - this is a fact, not an error)
    /// 预测接口地址（可能为空 - 这就是事实，不是错误）
    pub endpoint: String,

    /// Health endpoint URL; empty means "derive from the prediction endpoint"
    pub health_endpoint: String,

    /// Request timeout in seconds, 0 for none
    pub timeout_secs: u64,

    /// Whether to also write logs to a file; `None` when the key is absent
    pub file_logging: Option<bool>,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// Empty strings and missing keys are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let prediction = toml_value.get("prediction");
        Ok(Self {
            endpoint: prediction
                .and_then(|p| p.get("endpoint"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            health_endpoint: prediction
                .and_then(|p| p.get("health_endpoint"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            timeout_secs: prediction
                .and_then(|p| p.get("timeout_secs"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64,
            file_logging: toml_value
                .get("logging")
                .and_then(|l| l.get("file_logging"))
                .and_then(|v| v.as_bool()),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig
    pub fn empty() -> Self {
        Self {
            endpoint: String::new(),
            health_endpoint: String::new(),
            timeout_secs: 0,
            file_logging: None,
        }
    }

    /// Configuration used when no config file exists.
    /// 没有配置文件时使用的配置。
    pub fn with_defaults() -> Self {
        Self {
            endpoint: DEFAULT_PREDICT_ENDPOINT.to_string(),
            health_endpoint: String::new(),
            timeout_secs: 0,
            file_logging: Some(true),
        }
    }
}
