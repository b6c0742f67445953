//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Read TOML configuration files / 读取 TOML 配置文件
//! - ✅ Parse TOML into AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//! - ✅ Pick the config source and apply the endpoint override
//!   选择配置来源并应用环境变量覆盖
//!
//! [`load_config`] accepts whatever is in the file. Filling empty values is
//! done afterwards by [`resolve_config`].

use std::path::PathBuf;

use anyhow::Context;
use cw_core::config::{AppConfig, DEFAULT_PREDICT_ENDPOINT};
use tracing::debug;

/// Environment variable replacing the configured prediction endpoint.
pub const ENDPOINT_ENV: &str = "CHURN_WIZARD_ENDPOINT";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// **NO validation is performed**: empty strings and missing sections are
/// valid facts.
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value = toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// `<config_dir>/churn-wizard/config.toml`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("churn-wizard").join("config.toml"))
}

/// Resolve the effective configuration.
///
/// An explicit path must load. Otherwise the default path is used if the file
/// exists, else built-in defaults.
pub fn resolve_config(explicit: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    let config = match explicit {
        Some(path) => load_config(path)?,
        None => match default_config_path().filter(|path| path.is_file()) {
            Some(path) => load_config(path)?,
            None => AppConfig::with_defaults(),
        },
    };
    Ok(apply_overrides(config, std::env::var(ENDPOINT_ENV).ok()))
}

/// Fill gaps the file left and apply the endpoint override.
pub fn apply_overrides(mut config: AppConfig, endpoint_override: Option<String>) -> AppConfig {
    if let Some(endpoint) = endpoint_override.filter(|value| !value.trim().is_empty()) {
        debug!(endpoint = %endpoint, "prediction endpoint overridden from {ENDPOINT_ENV}");
        config.endpoint = endpoint;
    }
    if config.endpoint.trim().is_empty() {
        config.endpoint = DEFAULT_PREDICT_ENDPOINT.to_string();
    }
    if config.file_logging.is_none() {
        config.file_logging = Some(true);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    /// Test that valid TOML is parsed correctly
    /// 测试有效 TOML 被正确解析
    #[test]
    fn test_load_config_reads_valid_toml() {
        let temp_file = write_config(
            r#"
            [prediction]
            endpoint = "http://10.0.0.5:5000/predict"
            health_endpoint = "http://10.0.0.5:5000/healthz"
            timeout_secs = 30

            [logging]
            file_logging = false
        "#,
        );

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.endpoint, "http://10.0.0.5:5000/predict");
        assert_eq!(config.health_endpoint, "http://10.0.0.5:5000/healthz");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.file_logging, Some(false));
    }

    /// Test that missing values result in empty values
    /// 测试缺失的值导致空值
    #[test]
    fn test_load_config_returns_empty_values_when_missing() {
        let temp_file = write_config("[prediction]\n");

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_load_config_reports_invalid_toml() {
        let temp_file = write_config("[prediction\nendpoint = ");

        let err = load_config(temp_file.path().to_path_buf()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }

    #[test]
    fn test_load_config_reports_missing_file() {
        let err = load_config(PathBuf::from("/nonexistent/churn-wizard.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_resolve_config_with_explicit_path() {
        let temp_file = write_config(
            r#"
            [prediction]
            timeout_secs = 3
        "#,
        );

        let config = resolve_config(Some(temp_file.path().to_path_buf())).unwrap();

        assert_eq!(config.timeout_secs, 3);
        assert!(!config.endpoint.is_empty());
    }

    #[test]
    fn test_apply_overrides_fills_empty_endpoint() {
        let config = apply_overrides(AppConfig::empty(), None);
        assert_eq!(config.endpoint, DEFAULT_PREDICT_ENDPOINT);
        assert_eq!(config.file_logging, Some(true));
    }

    #[test]
    fn test_apply_overrides_prefers_env_endpoint() {
        let config = apply_overrides(
            AppConfig::with_defaults(),
            Some("https://churn.example.com/predict".to_string()),
        );
        assert_eq!(config.endpoint, "https://churn.example.com/predict");

        let config = apply_overrides(AppConfig::with_defaults(), Some("  ".to_string()));
        assert_eq!(config.endpoint, DEFAULT_PREDICT_ENDPOINT);
    }
}
