//! # Pure Data Module / 纯数据模块
//!
//! Configuration DTO mapped from TOML. No validation and no defaults here;
//! empty values are facts, and callers decide what they mean.
//! 配置 DTO：只做 TOML → 数据映射，不做验证与默认值计算。

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Registration service base URL (may be empty)
    pub base_url: String,

    /// Registration endpoint path (may be empty)
    pub endpoint_path: String,

    /// Request timeout in seconds (0 when missing or out of range)
    pub timeout_secs: u64,

    /// Raw photo transport name (may be empty or unknown)
    pub photo_transport: String,

    /// Longest edge of the photo preview in pixels (0 when missing or out of range)
    pub preview_max_edge: u32,

    /// Directory for rolling log files (empty disables file logging)
    pub log_directory: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let registration = toml_value.get("registration");
        let str_of = |table: Option<&toml::Value>, key: &str| {
            table
                .and_then(|t| t.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        Ok(Self {
            base_url: str_of(registration, "base_url"),
            endpoint_path: str_of(registration, "endpoint_path"),
            timeout_secs: registration
                .and_then(|r| r.get("timeout_secs"))
                .and_then(|v| v.as_integer())
                .and_then(|n| u64::try_from(n).ok())
                .unwrap_or(0),
            photo_transport: str_of(registration, "photo_transport"),
            preview_max_edge: toml_value
                .get("photo")
                .and_then(|p| p.get("preview_max_edge"))
                .and_then(|v| v.as_integer())
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(0),
            log_directory: PathBuf::from(str_of(toml_value.get("logging"), "directory")),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig（所有字段为空/默认值）
    pub fn empty() -> Self {
        Self {
            base_url: String::new(),
            endpoint_path: String::new(),
            timeout_secs: 0,
            photo_transport: String::new(),
            preview_max_edge: 0,
            log_directory: PathBuf::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_reads_registration_section() {
        let toml_str = r#"
            [registration]
            base_url = "https://care.example.in"
            endpoint_path = "/api/auth/register"
            timeout_secs = 15
            photo_transport = "json-only"

            [photo]
            preview_max_edge = 256
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.base_url, "https://care.example.in");
        assert_eq!(config.endpoint_path, "/api/auth/register");
        assert_eq!(config.timeout_secs, 15);
        assert_eq!(config.photo_transport, "json-only");
        assert_eq!(config.preview_max_edge, 256);
    }

    #[test]
    fn test_from_toml_missing_values_are_empty_facts() {
        let toml_value: Value = toml::from_str("[registration]\n").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_from_toml_does_not_validate_transport() {
        let toml_value: Value =
            toml::from_str("[registration]\nphoto_transport = \"carrier-pigeon\"\n").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.photo_transport, "carrier-pigeon");
    }

    #[test]
    fn test_from_toml_out_of_range_numbers_fall_back_to_zero() {
        let toml_str = r#"
            [registration]
            timeout_secs = -1

            [photo]
            preview_max_edge = 5000000000
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.timeout_secs, 0);
        assert_eq!(config.preview_max_edge, 0);
    }
}
