//! # Configuration Loader / 配置加载器
//!
//! Reads the TOML file into the `AppConfig` DTO. Pure loading: whatever is in
//! the file is accepted, empty values included. The only policy here is which
//! file to read and the `REGWIZARD_BASE_URL` override.

use anyhow::Context;
use std::path::{Path, PathBuf};

use rw_core::config::AppConfig;

pub const BASE_URL_ENV: &str = "REGWIZARD_BASE_URL";

const APP_DIR: &str = "regwizard";
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Pick the config to run with.
///
/// An explicit path must exist. Without one, `<config dir>/regwizard/config.toml`
/// is used when present, else an empty config. `REGWIZARD_BASE_URL` wins over the file.
pub fn resolve_config(explicit: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    let mut config = match explicit {
        Some(path) => load_config(&path)?,
        None => match default_config_path().filter(|path| path.exists()) {
            Some(path) => load_config(&path)?,
            None => AppConfig::empty(),
        },
    };
    apply_env_overrides(&mut config, std::env::var(BASE_URL_ENV).ok());
    Ok(config)
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

fn apply_env_overrides(config: &mut AppConfig, base_url: Option<String>) {
    if let Some(base_url) = base_url.filter(|url| !url.trim().is_empty()) {
        config.base_url = base_url;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [registration]
            base_url = "https://care.example.in"
            timeout_secs = 10

            [logging]
            directory = "/var/log/regwizard"
        "#;
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.base_url, "https://care.example.in");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.log_directory, PathBuf::from("/var/log/regwizard"));
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[registration\nbase_url =").unwrap();

        let err = load_config(temp_file.path()).unwrap_err();

        assert!(err.to_string().contains("TOML"));
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let err = resolve_config(Some(PathBuf::from("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_env_base_url_overrides_file() {
        let mut config = AppConfig::empty();
        config.base_url = "http://from-file".into();

        apply_env_overrides(&mut config, Some("http://from-env".into()));
        assert_eq!(config.base_url, "http://from-env");

        apply_env_overrides(&mut config, Some("  ".into()));
        assert_eq!(config.base_url, "http://from-env");
    }
}
