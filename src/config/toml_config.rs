use crate::core::ConfigProvider;
use crate::utils::error::{ProbeError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub probe: ProbeSection,
    pub run: Option<RunSection>,
    pub report: Option<ReportSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeSection {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSection {
    pub invocations: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    pub output_path: Option<String>,
    pub pretty: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ProbeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ProbeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PROBE_OUTPUT})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("probe.name", &self.probe.name)?;
        validation::validate_path("report.output_path", self.output_path())?;

        Ok(())
    }

    /// 取得呼叫次數
    pub fn invocations(&self) -> usize {
        self.run.as_ref().and_then(|r| r.invocations).unwrap_or(1)
    }

    /// 取得輸出路徑
    pub fn output_path(&self) -> &str {
        self.report
            .as_ref()
            .and_then(|r| r.output_path.as_deref())
            .unwrap_or("./output")
    }

    /// 摘要是否使用縮排格式
    pub fn pretty_report(&self) -> bool {
        self.report
            .as_ref()
            .and_then(|r| r.pretty)
            .unwrap_or(true)
    }
}

impl ConfigProvider for TomlConfig {
    fn invocations(&self) -> usize {
        self.invocations()
    }

    fn output_path(&self) -> &str {
        self.output_path()
    }

    fn pretty_report(&self) -> bool {
        self.pretty_report()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[probe]
name = "test-probe"
description = "Test probe"
version = "1.0.0"

[run]
invocations = 3

[report]
output_path = "./test-output"
pretty = false
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.probe.name, "test-probe");
        assert_eq!(config.invocations(), 3);
        assert_eq!(config.output_path(), "./test-output");
        assert!(!config.pretty_report());
    }

    #[test]
    fn test_defaults_for_missing_sections() {
        let toml_content = r#"
[probe]
name = "bare"
description = "bare"
version = "1.0"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.invocations(), 1);
        assert_eq!(config.output_path(), "./output");
        assert!(config.pretty_report());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_PROBE_OUTPUT", "./env-output");

        let toml_content = r#"
[probe]
name = "env-test"
description = "env test"
version = "1.0"

[report]
output_path = "${TEST_PROBE_OUTPUT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_path(), "./env-output");

        std::env::remove_var("TEST_PROBE_OUTPUT");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[probe]
name = "   "
description = "blank name"
version = "1.0"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[probe]
name = "file-test"
description = "File test"
version = "1.0"

[run]
invocations = 2
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.probe.name, "file-test");
        assert_eq!(config.invocations(), 2);
    }
}
