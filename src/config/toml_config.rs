use crate::core::sweep::{MAX_SWEEP_STEP_FT, MIN_SWEEP_STEP_FT};
use crate::core::ConfigProvider;
use crate::domain::model::{OutputFormat, Preset};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid placeholder pattern"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionConfig {
    pub preset: Option<Preset>,
    #[serde(default)]
    pub bands: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub length: Option<f64>,
    pub sweep_step: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown names stay literal.
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_band_names("selection.bands", &self.selection.bands)?;

        if let Some(path) = &self.output.path {
            validation::validate_path("output.path", path)?;
        }

        if let Some(step) = self.analysis.sweep_step {
            validation::validate_range(
                "analysis.sweep_step",
                step,
                MIN_SWEEP_STEP_FT,
                MAX_SWEEP_STEP_FT,
            )?;
        }

        if let Some(length) = self.analysis.length {
            if !length.is_finite() {
                return Err(CalcError::InvalidConfigValueError {
                    field: "analysis.length".to_string(),
                    value: length.to_string(),
                    reason: "Length must be a finite number of feet".to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn band_names(&self) -> &[String] {
        &self.selection.bands
    }

    fn preset(&self) -> Option<Preset> {
        self.selection.preset
    }

    fn length_input(&self) -> String {
        self.analysis
            .length
            .map(|length| length.to_string())
            .unwrap_or_default()
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }

    fn output_path(&self) -> Option<&str> {
        self.output.path.as_deref()
    }

    fn sweep_step(&self) -> Option<f64> {
        self.analysis.sweep_step
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
    fn test_parse_full_config() {
        let toml_content = r#"
[selection]
preset = "all"
bands = ["40M", "20m"]

[analysis]
length = 71
sweep_step = 0.5

[output]
format = "json"
path = "reports/71ft.json"

[logging]
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.preset(), Some(Preset::All));
        assert_eq!(config.band_names().len(), 2);
        assert_eq!(config.length_input(), "71");
        assert_eq!(config.sweep_step(), Some(0.5));
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert_eq!(config.output_path(), Some("reports/71ft.json"));
        assert!(config.verbose());
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.band_names().is_empty());
        assert_eq!(config.preset(), None);
        assert_eq!(config.length_input(), "");
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert!(config.output_path().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ENDFED_TEST_REPORT_DIR", "/tmp/endfed");

        let toml_content = r#"
[output]
path = "${ENDFED_TEST_REPORT_DIR}/report.txt"
format = "text"

[selection]
bands = ["${ENDFED_TEST_UNSET_BAND}"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_path(), Some("/tmp/endfed/report.txt"));
        assert_eq!(config.selection.bands, vec!["${ENDFED_TEST_UNSET_BAND}"]);
        assert!(config.validate().is_err());

        std::env::remove_var("ENDFED_TEST_REPORT_DIR");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[analysis]
sweep_step = 0.01
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str(
            r#"
[selection]
bands = ["2M"]
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[output]\nformat = \"pdf\"\n").unwrap_err();
        assert!(matches!(err, CalcError::TomlError(_)));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[selection]\npreset = \"hf\"\n\n[analysis]\nlength = 33.5\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.preset(), Some(Preset::Hf));
        assert_eq!(config.length_input(), "33.5");
    }
}
