#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::{OutputFormat, Preset};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "endfed-calc")]
#[command(about = "Check an end-fed wire length against amateur bands for a 9:1 unun")]
pub struct CliConfig {
    /// Wire length in feet (1-150)
    #[arg(short, long, allow_hyphen_values = true)]
    pub length: Option<String>,

    /// Bands to analyze, e.g. 40M,20M
    #[arg(short, long, value_delimiter = ',')]
    pub bands: Vec<String>,

    /// Band preset used when no bands are given
    #[arg(short, long, value_enum)]
    pub preset: Option<Preset>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Also list lengths clear on every band, sampled at this step (ft)
    #[arg(long)]
    pub sweep_step: Option<f64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn band_names(&self) -> &[String] {
        &self.bands
    }

    fn preset(&self) -> Option<Preset> {
        self.preset
    }

    fn length_input(&self) -> String {
        self.length.clone().unwrap_or_default()
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn sweep_step(&self) -> Option<f64> {
        self.sweep_step
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_band_names("bands", &self.bands)?;
        if let Some(path) = &self.output {
            validation::validate_path("output", path)?;
        }
        if let Some(step) = self.sweep_step {
            validation::validate_range(
                "sweep_step",
                step,
                crate::core::sweep::MIN_SWEEP_STEP_FT,
                crate::core::sweep::MAX_SWEEP_STEP_FT,
            )?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_args() {
        let config = CliConfig::parse_from([
            "endfed-calc",
            "--length",
            "71",
            "--bands",
            "40m,20M",
            "--format",
            "json",
            "--sweep-step",
            "0.5",
        ]);

        assert_eq!(config.length_input(), "71");
        assert_eq!(config.band_names(), ["40m".to_string(), "20M".to_string()]);
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert_eq!(config.sweep_step(), Some(0.5));
        assert!(config.output_path().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_validation() {
        let config = CliConfig::parse_from(["endfed-calc", "--bands", "2M"]);
        assert!(config.validate().is_err());

        let config = CliConfig::parse_from(["endfed-calc", "--sweep-step", "100"]);
        assert!(config.validate().is_err());

        let config = CliConfig::parse_from(["endfed-calc", "--preset", "all"]);
        assert_eq!(config.preset(), Some(Preset::All));
        assert_eq!(config.length_input(), "");
        assert!(config.validate().is_ok());
    }
}
