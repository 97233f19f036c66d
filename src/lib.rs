pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{cli::LocalStorage, CliConfig};

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::classify::classify;
pub use crate::core::engine::{build_report, ReportEngine};
pub use crate::core::ranges::get_bad_ranges;
pub use crate::core::selection::Selection;
pub use crate::domain::model::{OutputFormat, Overall, Preset, Reason, Summary, Verdict};
pub use crate::utils::error::{CalcError, Result};
