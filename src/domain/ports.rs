use crate::domain::model::{OutputFormat, Preset, Report};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// Explicit band names, as typed by the user.
    fn band_names(&self) -> &[String];
    fn preset(&self) -> Option<Preset>;
    /// Raw wire length text; parsed leniently by the engine.
    fn length_input(&self) -> String;
    fn output_format(&self) -> OutputFormat;
    fn output_path(&self) -> Option<&str>;
    fn sweep_step(&self) -> Option<f64>;
}

pub trait ReportRenderer: Send + Sync {
    fn render(&self, report: &Report) -> Result<String>;
}
