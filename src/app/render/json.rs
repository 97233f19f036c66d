use crate::domain::model::Report;
use crate::domain::ports::ReportRenderer;
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &Report) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
