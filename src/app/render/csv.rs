use crate::domain::model::Report;
use crate::domain::ports::ReportRenderer;
use crate::utils::error::{CalcError, Result};
use serde::Serialize;

/// One row per problematic range of every selected band.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRenderer;

#[derive(Serialize)]
struct RangeRow<'a> {
    band: &'a str,
    low_mhz: f64,
    high_mhz: f64,
    range_min_ft: f64,
    range_max_ft: f64,
    contains_length: bool,
}

impl ReportRenderer for CsvRenderer {
    fn render(&self, report: &Report) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        for entry in &report.bands {
            for range in &entry.ranges {
                writer.serialize(RangeRow {
                    band: entry.band.name,
                    low_mhz: entry.band.low_mhz,
                    high_mhz: entry.band.high_mhz,
                    range_min_ft: round2(range.min),
                    range_max_ft: round2(range.max),
                    contains_length: range.contains(report.length),
                })?;
            }
        }

        let bytes = writer.into_inner().map_err(|e| CalcError::RenderError {
            message: format!("CSV flush failed: {}", e),
        })?;
        String::from_utf8(bytes).map_err(|e| CalcError::RenderError {
            message: format!("CSV output is not UTF-8: {}", e),
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
