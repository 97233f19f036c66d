pub mod csv;
pub mod json;
pub mod text;

use crate::domain::model::OutputFormat;
use crate::domain::ports::ReportRenderer;

pub use self::csv::CsvRenderer;
pub use self::json::JsonRenderer;
pub use self::text::TextRenderer;

pub fn renderer_for(format: OutputFormat) -> Box<dyn ReportRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer::default()),
        OutputFormat::Json => Box::new(JsonRenderer),
        OutputFormat::Csv => Box::new(CsvRenderer),
    }
}
