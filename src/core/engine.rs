use crate::app::render::renderer_for;
use crate::core::classify::classify;
use crate::core::input::parse_length;
use crate::core::ranges::bad_ranges;
use crate::core::selection::Selection;
use crate::core::sweep::clear_windows;
use crate::core::{ConfigProvider, ReportRenderer, Storage};
use crate::domain::model::{BandRanges, Report, Summary};
use crate::utils::error::Result;

/// Assembles everything a presentation layer needs for one length.
pub fn build_report(selection: &Selection, length: f64, sweep_step: Option<f64>) -> Report {
    let bands = selection
        .bands()
        .map(|band| BandRanges {
            band: *band,
            ranges: bad_ranges(band),
        })
        .collect();

    Report {
        generated_at: chrono::Utc::now(),
        length,
        bands,
        summary: classify(selection, length),
        clear_windows: sweep_step.map(|step| clear_windows(selection, step)),
    }
}

pub struct ReportEngine<C: ConfigProvider, S: Storage> {
    config: C,
    storage: S,
    renderer: Box<dyn ReportRenderer>,
}

impl<C: ConfigProvider, S: Storage> ReportEngine<C, S> {
    /// Renders in the configured output format.
    pub fn new(config: C, storage: S) -> Self {
        let renderer = renderer_for(config.output_format());
        Self::with_renderer(config, storage, renderer)
    }

    pub fn with_renderer(config: C, storage: S, renderer: Box<dyn ReportRenderer>) -> Self {
        Self {
            config,
            storage,
            renderer,
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Runs one analysis and returns the rendered report. When an output
    /// path is configured the report is also written through storage.
    pub async fn run(&self) -> Result<String> {
        let selection = Selection::resolve(self.config.band_names(), self.config.preset())?;
        let length_input = self.config.length_input();
        let length = parse_length(&length_input);
        tracing::debug!(
            "Analyzing '{}' ({} ft) on {:?}",
            length_input,
            length,
            selection.names()
        );

        let report = build_report(&selection, length, self.config.sweep_step());
        match &report.summary {
            Summary::NoBandsSelected => tracing::warn!("No bands selected"),
            Summary::InvalidLength { length } => {
                tracing::warn!("Wire length {} ft is outside 1-150 ft", length)
            }
            Summary::Result(analysis) => tracing::info!(
                "{} ft: {} good, {} problematic ({:?})",
                analysis.length,
                analysis.good_bands.len(),
                analysis.problematic_bands.len(),
                analysis.overall
            ),
        }

        let rendered = self.renderer.render(&report)?;
        tracing::debug!("Rendered report ({} bytes)", rendered.len());

        if let Some(path) = self.config.output_path() {
            self.storage.write_file(path, rendered.as_bytes()).await?;
            tracing::info!("Report saved to: {}", path);
        }

        Ok(rendered)
    }
}
