use crate::core::ranges::MAX_LENGTH_FT;
use crate::domain::model::{Analysis, BandRanges, Report, Summary};
use crate::domain::ports::ReportRenderer;
use crate::utils::error::Result;
use std::fmt::Write;

const GUTTER: usize = 6;
const AXIS_STEP_FT: usize = 25;

pub const NO_BANDS_MESSAGE: &str = "Please select at least one amateur band to analyze your end-fed random wire antenna performance with a 9:1 unun.";
pub const INVALID_LENGTH_MESSAGE: &str =
    "Please enter a valid random wire length between 1 and 150 feet for 9:1 unun matching.";
pub const EMPTY_CHART_MESSAGE: &str = "Select bands to view analysis";

/// Terminal chart of problematic lengths per band followed by the verdict.
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    /// Chart columns spanning 0-150 ft.
    width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { width: 60 }
    }
}

impl TextRenderer {
    /// At least one column is always drawn.
    pub fn with_width(width: usize) -> Self {
        Self {
            width: width.max(1),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn feet_per_column(&self) -> f64 {
        MAX_LENGTH_FT / self.width as f64
    }

    fn marker_column(&self, length: f64) -> Option<usize> {
        if length > 0.0 && length <= MAX_LENGTH_FT {
            let column = (length / self.feet_per_column()) as usize;
            Some(column.min(self.width - 1))
        } else {
            None
        }
    }

    fn strip(&self, entry: &BandRanges, length: f64) -> String {
        let step = self.feet_per_column();
        let marker = self.marker_column(length);
        (0..self.width)
            .map(|column| {
                let start = column as f64 * step;
                let end = start + step;
                if marker == Some(column) {
                    '|'
                } else if entry.ranges.iter().any(|r| r.overlaps(start, end)) {
                    '#'
                } else {
                    '.'
                }
            })
            .collect()
    }

    fn axis(&self) -> String {
        let mut labels = vec![' '; GUTTER + self.width + 4];
        let columns_per_tick = AXIS_STEP_FT as f64 / self.feet_per_column();
        for (tick, feet) in (0..=MAX_LENGTH_FT as usize).step_by(AXIS_STEP_FT).enumerate() {
            let position = GUTTER + (tick as f64 * columns_per_tick).round() as usize;
            for (offset, c) in feet.to_string().chars().enumerate() {
                if let Some(slot) = labels.get_mut(position + offset) {
                    *slot = c;
                }
            }
        }
        let line: String = labels.into_iter().collect();
        format!("{} ft", line.trim_end())
    }

    fn chart(&self, report: &Report) -> String {
        if report.bands.is_empty() {
            return format!("{}\n", EMPTY_CHART_MESSAGE);
        }

        let mut out = String::new();
        for entry in &report.bands {
            let _ = writeln!(
                out,
                "{} {}-{} MHz",
                entry.band.name, entry.band.low_mhz, entry.band.high_mhz
            );
            let _ = writeln!(
                out,
                "{:<width$}{}",
                "",
                self.strip(entry, report.length),
                width = GUTTER
            );
        }
        let _ = writeln!(out, "{}", self.axis());
        out
    }
}

fn summary(analysis: &Analysis) -> String {
    let mut out = String::new();
    if !analysis.good_bands.is_empty() {
        let _ = writeln!(
            out,
            "✓ Optimal Performance: {} ft provides good matching on {}",
            analysis.length,
            analysis.good_bands.join(", ")
        );
    }
    if !analysis.problematic_bands.is_empty() {
        let listed: Vec<String> = analysis
            .problematic_bands
            .iter()
            .map(|p| format!("{} ({})", p.band, p.reasons.join(", ")))
            .collect();
        let _ = writeln!(
            out,
            "⚠ Performance Issues: {} ft may have impedance problems on {}",
            analysis.length,
            listed.join(", ")
        );
    }
    let _ = writeln!(out, "{}", analysis.overall.advisory());
    out
}

impl ReportRenderer for TextRenderer {
    fn render(&self, report: &Report) -> Result<String> {
        let mut out = self.chart(report);
        out.push('\n');

        match &report.summary {
            Summary::NoBandsSelected => {
                let _ = writeln!(out, "{}", NO_BANDS_MESSAGE);
            }
            Summary::InvalidLength { .. } => {
                let _ = writeln!(out, "{}", INVALID_LENGTH_MESSAGE);
            }
            Summary::Result(analysis) => out.push_str(&summary(analysis)),
        }

        if let Some(windows) = &report.clear_windows {
            if windows.is_empty() {
                out.push_str("\nNo lengths are clear on every selected band.\n");
            } else {
                out.push_str("\nClear on every selected band:\n");
                for window in windows {
                    let _ = writeln!(out, "  {:.1} - {:.1} ft", window.min, window.max);
                }
            }
        }

        Ok(out)
    }
}
