use crate::core::classify::band_verdict;
use crate::core::ranges::{MAX_LENGTH_FT, MIN_LENGTH_FT};
use crate::core::selection::Selection;
use crate::domain::model::LengthRange;

pub const DEFAULT_SWEEP_STEP_FT: f64 = 0.5;
pub const MIN_SWEEP_STEP_FT: f64 = 0.1;
pub const MAX_SWEEP_STEP_FT: f64 = 25.0;

/// Runs of sampled lengths that are good on every selected band.
///
/// Samples are `1 + i * step` up to 150 ft; each window spans its first and
/// last clear sample. Steps finer than `MIN_SWEEP_STEP_FT` are raised to it.
pub fn clear_windows(selection: &Selection, step: f64) -> Vec<LengthRange> {
    let mut windows = Vec::new();
    if selection.is_empty() || step.is_nan() || step <= 0.0 {
        return windows;
    }
    let step = step.max(MIN_SWEEP_STEP_FT);

    let bands: Vec<_> = selection.bands().collect();
    let mut open: Option<LengthRange> = None;
    let mut i: u32 = 0;
    loop {
        let length = MIN_LENGTH_FT + f64::from(i) * step;
        if length > MAX_LENGTH_FT {
            break;
        }

        let clear = bands.iter().all(|band| band_verdict(band, length).is_good());
        open = match (open, clear) {
            (Some(mut window), true) => {
                window.max = length;
                Some(window)
            }
            (None, true) => Some(LengthRange::new(length, length)),
            (Some(window), false) => {
                windows.push(window);
                None
            }
            (None, false) => None,
        };
        i += 1;
    }
    if let Some(window) = open {
        windows.push(window);
    }

    tracing::debug!(step, windows = windows.len(), "Swept wire lengths");
    windows
}
