//! Wire lengths an end-fed antenna behind a 9:1 unun should avoid.
//!
//! Two rules of thumb apply per band: anything up to a quarter wavelength at
//! the bottom band edge is too short, and a window of ±1 ft around each
//! multiple of the half wavelength (measured at the top band edge) presents a
//! feedpoint impedance beyond what the unun can transform.

use crate::core::registry;
use crate::domain::model::{Band, LengthRange};

/// Quarter wavelength in feet is `234 / f(MHz)`.
pub const QUARTER_WAVE_CONSTANT: f64 = 234.0;
/// Half wavelength in feet is `468 / f(MHz)`.
pub const HALF_WAVE_CONSTANT: f64 = 468.0;
pub const HARMONIC_TOLERANCE_FT: f64 = 1.0;
pub const MAX_LENGTH_FT: f64 = 150.0;
pub const MIN_LENGTH_FT: f64 = 1.0;
/// Upper bound on half-wave windows for a single band.
pub const MAX_HARMONIC_WINDOWS: usize = 10_000;

pub fn quarter_wave_minimum(band: &Band) -> f64 {
    QUARTER_WAVE_CONSTANT / band.low_mhz
}

pub fn half_wave_step(band: &Band) -> f64 {
    HALF_WAVE_CONSTANT / band.high_mhz
}

/// Problematic length windows for `band` within `[0, MAX_LENGTH_FT]`.
///
/// The quarter-wave range comes first when present, followed by one window
/// per half-wave multiple in increasing order. Windows may overlap and are
/// not merged.
pub fn bad_ranges(band: &Band) -> Vec<LengthRange> {
    let mut ranges = Vec::new();

    let min_length = quarter_wave_minimum(band);
    if min_length < MAX_LENGTH_FT {
        ranges.push(LengthRange::new(0.0, min_length));
    }

    // The step stays at the top-edge half wavelength for every multiple.
    let step = half_wave_step(band);
    if step > 0.0 {
        let mut current = step;
        let mut windows = 0;
        while current <= MAX_LENGTH_FT && windows < MAX_HARMONIC_WINDOWS {
            ranges.push(LengthRange::new(
                (current - HARMONIC_TOLERANCE_FT).max(0.0),
                (current + HARMONIC_TOLERANCE_FT).min(MAX_LENGTH_FT),
            ));
            windows += 1;
            let next = current + step;
            if next == current {
                break;
            }
            current = next;
        }
    }

    ranges
}

/// Same as [`bad_ranges`] by band name. Unknown names have no constraints.
pub fn get_bad_ranges(band_name: &str) -> Vec<LengthRange> {
    match registry::lookup(band_name) {
        Some(band) => bad_ranges(band),
        None => {
            tracing::debug!("No bad ranges for unknown band {}", band_name);
            Vec::new()
        }
    }
}
