use crate::core::ranges::{bad_ranges, MAX_LENGTH_FT, MIN_LENGTH_FT, QUARTER_WAVE_CONSTANT};
use crate::core::selection::Selection;
use crate::domain::model::{
    Analysis, Band, BandVerdict, Overall, ProblematicBand, Reason, Summary, Verdict,
};

/// Lengths under `low_mhz * 234 / 4` are labelled too short.
pub fn too_short_threshold(band: &Band) -> f64 {
    band.low_mhz * QUARTER_WAVE_CONSTANT / 4.0
}

/// One reason per bad range that contains `length`, in range order.
pub fn band_verdict(band: &Band, length: f64) -> Verdict {
    let threshold = too_short_threshold(band);
    let reasons: Vec<Reason> = bad_ranges(band)
        .iter()
        .filter(|range| range.contains(length))
        .map(|_| {
            if length < threshold {
                Reason::TooShort
            } else {
                Reason::HighImpedanceHarmonic
            }
        })
        .collect();

    if reasons.is_empty() {
        Verdict::Good
    } else {
        Verdict::Problematic(reasons)
    }
}

pub fn is_valid_length(length: f64) -> bool {
    (MIN_LENGTH_FT..=MAX_LENGTH_FT).contains(&length)
}

pub fn classify(selection: &Selection, length: f64) -> Summary {
    if selection.is_empty() {
        return Summary::NoBandsSelected;
    }
    if !is_valid_length(length) {
        return Summary::InvalidLength { length };
    }

    let verdicts: Vec<BandVerdict> = selection
        .bands()
        .map(|band| BandVerdict {
            band: band.name.to_string(),
            verdict: band_verdict(band, length),
        })
        .collect();

    let mut good_bands = Vec::new();
    let mut problematic_bands = Vec::new();
    for entry in &verdicts {
        match &entry.verdict {
            Verdict::Good => good_bands.push(entry.band.clone()),
            Verdict::Problematic(reasons) => problematic_bands.push(ProblematicBand {
                band: entry.band.clone(),
                reasons: describe_reasons(reasons),
            }),
        }
    }

    let overall = match (good_bands.is_empty(), problematic_bands.is_empty()) {
        (false, true) => Overall::AllGood,
        (true, _) => Overall::AllProblematic,
        (false, false) => Overall::Mixed,
    };

    tracing::debug!(
        length,
        good = good_bands.len(),
        problematic = problematic_bands.len(),
        "Classified wire length"
    );

    Summary::Result(Analysis {
        length,
        verdicts,
        good_bands,
        problematic_bands,
        overall,
    })
}

fn describe_reasons(reasons: &[Reason]) -> Vec<String> {
    let mut seen: Vec<Reason> = Vec::new();
    for reason in reasons {
        if !seen.contains(reason) {
            seen.push(*reason);
        }
    }
    seen.into_iter()
        .map(|reason| reason.description().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry;
    use crate::domain::model::Preset;

    fn analysis(summary: Summary) -> Analysis {
        match summary {
            Summary::Result(analysis) => analysis,
            other => panic!("expected an analysis, got {:?}", other),
        }
    }

    #[test]
    fn test_no_bands_selected() {
        assert_eq!(classify(&Selection::new(), 50.0), Summary::NoBandsSelected);
        // band check comes before length check
        assert_eq!(classify(&Selection::new(), 0.0), Summary::NoBandsSelected);
    }

    #[test]
    fn test_invalid_length() {
        let selection = Selection::from_names(["40M"]).unwrap();
        assert!(matches!(classify(&selection, 0.0), Summary::InvalidLength { .. }));
        assert!(matches!(classify(&selection, 0.99), Summary::InvalidLength { .. }));
        assert!(matches!(classify(&selection, 151.0), Summary::InvalidLength { .. }));
        assert!(matches!(classify(&selection, f64::NAN), Summary::InvalidLength { .. }));
        assert!(matches!(classify(&selection, 1.0), Summary::Result(_)));
        assert!(matches!(classify(&selection, 150.0), Summary::Result(_)));
    }

    #[test]
    fn test_40m_too_short() {
        let selection = Selection::from_names(["40M"]).unwrap();
        let result = analysis(classify(&selection, 33.0));

        assert!(result.good_bands.is_empty());
        assert_eq!(result.overall, Overall::AllProblematic);
        assert_eq!(
            result.verdicts[0].verdict,
            Verdict::Problematic(vec![Reason::TooShort])
        );
        assert_eq!(
            result.problematic_bands[0].reasons,
            vec!["insufficient length for efficient radiation".to_string()]
        );
    }

    #[test]
    fn test_40m_good() {
        let selection = Selection::from_names(["40M"]).unwrap();
        let result = analysis(classify(&selection, 50.0));
        assert_eq!(result.good_bands, vec!["40M".to_string()]);
        assert_eq!(result.overall, Overall::AllGood);
    }

    #[test]
    fn test_harmonic_window_reason_uses_threshold() {
        // 64 ft sits in the first 40M half-wave window but is below 58.5 * 7.0
        let band = registry::lookup("40M").unwrap();
        assert_eq!(
            band_verdict(band, 64.0),
            Verdict::Problematic(vec![Reason::TooShort])
        );

        // 160M threshold is 105.3 ft, so 120 ft inside λ/4 reads as a harmonic issue
        let band = registry::lookup("160M").unwrap();
        assert_eq!(
            band_verdict(band, 120.0),
            Verdict::Problematic(vec![Reason::HighImpedanceHarmonic])
        );
    }

    #[test]
    fn test_range_edges_are_inclusive() {
        let band = registry::lookup("80M").unwrap();
        for length in [116.0, 117.0, 118.0] {
            assert!(!band_verdict(band, length).is_good(), "{length}");
        }
        assert!(band_verdict(band, 115.99).is_good());
        assert!(band_verdict(band, 118.01).is_good());
    }

    #[test]
    fn test_overlapping_ranges_accumulate_reasons() {
        // 8 ft is only inside the first 6M half-wave window [7.67, 9.67]
        let band = registry::lookup("6M").unwrap();
        let verdict = band_verdict(band, 8.0);
        assert_eq!(verdict, Verdict::Problematic(vec![Reason::TooShort]));

        let band = Band {
            name: "TEST",
            low_mhz: 2.0,
            high_mhz: 4.0,
        };
        // λ/4 = 117 ft covers the 117 ft half-wave window too
        assert_eq!(
            band_verdict(&band, 117.0),
            Verdict::Problematic(vec![
                Reason::HighImpedanceHarmonic,
                Reason::HighImpedanceHarmonic,
            ])
        );
        assert_eq!(describe_reasons(&[Reason::TooShort, Reason::TooShort]).len(), 1);
    }

    #[test]
    fn test_canonical_order_and_mixed() {
        let selection = Selection::from_names(["20M", "40M"]).unwrap();
        let result = analysis(classify(&selection, 33.0));
        let order: Vec<&str> = result.verdicts.iter().map(|v| v.band.as_str()).collect();
        assert_eq!(order, vec!["40M", "20M"]);

        // 33 ft is too short on 40M and inside the 20M window [31.61, 33.61]
        assert_eq!(result.problematic_bands.len(), 2);
        assert_eq!(result.problematic_bands[0].band, "40M");

        // 64 ft hits the 40M window [63.11, 65.11] but misses 20M's [64.23, 66.23]
        let result = analysis(classify(&selection, 64.0));
        assert_eq!(result.good_bands, vec!["20M".to_string()]);
        assert_eq!(result.problematic_bands[0].band, "40M");
        assert_eq!(result.overall, Overall::Mixed);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let selection = Selection::from_preset(Preset::All);
        for length in [1.0, 29.5, 71.0, 107.0, 150.0] {
            assert_eq!(classify(&selection, length), classify(&selection, length));
        }
    }
}
