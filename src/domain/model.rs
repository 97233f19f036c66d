use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An amateur band allocation with its edges in MHz.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    pub name: &'static str,
    pub low_mhz: f64,
    pub high_mhz: f64,
}

/// Closed interval of wire lengths in feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LengthRange {
    pub min: f64,
    pub max: f64,
}

impl LengthRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Both ends inclusive.
    pub fn contains(&self, length: f64) -> bool {
        length >= self.min && length <= self.max
    }

    pub fn overlaps(&self, start: f64, end: f64) -> bool {
        self.min < end && self.max >= start
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    TooShort,
    HighImpedanceHarmonic,
}

impl Reason {
    pub fn description(self) -> &'static str {
        match self {
            Reason::TooShort => "insufficient length for efficient radiation",
            Reason::HighImpedanceHarmonic => {
                "potential impedance mismatch beyond 9:1 unun capability"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "reasons", rename_all = "snake_case")]
pub enum Verdict {
    Good,
    Problematic(Vec<Reason>),
}

impl Verdict {
    pub fn is_good(&self) -> bool {
        matches!(self, Verdict::Good)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandVerdict {
    pub band: String,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProblematicBand {
    pub band: String,
    /// Human-readable, one entry per reason category.
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Overall {
    AllGood,
    AllProblematic,
    Mixed,
}

impl Overall {
    pub fn advisory(self) -> &'static str {
        match self {
            Overall::AllGood => "This wire length is well-suited for end-fed operation with a 9:1 unun across your selected bands. The impedance transformation should provide reasonable SWR for most transceivers.",
            Overall::AllProblematic => "This length may exceed the impedance transformation range of a typical 9:1 unun. Consider a different wire length or evaluate with an antenna analyzer before deployment.",
            Overall::Mixed => "This length provides good performance on some bands but may require careful positioning or additional matching for optimal results with your 9:1 unun.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub length: f64,
    pub verdicts: Vec<BandVerdict>,
    pub good_bands: Vec<String>,
    pub problematic_bands: Vec<ProblematicBand>,
    pub overall: Overall,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Summary {
    NoBandsSelected,
    InvalidLength { length: f64 },
    Result(Analysis),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandRanges {
    #[serde(flatten)]
    pub band: Band,
    pub ranges: Vec<LengthRange>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub length: f64,
    pub bands: Vec<BandRanges>,
    pub summary: Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_windows: Option<Vec<LengthRange>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Every band in the registry
    All,
    /// 40M, 20M, 15M and 10M
    Hf,
    /// No bands
    Clear,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}
