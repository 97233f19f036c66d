use crate::core::registry::{self, BANDS};
use crate::domain::model::{Band, Preset};
use crate::utils::error::{CalcError, Result};
use std::collections::BTreeSet;

const HF_BANDS: [&str; 4] = ["40M", "20M", "15M", "10M"];

impl Preset {
    pub fn band_names(self) -> Vec<&'static str> {
        match self {
            Preset::All => registry::all_names().collect(),
            Preset::Hf => HF_BANDS.to_vec(),
            Preset::Clear => Vec::new(),
        }
    }
}

/// The set of bands chosen for analysis. Always holds canonical registry names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    names: BTreeSet<&'static str>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_preset(preset: Preset) -> Self {
        Self {
            names: preset.band_names().into_iter().collect(),
        }
    }

    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::new();
        for name in names {
            selection.insert(name.as_ref())?;
        }
        Ok(selection)
    }

    /// Explicit names win over a preset; with neither, the HF preset applies.
    pub fn resolve(names: &[String], preset: Option<Preset>) -> Result<Self> {
        if !names.is_empty() {
            return Self::from_names(names);
        }
        Ok(Self::from_preset(preset.unwrap_or(Preset::Hf)))
    }

    /// Returns whether the band was newly added.
    pub fn insert(&mut self, name: &str) -> Result<bool> {
        let band = registry::lookup_ignore_case(name).ok_or_else(|| {
            CalcError::UnknownBandError {
                name: name.trim().to_string(),
            }
        })?;
        Ok(self.names.insert(band.name))
    }

    pub fn remove(&mut self, name: &str) -> bool {
        match registry::lookup_ignore_case(name) {
            Some(band) => self.names.remove(band.name),
            None => false,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Selected bands in registry display order.
    pub fn bands(&self) -> impl Iterator<Item = &'static Band> + '_ {
        BANDS.iter().filter(move |band| self.names.contains(band.name))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.bands().map(|band| band.name).collect()
    }
}
