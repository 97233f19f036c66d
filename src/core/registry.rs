use crate::domain::model::Band;

/// Amateur bands in conventional display order, 160M down to 6M.
pub static BANDS: [Band; 11] = [
    Band { name: "160M", low_mhz: 1.8, high_mhz: 2.0 },
    Band { name: "80M", low_mhz: 3.5, high_mhz: 4.0 },
    Band { name: "60M", low_mhz: 5.3305, high_mhz: 5.405 },
    Band { name: "40M", low_mhz: 7.0, high_mhz: 7.3 },
    Band { name: "30M", low_mhz: 10.100, high_mhz: 10.150 },
    Band { name: "20M", low_mhz: 14.0, high_mhz: 14.35 },
    Band { name: "17M", low_mhz: 18.068, high_mhz: 18.168 },
    Band { name: "15M", low_mhz: 21.0, high_mhz: 21.45 },
    Band { name: "12M", low_mhz: 24.890, high_mhz: 24.990 },
    Band { name: "10M", low_mhz: 28.0, high_mhz: 29.7 },
    Band { name: "6M", low_mhz: 50.0, high_mhz: 54.0 },
];

pub fn lookup(name: &str) -> Option<&'static Band> {
    BANDS.iter().find(|band| band.name == name)
}

/// Accepts "40m" as well as "40M".
pub fn lookup_ignore_case(name: &str) -> Option<&'static Band> {
    let name = name.trim();
    BANDS.iter().find(|band| band.name.eq_ignore_ascii_case(name))
}

pub fn all_names() -> impl Iterator<Item = &'static str> {
    BANDS.iter().map(|band| band.name)
}

pub fn canonical_index(name: &str) -> Option<usize> {
    BANDS.iter().position(|band| band.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_invariants() {
        assert_eq!(BANDS.len(), 11);

        let names: HashSet<&str> = all_names().collect();
        assert_eq!(names.len(), BANDS.len());

        for band in BANDS.iter() {
            assert!(band.low_mhz > 0.0, "{} low edge", band.name);
            assert!(band.high_mhz > 0.0, "{} high edge", band.name);
            assert!(band.low_mhz < band.high_mhz, "{} edges", band.name);
        }

        assert_eq!(BANDS[0].low_mhz, 1.8);
        assert_eq!(BANDS[10].high_mhz, 54.0);
    }

    #[test]
    fn test_display_order() {
        let order: Vec<&str> = all_names().collect();
        assert_eq!(
            order,
            vec!["160M", "80M", "60M", "40M", "30M", "20M", "17M", "15M", "12M", "10M", "6M"]
        );
        assert_eq!(canonical_index("40M"), Some(3));
        assert_eq!(canonical_index("2M"), None);
    }

    #[test]
    fn test_lookup() {
        let band = lookup("60M").unwrap();
        assert_eq!(band.low_mhz, 5.3305);
        assert_eq!(band.high_mhz, 5.405);

        assert!(lookup("40m").is_none());
        assert_eq!(lookup_ignore_case(" 40m ").unwrap().name, "40M");
        assert!(lookup_ignore_case("2m").is_none());
    }
}
