use serde::Serialize;

/// Air quality band for an AQI value.
///
/// Bands are checked in ascending order and each one is inclusive of its
/// upper bound. There is no lower bound check, so a negative AQI falls
/// into `Good` and anything above 400 is `Severe`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum AqiCategory {
    Good,
    Satisfactory,
    Moderate,
    Poor,
    VeryPoor,
    Severe,
}

impl AqiCategory {
    /// All bands, lowest first.
    pub const ALL: [AqiCategory; 6] = [
        AqiCategory::Good,
        AqiCategory::Satisfactory,
        AqiCategory::Moderate,
        AqiCategory::Poor,
        AqiCategory::VeryPoor,
        AqiCategory::Severe,
    ];

    /// Classify an AQI value. Total over all integers.
    pub fn from_aqi(aqi: i64) -> AqiCategory {
        AqiCategory::ALL
            .into_iter()
            .find(|category| match category.upper_bound() {
                Some(bound) => aqi <= bound,
                None => true,
            })
            .unwrap_or(AqiCategory::Severe)
    }

    /// Inclusive upper bound of the band; `None` for the open-ended top band.
    pub fn upper_bound(&self) -> Option<i64> {
        match self {
            AqiCategory::Good => Some(50),
            AqiCategory::Satisfactory => Some(100),
            AqiCategory::Moderate => Some(200),
            AqiCategory::Poor => Some(300),
            AqiCategory::VeryPoor => Some(400),
            AqiCategory::Severe => None,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            AqiCategory::Good => "#00E400",
            AqiCategory::Satisfactory => "#FFFF00",
            AqiCategory::Moderate => "#FF7E00",
            AqiCategory::Poor => "#FF0000",
            AqiCategory::VeryPoor => "#8F3F97",
            AqiCategory::Severe => "#7E0023",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Satisfactory => "Satisfactory",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::Poor => "Poor",
            AqiCategory::VeryPoor => "Very Poor",
            AqiCategory::Severe => "Severe",
        }
    }

    /// Health advisory shown alongside the category.
    pub fn advisory(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Air quality is satisfactory, and air pollution poses little or no risk. Enjoy the fresh air!",
            AqiCategory::Satisfactory => "Air quality is acceptable. Sensitive groups may experience minor issues, but the general public is fine.",
            AqiCategory::Moderate => "Breathing discomfort possible for people with lung disease, asthma, and children. Minimize prolonged exertion outdoors.",
            AqiCategory::Poor => "Breathing discomfort to most people on prolonged exposure. Avoid unnecessary outdoor activity.",
            AqiCategory::VeryPoor => "Respiratory illness on prolonged exposure. Affects healthy people too. Stay indoors and use air purifiers.",
            AqiCategory::Severe => "Respiratory effects even on healthy people. Serious impact on those with existing diseases. Strictly avoid outdoor activity.",
        }
    }
}

impl std::fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns `(color, category, advisory)` for an AQI value.
pub fn aqi_details(aqi: i64) -> (&'static str, &'static str, &'static str) {
    let category = AqiCategory::from_aqi(aqi);
    (category.color(), category.label(), category.advisory())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(AqiCategory::from_aqi(50).label(), "Good");
        assert_eq!(AqiCategory::from_aqi(51).label(), "Satisfactory");
        assert_eq!(AqiCategory::from_aqi(100).label(), "Satisfactory");
        assert_eq!(AqiCategory::from_aqi(101).label(), "Moderate");
        assert_eq!(AqiCategory::from_aqi(200).label(), "Moderate");
        assert_eq!(AqiCategory::from_aqi(201).label(), "Poor");
        assert_eq!(AqiCategory::from_aqi(300).label(), "Poor");
        assert_eq!(AqiCategory::from_aqi(301).label(), "Very Poor");
        assert_eq!(AqiCategory::from_aqi(400).label(), "Very Poor");
        assert_eq!(AqiCategory::from_aqi(401).label(), "Severe");
    }

    #[test]
    fn test_out_of_range_values() {
        assert_eq!(AqiCategory::from_aqi(-5), AqiCategory::Good);
        assert_eq!(AqiCategory::from_aqi(i64::MIN), AqiCategory::Good);
        assert_eq!(AqiCategory::from_aqi(1000), AqiCategory::Severe);
        assert_eq!(AqiCategory::from_aqi(i64::MAX), AqiCategory::Severe);
    }

    #[test]
    fn test_aqi_details_triple() {
        let (color, category, advisory) = aqi_details(155);
        assert_eq!(color, "#FF7E00");
        assert_eq!(category, "Moderate");
        assert!(advisory.starts_with("Breathing discomfort possible"));

        let (color, category, _) = aqi_details(0);
        assert_eq!((color, category), ("#00E400", "Good"));

        let (color, category, _) = aqi_details(450);
        assert_eq!((color, category), ("#7E0023", "Severe"));
    }

    #[test]
    fn test_bands_are_ordered() {
        let bounds: Vec<i64> = AqiCategory::ALL
            .iter()
            .filter_map(|c| c.upper_bound())
            .collect();
        assert_eq!(bounds, vec![50, 100, 200, 300, 400]);
        assert!(bounds.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(AqiCategory::VeryPoor.to_string(), "Very Poor");
    }
}
