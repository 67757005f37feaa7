//! Risk severity bands over the score domain

use serde::{Deserialize, Serialize};

/// Named severity band of the risk score.
///
/// Bands are half-open and non-overlapping, so every score maps to at
/// most one band. Scores below 40 belong to no band and are excluded
/// from vectorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskBand {
    High,
    Medium,
    Low,
}

impl RiskBand {
    /// All bands in descending severity order
    pub const ALL: [RiskBand; 3] = [RiskBand::High, RiskBand::Medium, RiskBand::Low];

    /// Half-open score range [min, max) covered by this band
    pub fn range(&self) -> (f64, f64) {
        match self {
            RiskBand::High => (80.0, 100.0),
            RiskBand::Medium => (60.0, 80.0),
            RiskBand::Low => (40.0, 60.0),
        }
    }

    /// Whether a score falls inside this band
    pub fn contains(&self, score: f64) -> bool {
        let (min, max) = self.range();
        score >= min && score < max
    }

    /// Band containing the score, if any
    pub fn classify(score: f64) -> Option<RiskBand> {
        RiskBand::ALL.into_iter().find(|band| band.contains(score))
    }

    /// Sort rank, most severe first
    pub fn rank(&self) -> u8 {
        match self {
            RiskBand::High => 0,
            RiskBand::Medium => 1,
            RiskBand::Low => 2,
        }
    }

    /// Display name used in feature properties and alerts
    pub fn name(&self) -> &'static str {
        match self {
            RiskBand::High => "HIGH",
            RiskBand::Medium => "MEDIUM",
            RiskBand::Low => "LOW",
        }
    }

    /// Band matching a display name
    pub fn from_name(name: &str) -> Option<RiskBand> {
        RiskBand::ALL.into_iter().find(|band| band.name() == name)
    }

    /// Display color for map rendering
    pub fn color(&self) -> &'static str {
        match self {
            RiskBand::High => "#ef4444",
            RiskBand::Medium => "#f97316",
            RiskBand::Low => "#fbbf24",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_partition_scores() {
        for score in [40.0, 45.5, 59.99, 60.0, 79.99, 80.0, 99.99] {
            let matches = RiskBand::ALL
                .iter()
                .filter(|band| band.contains(score))
                .count();
            assert_eq!(matches, 1, "score {score} should match exactly one band");
        }
    }

    #[test]
    fn test_out_of_band_scores() {
        assert_eq!(RiskBand::classify(0.0), None);
        assert_eq!(RiskBand::classify(39.99), None);
        // The score ceiling sits outside the topmost half-open range
        assert_eq!(RiskBand::classify(100.0), None);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(RiskBand::classify(40.0), Some(RiskBand::Low));
        assert_eq!(RiskBand::classify(60.0), Some(RiskBand::Medium));
        assert_eq!(RiskBand::classify(80.0), Some(RiskBand::High));
    }

    #[test]
    fn test_names_round_trip() {
        for band in RiskBand::ALL {
            assert_eq!(RiskBand::from_name(band.name()), Some(band));
        }
        assert_eq!(RiskBand::from_name("EXTREME"), None);
    }

    #[test]
    fn test_severity_order() {
        assert!(RiskBand::High.rank() < RiskBand::Medium.rank());
        assert!(RiskBand::Medium.rank() < RiskBand::Low.rank());
    }
}
