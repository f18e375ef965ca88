//! Parking lot models (line painting quotes)

use serde::{Deserialize, Serialize};

/// Geographic point in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Parking site type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    /// Surface lot (지상)
    #[default]
    Ground,
    /// Underground garage (지하), columns and ramps take more area per spot
    Underground,
}

/// Spot counts derived from a lot area
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ParkingSpotEstimate {
    pub total_spots: u32,
    pub regular_spots: u32,
    pub disabled_spots: u32,
    pub ev_spots: u32,
}

impl ParkingSpotEstimate {
    /// One-line summary, e.g. "총 25대 / 장애인 1대 / 전기차 2대"
    ///
    /// Zero counts are omitted; an empty estimate yields an empty string.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.total_spots > 0 {
            parts.push(format!("총 {}대", self.total_spots));
        }
        if self.disabled_spots > 0 {
            parts.push(format!("장애인 {}대", self.disabled_spots));
        }
        if self.ev_spots > 0 {
            parts.push(format!("전기차 {}대", self.ev_spots));
        }
        parts.join(" / ")
    }

    /// Spot counts in the shape the lane calculator takes
    pub fn lane_spots(&self) -> LaneSpots {
        LaneSpots {
            regular_spots: self.regular_spots,
            disabled_spots: self.disabled_spots,
            ev_spots: self.ev_spots,
        }
    }
}

/// Lane painting input: spot counts per type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LaneSpots {
    pub regular_spots: u32,
    #[serde(default)]
    pub disabled_spots: u32,
    #[serde(default, alias = "ev_charging_spots")]
    pub ev_spots: u32,
}

impl LaneSpots {
    /// Accessibility + EV spots, each priced with the special-spot surcharge
    pub fn special_spots(&self) -> u32 {
        self.disabled_spots.saturating_add(self.ev_spots)
    }
}

/// Lane painting quote
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LanePriceBreakdown {
    /// Flat tier amount selected by the regular spot count
    pub base_price: f64,
    /// Accessibility/EV surcharge
    pub special_price: f64,
    pub total: f64,
    /// Job is too large for automatic tiering; route to a human
    pub needs_consultation: bool,
    /// Display string, e.g. "약 105만원"
    pub formatted: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_omits_zero_counts() {
        let estimate = ParkingSpotEstimate {
            total_spots: 12,
            regular_spots: 11,
            disabled_spots: 1,
            ev_spots: 0,
        };
        assert_eq!(estimate.summary(), "총 12대 / 장애인 1대");
        assert_eq!(ParkingSpotEstimate::default().summary(), "");
    }

    #[test]
    fn test_lane_spots_accepts_legacy_ev_name() {
        let json = r#"{"regular_spots":15,"disabled_spots":1,"ev_charging_spots":2}"#;
        let spots: LaneSpots = serde_json::from_str(json).unwrap();
        assert_eq!(spots.ev_spots, 2);
        assert_eq!(spots.special_spots(), 3);
    }

    #[test]
    fn test_location_type_names() {
        let location: LocationType = serde_json::from_str("\"underground\"").unwrap();
        assert_eq!(location, LocationType::Underground);
    }
}
