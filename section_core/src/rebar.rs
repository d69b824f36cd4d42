//! # Standard Reinforcement Bar Sizes
//!
//! Provides the standard metric bar designations (BS 4449 / BS 8666 "H"
//! series) with diameter, area, and minimum bend radius lookups.
//!
//! ## Designations
//!
//! - H8, H10: link/stirrup sizes
//! - H12 through H40: longitudinal bar sizes
//!
//! Areas are computed from the nominal diameter rather than tabulated, so
//! they stay exact for spacing checks.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Standard metric reinforcement bar size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BarSize {
    /// 8 mm (links)
    H8,
    /// 10 mm (links)
    H10,
    /// 12 mm
    H12,
    /// 16 mm
    H16,
    /// 20 mm
    #[default]
    H20,
    /// 25 mm
    H25,
    /// 32 mm
    H32,
    /// 40 mm
    H40,
}

impl BarSize {
    /// All bar sizes for UI selection
    pub const ALL: [BarSize; 8] = [
        BarSize::H8,
        BarSize::H10,
        BarSize::H12,
        BarSize::H16,
        BarSize::H20,
        BarSize::H25,
        BarSize::H32,
        BarSize::H40,
    ];

    /// Sizes normally used for longitudinal column bars, smallest first
    pub const MAIN: [BarSize; 6] = [
        BarSize::H12,
        BarSize::H16,
        BarSize::H20,
        BarSize::H25,
        BarSize::H32,
        BarSize::H40,
    ];

    /// Sizes normally used for links/stirrups
    pub const LINKS: [BarSize; 2] = [BarSize::H8, BarSize::H10];

    /// Nominal diameter in millimetres
    pub fn diameter_mm(&self) -> f64 {
        match self {
            BarSize::H8 => 8.0,
            BarSize::H10 => 10.0,
            BarSize::H12 => 12.0,
            BarSize::H16 => 16.0,
            BarSize::H20 => 20.0,
            BarSize::H25 => 25.0,
            BarSize::H32 => 32.0,
            BarSize::H40 => 40.0,
        }
    }

    /// Cross-sectional area of a single bar in mm²
    pub fn area_mm2(&self) -> f64 {
        let d = self.diameter_mm();
        PI * d * d / 4.0
    }

    /// Minimum internal bend (former) radius in millimetres, per BS 8666:
    /// 2d for bars up to 16 mm, 3.5d above.
    pub fn min_bend_radius_mm(&self) -> f64 {
        let d = self.diameter_mm();
        if d <= 16.0 {
            2.0 * d
        } else {
            3.5 * d
        }
    }

    /// Designation string, e.g. "H20"
    pub fn designation(&self) -> &'static str {
        match self {
            BarSize::H8 => "H8",
            BarSize::H10 => "H10",
            BarSize::H12 => "H12",
            BarSize::H16 => "H16",
            BarSize::H20 => "H20",
            BarSize::H25 => "H25",
            BarSize::H32 => "H32",
            BarSize::H40 => "H40",
        }
    }

    /// Find the bar size matching a nominal diameter, if any.
    pub fn from_diameter_mm(d: f64) -> Option<BarSize> {
        BarSize::ALL
            .iter()
            .copied()
            .find(|size| (size.diameter_mm() - d).abs() < 1.0e-9)
    }
}

impl std::fmt::Display for BarSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.designation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_areas() {
        // H20: pi * 20^2 / 4 = 314.16 mm^2
        assert!((BarSize::H20.area_mm2() - 314.159).abs() < 0.01);
        // H32: 804.25 mm^2
        assert!((BarSize::H32.area_mm2() - 804.248).abs() < 0.01);
    }

    #[test]
    fn test_bend_radius_thresholds() {
        assert_eq!(BarSize::H16.min_bend_radius_mm(), 32.0);
        assert_eq!(BarSize::H20.min_bend_radius_mm(), 70.0);
    }

    #[test]
    fn test_from_diameter() {
        assert_eq!(BarSize::from_diameter_mm(25.0), Some(BarSize::H25));
        assert_eq!(BarSize::from_diameter_mm(14.0), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(BarSize::H20.to_string(), "H20");
    }
}
