//! # Section Specification
//!
//! Input parameters for the cross-section layout engine. A [`SectionSpec`]
//! describes one column/beam cross-section: outer shape, concrete cover,
//! link and main bar diameters, bar count, and the drawing scale.
//!
//! All dimensions are in millimetres. The spec is immutable input; the
//! layout engine never mutates or clamps it.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "label": "C-1",
//!   "shape": { "type": "Rectangular", "width_mm": 300.0, "depth_mm": 300.0 },
//!   "cover_mm": 40.0,
//!   "tie_diameter_mm": 8.0,
//!   "bar_diameter_mm": 16.0,
//!   "num_bars": 8,
//!   "scale": 1.0
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{SectionError, SectionResult};

/// Outer shape of the concrete section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SectionShape {
    /// Rectangular section, width along x, depth along y
    Rectangular { width_mm: f64, depth_mm: f64 },
    /// Circular section
    Circular { diameter_mm: f64 },
}

impl SectionShape {
    /// Smallest outer dimension, used for fit checks.
    pub fn min_dimension_mm(&self) -> f64 {
        match self {
            SectionShape::Rectangular { width_mm, depth_mm } => width_mm.min(*depth_mm),
            SectionShape::Circular { diameter_mm } => *diameter_mm,
        }
    }

    /// Gross concrete area in mm²
    pub fn area_mm2(&self) -> f64 {
        match self {
            SectionShape::Rectangular { width_mm, depth_mm } => width_mm * depth_mm,
            SectionShape::Circular { diameter_mm } => {
                std::f64::consts::PI * diameter_mm * diameter_mm / 4.0
            }
        }
    }
}

/// Input parameters for one cross-section layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSpec {
    /// User label for this section (e.g., "C-1", "Edge Column")
    pub label: String,

    /// Outer concrete shape
    pub shape: SectionShape,

    /// Clear concrete cover to the link surface, mm
    pub cover_mm: f64,

    /// Link/stirrup bar diameter, mm
    pub tie_diameter_mm: f64,

    /// Longitudinal bar diameter, mm
    pub bar_diameter_mm: f64,

    /// Number of longitudinal bars (minimum 4 for rectangular sections)
    pub num_bars: u32,

    /// Drawing scale applied to all output coordinates (1.0 = millimetres)
    pub scale: f64,
}

impl SectionSpec {
    /// Validate input parameters.
    ///
    /// Checks positivity of every dimension, the minimum bar count, and
    /// that the reinforcement cage physically fits inside the section.
    pub fn validate(&self) -> SectionResult<()> {
        for (field, value) in [
            ("cover_mm", self.cover_mm),
            ("tie_diameter_mm", self.tie_diameter_mm),
            ("bar_diameter_mm", self.bar_diameter_mm),
            ("scale", self.scale),
        ] {
            if value <= 0.0 {
                return Err(SectionError::invalid_input(
                    field,
                    value.to_string(),
                    "Must be positive",
                ));
            }
        }

        match self.shape {
            SectionShape::Rectangular { width_mm, depth_mm } => {
                if width_mm <= 0.0 {
                    return Err(SectionError::invalid_input(
                        "width_mm",
                        width_mm.to_string(),
                        "Must be positive",
                    ));
                }
                if depth_mm <= 0.0 {
                    return Err(SectionError::invalid_input(
                        "depth_mm",
                        depth_mm.to_string(),
                        "Must be positive",
                    ));
                }
                if self.num_bars < 4 {
                    return Err(SectionError::invalid_input(
                        "num_bars",
                        self.num_bars.to_string(),
                        "Rectangular sections need at least 4 bars (one per corner)",
                    ));
                }
                // The bar center inset must stay inside both half-dimensions,
                // otherwise bars would fall outside the section.
                let inset = self.cover_mm + self.tie_diameter_mm + self.bar_diameter_mm / 2.0;
                if inset >= width_mm / 2.0 || inset >= depth_mm / 2.0 {
                    return Err(SectionError::geometry_infeasible(format!(
                        "cover + link + bar/2 = {:.1} mm does not fit inside a {:.0} x {:.0} section",
                        inset, width_mm, depth_mm
                    )));
                }
            }
            SectionShape::Circular { diameter_mm } => {
                if diameter_mm <= 0.0 {
                    return Err(SectionError::invalid_input(
                        "diameter_mm",
                        diameter_mm.to_string(),
                        "Must be positive",
                    ));
                }
                if self.num_bars < 1 {
                    return Err(SectionError::invalid_input(
                        "num_bars",
                        self.num_bars.to_string(),
                        "At least one bar required",
                    ));
                }
                if self.bar_ring_radius_mm() <= 0.0 {
                    return Err(SectionError::geometry_infeasible(format!(
                        "cover + link + bar/2 leaves no bar ring inside a {:.0} mm diameter section",
                        diameter_mm
                    )));
                }
            }
        }

        Ok(())
    }

    /// Half-extents of the link centerline rectangle (x, y), mm.
    ///
    /// The link centerline sits `cover + tie_diameter/2` inside each face.
    /// Only meaningful for rectangular sections.
    pub fn tie_half_extents_mm(&self) -> (f64, f64) {
        match self.shape {
            SectionShape::Rectangular { width_mm, depth_mm } => {
                let inset = self.cover_mm + self.tie_diameter_mm / 2.0;
                (width_mm / 2.0 - inset, depth_mm / 2.0 - inset)
            }
            SectionShape::Circular { .. } => (0.0, 0.0),
        }
    }

    /// Radius of the circle on which circular-section bars are placed, mm.
    pub fn bar_ring_radius_mm(&self) -> f64 {
        match self.shape {
            SectionShape::Circular { diameter_mm } => {
                diameter_mm / 2.0
                    - self.cover_mm
                    - self.tie_diameter_mm
                    - self.bar_diameter_mm / 2.0
            }
            SectionShape::Rectangular { .. } => 0.0,
        }
    }

    /// Total steel area provided by the longitudinal bars, mm²
    pub fn steel_area_mm2(&self) -> f64 {
        let d = self.bar_diameter_mm;
        self.num_bars as f64 * std::f64::consts::PI * d * d / 4.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_spec() -> SectionSpec {
        SectionSpec {
            label: "Test".to_string(),
            shape: SectionShape::Rectangular {
                width_mm: 300.0,
                depth_mm: 300.0,
            },
            cover_mm: 40.0,
            tie_diameter_mm: 8.0,
            bar_diameter_mm: 16.0,
            num_bars: 8,
            scale: 1.0,
        }
    }

    #[test]
    fn test_valid_spec() {
        assert!(test_spec().validate().is_ok());
    }

    #[test]
    fn test_too_few_bars() {
        let mut spec = test_spec();
        spec.num_bars = 3;
        let err = spec.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_negative_cover() {
        let mut spec = test_spec();
        spec.cover_mm = -40.0;
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_cage_does_not_fit() {
        let mut spec = test_spec();
        spec.cover_mm = 140.0;
        let err = spec.validate().unwrap_err();
        assert_eq!(err.error_code(), "GEOMETRY_INFEASIBLE");
    }

    #[test]
    fn test_tie_half_extents() {
        let (hx, hy) = test_spec().tie_half_extents_mm();
        // 300/2 - (40 + 8/2) = 106
        assert!((hx - 106.0).abs() < 1.0e-9);
        assert!((hy - 106.0).abs() < 1.0e-9);
    }

    #[test]
    fn test_circular_ring_radius() {
        let spec = SectionSpec {
            label: "Pier".to_string(),
            shape: SectionShape::Circular { diameter_mm: 450.0 },
            cover_mm: 40.0,
            tie_diameter_mm: 10.0,
            bar_diameter_mm: 20.0,
            num_bars: 6,
            scale: 1.0,
        };
        // 225 - 40 - 10 - 10 = 165
        assert!((spec.bar_ring_radius_mm() - 165.0).abs() < 1.0e-9);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let spec = test_spec();
        let json = serde_json::to_string_pretty(&spec).unwrap();
        let roundtrip: SectionSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, roundtrip);
    }
}
