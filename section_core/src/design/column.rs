//! # Column Design
//!
//! Sizes longitudinal reinforcement for a short braced rectangular column
//! under ultimate axial load, per BS 8110-1 3.8.4.4 (columns supporting an
//! approximately symmetrical arrangement of beams):
//!
//! ```text
//! N = 0.35 fcu Ac + 0.7 fy Asc
//! ```
//!
//! solved for the required steel area Asc, then matched against the
//! standard bar sizes. Steel ratio limits: 0.4% minimum, 6% maximum of
//! the gross section.
//!
//! ## Assumptions
//!
//! - Short braced column (slenderness checks out of scope)
//! - Gross concrete area Ac = b·h (steel displacement ignored)
//! - Even bar counts only, minimum 4 (one bar per corner)
//!
//! ## Example
//!
//! ```rust
//! use section_core::design::column::{calculate, ColumnDesignInput};
//!
//! let input = ColumnDesignInput {
//!     label: "C-1".to_string(),
//!     axial_load_kn: 1500.0,
//!     concrete_strength_nmm2: 30.0,
//!     steel_strength_nmm2: 500.0,
//!     width_mm: 300.0,
//!     depth_mm: 300.0,
//! };
//! let result = calculate(&input).unwrap();
//! assert!(result.passes());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{SectionError, SectionResult};
use crate::rebar::BarSize;
use crate::section::{SectionShape, SectionSpec};

/// Most bars that fit a practical single-layer cage per face pair.
const MAX_BARS: u32 = 16;

/// Input parameters for a short braced column.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "C-1",
///   "axial_load_kn": 1500.0,
///   "concrete_strength_nmm2": 30.0,
///   "steel_strength_nmm2": 500.0,
///   "width_mm": 300.0,
///   "depth_mm": 300.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDesignInput {
    /// User label for this column (e.g., "C-1", "Edge Column")
    pub label: String,

    /// Ultimate axial load N in kilonewtons
    pub axial_load_kn: f64,

    /// Concrete cube strength fcu in N/mm²
    pub concrete_strength_nmm2: f64,

    /// Reinforcement yield strength fy in N/mm²
    pub steel_strength_nmm2: f64,

    /// Column width in millimetres
    pub width_mm: f64,

    /// Column depth in millimetres
    pub depth_mm: f64,
}

impl ColumnDesignInput {
    /// Validate input parameters.
    pub fn validate(&self) -> SectionResult<()> {
        if self.axial_load_kn <= 0.0 {
            return Err(SectionError::invalid_input(
                "axial_load_kn",
                self.axial_load_kn.to_string(),
                "Axial load must be positive",
            ));
        }
        if !(20.0..=80.0).contains(&self.concrete_strength_nmm2) {
            return Err(SectionError::invalid_input(
                "concrete_strength_nmm2",
                self.concrete_strength_nmm2.to_string(),
                "Cube strength outside the 20-80 N/mm² design range",
            ));
        }
        if !(250.0..=600.0).contains(&self.steel_strength_nmm2) {
            return Err(SectionError::invalid_input(
                "steel_strength_nmm2",
                self.steel_strength_nmm2.to_string(),
                "Yield strength outside the 250-600 N/mm² design range",
            ));
        }
        if self.width_mm <= 0.0 {
            return Err(SectionError::invalid_input(
                "width_mm",
                self.width_mm.to_string(),
                "Width must be positive",
            ));
        }
        if self.depth_mm <= 0.0 {
            return Err(SectionError::invalid_input(
                "depth_mm",
                self.depth_mm.to_string(),
                "Depth must be positive",
            ));
        }
        Ok(())
    }

    /// Gross concrete area Ac = b·h in mm²
    pub fn gross_area_mm2(&self) -> f64 {
        self.width_mm * self.depth_mm
    }
}

/// Results from column design.
///
/// ## JSON Example
///
/// ```json
/// {
///   "required_area_mm2": 1585.7,
///   "provided_area_mm2": 1608.5,
///   "bar_size": "H16",
///   "bar_count": 8,
///   "steel_ratio": 0.0179,
///   "capacity_kn": 1508.0,
///   "utilization": 0.994
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDesignResult {
    /// Required steel area Asc in mm² (after the 0.4% minimum)
    pub required_area_mm2: f64,

    /// Area provided by the selected bars in mm²
    pub provided_area_mm2: f64,

    /// Selected bar size
    pub bar_size: BarSize,

    /// Selected bar count (even, at least 4)
    pub bar_count: u32,

    /// Provided steel as a fraction of the gross section
    pub steel_ratio: f64,

    /// Axial capacity with the provided steel, in kilonewtons
    pub capacity_kn: f64,

    /// Applied load over capacity
    pub utilization: f64,
}

impl ColumnDesignResult {
    /// Check if the design passes (utilization ≤ 1.0, ratio within limits)
    pub fn passes(&self) -> bool {
        self.utilization <= 1.0 && self.steel_ratio <= 0.06
    }

    /// Build the detailing spec for this design: the sized bars arranged
    /// in the column section, ready for the layout engine.
    pub fn detailing_spec(
        &self,
        input: &ColumnDesignInput,
        cover_mm: f64,
        link: BarSize,
        scale: f64,
    ) -> SectionSpec {
        SectionSpec {
            label: input.label.clone(),
            shape: SectionShape::Rectangular {
                width_mm: input.width_mm,
                depth_mm: input.depth_mm,
            },
            cover_mm,
            tie_diameter_mm: link.diameter_mm(),
            bar_diameter_mm: self.bar_size.diameter_mm(),
            num_bars: self.bar_count,
            scale,
        }
    }
}

/// Size the longitudinal reinforcement for a short braced column.
///
/// # Arguments
///
/// * `input` - Column parameters
///
/// # Returns
///
/// * `Ok(ColumnDesignResult)` - Sized bars and capacity checks
/// * `Err(SectionError)` - If inputs are invalid or the section cannot
///   carry the load within the 6% steel limit
pub fn calculate(input: &ColumnDesignInput) -> SectionResult<ColumnDesignResult> {
    input.validate()?;

    let ac = input.gross_area_mm2();
    let fcu = input.concrete_strength_nmm2;
    let fy = input.steel_strength_nmm2;
    let n_newtons = input.axial_load_kn * 1000.0;

    // N = 0.35 fcu Ac + 0.7 fy Asc, solved for Asc
    let asc_solved = (n_newtons - 0.35 * fcu * ac) / (0.7 * fy);
    let required = asc_solved.max(0.004 * ac);

    if required > 0.06 * ac {
        return Err(SectionError::design_failed(
            "column",
            format!(
                "required steel {:.0} mm² exceeds 6% of the gross section ({:.0} mm²) - increase the section or concrete grade",
                required,
                0.06 * ac
            ),
        ));
    }

    let (bar_size, bar_count) = select_bars(required)?;
    let provided = bar_count as f64 * bar_size.area_mm2();
    let capacity_kn = (0.35 * fcu * ac + 0.7 * fy * provided) / 1000.0;

    Ok(ColumnDesignResult {
        required_area_mm2: required,
        provided_area_mm2: provided,
        bar_size,
        bar_count,
        steel_ratio: provided / ac,
        capacity_kn,
        utilization: input.axial_load_kn / capacity_kn,
    })
}

/// Pick the smallest standard bar size whose even count (minimum 4) covers
/// the required area. Arrangements up to 8 bars are preferred; the hard
/// limit is [`MAX_BARS`].
fn select_bars(required_area_mm2: f64) -> SectionResult<(BarSize, u32)> {
    for cap in [8, MAX_BARS] {
        for size in BarSize::MAIN {
            let mut count = (required_area_mm2 / size.area_mm2()).ceil() as u32;
            count = count.max(4);
            if count % 2 == 1 {
                count += 1;
            }
            if count <= cap {
                return Ok((size, count));
            }
        }
    }
    Err(SectionError::design_failed(
        "column",
        format!(
            "no standard arrangement provides {:.0} mm² within {} bars",
            required_area_mm2, MAX_BARS
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_column() -> ColumnDesignInput {
        ColumnDesignInput {
            label: "Test Column".to_string(),
            axial_load_kn: 1500.0,
            concrete_strength_nmm2: 30.0,
            steel_strength_nmm2: 500.0,
            width_mm: 300.0,
            depth_mm: 300.0,
        }
    }

    #[test]
    fn test_gross_area() {
        assert_eq!(test_column().gross_area_mm2(), 90_000.0);
    }

    #[test]
    fn test_required_steel_area() {
        let result = calculate(&test_column()).unwrap();
        // Asc = (1.5e6 - 0.35 * 30 * 90000) / (0.7 * 500) = 1585.7 mm²
        assert!((result.required_area_mm2 - 1585.7).abs() < 1.0);
    }

    #[test]
    fn test_bar_selection_covers_required_area() {
        let result = calculate(&test_column()).unwrap();
        assert!(result.provided_area_mm2 >= result.required_area_mm2);
        assert!(result.bar_count >= 4);
        assert_eq!(result.bar_count % 2, 0);
        assert!(result.passes());
    }

    #[test]
    fn test_lightly_loaded_column_gets_minimum_steel() {
        let mut input = test_column();
        input.axial_load_kn = 100.0;
        let result = calculate(&input).unwrap();
        // 0.4% of 90000 = 360 mm²
        assert!((result.required_area_mm2 - 360.0).abs() < 1.0e-6);
        assert!(result.utilization < 0.2);
    }

    #[test]
    fn test_overloaded_section_fails() {
        let mut input = test_column();
        input.axial_load_kn = 6000.0;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "DESIGN_FAILED");
    }

    #[test]
    fn test_invalid_concrete_grade() {
        let mut input = test_column();
        input.concrete_strength_nmm2 = 10.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_detailing_spec_bridges_to_layout() {
        let input = test_column();
        let result = calculate(&input).unwrap();
        let spec = result.detailing_spec(&input, 40.0, BarSize::H8, 1.0);
        assert_eq!(spec.num_bars, result.bar_count);
        let layout = crate::layout::layout_section(&spec).unwrap();
        assert_eq!(layout.bars.len() as u32, result.bar_count);
    }

    #[test]
    fn test_serialization() {
        let input = test_column();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: ColumnDesignInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
