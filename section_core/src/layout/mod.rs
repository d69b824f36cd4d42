//! # Cross-Section Layout Engine
//!
//! The central entry point of section_core: [`layout_section`] turns a
//! validated [`SectionSpec`] into a pure geometric description of the
//! detailed cross-section, ready for any rendering backend.
//!
//! The engine is a single pure computation: compute outline, compute link
//! outline, place bars, generate annotations. No I/O, no side effects,
//! fully deterministic for a given input, safe to call concurrently.
//!
//! ## Example
//!
//! ```rust
//! use section_core::layout::layout_section;
//! use section_core::section::{SectionShape, SectionSpec};
//!
//! let spec = SectionSpec {
//!     label: "C-1".to_string(),
//!     shape: SectionShape::Rectangular { width_mm: 300.0, depth_mm: 300.0 },
//!     cover_mm: 40.0,
//!     tie_diameter_mm: 8.0,
//!     bar_diameter_mm: 16.0,
//!     num_bars: 8,
//!     scale: 1.0,
//! };
//! let layout = layout_section(&spec).unwrap();
//! assert_eq!(layout.bars.len(), 8);
//! ```

pub mod annotate;
pub mod bars;

use serde::{Deserialize, Serialize};

use crate::errors::SectionResult;
use crate::geometry::Point2;
use crate::rebar::BarSize;
use crate::section::{SectionShape, SectionSpec};
use crate::units::Millimeters;

pub use annotate::{Axis, DimensionAnnotation, LabelAlign, LeaderAnnotation};
pub use bars::{BarPoint, BarRole, Warning};

/// Clear distance between the section outline and its dimension lines,
/// in output drawing units.
const DIM_CLEARANCE: f64 = 30.0;
/// Diagonal run from a leader target to its elbow, in output drawing units.
const LEADER_RUN: f64 = 35.0;

/// A closed outline: the concrete face or the link centerline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Outline {
    /// Rectangle given by its corners, counter-clockwise from bottom-left
    Rectangle { corners: [Point2; 4] },
    /// Circle centered on the section centroid
    Circle { center: Point2, radius: f64 },
}

/// Complete geometric description of one detailed cross-section.
///
/// All coordinates are section-local (origin at the centroid, +x right,
/// +y up) and already multiplied by the drawing scale. Label strings keep
/// real millimetre values regardless of scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionLayout {
    /// Section label, copied from the spec for title text
    pub label: String,
    /// Outer concrete outline
    pub outline: Outline,
    /// Link/stirrup centerline outline
    pub tie_outline: Outline,
    /// Longitudinal bar centers with their roles
    pub bars: Vec<BarPoint>,
    /// Radius to draw each bar circle at, in output units
    pub bar_radius: f64,
    /// Width/depth (or diameter) dimensions
    pub dimensions: Vec<DimensionAnnotation>,
    /// Bar and link callouts
    pub leaders: Vec<LeaderAnnotation>,
    /// Advisory findings (overlapping bars); never fatal
    pub warnings: Vec<Warning>,
}

impl SectionLayout {
    /// Axis-aligned bounds over every point the layout emits, for
    /// fit-to-view transforms in renderers.
    pub fn bounds(&self) -> (Point2, Point2) {
        let mut min = Point2::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        let mut take = |p: Point2| {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        };

        for outline in [&self.outline, &self.tie_outline] {
            match outline {
                Outline::Rectangle { corners } => corners.iter().copied().for_each(&mut take),
                Outline::Circle { center, radius } => {
                    take(Point2::new(center.x - radius, center.y - radius));
                    take(Point2::new(center.x + radius, center.y + radius));
                }
            }
        }
        for bar in &self.bars {
            take(bar.position);
        }
        for dim in &self.dimensions {
            take(dim.dimension_line.start);
            take(dim.dimension_line.end);
            take(dim.label_position);
            for ext in &dim.extension_lines {
                take(ext.start);
                take(ext.end);
            }
        }
        for l in &self.leaders {
            take(l.target);
            take(l.elbow);
            take(l.stub_end);
        }

        (min, max)
    }
}

/// Compute the full layout for one cross-section.
///
/// Fails with [`crate::errors::SectionError`] when the spec violates its
/// invariants; never clamps or guesses. Overlapping bars are reported as
/// warnings on the successful layout instead.
pub fn layout_section(spec: &SectionSpec) -> SectionResult<SectionLayout> {
    spec.validate()?;

    let s = spec.scale;
    match spec.shape {
        SectionShape::Rectangular { width_mm, depth_mm } => {
            let hw = width_mm / 2.0 * s;
            let hh = depth_mm / 2.0 * s;
            let outline = rect_outline(hw, hh);

            let (tie_hx, tie_hy) = spec.tie_half_extents_mm();
            let tie_outline = rect_outline(tie_hx * s, tie_hy * s);

            let (bars_mm, warnings) = bars::distribute_rectangular(spec);
            let bars = scale_bars(bars_mm, s);

            let bl = Point2::new(-hw, -hh);
            let br = Point2::new(hw, -hh);
            let tl = Point2::new(-hw, hh);
            let dimensions = vec![
                annotate::linear_dimension(
                    bl,
                    br,
                    Axis::Horizontal,
                    -DIM_CLEARANCE,
                    Millimeters(width_mm).to_string(),
                ),
                annotate::linear_dimension(
                    bl,
                    tl,
                    Axis::Vertical,
                    -DIM_CLEARANCE,
                    Millimeters(depth_mm).to_string(),
                ),
            ];

            // Main-bar callout off the top-right corner bar, link callout
            // off the mid-height of the left link face.
            let bar_target = Point2::new(tie_hx * s, tie_hy * s);
            let link_target = Point2::new(-tie_hx * s, 0.0);
            let leaders = vec![
                annotate::leader(
                    bar_target,
                    Point2::new(bar_target.x + LEADER_RUN, bar_target.y + LEADER_RUN),
                    true,
                    main_bar_label(spec),
                ),
                annotate::leader(
                    link_target,
                    Point2::new(link_target.x - LEADER_RUN, link_target.y + LEADER_RUN),
                    false,
                    link_label(spec),
                ),
            ];

            Ok(SectionLayout {
                label: spec.label.clone(),
                outline,
                tie_outline,
                bars,
                bar_radius: spec.bar_diameter_mm / 2.0 * s,
                dimensions,
                leaders,
                warnings,
            })
        }
        SectionShape::Circular { diameter_mm } => {
            let radius = diameter_mm / 2.0 * s;
            let outline = Outline::Circle {
                center: Point2::new(0.0, 0.0),
                radius,
            };
            let tie_radius = (diameter_mm / 2.0 - spec.cover_mm - spec.tie_diameter_mm / 2.0) * s;
            let tie_outline = Outline::Circle {
                center: Point2::new(0.0, 0.0),
                radius: tie_radius,
            };

            let (bars_mm, warnings) = bars::distribute_circular(spec);
            let bars = scale_bars(bars_mm, s);

            let dimensions = vec![annotate::linear_dimension(
                Point2::new(-radius, 0.0),
                Point2::new(radius, 0.0),
                Axis::Horizontal,
                -(radius + DIM_CLEARANCE),
                Millimeters(diameter_mm).to_string(),
            )];

            let bar_target = Point2::new(spec.bar_ring_radius_mm() * s, 0.0);
            let link_target = Point2::new(-tie_radius, 0.0);
            let leaders = vec![
                annotate::leader(
                    bar_target,
                    Point2::new(radius + LEADER_RUN, LEADER_RUN),
                    true,
                    main_bar_label(spec),
                ),
                annotate::leader(
                    link_target,
                    Point2::new(-(radius + LEADER_RUN), LEADER_RUN),
                    false,
                    link_label(spec),
                ),
            ];

            Ok(SectionLayout {
                label: spec.label.clone(),
                outline,
                tie_outline,
                bars,
                bar_radius: spec.bar_diameter_mm / 2.0 * s,
                dimensions,
                leaders,
                warnings,
            })
        }
    }
}

fn rect_outline(half_width: f64, half_height: f64) -> Outline {
    Outline::Rectangle {
        corners: [
            Point2::new(-half_width, -half_height),
            Point2::new(half_width, -half_height),
            Point2::new(half_width, half_height),
            Point2::new(-half_width, half_height),
        ],
    }
}

fn scale_bars(bars_mm: Vec<BarPoint>, s: f64) -> Vec<BarPoint> {
    bars_mm
        .into_iter()
        .map(|b| BarPoint {
            position: Point2::new(b.position.x * s, b.position.y * s),
            role: b.role,
        })
        .collect()
}

/// Callout text for the longitudinal bars, e.g. "8H20".
fn main_bar_label(spec: &SectionSpec) -> String {
    match BarSize::from_diameter_mm(spec.bar_diameter_mm) {
        Some(size) => format!("{}{}", spec.num_bars, size.designation()),
        None => format!("{} x {:.0} mm", spec.num_bars, spec.bar_diameter_mm),
    }
}

/// Callout text for the links, e.g. "H8 links".
fn link_label(spec: &SectionSpec) -> String {
    match BarSize::from_diameter_mm(spec.tie_diameter_mm) {
        Some(size) => format!("{} links", size.designation()),
        None => format!("{:.0} mm links", spec.tie_diameter_mm),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_spec(num_bars: u32) -> SectionSpec {
        SectionSpec {
            label: "C-1".to_string(),
            shape: SectionShape::Rectangular {
                width_mm: 300.0,
                depth_mm: 300.0,
            },
            cover_mm: 40.0,
            tie_diameter_mm: 8.0,
            bar_diameter_mm: 16.0,
            num_bars,
            scale: 1.0,
        }
    }

    fn circ_spec(num_bars: u32) -> SectionSpec {
        SectionSpec {
            label: "P-1".to_string(),
            shape: SectionShape::Circular { diameter_mm: 450.0 },
            cover_mm: 40.0,
            tie_diameter_mm: 10.0,
            bar_diameter_mm: 20.0,
            num_bars,
            scale: 1.0,
        }
    }

    #[test]
    fn test_corner_bars_at_tie_corners() {
        // Four corner bars at the link-outline corners, for any bar count
        for n in [4, 5, 8, 13, 20] {
            let layout = layout_section(&rect_spec(n)).unwrap();
            let Outline::Rectangle { corners } = &layout.tie_outline else {
                panic!("expected rectangular tie outline");
            };
            let corner_bars: Vec<_> = layout
                .bars
                .iter()
                .filter(|b| b.role == BarRole::Corner)
                .collect();
            assert_eq!(corner_bars.len(), 4);
            for corner in corners {
                assert!(
                    corner_bars
                        .iter()
                        .any(|b| b.position.distance_to(*corner) < 1.0e-9),
                    "no bar at tie corner {:?} with {} bars",
                    corner,
                    n
                );
            }
        }
    }

    #[test]
    fn test_bar_count_matches_spec() {
        for n in 4..=24 {
            let layout = layout_section(&rect_spec(n)).unwrap();
            assert_eq!(layout.bars.len() as u32, n);
        }
    }

    #[test]
    fn test_square_layout_symmetric_under_rotation() {
        // Square section, bar count divisible by 4: the set of bar centers
        // maps onto itself under 90° rotation about the centroid
        for n in [4, 8, 12, 16] {
            let layout = layout_section(&rect_spec(n)).unwrap();
            for bar in &layout.bars {
                let rotated = Point2::new(-bar.position.y, bar.position.x);
                assert!(
                    layout
                        .bars
                        .iter()
                        .any(|b| b.position.distance_to(rotated) < 1.0e-6),
                    "{:?} has no 90°-rotated partner ({} bars)",
                    bar.position,
                    n
                );
            }
        }
    }

    #[test]
    fn test_circular_angular_gaps_equal() {
        let layout = layout_section(&circ_spec(7)).unwrap();
        let angles: Vec<f64> = layout
            .bars
            .iter()
            .map(|b| b.position.y.atan2(b.position.x))
            .collect();
        let step = std::f64::consts::TAU / 7.0;
        for (i, pair) in angles.windows(2).enumerate() {
            let mut gap = pair[1] - pair[0];
            if gap < 0.0 {
                gap += std::f64::consts::TAU;
            }
            assert!((gap - step).abs() < 1.0e-9, "uneven gap after bar {}", i);
        }
    }

    #[test]
    fn test_determinism() {
        let spec = rect_spec(11);
        let a = serde_json::to_string(&layout_section(&spec).unwrap()).unwrap();
        let b = serde_json::to_string(&layout_section(&spec).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_scenario_eight_bars_square() {
        // 300x300, 8 bars: 4 corners plus one centered bar per face
        let layout = layout_section(&rect_spec(8)).unwrap();
        let sides: Vec<_> = layout
            .bars
            .iter()
            .filter(|b| b.role == BarRole::Side)
            .collect();
        assert_eq!(sides.len(), 4);
        // Each side bar sits on an axis of symmetry
        for bar in sides {
            assert!(bar.position.x.abs() < 1.0e-9 || bar.position.y.abs() < 1.0e-9);
        }
    }

    #[test]
    fn test_scenario_four_bars_corners_only() {
        let layout = layout_section(&rect_spec(4)).unwrap();
        assert!(layout.bars.iter().all(|b| b.role == BarRole::Corner));
    }

    #[test]
    fn test_scenario_three_bars_rejected() {
        let err = layout_section(&rect_spec(3)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_dimension_labels_use_real_millimetres() {
        let mut spec = rect_spec(8);
        spec.scale = 0.5;
        let layout = layout_section(&spec).unwrap();
        assert_eq!(layout.dimensions.len(), 2);
        assert_eq!(layout.dimensions[0].label, "300 mm");
        assert_eq!(layout.dimensions[1].label, "300 mm");
        assert!(layout.dimensions[1].vertical);

        // Coordinates scale, labels do not
        let Outline::Rectangle { corners } = &layout.outline else {
            panic!("expected rectangle");
        };
        assert!((corners[1].x - 75.0).abs() < 1.0e-9);
    }

    #[test]
    fn test_leader_callouts() {
        let layout = layout_section(&rect_spec(8)).unwrap();
        assert_eq!(layout.leaders.len(), 2);
        assert_eq!(layout.leaders[0].label, "8H16");
        assert_eq!(layout.leaders[0].align, LabelAlign::Left);
        assert_eq!(layout.leaders[1].label, "H8 links");
        assert_eq!(layout.leaders[1].align, LabelAlign::Right);
    }

    #[test]
    fn test_circular_layout_shape() {
        let layout = layout_section(&circ_spec(6)).unwrap();
        let Outline::Circle { radius, .. } = layout.outline else {
            panic!("expected circular outline");
        };
        assert!((radius - 225.0).abs() < 1.0e-9);
        let Outline::Circle { radius: tie_r, .. } = layout.tie_outline else {
            panic!("expected circular tie outline");
        };
        // 225 - 40 - 5 = 180
        assert!((tie_r - 180.0).abs() < 1.0e-9);
        assert_eq!(layout.dimensions.len(), 1);
        assert_eq!(layout.dimensions[0].label, "450 mm");
    }

    #[test]
    fn test_overlap_surfaces_as_warning_not_error() {
        let mut spec = rect_spec(12);
        spec.shape = SectionShape::Rectangular {
            width_mm: 140.0,
            depth_mm: 140.0,
        };
        spec.cover_mm = 20.0;
        spec.bar_diameter_mm = 32.0;
        let layout = layout_section(&spec).unwrap();
        assert!(!layout.warnings.is_empty());
    }

    #[test]
    fn test_bounds_cover_annotations() {
        let layout = layout_section(&rect_spec(8)).unwrap();
        let (min, max) = layout.bounds();
        // Dimensions sit below and left of the 300x300 outline
        assert!(min.x < -150.0);
        assert!(min.y < -150.0);
        // Leader stubs extend past the right edge
        assert!(max.x > 150.0);
    }
}
