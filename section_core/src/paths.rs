//! # Detailing Path Generators
//!
//! Parametric centerline paths for reinforcement fabrication drawings:
//! closed stirrup outlines with hook tails, helical binder paths for
//! circular columns, and cranked longitudinal bars.
//!
//! Like the layout engine, these are pure polyline synthesis: callers get
//! sampled point lists in millimetres and do their own rendering or
//! length takeoffs.

use serde::{Deserialize, Serialize};

use crate::errors::{SectionError, SectionResult};
use crate::geometry::{Point2, Point3};
use crate::rebar::BarSize;

/// Angular step used when sampling bend arcs (15°).
const ARC_STEP_RAD: f64 = std::f64::consts::PI / 12.0;

/// Crank slope as horizontal run per unit of offset (1 in 10).
pub const DEFAULT_CRANK_SLOPE: f64 = 10.0;

/// Closed stirrup centerline with its two 135° hook tails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StirrupPath {
    /// Closed rounded-rectangle centerline, first point repeated last
    pub outline: Vec<Point2>,
    /// Hook tails anchoring the stirrup at its closing corner
    pub hooks: [Vec<Point2>; 2],
}

impl StirrupPath {
    /// Total bar length for scheduling: outline plus both hook tails.
    pub fn total_length_mm(&self) -> f64 {
        polyline_length(&self.outline)
            + polyline_length(&self.hooks[0])
            + polyline_length(&self.hooks[1])
    }
}

/// Sum of segment lengths along a polyline.
pub fn polyline_length(points: &[Point2]) -> f64 {
    points
        .windows(2)
        .map(|pair| pair[0].distance_to(pair[1]))
        .sum()
}

/// Generate the stirrup centerline for a rectangular section.
///
/// The centerline rectangle sits `cover + d/2` inside each face, corners
/// rounded at the minimum former radius for the link size, arcs sampled
/// at 15° steps. Two 135° hook tails extend from the top-right corner
/// tangent points into the section core, each `max(10d, 70 mm)` long.
pub fn stirrup_path(
    width_mm: f64,
    depth_mm: f64,
    cover_mm: f64,
    link: BarSize,
) -> SectionResult<StirrupPath> {
    for (field, value) in [
        ("width_mm", width_mm),
        ("depth_mm", depth_mm),
        ("cover_mm", cover_mm),
    ] {
        if value <= 0.0 {
            return Err(SectionError::invalid_input(
                field,
                value.to_string(),
                "Must be positive",
            ));
        }
    }

    let d = link.diameter_mm();
    let hx = width_mm / 2.0 - cover_mm - d / 2.0;
    let hy = depth_mm / 2.0 - cover_mm - d / 2.0;
    // Centerline bend radius: former radius plus half the bar
    let r = link.min_bend_radius_mm() + d / 2.0;
    if hx <= 0.0 || hy <= 0.0 || r > hx.min(hy) {
        return Err(SectionError::geometry_infeasible(format!(
            "link centerline with {:.0} mm bend radius does not fit a {:.0} x {:.0} section at {:.0} cover",
            r, width_mm, depth_mm, cover_mm
        )));
    }

    let mut outline = Vec::new();
    // Counter-clockwise from the bottom tangent of the right edge. Arc
    // centers are inset by the bend radius from each corner.
    outline.push(Point2::new(hx, -(hy - r)));
    outline.push(Point2::new(hx, hy - r));
    push_arc(&mut outline, Point2::new(hx - r, hy - r), r, 0.0);
    outline.push(Point2::new(-(hx - r), hy));
    push_arc(&mut outline, Point2::new(-(hx - r), hy - r), r, 90.0);
    outline.push(Point2::new(-hx, -(hy - r)));
    push_arc(&mut outline, Point2::new(-(hx - r), -(hy - r)), r, 180.0);
    outline.push(Point2::new(hx - r, -hy));
    push_arc(&mut outline, Point2::new(hx - r, -(hy - r)), r, 270.0);
    // The last arc sample lands on the start point up to rounding; replace
    // it with the exact start so the loop closes bit-identically.
    outline.pop();
    let first = outline[0];
    outline.push(first);

    // 135° hooks: from the top-right tangent points, diagonally into the
    // section core
    let hook_len = (10.0 * d).max(70.0);
    let diag = std::f64::consts::FRAC_1_SQRT_2 * hook_len;
    let top_tangent = Point2::new(hx - r, hy);
    let right_tangent = Point2::new(hx, hy - r);
    let hooks = [
        vec![
            top_tangent,
            Point2::new(top_tangent.x - diag, top_tangent.y - diag),
        ],
        vec![
            right_tangent,
            Point2::new(right_tangent.x - diag, right_tangent.y - diag),
        ],
    ];

    Ok(StirrupPath { outline, hooks })
}

/// Append a 90° arc sampled at [`ARC_STEP_RAD`], starting at
/// `start_angle_deg` measured counter-clockwise from +x. The first sample
/// duplicates the tangent point already pushed by the caller, so it is
/// skipped.
fn push_arc(points: &mut Vec<Point2>, center: Point2, radius: f64, start_angle_deg: f64) {
    let start = start_angle_deg.to_radians();
    let steps = (std::f64::consts::FRAC_PI_2 / ARC_STEP_RAD).round() as usize;
    for i in 1..=steps {
        let angle = start + i as f64 * ARC_STEP_RAD;
        points.push(Point2::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        ));
    }
}

/// Generate a helical binder centerline for a circular column.
///
/// The helix winds counter-clockwise starting at angle 0, advancing
/// `pitch_mm` along the member axis per turn.
pub fn helix_path(
    radius_mm: f64,
    pitch_mm: f64,
    turns: f64,
    samples_per_turn: u32,
) -> SectionResult<Vec<Point3>> {
    for (field, value) in [
        ("radius_mm", radius_mm),
        ("pitch_mm", pitch_mm),
        ("turns", turns),
    ] {
        if value <= 0.0 {
            return Err(SectionError::invalid_input(
                field,
                value.to_string(),
                "Must be positive",
            ));
        }
    }
    if samples_per_turn < 8 {
        return Err(SectionError::invalid_input(
            "samples_per_turn",
            samples_per_turn.to_string(),
            "At least 8 samples per turn required",
        ));
    }

    let total_samples = (turns * samples_per_turn as f64).ceil() as u32;
    let path = (0..=total_samples)
        .map(|i| {
            let t = (i as f64 / samples_per_turn as f64).min(turns);
            let angle = t * std::f64::consts::TAU;
            Point3::new(
                radius_mm * angle.cos(),
                radius_mm * angle.sin(),
                t * pitch_mm,
            )
        })
        .collect();
    Ok(path)
}

/// Generate a cranked longitudinal bar path.
///
/// The bar runs flat, offsets by `offset_mm` over a crank of slope
/// 1:`slope` centered along the bar, then runs flat again. Returns the
/// four bend stations.
pub fn cranked_bar_path(length_mm: f64, offset_mm: f64, slope: f64) -> SectionResult<Vec<Point2>> {
    for (field, value) in [
        ("length_mm", length_mm),
        ("offset_mm", offset_mm),
        ("slope", slope),
    ] {
        if value <= 0.0 {
            return Err(SectionError::invalid_input(
                field,
                value.to_string(),
                "Must be positive",
            ));
        }
    }
    let crank_run = offset_mm * slope;
    if crank_run >= length_mm {
        return Err(SectionError::geometry_infeasible(format!(
            "crank run {:.0} mm exceeds bar length {:.0} mm",
            crank_run, length_mm
        )));
    }

    let flat = (length_mm - crank_run) / 2.0;
    Ok(vec![
        Point2::new(0.0, 0.0),
        Point2::new(flat, 0.0),
        Point2::new(flat + crank_run, offset_mm),
        Point2::new(length_mm, offset_mm),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stirrup_path_closed() {
        let path = stirrup_path(300.0, 450.0, 40.0, BarSize::H8).unwrap();
        assert_eq!(path.outline.first(), path.outline.last());
        // 4 edges + 4 arcs of 6 samples each, plus the closing point
        assert!(path.outline.len() > 20);
    }

    #[test]
    fn test_stirrup_hook_length() {
        let path = stirrup_path(300.0, 450.0, 40.0, BarSize::H8).unwrap();
        // max(10 * 8, 70) = 80 mm per tail
        assert!((polyline_length(&path.hooks[0]) - 80.0).abs() < 1.0e-9);
        assert!((polyline_length(&path.hooks[1]) - 80.0).abs() < 1.0e-9);
    }

    #[test]
    fn test_stirrup_total_length_plausible() {
        let path = stirrup_path(300.0, 450.0, 40.0, BarSize::H8).unwrap();
        // Slightly under the sharp-corner perimeter of the centerline
        // rectangle (2 * (212 + 362) = 1148) plus 160 of hooks
        let total = path.total_length_mm();
        assert!(total > 1100.0 && total < 1330.0, "total = {}", total);
    }

    #[test]
    fn test_stirrup_rejects_tight_section() {
        let err = stirrup_path(60.0, 60.0, 25.0, BarSize::H10).unwrap_err();
        assert_eq!(err.error_code(), "GEOMETRY_INFEASIBLE");
    }

    #[test]
    fn test_helix_sample_count_and_pitch() {
        let path = helix_path(180.0, 150.0, 3.0, 16).unwrap();
        assert_eq!(path.len(), 49);
        // One full turn advances one pitch
        assert!((path[16].z - 150.0).abs() < 1.0e-9);
        assert!((path[16].x - path[0].x).abs() < 1.0e-9);
        // Constant radius throughout
        for p in &path {
            let r = (p.x * p.x + p.y * p.y).sqrt();
            assert!((r - 180.0).abs() < 1.0e-9);
        }
    }

    #[test]
    fn test_helix_rejects_coarse_sampling() {
        assert!(helix_path(180.0, 150.0, 3.0, 4).is_err());
    }

    #[test]
    fn test_cranked_bar_stations() {
        let path = cranked_bar_path(4000.0, 50.0, DEFAULT_CRANK_SLOPE).unwrap();
        assert_eq!(path.len(), 4);
        // Crank run = 500, flats = 1750 each
        assert_eq!(path[1], Point2::new(1750.0, 0.0));
        assert_eq!(path[2], Point2::new(2250.0, 50.0));
        assert_eq!(path[3], Point2::new(4000.0, 50.0));
    }

    #[test]
    fn test_cranked_bar_rejects_short_bar() {
        let err = cranked_bar_path(400.0, 50.0, DEFAULT_CRANK_SLOPE).unwrap_err();
        assert_eq!(err.error_code(), "GEOMETRY_INFEASIBLE");
    }
}
