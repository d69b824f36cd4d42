//! # Bar Distribution
//!
//! Places longitudinal bar centers for a validated [`SectionSpec`].
//!
//! Rectangular sections always get one bar in each corner of the link
//! centerline rectangle. Remaining bars are split between the two face
//! pairs proportionally to face length: the width-direction pair is
//! allocated first with `round()`, the depth-direction pair absorbs the
//! rest, odd leftover to the left face. The same rule is applied
//! everywhere; there is exactly one implementation of it.
//!
//! Positions returned here are in millimetres, unscaled. The caller
//! applies the drawing scale.

use serde::{Deserialize, Serialize};

use crate::geometry::Point2;
use crate::section::{SectionShape, SectionSpec};

/// Role of a longitudinal bar within the section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarRole {
    /// One of the four mandatory corner bars of a rectangular cage
    Corner,
    /// Intermediate bar along a face of a rectangular cage
    Side,
    /// Bar on the circumferential ring of a circular cage
    Ring,
}

/// A single longitudinal bar center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarPoint {
    /// Bar center in section-local coordinates
    pub position: Point2,
    /// Corner, side, or ring bar
    pub role: BarRole,
}

/// Advisory, non-fatal findings about a computed layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Warning {
    /// Adjacent bar circles overlap: the clear gap between bar surfaces
    /// is negative. Bars touching exactly is legal and not reported.
    BarsOverlap {
        location: String,
        clear_spacing_mm: f64,
    },
}

/// Bar counts per face of a rectangular cage, corners excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FaceCounts {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

/// Split `remaining` intermediate bars across the four faces.
///
/// Width-direction faces (top/bottom) each get
/// `round(remaining * width / (width + depth) / 2)`, capped so the pair
/// never exceeds `remaining`. The depth-direction faces absorb the rest,
/// odd leftover to the left face.
pub(crate) fn face_counts(remaining: u32, width_mm: f64, depth_mm: f64) -> FaceCounts {
    let per_width_face =
        (remaining as f64 * width_mm / (width_mm + depth_mm) / 2.0).round() as u32;
    let per_width_face = per_width_face.min(remaining / 2);
    let rest = remaining - 2 * per_width_face;
    let left = rest.div_ceil(2);
    let right = rest - left;
    FaceCounts {
        top: per_width_face,
        bottom: per_width_face,
        left,
        right,
    }
}

/// Place `k` bars at equal intervals between (excluding) the two corner
/// bars of a face. `start` and `end` are the corner bar centers.
fn space_along_face(start: Point2, end: Point2, k: u32, out: &mut Vec<BarPoint>) {
    let k_f = k as f64;
    for i in 1..=k {
        let t = i as f64 / (k_f + 1.0);
        out.push(BarPoint {
            position: Point2::new(
                start.x + (end.x - start.x) * t,
                start.y + (end.y - start.y) * t,
            ),
            role: BarRole::Side,
        });
    }
}

/// Distribute bars for a rectangular section. Positions in mm.
///
/// Output order is deterministic: the four corner bars counter-clockwise
/// from bottom-left, then top face left to right, bottom face left to
/// right, left face bottom to top, right face bottom to top.
pub(crate) fn distribute_rectangular(spec: &SectionSpec) -> (Vec<BarPoint>, Vec<Warning>) {
    let (hx, hy) = spec.tie_half_extents_mm();
    let (width_mm, depth_mm) = match spec.shape {
        SectionShape::Rectangular { width_mm, depth_mm } => (width_mm, depth_mm),
        SectionShape::Circular { .. } => unreachable!("caller dispatches on shape"),
    };

    let bl = Point2::new(-hx, -hy);
    let br = Point2::new(hx, -hy);
    let tr = Point2::new(hx, hy);
    let tl = Point2::new(-hx, hy);

    let mut bars: Vec<BarPoint> = [bl, br, tr, tl]
        .into_iter()
        .map(|position| BarPoint {
            position,
            role: BarRole::Corner,
        })
        .collect();

    let counts = face_counts(spec.num_bars - 4, width_mm, depth_mm);
    space_along_face(tl, tr, counts.top, &mut bars);
    space_along_face(bl, br, counts.bottom, &mut bars);
    space_along_face(bl, tl, counts.left, &mut bars);
    space_along_face(br, tr, counts.right, &mut bars);

    let mut warnings = Vec::new();
    let faces = [
        ("top face", 2.0 * hx, counts.top),
        ("bottom face", 2.0 * hx, counts.bottom),
        ("left face", 2.0 * hy, counts.left),
        ("right face", 2.0 * hy, counts.right),
    ];
    for (location, span_mm, k) in faces {
        let clear = spacing_clear_mm(span_mm, k, spec.bar_diameter_mm);
        if clear < -1.0e-9 {
            warnings.push(Warning::BarsOverlap {
                location: location.to_string(),
                clear_spacing_mm: clear,
            });
        }
    }

    (bars, warnings)
}

/// Clear gap between adjacent bar surfaces on a face of span `span_mm`
/// carrying `k` intermediate bars.
fn spacing_clear_mm(span_mm: f64, k: u32, bar_diameter_mm: f64) -> f64 {
    span_mm / (k as f64 + 1.0) - bar_diameter_mm
}

/// Distribute bars evenly around the ring of a circular section.
/// Bar 0 sits at angle 0 (+x axis). Positions in mm.
pub(crate) fn distribute_circular(spec: &SectionSpec) -> (Vec<BarPoint>, Vec<Warning>) {
    let r = spec.bar_ring_radius_mm();
    let n = spec.num_bars;
    let step = std::f64::consts::TAU / n as f64;

    let bars = (0..n)
        .map(|i| {
            let angle = i as f64 * step;
            BarPoint {
                position: Point2::new(r * angle.cos(), r * angle.sin()),
                role: BarRole::Ring,
            }
        })
        .collect();

    let mut warnings = Vec::new();
    if n >= 2 {
        // Chord between adjacent bar centers
        let chord = 2.0 * r * (std::f64::consts::PI / n as f64).sin();
        let clear = chord - spec.bar_diameter_mm;
        if clear < -1.0e-9 {
            warnings.push(Warning::BarsOverlap {
                location: "bar ring".to_string(),
                clear_spacing_mm: clear,
            });
        }
    }

    (bars, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(width: f64, depth: f64, num_bars: u32) -> SectionSpec {
        SectionSpec {
            label: "T".to_string(),
            shape: SectionShape::Rectangular {
                width_mm: width,
                depth_mm: depth,
            },
            cover_mm: 40.0,
            tie_diameter_mm: 8.0,
            bar_diameter_mm: 16.0,
            num_bars,
            scale: 1.0,
        }
    }

    #[test]
    fn test_face_counts_square_eight_bars() {
        // 4 intermediate bars on a square: one per face
        let c = face_counts(4, 300.0, 300.0);
        assert_eq!((c.top, c.bottom, c.left, c.right), (1, 1, 1, 1));
    }

    #[test]
    fn test_face_counts_odd_leftover_goes_left() {
        // 3 intermediate bars on a square: width pair gets round(0.75)=1 each,
        // leaving 1 for the depth pair, assigned to the left face
        let c = face_counts(3, 300.0, 300.0);
        assert_eq!((c.top, c.bottom, c.left, c.right), (1, 1, 1, 0));
    }

    #[test]
    fn test_face_counts_wide_section_favors_width_faces() {
        // 600 wide x 300 deep: width faces get round(6 * 2/3 / 2) = 2 each
        let c = face_counts(6, 600.0, 300.0);
        assert_eq!((c.top, c.bottom), (2, 2));
        assert_eq!(c.left + c.right, 2);
    }

    #[test]
    fn test_face_counts_single_remaining_bar() {
        // Rounding must never allocate more bars than remain
        let c = face_counts(1, 600.0, 300.0);
        assert_eq!(c.top + c.bottom + c.left + c.right, 1);
        assert_eq!(c.left, 1);
    }

    #[test]
    fn test_corner_bars_only() {
        let (bars, warnings) = distribute_rectangular(&spec(300.0, 300.0, 4));
        assert_eq!(bars.len(), 4);
        assert!(bars.iter().all(|b| b.role == BarRole::Corner));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_total_count_matches() {
        for n in 4..=16 {
            let (bars, _) = distribute_rectangular(&spec(450.0, 300.0, n));
            assert_eq!(bars.len() as u32, n, "num_bars = {}", n);
        }
    }

    #[test]
    fn test_single_face_bar_is_centered() {
        let (bars, _) = distribute_rectangular(&spec(300.0, 300.0, 8));
        let (hx, _) = spec(300.0, 300.0, 8).tie_half_extents_mm();
        // The top-face bar sits at x = 0, halfway between corners at +-hx
        let top_side = bars
            .iter()
            .find(|b| b.role == BarRole::Side && b.position.y > 0.0 && b.position.x.abs() < hx)
            .unwrap();
        assert!(top_side.position.x.abs() < 1.0e-9);
    }

    #[test]
    fn test_monotonic_face_positions() {
        let (bars, _) = distribute_rectangular(&spec(600.0, 300.0, 12));
        let (hx, hy) = spec(600.0, 300.0, 12).tie_half_extents_mm();
        // Top-face side bars are strictly increasing in x and inside corners
        let xs: Vec<f64> = bars
            .iter()
            .filter(|b| b.role == BarRole::Side && (b.position.y - hy).abs() < 1.0e-9)
            .map(|b| b.position.x)
            .collect();
        for pair in xs.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(xs.iter().all(|&x| x > -hx && x < hx));
    }

    #[test]
    fn test_overlap_warning_for_oversized_bars() {
        // Short faces, two 32 mm bars per face: 92/3 = 30.7 mm spacing < 32
        let mut s = spec(140.0, 140.0, 12);
        s.cover_mm = 20.0;
        s.bar_diameter_mm = 32.0;
        let (_, warnings) = distribute_rectangular(&s);
        assert!(!warnings.is_empty());
        let Warning::BarsOverlap {
            clear_spacing_mm, ..
        } = &warnings[0];
        assert!(*clear_spacing_mm < 0.0);
    }

    #[test]
    fn test_circular_even_angles() {
        let s = SectionSpec {
            label: "P".to_string(),
            shape: SectionShape::Circular { diameter_mm: 450.0 },
            cover_mm: 40.0,
            tie_diameter_mm: 10.0,
            bar_diameter_mm: 20.0,
            num_bars: 6,
            scale: 1.0,
        };
        let (bars, warnings) = distribute_circular(&s);
        assert_eq!(bars.len(), 6);
        assert!(warnings.is_empty());
        let r = s.bar_ring_radius_mm();
        for (i, bar) in bars.iter().enumerate() {
            let angle = i as f64 * std::f64::consts::TAU / 6.0;
            assert!((bar.position.x - r * angle.cos()).abs() < 1.0e-9);
            assert!((bar.position.y - r * angle.sin()).abs() < 1.0e-9);
        }
    }
}
