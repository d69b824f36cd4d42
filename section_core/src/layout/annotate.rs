//! # Drawing Annotations
//!
//! Dimension lines and leader-line callouts, as pure geometry plus label
//! strings. The engine computes every segment endpoint; the rendering
//! backend only strokes lines and places text.
//!
//! Conventions follow hand-drafted detailing sheets:
//!
//! - A dimension is two extension lines perpendicular to the measured
//!   axis, an offset dimension line between them, a 45° tick at each end,
//!   and a centered label (rotated for vertical dimensions).
//! - A leader runs from its target to an elbow, then a short horizontal
//!   stub pointing away from the section, with the label just past the
//!   stub and aligned back toward it.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point2, Segment};

/// How far the dimension label sits beyond the dimension line.
const LABEL_OFFSET: f64 = 8.0;
/// Half-length of the 45° tick strokes.
const TICK_HALF: f64 = 3.0;
/// Extension lines overshoot the dimension line by this much.
const EXT_OVERSHOOT: f64 = 4.0;
/// Length of the horizontal terminal stub on a leader.
const STUB_LENGTH: f64 = 15.0;

/// Axis a dimension measures along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Measures an x-extent; dimension line is horizontal
    Horizontal,
    /// Measures a y-extent; dimension line is vertical, label rotated 90°
    Vertical,
}

/// Horizontal alignment of a leader label relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelAlign {
    /// Text starts at the anchor and runs right (stub points right)
    Left,
    /// Text ends at the anchor (stub points left)
    Right,
}

/// A complete linear dimension: extension lines, dimension line, end
/// ticks, and a label. Regenerated on every layout call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionAnnotation {
    /// Perpendicular lines from each reference point out to the dimension line
    pub extension_lines: [Segment; 2],
    /// The measured line itself, offset from the reference points
    pub dimension_line: Segment,
    /// Short diagonal strokes at both ends of the dimension line
    pub ticks: [Segment; 2],
    /// Measurement text, e.g. "300 mm"
    pub label: String,
    /// Center point for the label
    pub label_position: Point2,
    /// True when the label should be rotated 90° (vertical dimensions)
    pub vertical: bool,
}

/// A leader-line callout: target, elbow, horizontal stub, label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderAnnotation {
    /// The point being called out (bar center, link face, ...)
    pub target: Point2,
    /// Bend point of the leader
    pub elbow: Point2,
    /// End of the horizontal terminal stub; the label anchors here
    pub stub_end: Point2,
    /// Callout text, e.g. "8H20"
    pub label: String,
    /// Label alignment: toward the section, away from the stub
    pub align: LabelAlign,
}

/// Build a linear dimension between two reference points.
///
/// `offset` is the signed distance from the reference points to the
/// dimension line, measured perpendicular to `axis`: negative places a
/// horizontal dimension below its references (and a vertical one to the
/// left), positive the opposite side.
pub fn linear_dimension(a: Point2, b: Point2, axis: Axis, offset: f64, label: String) -> DimensionAnnotation {
    let sign = offset.signum();
    match axis {
        Axis::Horizontal => {
            let dim_y = a.y + offset;
            let ext_a = Segment::new(a, Point2::new(a.x, dim_y + sign * EXT_OVERSHOOT));
            let ext_b = Segment::new(b, Point2::new(b.x, dim_y + sign * EXT_OVERSHOOT));
            let dim = Segment::new(Point2::new(a.x, dim_y), Point2::new(b.x, dim_y));
            DimensionAnnotation {
                extension_lines: [ext_a, ext_b],
                dimension_line: dim,
                ticks: [tick_at(dim.start), tick_at(dim.end)],
                label_position: Point2::new(dim.midpoint().x, dim_y + sign * LABEL_OFFSET),
                label,
                vertical: false,
            }
        }
        Axis::Vertical => {
            let dim_x = a.x + offset;
            let ext_a = Segment::new(a, Point2::new(dim_x + sign * EXT_OVERSHOOT, a.y));
            let ext_b = Segment::new(b, Point2::new(dim_x + sign * EXT_OVERSHOOT, b.y));
            let dim = Segment::new(Point2::new(dim_x, a.y), Point2::new(dim_x, b.y));
            DimensionAnnotation {
                extension_lines: [ext_a, ext_b],
                dimension_line: dim,
                ticks: [tick_at(dim.start), tick_at(dim.end)],
                label_position: Point2::new(dim_x + sign * LABEL_OFFSET, dim.midpoint().y),
                label,
                vertical: true,
            }
        }
    }
}

/// 45° tick stroke centered on a dimension-line end.
fn tick_at(p: Point2) -> Segment {
    Segment::new(
        Point2::new(p.x - TICK_HALF, p.y - TICK_HALF),
        Point2::new(p.x + TICK_HALF, p.y + TICK_HALF),
    )
}

/// Build a leader from `target` through `elbow`, with the terminal stub
/// pointing right when `toward_right`, left otherwise.
pub fn leader(target: Point2, elbow: Point2, toward_right: bool, label: String) -> LeaderAnnotation {
    let stub_end = if toward_right {
        Point2::new(elbow.x + STUB_LENGTH, elbow.y)
    } else {
        Point2::new(elbow.x - STUB_LENGTH, elbow.y)
    };
    LeaderAnnotation {
        target,
        elbow,
        stub_end,
        label,
        // Stub pointing right reads left-to-right from the stub end;
        // stub pointing left anchors the text's right edge instead.
        align: if toward_right {
            LabelAlign::Left
        } else {
            LabelAlign::Right
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_dimension_below() {
        let a = Point2::new(-150.0, -150.0);
        let b = Point2::new(150.0, -150.0);
        let dim = linear_dimension(a, b, Axis::Horizontal, -30.0, "300 mm".to_string());

        assert_eq!(dim.dimension_line.start, Point2::new(-150.0, -180.0));
        assert_eq!(dim.dimension_line.end, Point2::new(150.0, -180.0));
        assert!(!dim.vertical);
        // Label centered below the dimension line
        assert!(dim.label_position.x.abs() < 1.0e-9);
        assert!(dim.label_position.y < -180.0);
        // Extension lines start at the reference points and overshoot
        assert_eq!(dim.extension_lines[0].start, a);
        assert!(dim.extension_lines[0].end.y < -180.0);
    }

    #[test]
    fn test_vertical_dimension_left() {
        let a = Point2::new(-150.0, -150.0);
        let b = Point2::new(-150.0, 150.0);
        let dim = linear_dimension(a, b, Axis::Vertical, -30.0, "300 mm".to_string());

        assert_eq!(dim.dimension_line.start, Point2::new(-180.0, -150.0));
        assert_eq!(dim.dimension_line.end, Point2::new(-180.0, 150.0));
        assert!(dim.vertical);
        assert!(dim.label_position.x < -180.0);
        assert!(dim.label_position.y.abs() < 1.0e-9);
    }

    #[test]
    fn test_ticks_are_diagonal() {
        let dim = linear_dimension(
            Point2::new(0.0, 0.0),
            Point2::new(100.0, 0.0),
            Axis::Horizontal,
            -20.0,
            "100 mm".to_string(),
        );
        for tick in &dim.ticks {
            let dx = tick.end.x - tick.start.x;
            let dy = tick.end.y - tick.start.y;
            assert!((dx - dy).abs() < 1.0e-9, "tick not at 45°");
        }
    }

    #[test]
    fn test_leader_stub_direction() {
        let l = leader(
            Point2::new(106.0, 106.0),
            Point2::new(140.0, 140.0),
            true,
            "8H16".to_string(),
        );
        assert_eq!(l.stub_end, Point2::new(155.0, 140.0));
        assert_eq!(l.align, LabelAlign::Left);

        let l = leader(
            Point2::new(-106.0, 0.0),
            Point2::new(-140.0, 30.0),
            false,
            "H8 links".to_string(),
        );
        assert_eq!(l.stub_end, Point2::new(-155.0, 30.0));
        assert_eq!(l.align, LabelAlign::Right);
    }
}
