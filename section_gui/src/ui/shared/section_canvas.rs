//! Canvas drawing for detailed cross-sections
//!
//! Renders a [`SectionLayout`] produced by the layout engine: concrete
//! outline, link centerline, bar circles, dimension lines, and leader
//! callouts. The engine supplies every coordinate and label; this module
//! only maps them into canvas space and strokes them.

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Theme};

use section_core::geometry::{Point2, Segment};
use section_core::layout::{LabelAlign, Outline, SectionLayout};

use crate::Message;

/// Canvas program for drawing one cross-section
pub struct SectionDiagram {
    layout: SectionLayout,
}

/// Uniform fit-to-view transform from section space (y up) into canvas
/// space (y down)
struct Viewport {
    scale: f32,
    offset_x: f32,
    offset_y: f32,
}

impl Viewport {
    fn map(&self, p: Point2) -> Point {
        Point::new(
            self.offset_x + self.scale * p.x as f32,
            self.offset_y - self.scale * p.y as f32,
        )
    }
}

impl SectionDiagram {
    pub fn new(layout: SectionLayout) -> Self {
        Self { layout }
    }

    fn viewport(&self, bounds: Rectangle) -> Viewport {
        let margin = 25.0_f32;
        let (min, max) = self.layout.bounds();
        let extent_x = ((max.x - min.x) as f32).max(1.0);
        let extent_y = ((max.y - min.y) as f32).max(1.0);
        let scale = ((bounds.width - 2.0 * margin) / extent_x)
            .min((bounds.height - 2.0 * margin) / extent_y)
            .max(0.01);

        let mid_x = ((min.x + max.x) / 2.0) as f32;
        let mid_y = ((min.y + max.y) / 2.0) as f32;
        Viewport {
            scale,
            offset_x: bounds.width / 2.0 - scale * mid_x,
            offset_y: bounds.height / 2.0 + scale * mid_y,
        }
    }

    fn outline_path(&self, outline: &Outline, vp: &Viewport) -> Path {
        match outline {
            Outline::Rectangle { corners } => Path::new(|builder| {
                builder.move_to(vp.map(corners[0]));
                for corner in &corners[1..] {
                    builder.line_to(vp.map(*corner));
                }
                builder.close();
            }),
            Outline::Circle { center, radius } => {
                Path::circle(vp.map(*center), *radius as f32 * vp.scale)
            }
        }
    }

    fn stroke_segment(&self, frame: &mut Frame, seg: &Segment, vp: &Viewport, color: Color, width: f32) {
        let path = Path::line(vp.map(seg.start), vp.map(seg.end));
        frame.stroke(&path, Stroke::default().with_color(color).with_width(width));
    }

    fn draw_section(&self, frame: &mut Frame, vp: &Viewport) {
        let concrete_fill = Color::from_rgb(0.93, 0.93, 0.93);
        let outline_color = Color::from_rgb(0.3, 0.3, 0.3);
        let tie_color = Color::from_rgb(0.2, 0.5, 0.8);
        let bar_color = Color::from_rgb(0.7, 0.2, 0.2);

        let outline = self.outline_path(&self.layout.outline, vp);
        frame.fill(&outline, concrete_fill);
        frame.stroke(
            &outline,
            Stroke::default().with_color(outline_color).with_width(2.0),
        );

        let ties = self.outline_path(&self.layout.tie_outline, vp);
        frame.stroke(&ties, Stroke::default().with_color(tie_color).with_width(1.5));

        // Bar circles, filled, never smaller than a visible dot
        let bar_radius = (self.layout.bar_radius as f32 * vp.scale).max(2.0);
        for bar in &self.layout.bars {
            let circle = Path::circle(vp.map(bar.position), bar_radius);
            frame.fill(&circle, bar_color);
        }
    }

    fn draw_dimensions(&self, frame: &mut Frame, vp: &Viewport) {
        let dim_color = Color::from_rgb(0.45, 0.45, 0.45);

        for dim in &self.layout.dimensions {
            for ext in &dim.extension_lines {
                self.stroke_segment(frame, ext, vp, dim_color, 1.0);
            }
            self.stroke_segment(frame, &dim.dimension_line, vp, dim_color, 1.0);
            for tick in &dim.ticks {
                self.stroke_segment(frame, tick, vp, dim_color, 1.5);
            }

            let label = Text {
                content: dim.label.clone(),
                position: vp.map(dim.label_position),
                color: dim_color,
                size: iced::Pixels(10.0),
                align_x: iced::alignment::Horizontal::Center.into(),
                ..Text::default()
            };
            frame.fill_text(label);
        }
    }

    fn draw_leaders(&self, frame: &mut Frame, vp: &Viewport) {
        let leader_color = Color::from_rgb(0.3, 0.3, 0.3);

        for leader in &self.layout.leaders {
            let path = Path::new(|builder| {
                builder.move_to(vp.map(leader.target));
                builder.line_to(vp.map(leader.elbow));
                builder.line_to(vp.map(leader.stub_end));
            });
            frame.stroke(
                &path,
                Stroke::default().with_color(leader_color).with_width(1.0),
            );

            let align = match leader.align {
                LabelAlign::Left => iced::alignment::Horizontal::Left,
                LabelAlign::Right => iced::alignment::Horizontal::Right,
            };
            let mut anchor = vp.map(leader.stub_end);
            // Small gap between stub end and text
            anchor.x += match leader.align {
                LabelAlign::Left => 3.0,
                LabelAlign::Right => -3.0,
            };
            let label = Text {
                content: leader.label.clone(),
                position: anchor,
                color: leader_color,
                size: iced::Pixels(10.0),
                align_x: align.into(),
                ..Text::default()
            };
            frame.fill_text(label);
        }
    }
}

impl canvas::Program<Message> for SectionDiagram {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let vp = self.viewport(bounds);

        self.draw_section(&mut frame, &vp);
        self.draw_dimensions(&mut frame, &vp);
        self.draw_leaders(&mut frame, &vp);

        // Section title, top-left
        let title = Text {
            content: self.layout.label.clone(),
            position: Point::new(8.0, 6.0),
            color: Color::from_rgb(0.3, 0.3, 0.3),
            size: iced::Pixels(12.0),
            ..Text::default()
        };
        frame.fill_text(title);

        vec![frame.into_geometry()]
    }
}
