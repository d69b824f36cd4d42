//! Results panel (right)
//!
//! Shows:
//! - Design summary (when auto-design ran)
//! - Reinforcement summary and any warnings
//! - The rendered cross-section drawing

use iced::widget::{column, container, scrollable, text, Canvas, Column, Space};
use iced::{Element, Length};

use section_core::layout::Warning;

use super::shared::section_canvas::SectionDiagram;
use crate::{App, Message};

/// Render the results panel
pub fn view(app: &App) -> Element<'_, Message> {
    let panel: Column<'_, Message> = match &app.layout {
        Ok(layout) => {
            let mut panel = column![text("Results").size(14), Space::new().height(8)];

            if let Some(design) = &app.design {
                let pass_fail = if design.passes() {
                    text("DESIGN ADEQUATE").size(16).color([0.2, 0.6, 0.2])
                } else {
                    text("DESIGN INADEQUATE").size(16).color([0.8, 0.2, 0.2])
                };
                panel = panel
                    .push(pass_fail)
                    .push(Space::new().height(8))
                    .push(text(format!(
                        "Required steel: {:.0} mm²",
                        design.required_area_mm2
                    )).size(11))
                    .push(text(format!(
                        "Provided: {}{} = {:.0} mm² ({:.1}%)",
                        design.bar_count,
                        design.bar_size,
                        design.provided_area_mm2,
                        design.steel_ratio * 100.0
                    )).size(11))
                    .push(text(format!(
                        "Capacity: {:.0} kN ({:.2} utilized)",
                        design.capacity_kn, design.utilization
                    )).size(11))
                    .push(Space::new().height(12));
            }

            panel = panel
                .push(text(format!("Bars placed: {}", layout.bars.len())).size(11))
                .push(view_warnings(&layout.warnings))
                .push(Space::new().height(8));

            let diagram = SectionDiagram::new(layout.clone());
            let canvas_widget: Element<'_, Message> = Canvas::new(diagram)
                .width(Length::Fill)
                .height(Length::Fixed(420.0))
                .into();

            panel.push(canvas_widget)
        }
        Err(e) => column![
            text("Results").size(14),
            Space::new().height(8),
            text(e.to_string()).size(12).color([0.8, 0.2, 0.2]),
        ],
    };

    let panel = if app.status.is_empty() {
        panel
    } else {
        panel
            .push(Space::new().height(8))
            .push(text(&app.status).size(11).color([0.9, 0.5, 0.0]))
    };

    container(scrollable(panel.padding(8)))
        .width(Length::FillPortion(65))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// List overlap warnings, orange, one per line
fn view_warnings(warnings: &[Warning]) -> Element<'_, Message> {
    if warnings.is_empty() {
        return Space::new().height(0).into();
    }

    let mut col = Column::new().spacing(2);
    for warning in warnings {
        let Warning::BarsOverlap {
            location,
            clear_spacing_mm,
        } = warning;
        col = col.push(
            text(format!(
                "Bars overlap on the {} by {:.1} mm",
                location,
                clear_spacing_mm.abs()
            ))
            .size(11)
            .color([0.9, 0.5, 0.0]),
        );
    }
    col.into()
}
