//! Input panel (left)
//!
//! Section geometry, reinforcement selection, and the design load fields
//! used when auto-design is on.

use iced::widget::{checkbox, column, container, pick_list, row, scrollable, text, text_input, Column, Space};
use iced::{Element, Length};

use section_core::rebar::BarSize;

use crate::{App, Message};

/// Render the input panel
pub fn view(app: &App) -> Element<'_, Message> {
    let geometry_section: Element<'_, Message> = if app.circular {
        column![
            labeled_input("Diameter (mm):", &app.diameter_mm, Message::DiameterChanged),
        ]
        .spacing(6)
        .into()
    } else {
        column![
            labeled_input("Width (mm):", &app.width_mm, Message::WidthChanged),
            labeled_input("Depth (mm):", &app.depth_mm, Message::DepthChanged),
        ]
        .spacing(6)
        .into()
    };

    let circular_toggle = checkbox(app.circular)
        .label("Circular section")
        .on_toggle(Message::ToggleCircular)
        .text_size(11);

    let auto_design_toggle = checkbox(app.auto_design)
        .label("Size bars from axial load")
        .on_toggle(Message::ToggleAutoDesign)
        .text_size(11);

    let reinforcement_section: Element<'_, Message> = if app.auto_design && !app.circular {
        column![
            labeled_input("Axial load (kN):", &app.axial_kn, Message::AxialLoadChanged),
            labeled_input("fcu (N/mm²):", &app.concrete_strength, Message::ConcreteStrengthChanged),
        ]
        .spacing(6)
        .into()
    } else {
        column![
            labeled_input("Bars:", &app.num_bars, Message::NumBarsChanged),
            row![
                text("Bar size:").size(11).width(Length::Fixed(110.0)),
                pick_list(&BarSize::MAIN[..], Some(app.bar_size), Message::BarSizeChanged)
                    .text_size(11),
            ]
            .spacing(6),
        ]
        .spacing(6)
        .into()
    };

    let link_row = row![
        text("Link size:").size(11).width(Length::Fixed(110.0)),
        pick_list(&BarSize::LINKS[..], Some(app.link_size), Message::LinkSizeChanged).text_size(11),
    ]
    .spacing(6);

    let panel: Column<'_, Message> = column![
        text("Section").size(14),
        Space::new().height(8),
        labeled_input("Label:", &app.label, Message::LabelChanged),
        Space::new().height(4),
        circular_toggle,
        Space::new().height(4),
        geometry_section,
        labeled_input("Cover (mm):", &app.cover_mm, Message::CoverChanged),
        Space::new().height(12),
        text("Reinforcement").size(14),
        Space::new().height(8),
        auto_design_toggle,
        Space::new().height(4),
        reinforcement_section,
        link_row,
    ]
    .spacing(6);

    container(scrollable(panel.padding(8)))
        .width(Length::FillPortion(35))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// A labeled text input row: fixed-width label, flexible field
fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(110.0)),
        text_input("", value).on_input(on_input).size(11),
    ]
    .spacing(6)
    .into()
}
