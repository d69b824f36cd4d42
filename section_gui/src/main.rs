//! # Sectify GUI Application
//!
//! Graphical interface for column design and reinforcement detailing.
//! Built with Iced: parameter inputs on the left, design results and the
//! rendered cross-section on the right. Every input change triggers a
//! fresh, independent layout computation; nothing is cached or mutated
//! in place.

use iced::widget::{column, row, text};
use iced::{Element, Length};

use section_core::design::column::{calculate as design_column, ColumnDesignInput, ColumnDesignResult};
use section_core::layout::{layout_section, SectionLayout};
use section_core::rebar::BarSize;
use section_core::section::{SectionShape, SectionSpec};
use section_core::SectionError;

mod ui;

fn main() -> iced::Result {
    iced::application(App::default, App::update, App::view)
        .title("Sectify - Section Detailing Studio")
        .run()
}

/// UI messages for the single-window app
#[derive(Debug, Clone)]
pub enum Message {
    LabelChanged(String),
    WidthChanged(String),
    DepthChanged(String),
    DiameterChanged(String),
    CoverChanged(String),
    NumBarsChanged(String),
    AxialLoadChanged(String),
    ConcreteStrengthChanged(String),
    BarSizeChanged(BarSize),
    LinkSizeChanged(BarSize),
    ToggleCircular(bool),
    ToggleAutoDesign(bool),
}

/// Application state: raw input strings plus the latest computed outputs.
///
/// Inputs stay as the user typed them; parsing and validation happen on
/// every recompute so errors surface in the status line instead of
/// blocking typing.
pub struct App {
    pub label: String,
    pub width_mm: String,
    pub depth_mm: String,
    pub diameter_mm: String,
    pub cover_mm: String,
    pub num_bars: String,
    pub axial_kn: String,
    pub concrete_strength: String,
    pub bar_size: BarSize,
    pub link_size: BarSize,
    pub circular: bool,
    pub auto_design: bool,

    /// Latest design result (auto-design mode only)
    pub design: Option<ColumnDesignResult>,
    /// Latest layout, or the error that prevented it
    pub layout: Result<SectionLayout, SectionError>,
    /// Status line text
    pub status: String,
}

impl Default for App {
    fn default() -> Self {
        let mut app = App {
            label: "C-1".to_string(),
            width_mm: "300".to_string(),
            depth_mm: "300".to_string(),
            diameter_mm: "450".to_string(),
            cover_mm: "40".to_string(),
            num_bars: "8".to_string(),
            axial_kn: "1500".to_string(),
            concrete_strength: "30".to_string(),
            bar_size: BarSize::H16,
            link_size: BarSize::H8,
            circular: false,
            auto_design: false,
            design: None,
            layout: Err(SectionError::Internal {
                message: "not yet computed".to_string(),
            }),
            status: String::new(),
        };
        app.recompute();
        app
    }
}

impl App {
    pub fn update(&mut self, message: Message) {
        match message {
            Message::LabelChanged(v) => self.label = v,
            Message::WidthChanged(v) => self.width_mm = v,
            Message::DepthChanged(v) => self.depth_mm = v,
            Message::DiameterChanged(v) => self.diameter_mm = v,
            Message::CoverChanged(v) => self.cover_mm = v,
            Message::NumBarsChanged(v) => self.num_bars = v,
            Message::AxialLoadChanged(v) => self.axial_kn = v,
            Message::ConcreteStrengthChanged(v) => self.concrete_strength = v,
            Message::BarSizeChanged(v) => self.bar_size = v,
            Message::LinkSizeChanged(v) => self.link_size = v,
            Message::ToggleCircular(v) => self.circular = v,
            Message::ToggleAutoDesign(v) => self.auto_design = v,
        }
        self.recompute();
    }

    pub fn view(&self) -> Element<'_, Message> {
        column![
            text("Sectify").size(28),
            row![
                ui::input_panel::view(self),
                ui::results_panel::view(self),
            ]
            .spacing(10)
            .height(Length::Fill),
        ]
        .padding(10)
        .spacing(10)
        .into()
    }

    /// Re-run design and layout from the current inputs.
    fn recompute(&mut self) {
        self.status.clear();

        let spec = match self.build_spec() {
            Ok((spec, design)) => {
                self.design = design;
                spec
            }
            Err(message) => {
                self.design = None;
                self.status = message;
                self.layout = Err(SectionError::Internal {
                    message: self.status.clone(),
                });
                return;
            }
        };

        self.layout = layout_section(&spec);
        match &self.layout {
            Ok(layout) if !layout.warnings.is_empty() => {
                self.status = format!("{} warning(s) - see drawing", layout.warnings.len());
            }
            Ok(_) => {}
            Err(e) => self.status = e.to_string(),
        }
    }

    /// Assemble the section spec, running the column design first when
    /// auto-design is on.
    fn build_spec(&self) -> Result<(SectionSpec, Option<ColumnDesignResult>), String> {
        let cover_mm = parse_field(&self.cover_mm, "cover")?;

        if self.auto_design && !self.circular {
            let input = ColumnDesignInput {
                label: self.label.clone(),
                axial_load_kn: parse_field(&self.axial_kn, "axial load")?,
                concrete_strength_nmm2: parse_field(&self.concrete_strength, "fcu")?,
                steel_strength_nmm2: 500.0,
                width_mm: parse_field(&self.width_mm, "width")?,
                depth_mm: parse_field(&self.depth_mm, "depth")?,
            };
            let result = design_column(&input).map_err(|e| e.to_string())?;
            let spec = result.detailing_spec(&input, cover_mm, self.link_size, 1.0);
            return Ok((spec, Some(result)));
        }

        let shape = if self.circular {
            SectionShape::Circular {
                diameter_mm: parse_field(&self.diameter_mm, "diameter")?,
            }
        } else {
            SectionShape::Rectangular {
                width_mm: parse_field(&self.width_mm, "width")?,
                depth_mm: parse_field(&self.depth_mm, "depth")?,
            }
        };

        let num_bars = self
            .num_bars
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("bars: '{}' is not a whole number", self.num_bars))?;

        Ok((
            SectionSpec {
                label: self.label.clone(),
                shape,
                cover_mm,
                tie_diameter_mm: self.link_size.diameter_mm(),
                bar_diameter_mm: self.bar_size.diameter_mm(),
                num_bars,
                scale: 1.0,
            },
            None,
        ))
    }
}

fn parse_field(value: &str, name: &str) -> Result<f64, String> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("{}: '{}' is not a number", name, value))
}
