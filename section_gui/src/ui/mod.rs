//! UI module for the Sectify GUI
//!
//! # Panel Structure
//! - `input_panel` - Left panel: section dimensions, reinforcement, design load
//! - `results_panel` - Right panel: design summary, status, section drawing
//!
//! # Shared Components
//! - `shared/section_canvas` - Canvas drawing for the detailed cross-section

pub mod input_panel;
pub mod results_panel;

pub mod shared;
