//! Shared UI components reusable across input/result modules
//!
//! Contains:
//! - `section_canvas` - Canvas drawing for the detailed cross-section

pub mod section_canvas;
