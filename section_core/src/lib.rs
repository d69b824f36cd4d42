//! # section_core - Reinforced-Concrete Section Detailing Engine
//!
//! `section_core` is the computational heart of Sectify, turning section
//! parameters into code-checked reinforcement and pure drawing geometry
//! with a clean, LLM-friendly API. All inputs and outputs are
//! JSON-serializable, making it ideal for integration with AI assistants
//! via MCP or similar protocols.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Backend-Neutral**: The engine emits coordinates and label strings,
//!   never draw calls; canvas, SVG, and CAD exporters all consume the
//!   same [`layout::SectionLayout`]
//!
//! ## Quick Start
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
//!
//! let layout = layout_section(&spec).unwrap();
//!
//! // Serialize for any rendering backend
//! let json = serde_json::to_string_pretty(&layout).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`section`] - Section specification and validation
//! - [`layout`] - The cross-section layout engine (bars, dimensions, leaders)
//! - [`design`] - Member design calculations (column axial capacity)
//! - [`paths`] - Detailing path generators (stirrups, helixes, cranked bars)
//! - [`rebar`] - Standard bar size database
//! - [`geometry`] - Plain 2D/3D primitives
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod design;
pub mod errors;
pub mod geometry;
pub mod layout;
pub mod paths;
pub mod rebar;
pub mod section;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{SectionError, SectionResult};
pub use layout::{layout_section, SectionLayout};
pub use rebar::BarSize;
pub use section::{SectionShape, SectionSpec};
