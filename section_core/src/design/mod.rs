//! # Design Calculations
//!
//! Closed-form member design to BS 8110-1. Each calculation follows the
//! pattern:
//!
//! - `*DesignInput` - Input parameters (JSON-serializable)
//! - `*DesignResult` - Sized reinforcement and checks (JSON-serializable)
//! - `calculate(input) -> Result<*DesignResult, SectionError>` - Pure function
//!
//! Design results carry a selected bar size and count, so they plug
//! directly into a [`crate::section::SectionSpec`] for detailing.
//!
//! ## Available Calculations
//!
//! - [`column`] - Short braced column under axial load

pub mod column;

pub use column::{ColumnDesignInput, ColumnDesignResult};
