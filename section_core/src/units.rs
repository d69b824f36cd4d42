//! # Unit Types
//!
//! Type-safe wrappers for engineering units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Reinforcement detailing uses a consistent set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## SI Units (Primary)
//!
//! Sectify uses SI units internally as this matches BS 8110 / EN 1992-1-1:
//! - Length: millimetres (mm), metres (m)
//! - Force: newtons (N), kilonewtons (kN)
//! - Stress: newtons per square millimetre (N/mm², i.e. MPa)
//! - Area: square millimetres (mm²)
//!
//! ## Example
//!
//! ```rust
//! use section_core::units::{Meters, Millimeters, KiloNewtons};
//!
//! let height = Meters(3.0);
//! let height_mm: Millimeters = height.into();
//! assert_eq!(height_mm.0, 3000.0);
//!
//! let load = KiloNewtons(1500.0);
//! assert_eq!(format!("{}", load), "1500 kN");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons (1 kN = 1000 N)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

impl From<Newtons> for KiloNewtons {
    fn from(n: Newtons) -> Self {
        KiloNewtons(n.0 / 1000.0)
    }
}

impl From<KiloNewtons> for Newtons {
    fn from(kn: KiloNewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in newtons per square millimetre (equal to MPa)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MPa(pub f64);

// ============================================================================
// Area Units
// ============================================================================

/// Area in square millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMm(pub f64);

/// Area in square metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqM(pub f64);

impl From<SqM> for SqMm {
    fn from(m2: SqM) -> Self {
        SqMm(m2.0 * 1.0e6)
    }
}

impl From<SqMm> for SqM {
    fn from(mm2: SqMm) -> Self {
        SqM(mm2.0 / 1.0e6)
    }
}

// ============================================================================
// Arithmetic + Display Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_unit {
    ($type:ty, $suffix:expr) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $type {
            /// Formats as a drawing-style label, e.g. "300 mm" or "1500 kN".
            /// Whole values print without decimals, fractional with one.
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if (self.0 - self.0.round()).abs() < 1.0e-9 {
                    write!(f, "{:.0} {}", self.0, $suffix)
                } else {
                    write!(f, "{:.1} {}", self.0, $suffix)
                }
            }
        }
    };
}

impl_unit!(Millimeters, "mm");
impl_unit!(Meters, "m");
impl_unit!(Newtons, "N");
impl_unit!(KiloNewtons, "kN");
impl_unit!(MPa, "N/mm²");
impl_unit!(SqMm, "mm²");
impl_unit!(SqM, "m²");
