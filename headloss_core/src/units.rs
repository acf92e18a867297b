//! # Unit Types
//!
//! Type-safe wrappers for the hydraulic units used by the calculator. These
//! are plain f64 newtypes so JSON stays clean (just numbers).
//!
//! ## Units
//!
//! Inputs arrive in the units installers actually read off equipment:
//! - Flow: cubic meters per hour (m³/h)
//! - Diameter: millimeters (mm)
//! - Length: meters (m)
//!
//! The Hazen-Williams formula wants SI base units, so flow and diameter are
//! converted before any arithmetic:
//! - Flow: cubic meters per second (m³/s)
//! - Diameter: meters (m)
//!
//! Head and velocity are reported as plain f64 (mca, m/s) on the result.
//!
//! ## Example
//!
//! ```rust
//! use headloss_core::units::{CubicMetersPerHour, CubicMetersPerSecond, Meters, Millimeters};
//!
//! let flow = CubicMetersPerHour(36.0);
//! let flow_si: CubicMetersPerSecond = flow.into();
//! assert!((flow_si.0 - 0.01).abs() < 1e-12);
//!
//! let diameter: Meters = Millimeters(50.0).into();
//! assert_eq!(diameter.0, 0.05);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Flow Units
// ============================================================================

/// Volumetric flow in cubic meters per hour
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMetersPerHour(pub f64);

/// Volumetric flow in cubic meters per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMetersPerSecond(pub f64);

impl From<CubicMetersPerHour> for CubicMetersPerSecond {
    fn from(q: CubicMetersPerHour) -> Self {
        CubicMetersPerSecond(q.0 / 3600.0)
    }
}

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
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
    };
}

impl_arithmetic!(Meters);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_per_hour_to_per_second() {
        let q: CubicMetersPerSecond = CubicMetersPerHour(10.0).into();
        assert!((q.0 - 10.0 / 3600.0).abs() < 1e-15);
    }

    #[test]
    fn test_millimeters_to_meters() {
        let d: Meters = Millimeters(75.0).into();
        assert_eq!(d.0, 0.075);
    }

    #[test]
    fn test_arithmetic() {
        let a = Meters(20.0);
        let b = Meters(5.0);
        assert_eq!((a + b).0, 25.0);
        assert_eq!((a - b).0, 15.0);
        assert_eq!((a * 2.0).0, 40.0);
        assert_eq!((a / 4.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let length = Meters(1.25);
        let json = serde_json::to_string(&length).unwrap();
        assert_eq!(json, "1.25");

        let roundtrip: Meters = serde_json::from_str(&json).unwrap();
        assert_eq!(length, roundtrip);
    }
}
