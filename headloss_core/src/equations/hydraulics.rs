//! # Pipe Flow Formulas
//!
//! Hazen-Williams friction loss and the related velocity formula.
//! All functions take SI base units.
//!
//! ## Notation
//!
//! - `Q` = Volumetric flow rate (m³/s)
//! - `D` = Internal diameter (m)
//! - `L` = Straight pipe length (m)
//! - `Le` = Equivalent length of fittings (m)
//! - `C` = Hazen-Williams roughness coefficient (dimensionless)
//! - `Hf` = Linear (distributed) head loss (mca)
//! - `Hl` = Localized head loss (mca)
//! - `v` = Mean flow velocity (m/s)
//!
//! ## References
//!
//! - Hazen, A. and Williams, G.S., Hydraulic Tables (1905)
//! - ABNT NBR 5626: Water supply installations in buildings

use super::section::circular_area;

/// SI constant of the Hazen-Williams head loss formula
pub const HAZEN_WILLIAMS_K: f64 = 10.67;

/// Exponent applied to flow rate and to the roughness coefficient
pub const FLOW_EXPONENT: f64 = 1.85;

/// Exponent applied to internal diameter
pub const DIAMETER_EXPONENT: f64 = 4.87;

/// Calculate linear head loss over a straight run
///
/// # Formula
/// Hf = 10.67 × Q^1.85 / (C^1.85 × D^4.87) × L
///
/// # Arguments
/// * `q` - Flow rate (m³/s)
/// * `c` - Roughness coefficient
/// * `d` - Internal diameter (m)
/// * `l` - Straight length (m)
///
/// # Example
/// ```rust
/// use headloss_core::equations::hydraulics::hazen_williams_loss;
///
/// // 10 m³/h through 20 m of 50 mm PVC
/// let hf = hazen_williams_loss(10.0 / 3600.0, 140.0, 0.05, 20.0);
/// assert!((hf - 0.92409).abs() < 1e-4);
/// ```
#[inline]
pub fn hazen_williams_loss(q: f64, c: f64, d: f64, l: f64) -> f64 {
    HAZEN_WILLIAMS_K * q.powf(FLOW_EXPONENT) / (c.powf(FLOW_EXPONENT) * d.powf(DIAMETER_EXPONENT)) * l
}

/// Calculate localized head loss from the equivalent length of fittings
///
/// Scales the per-meter linear loss rate by `Le`. `l` must be positive.
/// Zero `Le` gives exactly zero, whatever `Hf` is.
///
/// # Formula
/// Hl = Hf × (Le / L)
#[inline]
pub fn localized_loss(linear_loss: f64, equivalent_length: f64, l: f64) -> f64 {
    if equivalent_length == 0.0 {
        return 0.0;
    }
    linear_loss * (equivalent_length / l)
}

/// Calculate mean velocity of a pipe running full
///
/// # Formula
/// v = Q / (π × D² / 4)
#[inline]
pub fn flow_velocity(q: f64, d: f64) -> f64 {
    q / circular_area(d)
}
