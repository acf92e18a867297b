//! # Pipe Cross-Section Formulas
//!
//! Geometric properties of a full-bore circular pipe section.
//!
//! ## Notation
//!
//! - `D` = Internal diameter
//! - `A` = Flow area

// =============================================================================
// CIRCULAR SECTION PROPERTIES
// =============================================================================

/// Calculate flow area of a circular section running full
///
/// ```text
///       ╭───╮
///     ╱       ╲
///    │    D    │
///     ╲       ╱
///       ╰───╯
/// ```
///
/// # Formula
/// A = π × D² / 4
///
/// # Arguments
/// * `d` - Internal diameter
///
/// # Returns
/// Flow area in square units of input
///
/// # Example
/// ```rust
/// use headloss_core::equations::section::circular_area;
///
/// // DN50 pipe, diameter in meters
/// let area = circular_area(0.05);
/// assert!((area - 0.0019635).abs() < 1e-6);
/// ```
#[inline]
pub fn circular_area(d: f64) -> f64 {
    std::f64::consts::PI * d * d / 4.0
}
