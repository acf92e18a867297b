//! # Hydraulic Equations
//!
//! Fundamental pipe-flow equations used by the calculator. Keeping the
//! formulas in one place makes them easy to check against references.
//!
//! ## Modules
//!
//! - [`hydraulics`] - Hazen-Williams head loss and flow velocity
//! - [`section`] - Circular cross-section properties
//!
//! ## Units
//!
//! Everything here is SI: m³/s, m, m/s, mca. Conversions from the
//! installer-facing units live in [`crate::units`].

pub mod hydraulics;
pub mod section;

pub use hydraulics::{
    flow_velocity,
    hazen_williams_loss,
    localized_loss,
    DIAMETER_EXPONENT,
    FLOW_EXPONENT,
    HAZEN_WILLIAMS_K,
};

pub use section::circular_area;
