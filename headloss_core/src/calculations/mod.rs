//! # Hydraulic Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `compute(input) -> Result<*Result, ValidationError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`head_loss`] - Hazen-Williams head loss for a single pipe run

pub mod head_loss;

// Re-export commonly used types
pub use head_loss::{
    check_field, compute, parse_number, velocity_advisory, Advisory, CalculationInput, CalculationResult, HeadLossCalculator,
    MarginRecommendations, RawCalculationInput,
};
