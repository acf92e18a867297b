//! # headloss_core - Pipe Head Loss Calculation Engine
//!
//! `headloss_core` computes hydraulic head loss in pipe runs with the
//! Hazen-Williams formula, for sizing plumbing and pool installations.
//! All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results; no files,
//!   no network, nothing persisted
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Degrade, don't fail**: Unknown pipe materials fall back to PVC with a notice
//!
//! ## Quick Start
//!
//! ```rust
//! use headloss_core::{compute, CalculationInput, PipeMaterial};
//!
//! // 10 m³/h through 20 m of 50 mm PVC with 5 m of fittings
//! let input = CalculationInput::new(10.0, 50.0, 20.0, 5.0, PipeMaterial::Pvc);
//! let result = compute(&input).unwrap();
//!
//! println!("Total loss: {:.3} mca", result.total_loss_mca);
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The head loss calculation
//! - [`equations`] - Hazen-Williams and velocity formulas
//! - [`materials`] - Pipe materials and the fitting equivalent-length catalog
//! - [`settings`] - Options for optional margins and reminders
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    compute, Advisory, CalculationInput, CalculationResult, HeadLossCalculator, MarginRecommendations,
    RawCalculationInput,
};
pub use errors::{CalcError, CalcResult, InputField, ValidationError};
pub use materials::{FittingTally, FittingType, MaterialCoefficient, NominalDiameter, PipeMaterial};
pub use settings::CalcOptions;
