//! # Error Types
//!
//! Structured error types for headloss_core. Two tiers:
//!
//! - [`ValidationError`] - the caller handed us a field we cannot compute with.
//!   Recoverable: re-prompt the user or show a field-level message.
//! - [`CalcError`] - everything around the pure core (fitting lookups and
//!   quantities, JSON). Wraps `ValidationError` so `?` works across both.
//!
//! An unrecognized pipe material is neither; it degrades to PVC and shows up
//! as an advisory on the result.
//!
//! ## Example
//!
//! ```rust
//! use headloss_core::errors::{InputField, ValidationError};
//!
//! fn check_flow(flow_m3_h: f64) -> Result<(), ValidationError> {
//!     if !(flow_m3_h > 0.0) {
//!         return Err(ValidationError::non_positive(InputField::FlowRate));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_flow(0.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for headloss_core operations outside the pure core
pub type CalcResult<T> = Result<T, CalcError>;

/// Identifies which input field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    /// Volumetric flow rate (m³/h)
    FlowRate,
    /// Internal pipe diameter (mm)
    InternalDiameter,
    /// Straight pipe length (m)
    StraightLength,
    /// Summed equivalent length of fittings (m)
    TotalEquivalentLength,
}

impl InputField {
    /// Wire name of the field, matching the serde representation
    pub fn name(&self) -> &'static str {
        match self {
            InputField::FlowRate => "flow_rate",
            InputField::InternalDiameter => "internal_diameter",
            InputField::StraightLength => "straight_length",
            InputField::TotalEquivalentLength => "total_equivalent_length",
        }
    }

    /// Human-readable label with unit, for prompts and messages
    pub fn label(&self) -> &'static str {
        match self {
            InputField::FlowRate => "Flow rate (m³/h)",
            InputField::InternalDiameter => "Internal diameter (mm)",
            InputField::StraightLength => "Straight length (m)",
            InputField::TotalEquivalentLength => "Total equivalent length (m)",
        }
    }
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Validation failure for a head loss calculation input.
///
/// No partial result ever accompanies one of these.
#[derive(Error, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ValidationError {
    /// The field could not be read as a number (or is NaN)
    #[error("'{field}' is not a valid number")]
    NotANumber { field: InputField },

    /// The field is a number but outside its allowed range
    /// (non-positive, negative for equivalent length, or infinite)
    #[error("'{field}' must be a finite positive value")]
    NonPositiveInput { field: InputField },

    /// The field is valid on its own but so extreme that the losses or
    /// velocity overflow f64
    #[error("'{field}' is too extreme to produce a finite result")]
    OutOfRange { field: InputField },
}

impl ValidationError {
    /// Create a NotANumber error
    pub fn not_a_number(field: InputField) -> Self {
        ValidationError::NotANumber { field }
    }

    /// Create a NonPositiveInput error
    pub fn non_positive(field: InputField) -> Self {
        ValidationError::NonPositiveInput { field }
    }

    /// Create an OutOfRange error
    pub fn out_of_range(field: InputField) -> Self {
        ValidationError::OutOfRange { field }
    }

    /// The field that failed
    pub fn field(&self) -> InputField {
        match self {
            ValidationError::NotANumber { field }
            | ValidationError::NonPositiveInput { field }
            | ValidationError::OutOfRange { field } => *field,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::NotANumber { .. } => "NOT_A_NUMBER",
            ValidationError::NonPositiveInput { .. } => "NON_POSITIVE_INPUT",
            ValidationError::OutOfRange { .. } => "OUT_OF_RANGE",
        }
    }
}

/// Structured error type for operations around the calculation core.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input failed validation
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Fitting name did not match any catalog entry
    #[error("Unknown fitting: {name}")]
    UnknownFitting { name: String },

    /// A fitting count was not a whole, non-negative number
    #[error("Invalid fitting quantity in '{argument}': expected a whole number")]
    InvalidFittingQuantity { argument: String },

    /// Fitting catalog has no equivalent length for this combination
    #[error("No catalog entry for {fitting} in {material} {diameter}")]
    CatalogEntryMissing {
        fitting: String,
        material: String,
        diameter: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an UnknownFitting error
    pub fn unknown_fitting(name: impl Into<String>) -> Self {
        CalcError::UnknownFitting { name: name.into() }
    }

    /// Create an InvalidFittingQuantity error
    pub fn invalid_fitting_quantity(argument: impl Into<String>) -> Self {
        CalcError::InvalidFittingQuantity {
            argument: argument.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Validation errors are fixed by the user correcting the field
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CalcError::Validation(_) | CalcError::UnknownFitting { .. } | CalcError::InvalidFittingQuantity { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::Validation(e) => e.error_code(),
            CalcError::UnknownFitting { .. } => "UNKNOWN_FITTING",
            CalcError::CatalogEntryMissing { .. } => "CATALOG_ENTRY_MISSING",
            CalcError::InvalidFittingQuantity { .. } => "INVALID_FITTING_QUANTITY",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::serialization(e.to_string())
    }
}
