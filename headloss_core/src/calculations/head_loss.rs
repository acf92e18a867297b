//! # Head Loss Calculation
//!
//! Hazen-Williams head loss for a single pipe run: linear loss over the
//! straight length, localized loss from the fittings' equivalent length,
//! flow velocity, safety margins and velocity advisories.
//!
//! ## Assumptions
//!
//! - Water at ordinary temperatures (Hazen-Williams validity range)
//! - Full-bore circular pipe, single diameter along the run
//! - Fittings folded in by equivalent length, scaled from the linear loss rate
//!
//! ## Velocity Limits
//!
//! | Velocity          | Advisory              |
//! |-------------------|-----------------------|
//! | v > 3.0 m/s       | `HighVelocityWarning` |
//! | v < 1.5 m/s       | `LowVelocityWarning`  |
//! | 1.5 ≤ v ≤ 3.0 m/s | none                  |
//!
//! ## Example
//!
//! ```rust
//! use headloss_core::calculations::head_loss::{compute, Advisory, CalculationInput};
//! use headloss_core::materials::PipeMaterial;
//!
//! let input = CalculationInput::new(10.0, 50.0, 20.0, 5.0, PipeMaterial::Pvc);
//! let result = compute(&input).unwrap();
//!
//! assert!((result.total_loss_mca - 1.1551).abs() < 1e-3);
//! assert!(matches!(result.advisories[0], Advisory::LowVelocityWarning { .. }));
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::hydraulics::{
    flow_velocity, hazen_williams_loss, localized_loss, DIAMETER_EXPONENT, FLOW_EXPONENT,
};
use crate::errors::{InputField, ValidationError};
use crate::materials::MaterialCoefficient;
use crate::settings::CalcOptions;
use crate::units::{CubicMetersPerHour, CubicMetersPerSecond, Meters, Millimeters};

/// Above this velocity (m/s) the run is flagged for erosion and noise
pub const HIGH_VELOCITY_LIMIT_M_S: f64 = 3.0;

/// Below this velocity (m/s) the run is flagged for sedimentation
pub const LOW_VELOCITY_LIMIT_M_S: f64 = 1.5;

/// Multiplier for the +10% safety margin
pub const TEN_PERCENT_MARGIN: f64 = 1.10;

/// Multiplier for the +20% safety margin
pub const TWENTY_PERCENT_MARGIN: f64 = 1.20;

/// Input parameters for a head loss calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "flow_rate_m3_per_hour": 10.0,
///   "internal_diameter_mm": 50.0,
///   "straight_length_m": 20.0,
///   "total_equivalent_length_m": 5.0,
///   "material": { "type": "Known", "value": "PVC" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Volumetric flow rate in m³/h
    pub flow_rate_m3_per_hour: f64,

    /// Internal pipe diameter in millimeters
    pub internal_diameter_mm: f64,

    /// Straight pipe length in meters
    pub straight_length_m: f64,

    /// Summed equivalent length of all fittings in meters
    #[serde(default)]
    pub total_equivalent_length_m: f64,

    /// Pipe material
    pub material: MaterialCoefficient,
}

impl CalculationInput {
    /// Create an input from raw numbers
    pub fn new(
        flow_rate_m3_per_hour: f64,
        internal_diameter_mm: f64,
        straight_length_m: f64,
        total_equivalent_length_m: f64,
        material: impl Into<MaterialCoefficient>,
    ) -> Self {
        CalculationInput {
            flow_rate_m3_per_hour,
            internal_diameter_mm,
            straight_length_m,
            total_equivalent_length_m,
            material: material.into(),
        }
    }

    /// Validate input parameters.
    ///
    /// Fields are checked in declaration order; the first failure wins.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_field(InputField::FlowRate, self.flow_rate_m3_per_hour)?;
        check_field(InputField::InternalDiameter, self.internal_diameter_mm)?;
        check_field(InputField::StraightLength, self.straight_length_m)?;
        check_field(InputField::TotalEquivalentLength, self.total_equivalent_length_m)?;
        Ok(())
    }
}

/// Check a single field against its range.
///
/// Equivalent length may be zero; every other field must be strictly
/// positive. All fields must be finite. NaN reports `NotANumber`.
pub fn check_field(field: InputField, value: f64) -> Result<f64, ValidationError> {
    if value.is_nan() {
        return Err(ValidationError::not_a_number(field));
    }
    let in_range = match field {
        InputField::TotalEquivalentLength => value >= 0.0,
        _ => value > 0.0,
    };
    if !value.is_finite() || !in_range {
        return Err(ValidationError::non_positive(field));
    }
    Ok(value)
}

/// Calculation input as text, straight from a form or prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCalculationInput {
    pub flow_rate: String,
    pub internal_diameter: String,
    pub straight_length: String,
    pub total_equivalent_length: String,
    pub material: String,
}

impl RawCalculationInput {
    /// Parse every field and validate the result.
    ///
    /// Unparseable numbers fail with `NotANumber`; the material never fails.
    pub fn parse(&self) -> Result<CalculationInput, ValidationError> {
        let input = CalculationInput {
            flow_rate_m3_per_hour: parse_number(&self.flow_rate, InputField::FlowRate)?,
            internal_diameter_mm: parse_number(&self.internal_diameter, InputField::InternalDiameter)?,
            straight_length_m: parse_number(&self.straight_length, InputField::StraightLength)?,
            total_equivalent_length_m: parse_number(&self.total_equivalent_length, InputField::TotalEquivalentLength)?,
            material: MaterialCoefficient::parse(&self.material),
        };
        input.validate()?;
        Ok(input)
    }
}

/// Parse one numeric field. Accepts surrounding whitespace and a decimal comma.
pub fn parse_number(text: &str, field: InputField) -> Result<f64, ValidationError> {
    let value: f64 = text
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| ValidationError::not_a_number(field))?;
    if value.is_nan() {
        return Err(ValidationError::not_a_number(field));
    }
    Ok(value)
}

/// Advisory attached to a calculation result.
///
/// ## JSON Example
///
/// ```json
/// { "type": "LowVelocityWarning", "velocity_m_per_s": 1.41, "limit_m_per_s": 1.5 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Advisory {
    /// Velocity above the upper limit
    HighVelocityWarning { velocity_m_per_s: f64, limit_m_per_s: f64 },

    /// Velocity below the lower limit
    LowVelocityWarning { velocity_m_per_s: f64, limit_m_per_s: f64 },

    /// Material not in the coefficient table; calculated with `fallback_c`
    UnrecognizedMaterialNotice { name: String, fallback_c: f64 },
}

impl Advisory {
    /// Get a short code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            Advisory::HighVelocityWarning { .. } => "HIGH_VELOCITY",
            Advisory::LowVelocityWarning { .. } => "LOW_VELOCITY",
            Advisory::UnrecognizedMaterialNotice { .. } => "UNRECOGNIZED_MATERIAL",
        }
    }

    /// Velocity advisories are warnings; the material fallback is a notice
    pub fn is_warning(&self) -> bool {
        !matches!(self, Advisory::UnrecognizedMaterialNotice { .. })
    }

    /// Notice for a material that fell back to the PVC coefficient
    pub fn for_material(material: &MaterialCoefficient) -> Option<Advisory> {
        match material {
            MaterialCoefficient::Known(_) => None,
            MaterialCoefficient::Unrecognized(name) => Some(Advisory::UnrecognizedMaterialNotice {
                name: name.clone(),
                fallback_c: material.c_factor(),
            }),
        }
    }

    /// Human-readable advisory text
    pub fn message(&self) -> String {
        match self {
            Advisory::HighVelocityWarning {
                velocity_m_per_s,
                limit_m_per_s,
            } => format!(
                "Velocity {:.2} m/s is above {:.1} m/s: risk of erosion, cavitation, noise and suction entrapment. \
                 Increase the pipe diameter.",
                velocity_m_per_s, limit_m_per_s
            ),
            Advisory::LowVelocityWarning {
                velocity_m_per_s,
                limit_m_per_s,
            } => format!(
                "Velocity {:.2} m/s is below {:.1} m/s: particles may settle, biofilm may form and air pockets may collect.",
                velocity_m_per_s, limit_m_per_s
            ),
            Advisory::UnrecognizedMaterialNotice { name, fallback_c } => format!(
                "Material '{}' not recognized. Using the PVC coefficient (C={:.0}).",
                name, fallback_c
            ),
        }
    }
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Velocity advisory for a given velocity, if any. Both limits are exclusive.
pub fn velocity_advisory(velocity_m_per_s: f64) -> Option<Advisory> {
    if velocity_m_per_s > HIGH_VELOCITY_LIMIT_M_S {
        Some(Advisory::HighVelocityWarning {
            velocity_m_per_s,
            limit_m_per_s: HIGH_VELOCITY_LIMIT_M_S,
        })
    } else if velocity_m_per_s < LOW_VELOCITY_LIMIT_M_S {
        Some(Advisory::LowVelocityWarning {
            velocity_m_per_s,
            limit_m_per_s: LOW_VELOCITY_LIMIT_M_S,
        })
    } else {
        None
    }
}

/// Safety margins on the total head loss.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarginRecommendations {
    /// Total loss + 10% (mca), when enabled in [`CalcOptions`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ten_percent_mca: Option<f64>,

    /// Total loss + 20% (mca)
    pub twenty_percent_mca: f64,

    /// Caller should add the installation's static head to the total
    #[serde(default)]
    pub add_static_head: bool,
}

impl MarginRecommendations {
    /// Reminder text shown when `add_static_head` is set
    pub const STATIC_HEAD_NOTE: &'static str =
        "Add the installation's static head (height between the water level and the pump) to the total.";

    fn from_total(total_loss_mca: f64, options: &CalcOptions) -> Self {
        MarginRecommendations {
            ten_percent_mca: options
                .include_ten_percent_margin
                .then_some(total_loss_mca * TEN_PERCENT_MARGIN),
            twenty_percent_mca: total_loss_mca * TWENTY_PERCENT_MARGIN,
            add_static_head: options.include_static_head_reminder,
        }
    }
}

/// Results from a head loss calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "linear_loss_mca": 0.924,
///   "localized_loss_mca": 0.231,
///   "total_loss_mca": 1.155,
///   "velocity_m_per_s": 1.415,
///   "hazen_williams_c": 140.0,
///   "advisories": [
///     { "type": "LowVelocityWarning", "velocity_m_per_s": 1.415, "limit_m_per_s": 1.5 }
///   ],
///   "margins": { "ten_percent_mca": 1.271, "twenty_percent_mca": 1.386, "add_static_head": true }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Linear (distributed) loss over the straight length, Hf (mca)
    pub linear_loss_mca: f64,

    /// Localized loss from fittings, Hl (mca)
    pub localized_loss_mca: f64,

    /// Hf + Hl (mca)
    pub total_loss_mca: f64,

    /// Mean flow velocity (m/s)
    pub velocity_m_per_s: f64,

    /// Hazen-Williams coefficient actually used
    pub hazen_williams_c: f64,

    /// Velocity advisory first (at most one), then material notice
    pub advisories: Vec<Advisory>,

    /// Safety margins on the total
    pub margins: MarginRecommendations,
}

impl CalculationResult {
    /// True if any advisory is a velocity warning
    pub fn has_warnings(&self) -> bool {
        self.advisories.iter().any(Advisory::is_warning)
    }

    /// True if velocity lies within the recommended band
    pub fn velocity_in_range(&self) -> bool {
        velocity_advisory(self.velocity_m_per_s).is_none()
    }
}

/// Head loss calculator configured with [`CalcOptions`].
///
/// Holds no state beyond its options; one instance can serve any number
/// of calculations from any number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeadLossCalculator {
    options: CalcOptions,
}

impl HeadLossCalculator {
    /// Create a calculator with the given options
    pub fn new(options: CalcOptions) -> Self {
        HeadLossCalculator { options }
    }

    /// The options this calculator reports with
    pub fn options(&self) -> &CalcOptions {
        &self.options
    }

    /// Calculate head loss for one pipe run.
    ///
    /// # Returns
    ///
    /// * `Ok(CalculationResult)` - Calculation results
    /// * `Err(ValidationError)` - If inputs are invalid; nothing is computed
    pub fn compute(&self, input: &CalculationInput) -> Result<CalculationResult, ValidationError> {
        input.validate()?;

        let q: CubicMetersPerSecond = CubicMetersPerHour(input.flow_rate_m3_per_hour).into();
        let d: Meters = Millimeters(input.internal_diameter_mm).into();
        let l = input.straight_length_m;
        let le = input.total_equivalent_length_m;
        let c = input.material.c_factor();

        let linear_loss_mca = hazen_williams_loss(q.0, c, d.0, l);
        let localized_loss_mca = localized_loss(linear_loss_mca, le, l);
        let total_loss_mca = linear_loss_mca + localized_loss_mca;
        let velocity_m_per_s = flow_velocity(q.0, d.0);
        let margins = MarginRecommendations::from_total(total_loss_mca, &self.options);

        let finite = [total_loss_mca, velocity_m_per_s, margins.twenty_percent_mca]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            let field = overflow_field(q.0, d.0, linear_loss_mca, le);
            tracing::debug!(%field, linear_loss_mca, velocity_m_per_s, "head loss overflowed");
            return Err(ValidationError::out_of_range(field));
        }

        let mut advisories = Vec::new();
        if let Some(advisory) = velocity_advisory(velocity_m_per_s) {
            advisories.push(advisory);
        }
        if let Some(notice) = Advisory::for_material(&input.material) {
            tracing::warn!(material = %input.material, fallback_c = c, "unrecognized pipe material, using PVC coefficient");
            advisories.push(notice);
        }

        tracing::debug!(
            q_m3_s = q.0,
            d_m = d.0,
            c,
            linear_loss_mca,
            localized_loss_mca,
            total_loss_mca,
            velocity_m_per_s,
            advisories = advisories.len(),
            "head loss computed"
        );

        Ok(CalculationResult {
            linear_loss_mca,
            localized_loss_mca,
            total_loss_mca,
            velocity_m_per_s,
            hazen_williams_c: c,
            advisories,
            margins,
        })
    }
}

/// Pick the input responsible for a loss or velocity that left f64 range.
fn overflow_field(q_m3_s: f64, d_m: f64, linear_loss_mca: f64, equivalent_length_m: f64) -> InputField {
    if !q_m3_s.powf(FLOW_EXPONENT).is_finite() {
        InputField::FlowRate
    } else if d_m.powf(DIAMETER_EXPONENT) == 0.0 {
        InputField::InternalDiameter
    } else if !linear_loss_mca.is_finite() || equivalent_length_m == 0.0 {
        InputField::StraightLength
    } else {
        InputField::TotalEquivalentLength
    }
}

/// Calculate head loss with default options (both margins, static head reminder).
pub fn compute(input: &CalculationInput) -> Result<CalculationResult, ValidationError> {
    HeadLossCalculator::default().compute(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::PipeMaterial;

    fn reference_input() -> CalculationInput {
        CalculationInput::new(10.0, 50.0, 20.0, 5.0, PipeMaterial::Pvc)
    }

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_reference_case() {
        let result = compute(&reference_input()).unwrap();

        // Q = 10/3600 m³/s, D = 0.05 m, C = 140
        assert_close(result.linear_loss_mca, 0.924_089_43, 1e-7);
        assert_close(result.localized_loss_mca, 0.231_022_36, 1e-7);
        assert_close(result.total_loss_mca, 1.155_111_78, 1e-7);
        assert_close(result.velocity_m_per_s, 1.414_710_61, 1e-7);
        assert_close(result.margins.twenty_percent_mca, 1.386_134_14, 1e-7);
        assert_close(result.margins.ten_percent_mca.unwrap(), 1.270_622_96, 1e-7);
        assert_eq!(result.hazen_williams_c, 140.0);

        assert_eq!(result.advisories.len(), 1);
        assert_eq!(result.advisories[0].code(), "LOW_VELOCITY");
        assert!(result.has_warnings());
        assert!(!result.velocity_in_range());
    }

    #[test]
    fn test_localized_loss_identity() {
        let input = reference_input();
        let result = compute(&input).unwrap();
        assert_eq!(
            result.localized_loss_mca,
            result.linear_loss_mca * (input.total_equivalent_length_m / input.straight_length_m)
        );
        assert_eq!(result.total_loss_mca, result.linear_loss_mca + result.localized_loss_mca);
    }

    #[test]
    fn test_zero_equivalent_length() {
        let mut input = reference_input();
        input.total_equivalent_length_m = 0.0;
        let result = compute(&input).unwrap();
        assert_eq!(result.localized_loss_mca, 0.0);
        assert_eq!(result.total_loss_mca, result.linear_loss_mca);
    }

    #[test]
    fn test_steel_loses_more_than_pvc() {
        let pvc = compute(&reference_input()).unwrap();
        let mut input = reference_input();
        input.material = PipeMaterial::Steel.into();
        let steel = compute(&input).unwrap();

        assert_close(steel.total_loss_mca, 2.152_587_83, 1e-7);
        assert!(steel.total_loss_mca > pvc.total_loss_mca);
        // Velocity does not depend on material
        assert_eq!(steel.velocity_m_per_s, pvc.velocity_m_per_s);
    }

    #[test]
    fn test_high_velocity_warning() {
        let input = CalculationInput::new(30.0, 50.0, 10.0, 0.0, PipeMaterial::Copper);
        let result = compute(&input).unwrap();

        assert_close(result.velocity_m_per_s, 4.244_131_82, 1e-7);
        assert_close(result.linear_loss_mca, 4.044_827_37, 1e-7);
        assert_eq!(
            result.advisories,
            vec![Advisory::HighVelocityWarning {
                velocity_m_per_s: result.velocity_m_per_s,
                limit_m_per_s: 3.0,
            }]
        );
    }

    #[test]
    fn test_velocity_in_band_has_no_advisory() {
        let input = CalculationInput::new(10.0, 40.0, 10.0, 0.0, PipeMaterial::Pvc);
        let result = compute(&input).unwrap();
        assert_close(result.velocity_m_per_s, 2.210_485_32, 1e-7);
        assert!(result.advisories.is_empty());
        assert!(result.velocity_in_range());
    }

    #[test]
    fn test_velocity_limits_are_exclusive() {
        assert_eq!(velocity_advisory(1.5), None);
        assert_eq!(velocity_advisory(3.0), None);
        assert_eq!(velocity_advisory(2.2), None);
        assert!(matches!(velocity_advisory(1.499_999), Some(Advisory::LowVelocityWarning { .. })));
        assert!(matches!(velocity_advisory(3.000_001), Some(Advisory::HighVelocityWarning { .. })));
    }

    #[test]
    fn test_unrecognized_material_notice_follows_velocity_advisory() {
        let mut input = reference_input();
        input.material = MaterialCoefficient::parse("HDPE");
        let result = compute(&input).unwrap();
        let pvc = compute(&reference_input()).unwrap();

        assert_eq!(result.hazen_williams_c, 140.0);
        assert_eq!(result.total_loss_mca, pvc.total_loss_mca);
        assert_eq!(result.advisories.len(), 2);
        assert_eq!(result.advisories[0].code(), "LOW_VELOCITY");
        assert_eq!(
            result.advisories[1],
            Advisory::UnrecognizedMaterialNotice {
                name: "HDPE".to_string(),
                fallback_c: 140.0,
            }
        );
        assert!(!result.advisories[1].is_warning());
    }

    #[test]
    fn test_compact_options_omit_ten_percent() {
        let calc = HeadLossCalculator::new(CalcOptions::compact());
        let result = calc.compute(&reference_input()).unwrap();
        assert_eq!(result.margins.ten_percent_mca, None);
        assert!(result.margins.add_static_head);

        let json = serde_json::to_string(&result.margins).unwrap();
        assert!(!json.contains("ten_percent_mca"));
    }

    #[test]
    fn test_twenty_percent_margin() {
        let result = compute(&reference_input()).unwrap();
        assert_eq!(result.margins.twenty_percent_mca, result.total_loss_mca * 1.20);
    }

    #[test]
    fn test_invalid_inputs() {
        let cases = [
            (CalculationInput::new(0.0, 50.0, 20.0, 5.0, PipeMaterial::Pvc), ValidationError::non_positive(InputField::FlowRate)),
            (CalculationInput::new(10.0, -5.0, 20.0, 5.0, PipeMaterial::Pvc), ValidationError::non_positive(InputField::InternalDiameter)),
            (CalculationInput::new(10.0, 50.0, 0.0, 5.0, PipeMaterial::Pvc), ValidationError::non_positive(InputField::StraightLength)),
            (CalculationInput::new(10.0, 50.0, 20.0, -0.1, PipeMaterial::Pvc), ValidationError::non_positive(InputField::TotalEquivalentLength)),
            (CalculationInput::new(f64::NAN, 50.0, 20.0, 5.0, PipeMaterial::Pvc), ValidationError::not_a_number(InputField::FlowRate)),
            (CalculationInput::new(10.0, f64::INFINITY, 20.0, 5.0, PipeMaterial::Pvc), ValidationError::non_positive(InputField::InternalDiameter)),
            (CalculationInput::new(10.0, 50.0, 20.0, f64::INFINITY, PipeMaterial::Pvc), ValidationError::non_positive(InputField::TotalEquivalentLength)),
        ];
        for (input, expected) in cases {
            assert_eq!(compute(&input).unwrap_err(), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_overflowing_inputs_rejected() {
        let cases = [
            (CalculationInput::new(1e300, 50.0, 20.0, 0.0, PipeMaterial::Pvc), InputField::FlowRate),
            (CalculationInput::new(10.0, 1e-70, 20.0, 0.0, PipeMaterial::Pvc), InputField::InternalDiameter),
            (CalculationInput::new(100.0, 10.0, f64::MAX, 0.0, PipeMaterial::Pvc), InputField::StraightLength),
            (CalculationInput::new(10.0, 50.0, 1e-300, 1e300, PipeMaterial::Pvc), InputField::TotalEquivalentLength),
        ];
        for (input, field) in cases {
            assert_eq!(compute(&input).unwrap_err(), ValidationError::out_of_range(field), "input {input:?}");
        }
    }

    #[test]
    fn test_tiny_flow_through_huge_pipe_stays_finite() {
        let result = compute(&CalculationInput::new(1e-300, 1e300, 20.0, 0.0, PipeMaterial::Pvc)).unwrap();
        assert_eq!(result.localized_loss_mca, 0.0);
        assert!(result.total_loss_mca.is_finite());
        assert!(result.margins.twenty_percent_mca.is_finite());

        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("null"));
    }

    #[test]
    fn test_check_field() {
        assert_eq!(check_field(InputField::TotalEquivalentLength, 0.0), Ok(0.0));
        assert_eq!(
            check_field(InputField::StraightLength, 0.0),
            Err(ValidationError::non_positive(InputField::StraightLength))
        );
        assert_eq!(
            check_field(InputField::FlowRate, f64::NEG_INFINITY),
            Err(ValidationError::non_positive(InputField::FlowRate))
        );
    }

    #[test]
    fn test_first_invalid_field_reported() {
        let input = CalculationInput::new(0.0, -5.0, 0.0, -1.0, PipeMaterial::Pvc);
        assert_eq!(input.validate().unwrap_err().field(), InputField::FlowRate);
    }

    #[test]
    fn test_raw_input_parse() {
        let raw = RawCalculationInput {
            flow_rate: " 10 ".to_string(),
            internal_diameter: "50".to_string(),
            straight_length: "20,0".to_string(),
            total_equivalent_length: "5".to_string(),
            material: "Aço".to_string(),
        };
        let input = raw.parse().unwrap();
        assert_eq!(input.straight_length_m, 20.0);
        assert_eq!(input.material, MaterialCoefficient::Known(PipeMaterial::Steel));
    }

    #[test]
    fn test_raw_input_not_a_number() {
        let raw = RawCalculationInput {
            flow_rate: "10".to_string(),
            internal_diameter: "fifty".to_string(),
            straight_length: "20".to_string(),
            total_equivalent_length: "0".to_string(),
            material: "PVC".to_string(),
        };
        assert_eq!(raw.parse().unwrap_err(), ValidationError::not_a_number(InputField::InternalDiameter));

        assert_eq!(
            parse_number("NaN", InputField::FlowRate).unwrap_err(),
            ValidationError::not_a_number(InputField::FlowRate)
        );
        assert_eq!(
            parse_number("", InputField::StraightLength).unwrap_err(),
            ValidationError::not_a_number(InputField::StraightLength)
        );
    }

    #[test]
    fn test_raw_input_validates_after_parse() {
        let raw = RawCalculationInput {
            flow_rate: "0".to_string(),
            internal_diameter: "50".to_string(),
            straight_length: "20".to_string(),
            total_equivalent_length: "0".to_string(),
            material: "PVC".to_string(),
        };
        assert_eq!(raw.parse().unwrap_err(), ValidationError::non_positive(InputField::FlowRate));
    }

    #[test]
    fn test_advisory_messages() {
        let high = velocity_advisory(4.24).unwrap();
        assert!(high.message().contains("4.24 m/s"));
        assert!(high.message().contains("cavitation"));

        let low = velocity_advisory(1.0).unwrap();
        assert!(low.message().contains("biofilm"));
    }

    #[test]
    fn test_material_notice_only_for_unrecognized() {
        assert_eq!(Advisory::for_material(&PipeMaterial::Steel.into()), None);
        let notice = Advisory::for_material(&MaterialCoefficient::parse("HDPE")).unwrap();
        assert_eq!(
            notice,
            Advisory::UnrecognizedMaterialNotice {
                name: "HDPE".to_string(),
                fallback_c: 140.0
            }
        );
    }

    #[test]
    fn test_serialization() {
        let result = compute(&reference_input()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains(r#""type": "LowVelocityWarning""#));

        let roundtrip: CalculationResult = serde_json::from_str(&json).unwrap();
        assert_close(roundtrip.total_loss_mca, result.total_loss_mca, 1e-12);
        assert_eq!(roundtrip.advisories.len(), result.advisories.len());
        assert_eq!(roundtrip.margins.add_static_head, result.margins.add_static_head);

        let input_json = serde_json::to_string(&reference_input()).unwrap();
        let input: CalculationInput = serde_json::from_str(&input_json).unwrap();
        assert_eq!(input, reference_input());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::materials::PipeMaterial;
    use proptest::prelude::*;

    fn material() -> impl Strategy<Value = PipeMaterial> {
        prop::sample::select(PipeMaterial::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn localized_loss_scales_linear_loss(
            q in 0.1_f64..500.0,
            d in 10.0_f64..500.0,
            l in 0.1_f64..1000.0,
            le in 0.0_f64..500.0,
            m in material(),
        ) {
            let r = compute(&CalculationInput::new(q, d, l, le, m)).unwrap();
            prop_assert_eq!(r.localized_loss_mca, r.linear_loss_mca * (le / l));
            prop_assert_eq!(r.total_loss_mca, r.linear_loss_mca + r.localized_loss_mca);
        }

        #[test]
        fn more_flow_means_more_loss_and_velocity(
            q in 0.1_f64..500.0,
            k in 1.01_f64..3.0,
            d in 10.0_f64..500.0,
            l in 0.1_f64..1000.0,
            m in material(),
        ) {
            let low = compute(&CalculationInput::new(q, d, l, 0.0, m)).unwrap();
            let high = compute(&CalculationInput::new(q * k, d, l, 0.0, m)).unwrap();
            prop_assert!(high.velocity_m_per_s > low.velocity_m_per_s);
            prop_assert!(high.linear_loss_mca > low.linear_loss_mca);
        }

        #[test]
        fn larger_diameter_means_less_loss_and_velocity(
            q in 0.1_f64..500.0,
            d in 10.0_f64..500.0,
            k in 1.01_f64..3.0,
            l in 0.1_f64..1000.0,
            m in material(),
        ) {
            let narrow = compute(&CalculationInput::new(q, d, l, 0.0, m)).unwrap();
            let wide = compute(&CalculationInput::new(q, d * k, l, 0.0, m)).unwrap();
            prop_assert!(wide.velocity_m_per_s < narrow.velocity_m_per_s);
            prop_assert!(wide.linear_loss_mca < narrow.linear_loss_mca);
        }

        #[test]
        fn twenty_percent_margin_matches_total(
            q in 0.1_f64..500.0,
            d in 10.0_f64..500.0,
            l in 0.1_f64..1000.0,
            le in 0.0_f64..500.0,
        ) {
            let r = compute(&CalculationInput::new(q, d, l, le, PipeMaterial::Pvc)).unwrap();
            let expected = r.total_loss_mca * 1.20;
            prop_assert!((r.margins.twenty_percent_mca - expected).abs() <= 1e-9 * expected.abs());
        }

        #[test]
        fn unknown_material_always_falls_back(name in "[a-z]{4,10}") {
            let material = MaterialCoefficient::parse(&name);
            prop_assume!(!material.is_recognized());
            let r = compute(&CalculationInput::new(10.0, 50.0, 20.0, 5.0, material)).unwrap();
            prop_assert_eq!(r.hazen_williams_c, 140.0);
            let has_notice = r
                .advisories
                .iter()
                .any(|a| matches!(a, Advisory::UnrecognizedMaterialNotice { .. }));
            prop_assert!(has_notice);
        }
    }
}
