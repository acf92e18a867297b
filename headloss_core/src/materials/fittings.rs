//! Fitting Equivalent Lengths
//!
//! Equivalent straight-pipe lengths for common pool and plumbing fittings,
//! by fitting type, pipe material and nominal diameter. The calculator never
//! reads this table itself; callers use [`FittingTally`] to sum fittings into
//! the single equivalent length the calculation consumes.
//!
//! ## Table (meters)
//!
//! | Fitting            | PVC 50/75/100 | Copper 50/75/100 | Steel 50/75/100 |
//! |--------------------|---------------|------------------|-----------------|
//! | 90° elbow          | 0.6/1.0/1.5   | 0.8/1.2/1.7      | 1.0/1.5/2.0     |
//! | 45° elbow          | 0.4/0.8/1.0   | 0.5/1.0/1.3      | 0.7/1.2/1.5     |
//! | Tee (branch)       | 1.0/1.8/2.5   | 1.2/2.0/2.8      | 1.5/2.5/3.0     |
//! | Check valve        | 2.0/3.5/5.0   | 2.3/4.0/5.5      | 2.5/4.5/6.0     |
//! | Gate valve (cross) | 2.5/4.0/6.0   | 2.8/4.5/6.5      | 3.0/5.0/7.0     |

use serde::{Deserialize, Serialize};

use super::{normalize_name, PipeMaterial};
use crate::calculations::head_loss::check_field;
use crate::errors::{CalcError, CalcResult, InputField};
use crate::units::Meters;

/// Fitting types with tabulated equivalent lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FittingType {
    /// 90° elbow
    Elbow90,
    /// 45° elbow
    Elbow45,
    /// Tee with flow through the branch
    TeeBranch,
    /// Check (non-return) valve
    CheckValve,
    /// Gate valve with cross handle
    GateValve,
}

impl FittingType {
    /// All fitting types in catalog order
    pub const ALL: [FittingType; 5] = [
        FittingType::Elbow90,
        FittingType::Elbow45,
        FittingType::TeeBranch,
        FittingType::CheckValve,
        FittingType::GateValve,
    ];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            FittingType::Elbow90 => "90° elbow",
            FittingType::Elbow45 => "45° elbow",
            FittingType::TeeBranch => "Tee (branch)",
            FittingType::CheckValve => "Check valve",
            FittingType::GateValve => "Gate valve (cross handle)",
        }
    }

    /// Parse from common string representations (English or Portuguese)
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let key: String = normalize_name(s)
            .chars()
            .filter(|c| !matches!(c, '°' | '(' | ')'))
            .map(|c| if matches!(c, '-' | '_') { ' ' } else { c })
            .collect();
        let key = key.split_whitespace().collect::<Vec<_>>().join(" ");

        match key.as_str() {
            "elbow90" | "elbow 90" | "90 elbow" | "curva 90" | "90" => Ok(FittingType::Elbow90),
            "elbow45" | "elbow 45" | "45 elbow" | "curva 45" | "45" => Ok(FittingType::Elbow45),
            "tee" | "tee branch" | "t" | "t desvio" => Ok(FittingType::TeeBranch),
            "check" | "check valve" | "valvula de retencao" | "retencao" => Ok(FittingType::CheckValve),
            "gate" | "gate valve" | "registro em cruz" | "registro" => Ok(FittingType::GateValve),
            _ => Err(CalcError::unknown_fitting(s.trim())),
        }
    }
}

impl std::fmt::Display for FittingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Nominal pipe diameters covered by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NominalDiameter {
    /// DN50
    #[default]
    #[serde(rename = "DN50")]
    Dn50,
    /// DN75
    #[serde(rename = "DN75")]
    Dn75,
    /// DN100
    #[serde(rename = "DN100")]
    Dn100,
}

impl NominalDiameter {
    /// All catalog diameters, smallest first
    pub const ALL: [NominalDiameter; 3] = [NominalDiameter::Dn50, NominalDiameter::Dn75, NominalDiameter::Dn100];

    /// Nominal size in millimeters
    pub fn mm(&self) -> u32 {
        match self {
            NominalDiameter::Dn50 => 50,
            NominalDiameter::Dn75 => 75,
            NominalDiameter::Dn100 => 100,
        }
    }

    /// Look up a catalog diameter by its nominal size in millimeters
    pub fn from_mm(mm: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|dn| dn.mm() == mm)
    }
}

impl std::fmt::Display for NominalDiameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DN{}", self.mm())
    }
}

/// One catalog row
#[derive(Debug, Clone, Copy)]
pub struct FittingEntry {
    pub fitting: FittingType,
    pub material: PipeMaterial,
    pub diameter: NominalDiameter,
    pub equivalent_length_m: f64,
}

const fn entry(
    fitting: FittingType,
    material: PipeMaterial,
    diameter: NominalDiameter,
    equivalent_length_m: f64,
) -> FittingEntry {
    FittingEntry {
        fitting,
        material,
        diameter,
        equivalent_length_m,
    }
}

use FittingType::*;
use NominalDiameter::*;
use PipeMaterial::*;

const FITTING_TABLE: &[FittingEntry] = &[
    entry(Elbow90, Pvc, Dn50, 0.6),
    entry(Elbow90, Pvc, Dn75, 1.0),
    entry(Elbow90, Pvc, Dn100, 1.5),
    entry(Elbow90, Copper, Dn50, 0.8),
    entry(Elbow90, Copper, Dn75, 1.2),
    entry(Elbow90, Copper, Dn100, 1.7),
    entry(Elbow90, Steel, Dn50, 1.0),
    entry(Elbow90, Steel, Dn75, 1.5),
    entry(Elbow90, Steel, Dn100, 2.0),
    entry(Elbow45, Pvc, Dn50, 0.4),
    entry(Elbow45, Pvc, Dn75, 0.8),
    entry(Elbow45, Pvc, Dn100, 1.0),
    entry(Elbow45, Copper, Dn50, 0.5),
    entry(Elbow45, Copper, Dn75, 1.0),
    entry(Elbow45, Copper, Dn100, 1.3),
    entry(Elbow45, Steel, Dn50, 0.7),
    entry(Elbow45, Steel, Dn75, 1.2),
    entry(Elbow45, Steel, Dn100, 1.5),
    entry(TeeBranch, Pvc, Dn50, 1.0),
    entry(TeeBranch, Pvc, Dn75, 1.8),
    entry(TeeBranch, Pvc, Dn100, 2.5),
    entry(TeeBranch, Copper, Dn50, 1.2),
    entry(TeeBranch, Copper, Dn75, 2.0),
    entry(TeeBranch, Copper, Dn100, 2.8),
    entry(TeeBranch, Steel, Dn50, 1.5),
    entry(TeeBranch, Steel, Dn75, 2.5),
    entry(TeeBranch, Steel, Dn100, 3.0),
    entry(CheckValve, Pvc, Dn50, 2.0),
    entry(CheckValve, Pvc, Dn75, 3.5),
    entry(CheckValve, Pvc, Dn100, 5.0),
    entry(CheckValve, Copper, Dn50, 2.3),
    entry(CheckValve, Copper, Dn75, 4.0),
    entry(CheckValve, Copper, Dn100, 5.5),
    entry(CheckValve, Steel, Dn50, 2.5),
    entry(CheckValve, Steel, Dn75, 4.5),
    entry(CheckValve, Steel, Dn100, 6.0),
    entry(GateValve, Pvc, Dn50, 2.5),
    entry(GateValve, Pvc, Dn75, 4.0),
    entry(GateValve, Pvc, Dn100, 6.0),
    entry(GateValve, Copper, Dn50, 2.8),
    entry(GateValve, Copper, Dn75, 4.5),
    entry(GateValve, Copper, Dn100, 6.5),
    entry(GateValve, Steel, Dn50, 3.0),
    entry(GateValve, Steel, Dn75, 5.0),
    entry(GateValve, Steel, Dn100, 7.0),
];

/// All catalog rows
pub fn catalog() -> &'static [FittingEntry] {
    FITTING_TABLE
}

/// Equivalent length of one fitting, if the catalog has the combination
pub fn equivalent_length(fitting: FittingType, material: PipeMaterial, diameter: NominalDiameter) -> Option<Meters> {
    FITTING_TABLE
        .iter()
        .find(|e| e.fitting == fitting && e.material == material && e.diameter == diameter)
        .map(|e| Meters(e.equivalent_length_m))
}

/// Fitting quantities on a pipe run, plus any extra equivalent length the
/// user enters by hand.
///
/// ## Example
///
/// ```rust
/// use headloss_core::materials::{FittingTally, FittingType, NominalDiameter, PipeMaterial};
///
/// let tally = FittingTally::new()
///     .with_fitting(FittingType::Elbow90, 4)
///     .with_fitting(FittingType::CheckValve, 1)
///     .with_additional_m(0.5);
///
/// let total = tally
///     .total_equivalent_length(PipeMaterial::Pvc, NominalDiameter::Dn50)
///     .unwrap();
/// assert!((total.0 - 4.9).abs() < 1e-9); // 4 × 0.6 + 2.0 + 0.5
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FittingTally {
    /// (fitting, quantity) in the order first added
    pub counts: Vec<(FittingType, u32)>,

    /// Manually entered equivalent length (m)
    #[serde(default)]
    pub additional_m: f64,
}

impl FittingTally {
    /// Create an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Add fittings; repeated types accumulate
    pub fn add(&mut self, fitting: FittingType, quantity: u32) {
        match self.counts.iter_mut().find(|(f, _)| *f == fitting) {
            Some((_, q)) => *q = q.saturating_add(quantity),
            None => self.counts.push((fitting, quantity)),
        }
    }

    /// Builder-style [`FittingTally::add`]
    pub fn with_fitting(mut self, fitting: FittingType, quantity: u32) -> Self {
        self.add(fitting, quantity);
        self
    }

    /// Set the manually entered equivalent length
    pub fn with_additional_m(mut self, additional_m: f64) -> Self {
        self.additional_m = additional_m;
        self
    }

    /// Quantity of one fitting type
    pub fn quantity(&self, fitting: FittingType) -> u32 {
        self.counts
            .iter()
            .find(|(f, _)| *f == fitting)
            .map(|(_, q)| *q)
            .unwrap_or(0)
    }

    /// True if at least one fitting has a non-zero quantity
    pub fn has_fittings(&self) -> bool {
        self.counts.iter().any(|&(_, q)| q > 0)
    }

    /// Sum of quantity × catalog length for every fitting, plus the manual length.
    pub fn total_equivalent_length(&self, material: PipeMaterial, diameter: NominalDiameter) -> CalcResult<Meters> {
        let additional_m = check_field(InputField::TotalEquivalentLength, self.additional_m)?;

        let mut total = Meters(additional_m);
        for &(fitting, quantity) in &self.counts {
            if quantity == 0 {
                continue;
            }
            let per_unit = equivalent_length(fitting, material, diameter).ok_or_else(|| CalcError::CatalogEntryMissing {
                fitting: fitting.to_string(),
                material: material.to_string(),
                diameter: diameter.to_string(),
            })?;
            total = total + per_unit * f64::from(quantity);
        }
        Ok(total)
    }
}
