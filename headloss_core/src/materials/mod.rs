//! # Pipe Materials
//!
//! Pipe materials and their Hazen-Williams roughness coefficients, plus the
//! fitting equivalent-length catalog in [`fittings`].
//!
//! ## Coefficients
//!
//! | Material | C   |
//! |----------|-----|
//! | PVC      | 140 |
//! | Copper   | 130 |
//! | Steel    | 100 |
//!
//! ## Unrecognized Materials
//!
//! Material names typed by a user go through [`MaterialCoefficient::parse`].
//! Anything outside the table degrades to the PVC coefficient instead of
//! failing; the calculation then reports an `UnrecognizedMaterialNotice`.
//!
//! ## Example
//!
//! ```rust
//! use headloss_core::materials::{MaterialCoefficient, PipeMaterial};
//!
//! let copper = MaterialCoefficient::parse("  Cobre ");
//! assert_eq!(copper, MaterialCoefficient::Known(PipeMaterial::Copper));
//! assert_eq!(copper.c_factor(), 130.0);
//!
//! let unknown = MaterialCoefficient::parse("HDPE");
//! assert!(!unknown.is_recognized());
//! assert_eq!(unknown.c_factor(), 140.0);
//! ```

pub mod fittings;

pub use fittings::{FittingTally, FittingType, NominalDiameter};

use serde::{Deserialize, Serialize};

/// Pipe materials with a tabulated Hazen-Williams coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PipeMaterial {
    /// PVC (rigid polyvinyl chloride)
    #[serde(rename = "PVC")]
    Pvc,
    /// Copper
    Copper,
    /// Steel (galvanized or black)
    Steel,
}

impl PipeMaterial {
    /// All material variants for UI selection
    pub const ALL: [PipeMaterial; 3] = [PipeMaterial::Pvc, PipeMaterial::Copper, PipeMaterial::Steel];

    /// Material used when the caller's material is unrecognized
    pub const FALLBACK: PipeMaterial = PipeMaterial::Pvc;

    /// Hazen-Williams roughness coefficient C
    pub fn c_factor(&self) -> f64 {
        match self {
            PipeMaterial::Pvc => 140.0,
            PipeMaterial::Copper => 130.0,
            PipeMaterial::Steel => 100.0,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            PipeMaterial::Pvc => "PVC",
            PipeMaterial::Copper => "Copper",
            PipeMaterial::Steel => "Steel",
        }
    }

    /// Parse from common string representations (English or Portuguese,
    /// any casing, with or without accents).
    pub fn from_str_flexible(s: &str) -> Option<Self> {
        match normalize_name(s).as_str() {
            "pvc" => Some(PipeMaterial::Pvc),
            "copper" | "cobre" | "cu" => Some(PipeMaterial::Copper),
            "steel" | "aco" | "galvanized steel" | "aco galvanizado" => Some(PipeMaterial::Steel),
            _ => None,
        }
    }
}

impl std::fmt::Display for PipeMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Material as supplied to a calculation: either a tabulated material or a
/// name we could not match.
///
/// ## JSON Serialization
///
/// ```json
/// { "type": "Known", "value": "PVC" }
/// { "type": "Unrecognized", "value": "HDPE" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum MaterialCoefficient {
    /// A material from the coefficient table
    Known(PipeMaterial),
    /// Free-text material outside the table; calculated as PVC
    Unrecognized(String),
}

impl MaterialCoefficient {
    /// Resolve a user-entered material name. Never fails.
    pub fn parse(s: &str) -> Self {
        match PipeMaterial::from_str_flexible(s) {
            Some(material) => MaterialCoefficient::Known(material),
            None => MaterialCoefficient::Unrecognized(s.trim().to_string()),
        }
    }

    /// Hazen-Williams coefficient, falling back to PVC for unknown names
    pub fn c_factor(&self) -> f64 {
        self.material().c_factor()
    }

    /// The tabulated material used for the calculation
    pub fn material(&self) -> PipeMaterial {
        match self {
            MaterialCoefficient::Known(material) => *material,
            MaterialCoefficient::Unrecognized(_) => PipeMaterial::FALLBACK,
        }
    }

    /// True when the material matched the coefficient table
    pub fn is_recognized(&self) -> bool {
        matches!(self, MaterialCoefficient::Known(_))
    }
}

impl From<PipeMaterial> for MaterialCoefficient {
    fn from(material: PipeMaterial) -> Self {
        MaterialCoefficient::Known(material)
    }
}

impl std::fmt::Display for MaterialCoefficient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterialCoefficient::Known(material) => write!(f, "{}", material),
            MaterialCoefficient::Unrecognized(name) => write!(f, "{} (unrecognized)", name),
        }
    }
}

/// Trim, lowercase, collapse inner whitespace and strip Latin diacritics.
pub(crate) fn normalize_name(s: &str) -> String {
    let folded: String = s.trim().to_lowercase().chars().map(fold_diacritic).collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        other => other,
    }
}
