//! # Calculation Settings
//!
//! `CalcOptions` controls which margins and reminders a calculation reports.
//! The arithmetic is the same under every setting; only the optional
//! recommendation fields change.
//!
//! Options travel with a request as JSON when the caller wants them to.
//! Missing keys take their defaults, so `{}` means [`CalcOptions::full`].
//!
//! ## Example
//!
//! ```rust
//! use headloss_core::settings::CalcOptions;
//!
//! let opts: CalcOptions = serde_json::from_str(r#"{"include_ten_percent_margin": false}"#).unwrap();
//! assert_eq!(opts, CalcOptions::compact());
//! ```

use serde::{Deserialize, Serialize};

/// Toggles for the optional parts of a calculation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcOptions {
    /// Report total loss + 10% alongside the always-present + 20%
    pub include_ten_percent_margin: bool,

    /// Remind the caller to add the static (geometric) head between the
    /// water level and the pump to the total
    pub include_static_head_reminder: bool,
}

impl Default for CalcOptions {
    fn default() -> Self {
        Self::full()
    }
}

impl CalcOptions {
    /// Both margins and the static head reminder
    pub fn full() -> Self {
        CalcOptions {
            include_ten_percent_margin: true,
            include_static_head_reminder: true,
        }
    }

    /// + 20% margin and the static head reminder only
    pub fn compact() -> Self {
        CalcOptions {
            include_ten_percent_margin: false,
            include_static_head_reminder: true,
        }
    }

    /// Builder: toggle the 10% margin
    pub fn with_ten_percent_margin(mut self, include: bool) -> Self {
        self.include_ten_percent_margin = include;
        self
    }

    /// Builder: toggle the static head reminder
    pub fn with_static_head_reminder(mut self, include: bool) -> Self {
        self.include_static_head_reminder = include;
        self
    }
}
