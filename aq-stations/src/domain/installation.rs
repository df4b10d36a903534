//! Measurement points at a station.

use std::fmt;

use serde::Serialize;

use super::{InstallationId, ParamId};

/// A single measurement point: one parameter measured at one station.
///
/// Installations are created by the page parser and never change after
/// that. Each one is owned by exactly one [`Station`](super::Station).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Installation {
    pub id: InstallationId,
    /// Human-readable parameter name, e.g. "pył zawieszony PM10".
    pub param_name: String,
    /// Chemical formula or short label, e.g. "PM10".
    pub param_formula: String,
    pub param_code: String,
    pub param_id: ParamId,
}

impl fmt::Display for Installation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "installation #{}: '{}'", self.id, self.param_formula)
    }
}
