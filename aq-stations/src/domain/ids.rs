//! Numeric identifiers issued by the API.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// Returns the raw numeric value.
            pub fn get(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// Identifier of a monitoring station (`Identyfikator stacji`).
    StationId
);

numeric_id!(
    /// Identifier of a measurement point at a station (`Identyfikator stanowiska`).
    InstallationId
);

numeric_id!(
    /// Identifier of the city a station is located in.
    CityId
);

numeric_id!(
    /// Identifier of the measured parameter (pollutant).
    ParamId
);
