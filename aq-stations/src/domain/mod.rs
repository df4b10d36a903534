//! Domain types for the station dataset.
//!
//! These are the validated, English-named forms of the API records. The raw
//! wire shapes live in [`crate::gios`]; everything downstream of the parser
//! works with these types only.

mod ids;
mod installation;
mod station;

pub use ids::{CityId, InstallationId, ParamId, StationId};
pub use installation::Installation;
pub use station::{City, Station};
