//! Monitoring stations.

use std::fmt;

use serde::Serialize;

use super::{CityId, Installation, StationId};

/// Administrative location of a station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    /// Gmina.
    pub commune: String,
    /// Powiat.
    pub district: String,
    /// Województwo.
    pub province: String,
}

/// A physical air-quality monitoring site.
///
/// Stations come out of the parser with no installations. The orchestrator
/// fills them in once, after every installation page for the station has
/// been fetched; the list is read-only from then on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub id: StationId,
    pub code: String,
    pub name: String,
    /// WGS84 latitude (degrees north).
    pub latitude: f64,
    /// WGS84 longitude (degrees east).
    pub longitude: f64,
    pub city: City,
    /// Street address. Not every station has one.
    pub address_street: Option<String>,
    installations: Vec<Installation>,
}

impl Station {
    /// Create a station with no installations.
    pub fn new(
        id: StationId,
        code: impl Into<String>,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        city: City,
        address_street: Option<String>,
    ) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            latitude,
            longitude,
            city,
            address_street,
            installations: Vec::new(),
        }
    }

    /// Append a batch of installations to this station.
    pub fn add_installations(&mut self, installations: impl IntoIterator<Item = Installation>) {
        self.installations.extend(installations);
    }

    /// The installations owned by this station.
    pub fn installations(&self) -> &[Installation] {
        &self.installations
    }

    /// Number of installations owned by this station.
    pub fn installation_count(&self) -> usize {
        self.installations.len()
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Station #{} ({}):", self.id, self.name)?;
        for (i, installation) in self.installations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{installation}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{InstallationId, ParamId};

    fn station() -> Station {
        Station::new(
            StationId(114),
            "DsWrocWybCon",
            "Wrocław, ul. Wyb. J. Conrada-Korzeniowskiego",
            51.129378,
            17.02925,
            City {
                id: CityId(1064),
                name: "Wrocław".to_string(),
                commune: "Wrocław".to_string(),
                district: "Wrocław".to_string(),
                province: "DOLNOŚLĄSKIE".to_string(),
            },
            Some("ul. Wyb. J. Conrada-Korzeniowskiego 18".to_string()),
        )
    }

    fn installation(id: u32, formula: &str) -> Installation {
        Installation {
            id: InstallationId(id),
            param_name: formula.to_lowercase(),
            param_formula: formula.to_string(),
            param_code: formula.to_string(),
            param_id: ParamId(id),
        }
    }

    #[test]
    fn new_station_has_no_installations() {
        let station = station();
        assert_eq!(station.installation_count(), 0);
        assert!(station.installations().is_empty());
    }

    #[test]
    fn add_installations_appends_in_order() {
        let mut station = station();
        station.add_installations(vec![installation(1, "PM10"), installation(2, "NO2")]);
        station.add_installations(vec![installation(3, "O3")]);

        let ids: Vec<_> = station.installations().iter().map(|i| i.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(station.installation_count(), 3);
    }

    #[test]
    fn add_empty_batch_is_noop() {
        let mut station = station();
        station.add_installations(Vec::new());
        assert_eq!(station.installation_count(), 0);
    }

    #[test]
    fn display_lists_installations() {
        let mut station = station();
        station.add_installations(vec![installation(1, "PM10"), installation(2, "NO2")]);

        assert_eq!(
            station.to_string(),
            "Station #114 (Wrocław, ul. Wyb. J. Conrada-Korzeniowskiego):\n\
             installation #1: 'PM10'\n\
             installation #2: 'NO2'"
        );
    }

    #[test]
    fn display_without_installations() {
        assert_eq!(
            station().to_string(),
            "Station #114 (Wrocław, ul. Wyb. J. Conrada-Korzeniowskiego):\n"
        );
    }

    #[test]
    fn serializes_with_installations() {
        let mut station = station();
        station.add_installations(vec![installation(1, "PM10")]);

        let json = serde_json::to_value(&station).unwrap();
        assert_eq!(json["id"], 114);
        assert_eq!(json["city"]["province"], "DOLNOŚLĄSKIE");
        assert_eq!(json["installations"][0]["param_formula"], "PM10");
    }
}
