//! Wire schema of the station API.
//!
//! Response documents use Polish labels as JSON keys. This is the one place
//! that knows them; each raw record type maps the labels onto English fields
//! and converts into the matching domain type.
//!
//! | JSON key                     | Field                    |
//! |------------------------------|--------------------------|
//! | `Identyfikator stacji`       | `Station::id`            |
//! | `Kod stacji`                 | `Station::code`          |
//! | `Nazwa stacji`               | `Station::name`          |
//! | `WGS84 φ N`                  | `Station::latitude`      |
//! | `WGS84 λ E`                  | `Station::longitude`     |
//! | `Identyfikator miasta`       | `City::id`               |
//! | `Nazwa miasta`               | `City::name`             |
//! | `Gmina`                      | `City::commune`          |
//! | `Powiat`                     | `City::district`         |
//! | `Województwo`                | `City::province`         |
//! | `Ulica`                      | `Station::address_street`|
//! | `Identyfikator stanowiska`   | `Installation::id`       |
//! | `Wskaźnik`                   | `Installation::param_name` |
//! | `Wskaźnik - wzór`            | `Installation::param_formula` |
//! | `Wskaźnik - kod`             | `Installation::param_code` |
//! | `Id wskaźnika`               | `Installation::param_id` |

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};

use crate::domain::{City, CityId, Installation, InstallationId, ParamId, Station, StationId};

/// Key holding the number of pages in every listing response.
pub const TOTAL_PAGES_FIELD: &str = "totalPages";

/// The two kinds of record the API lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Station,
    Installation,
}

impl EntityKind {
    /// Key of the record list in a page document.
    pub fn list_field(self) -> &'static str {
        match self {
            EntityKind::Station => "Lista stacji pomiarowych",
            EntityKind::Installation => "Lista stanowisk pomiarowych dla podanej stacji",
        }
    }
}

/// A domain type that can be parsed from a listing page.
pub trait Entity: Sized {
    /// Which list this entity is read from.
    const KIND: EntityKind;

    /// The wire shape of one record.
    type Raw: DeserializeOwned + Into<Self>;
}

impl Entity for Station {
    const KIND: EntityKind = EntityKind::Station;
    type Raw = RawStation;
}

impl Entity for Installation {
    const KIND: EntityKind = EntityKind::Installation;
    type Raw = RawInstallation;
}

/// One record of the `findAll` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStation {
    #[serde(rename = "Identyfikator stacji")]
    pub id: StationId,

    #[serde(rename = "Kod stacji")]
    pub code: String,

    #[serde(rename = "Nazwa stacji")]
    pub name: String,

    #[serde(rename = "WGS84 φ N", deserialize_with = "coordinate")]
    pub latitude: f64,

    #[serde(rename = "WGS84 λ E", deserialize_with = "coordinate")]
    pub longitude: f64,

    #[serde(rename = "Identyfikator miasta")]
    pub city_id: CityId,

    #[serde(rename = "Nazwa miasta")]
    pub city_name: String,

    #[serde(rename = "Gmina")]
    pub commune: String,

    #[serde(rename = "Powiat")]
    pub district: String,

    #[serde(rename = "Województwo")]
    pub province: String,

    /// Null for stations without a street address. The key itself is required.
    #[serde(rename = "Ulica", deserialize_with = "nullable")]
    pub street: Option<String>,
}

impl From<RawStation> for Station {
    fn from(raw: RawStation) -> Self {
        let city = City {
            id: raw.city_id,
            name: raw.city_name,
            commune: raw.commune,
            district: raw.district,
            province: raw.province,
        };
        Station::new(
            raw.id,
            raw.code,
            raw.name,
            raw.latitude,
            raw.longitude,
            city,
            raw.street,
        )
    }
}

/// One record of the `sensors/<station>` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct RawInstallation {
    #[serde(rename = "Identyfikator stanowiska")]
    pub id: InstallationId,

    #[serde(rename = "Wskaźnik")]
    pub param_name: String,

    #[serde(rename = "Wskaźnik - wzór")]
    pub param_formula: String,

    #[serde(rename = "Wskaźnik - kod")]
    pub param_code: String,

    #[serde(rename = "Id wskaźnika")]
    pub param_id: ParamId,
}

impl From<RawInstallation> for Installation {
    fn from(raw: RawInstallation) -> Self {
        Installation {
            id: raw.id,
            param_name: raw.param_name,
            param_formula: raw.param_formula,
            param_code: raw.param_code,
            param_id: raw.param_id,
        }
    }
}

/// Coordinates arrive as decimal strings ("51.129378"); accept plain numbers too.
fn coordinate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Coordinate {
        Number(f64),
        Text(String),
    }

    match Coordinate::deserialize(deserializer)? {
        Coordinate::Number(value) => Ok(value),
        Coordinate::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid coordinate: {text:?}"))),
    }
}

/// A value that must be present but may be null.
///
/// `deserialize_with` opts the field out of serde's implicit `None` for a
/// missing `Option`, so an absent key is an error.
fn nullable<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}
