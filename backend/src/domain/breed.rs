//! Cat breed records sourced from the remote catalog.
//!
//! The remote schema is loosely typed and grows over time, so decoding is
//! lenient: only `id` and `name` are required, unknown fields are ignored and
//! an optional field holding a value of the wrong shape decodes as `None`
//! instead of failing the whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Breed weight range as free text, e.g. `"7 - 10"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BreedWeight {
    #[serde(default, deserialize_with = "lenient")]
    #[schema(example = "7 - 10")]
    pub imperial: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    #[schema(example = "3 - 5")]
    pub metric: Option<String>,
}

/// Reference image attached to search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BreedImage {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub width: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub height: Option<u32>,
}

/// A cat breed.
///
/// Trait ratings are on a 1 to 5 scale; boolean-like flags are `0` or `1` as
/// published by the catalog.
///
/// # Examples
/// ```
/// use catapi_backend::domain::Breed;
///
/// let breed: Breed = serde_json::from_str(
///     r#"{"id":"beng","name":"Bengal","energy_level":"high","unknown":true}"#,
/// )
/// .unwrap();
/// assert_eq!(breed.name, "Bengal");
/// assert_eq!(breed.energy_level, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Breed {
    #[schema(example = "beng")]
    pub id: String,
    #[schema(example = "Bengal")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub origin: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub temperament: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub weight: Option<BreedWeight>,
    #[serde(default, deserialize_with = "lenient")]
    pub life_span: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub alt_names: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub country_codes: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub country_code: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub adaptability: Option<u8>,
    #[serde(default, deserialize_with = "lenient")]
    pub affection_level: Option<u8>,
    #[serde(default, deserialize_with = "lenient")]
    pub child_friendly: Option<u8>,
    #[serde(default, deserialize_with = "lenient")]
    pub dog_friendly: Option<u8>,
    #[serde(default, deserialize_with = "lenient")]
    pub energy_level: Option<u8>,
    #[serde(default, deserialize_with = "lenient")]
    pub grooming: Option<u8>,
    #[serde(default, deserialize_with = "lenient")]
    pub health_issues: Option<u8>,
    #[serde(default, deserialize_with = "lenient")]
    pub intelligence: Option<u8>,
    #[serde(default, deserialize_with = "lenient")]
    pub shedding_level: Option<u8>,
    #[serde(default, deserialize_with = "lenient")]
    pub social_needs: Option<u8>,
    #[serde(default, deserialize_with = "lenient")]
    pub stranger_friendly: Option<u8>,
    #[serde(default, deserialize_with = "lenient")]
    pub vocalisation: Option<u8>,

    #[serde(default, deserialize_with = "lenient")]
    pub experimental: Option<u8>,
    #[serde(default, deserialize_with = "lenient")]
    pub hairless: Option<u8>,
    #[serde(default, deserialize_with = "lenient")]
    pub natural: Option<u8>,
    #[serde(default, deserialize_with = "lenient")]
    pub rare: Option<u8>,
    #[serde(default, deserialize_with = "lenient")]
    pub rex: Option<u8>,
    #[serde(default, deserialize_with = "lenient")]
    pub suppressed_tail: Option<u8>,
    #[serde(default, deserialize_with = "lenient")]
    pub short_legs: Option<u8>,
    #[serde(default, deserialize_with = "lenient")]
    pub hypoallergenic: Option<u8>,
    #[serde(default, deserialize_with = "lenient")]
    pub indoor: Option<u8>,
    #[serde(default, deserialize_with = "lenient")]
    pub lap: Option<u8>,

    #[serde(default, deserialize_with = "lenient")]
    pub wikipedia_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub cfa_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub vetstreet_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub vcahospitals_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub reference_image_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub image: Option<BreedImage>,
}

impl Breed {
    /// Minimal record with every optional field unset.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            origin: None,
            description: None,
            temperament: None,
            weight: None,
            life_span: None,
            alt_names: None,
            country_codes: None,
            country_code: None,
            adaptability: None,
            affection_level: None,
            child_friendly: None,
            dog_friendly: None,
            energy_level: None,
            grooming: None,
            health_issues: None,
            intelligence: None,
            shedding_level: None,
            social_needs: None,
            stranger_friendly: None,
            vocalisation: None,
            experimental: None,
            hairless: None,
            natural: None,
            rare: None,
            rex: None,
            suppressed_tail: None,
            short_legs: None,
            hypoallergenic: None,
            indoor: None,
            lap: None,
            wikipedia_url: None,
            cfa_url: None,
            vetstreet_url: None,
            vcahospitals_url: None,
            reference_image_id: None,
            image: None,
        }
    }
}
