use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use uuid::Uuid;

/// A country as served by the remote dataset.
///
/// Only `name.common` and `cca2` are required. Every other field tolerates
/// absence, `null` or a mistyped value, which all read as "not available".
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Country {
    pub name: CountryName,
    #[serde(default, deserialize_with = "lenient")]
    pub capital: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub region: String,
    #[serde(default, deserialize_with = "lenient")]
    pub subregion: Option<String>,
    /// Language code to language name, in the order received.
    #[serde(default, deserialize_with = "lenient")]
    pub languages: Option<IndexMap<String, String>>,
    /// Currency code to currency details, in the order received.
    #[serde(default, deserialize_with = "lenient")]
    pub currencies: Option<IndexMap<String, Currency>>,
    #[serde(default, deserialize_with = "lenient")]
    pub flags: Flags,
    pub cca2: String,
    #[serde(default, deserialize_with = "lenient")]
    pub population: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub area: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default, deserialize_with = "lenient")]
    pub official: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Flags {
    #[serde(default, deserialize_with = "lenient")]
    pub png: String,
    #[serde(default, deserialize_with = "lenient")]
    pub svg: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Currency {
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub code: Option<String>,
}

/// Decode a field, falling back to its default when the value is `null` or
/// has an unexpected shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

impl Country {
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    pub fn official_name(&self) -> &str {
        &self.name.official
    }

    /// Stable key of the country within the dataset.
    pub fn code(&self) -> &str {
        &self.cca2
    }

    /// The first listed capital, if any non-empty one exists.
    pub fn capital(&self) -> Option<&str> {
        self.capital
            .as_ref()
            .and_then(|capitals| capitals.first())
            .map(String::as_str)
            .filter(|capital| !capital.is_empty())
    }

    pub fn subregion(&self) -> Option<&str> {
        self.subregion.as_deref().filter(|s| !s.is_empty())
    }

    pub fn flag_url(&self) -> &str {
        &self.flags.png
    }
}

/// Continent filter offered to the user. `All` disables region filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    All,
    Africa,
    Antarctica,
    Asia,
    Europe,
    NorthAmerica,
    Oceania,
    SouthAmerica,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::All,
        Category::Africa,
        Category::Antarctica,
        Category::Asia,
        Category::Europe,
        Category::NorthAmerica,
        Category::Oceania,
        Category::SouthAmerica,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Africa => "Africa",
            Category::Antarctica => "Antarctica",
            Category::Asia => "Asia",
            Category::Europe => "Europe",
            Category::NorthAmerica => "North America",
            Category::Oceania => "Oceania",
            Category::SouthAmerica => "South America",
        }
    }

    /// Whether a country's `region` passes this filter. Exact match, case included.
    pub fn admits(self, region: &str) -> bool {
        match self {
            Category::All => true,
            other => other.label() == region,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown continent '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', '_'], " ");
        Category::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Session-unique identifier of a person record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonId(Uuid);

impl PersonId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for PersonId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A locally entered person. Lives only as long as the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    /// Matches a `Country::common_name` by value; not checked against the dataset.
    pub country_name: String,
}

/// In-progress person form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub country_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    FullName,
    Email,
    Phone,
    City,
    Country,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DraftField::FullName => "full name",
            DraftField::Email => "email",
            DraftField::Phone => "phone",
            DraftField::City => "city",
            DraftField::Country => "country",
        })
    }
}

impl PersonDraft {
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::FullName => self.full_name = value,
            DraftField::Email => self.email = value,
            DraftField::Phone => self.phone = value,
            DraftField::City => self.city = value,
            DraftField::Country => self.country_name = value,
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::FullName => &self.full_name,
            DraftField::Email => &self.email,
            DraftField::Phone => &self.phone,
            DraftField::City => &self.city,
            DraftField::Country => &self.country_name,
        }
    }

    /// First required field left empty, in form order.
    pub fn missing_field(&self) -> Option<DraftField> {
        [DraftField::FullName, DraftField::Email, DraftField::Country]
            .into_iter()
            .find(|field| self.get(*field).is_empty())
    }

    pub fn is_empty(&self) -> bool {
        *self == PersonDraft::default()
    }
}
