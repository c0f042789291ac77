//! Country data as served by the REST Countries v3.1 API, plus the
//! client-side filtering used by the list view.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Fields requested for the list view.
pub const LIST_FIELDS: &str = "name,capital,region,population,flags,cca3";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NativeName {
    pub common: String,
    pub official: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CountryName {
    pub common: String,
    pub official: String,
    #[serde(default)]
    pub native_name: BTreeMap<String, NativeName>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Currency {
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Country {
    pub name: CountryName,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub tld: Vec<String>,
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    #[serde(default)]
    pub borders: Vec<String>,
    #[serde(default)]
    pub cca3: String,
}

/// Minimal projection used to resolve border codes to names.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CountryRef {
    pub name: CountryName,
    pub cca3: String,
}

impl Country {
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    /// The first native common name, or the English common name when none is listed.
    pub fn native_name(&self) -> &str {
        self.name
            .native_name
            .values()
            .next()
            .map(|native| native.common.as_str())
            .unwrap_or(&self.name.common)
    }

    pub fn capital_display(&self) -> String {
        join_or_dash(self.capital.iter().map(String::as_str))
    }

    pub fn tld_display(&self) -> String {
        join_or_dash(self.tld.iter().map(String::as_str))
    }

    pub fn currencies_display(&self) -> String {
        join_or_dash(self.currencies.values().map(|c| c.name.as_str()))
    }

    pub fn languages_display(&self) -> String {
        join_or_dash(self.languages.values().map(String::as_str))
    }

    pub fn population_display(&self) -> String {
        format_population(self.population)
    }

    pub fn region(&self) -> Option<Region> {
        self.region.parse().ok()
    }
}

fn join_or_dash<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let joined = items.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined
    }
}

/// Formats a number with comma thousands separators, e.g. `67391582` -> `67,391,582`.
pub fn format_population(population: u64) -> String {
    let digits = population.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    Africa,
    Americas,
    Antarctic,
    Asia,
    Europe,
    Oceania,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Africa,
        Region::Americas,
        Region::Antarctic,
        Region::Asia,
        Region::Europe,
        Region::Oceania,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Africa => "Africa",
            Region::Americas => "Americas",
            Region::Antarctic => "Antarctic",
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::Oceania => "Oceania",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown region {0:?}")]
pub struct UnknownRegion(pub String);

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|region| region.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

/// Search and region filter for the country list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CountryFilter {
    pub query: String,
    pub region: Option<Region>,
}

impl CountryFilter {
    pub fn matches(&self, country: &Country) -> bool {
        if let Some(region) = self.region {
            if country.region() != Some(region) {
                return false;
            }
        }

        let query = self.query.trim().to_lowercase();
        query.is_empty()
            || country.name.common.to_lowercase().contains(&query)
            || country.name.official.to_lowercase().contains(&query)
    }

    /// Matching countries sorted by common name.
    pub fn apply<'a>(&self, countries: &'a [Country]) -> Vec<&'a Country> {
        let mut matching: Vec<&Country> = countries.iter().filter(|c| self.matches(c)).collect();
        matching.sort_by(|a, b| a.name.common.cmp(&b.name.common));
        matching
    }
}
