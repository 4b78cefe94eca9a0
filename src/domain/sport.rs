//! Sport catalog: the closed set of sports the reader cares about.
//!
//! The upstream API names sports in the language of the request, so each
//! sport carries one canonical name per supported [`Locale`]. Matching
//! against wire data is an exact string comparison on that name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language the betting line is requested and matched in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Russian, the upstream default.
    #[default]
    Ru,
    /// English.
    En,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ru => write!(f, "ru"),
            Self::En => write!(f, "en"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ru" => Ok(Self::Ru),
            "en" => Ok(Self::En),
            other => Err(format!("unknown locale '{other}', expected 'ru' or 'en'")),
        }
    }
}

/// A sport of interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Football,
    Hockey,
    Tennis,
    Basketball,
}

impl Sport {
    /// Every sport in the catalog, in declaration order.
    pub const ALL: [Self; 4] = [
        Sport::Football,
        Sport::Hockey,
        Sport::Tennis,
        Sport::Basketball,
    ];

    /// Canonical display name in the given locale.
    #[must_use]
    pub const fn name(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Football, Locale::Ru) => "Футбол",
            (Self::Hockey, Locale::Ru) => "Хоккей",
            (Self::Tennis, Locale::Ru) => "Теннис",
            (Self::Basketball, Locale::Ru) => "Баскетбол",
            (Self::Football, Locale::En) => "Football",
            (Self::Hockey, Locale::En) => "Hockey",
            (Self::Tennis, Locale::En) => "Tennis",
            (Self::Basketball, Locale::En) => "Basketball",
        }
    }

    /// Look up a sport by its exact display name in `locale`.
    #[must_use]
    pub fn from_name(name: &str, locale: Locale) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|sport| sport.name(locale) == name)
    }
}

/// Locale-bound view of the sport catalog.
///
/// Extraction and formatting both need to agree on one locale; carrying it
/// in a single value keeps them from drifting apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SportCatalog {
    locale: Locale,
}

impl SportCatalog {
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Resolve a wire sport name to a catalog entry.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Sport> {
        Sport::from_name(name, self.locale)
    }

    /// True when `name` names one of the catalog sports.
    #[must_use]
    pub fn is_of_interest(&self, name: &str) -> bool {
        Sport::ALL
            .iter()
            .any(|sport| sport.name(self.locale) == name)
    }

    /// Display name of `sport` in this catalog's locale.
    #[must_use]
    pub const fn display_name(&self, sport: Sport) -> &'static str {
        sport.name(self.locale)
    }
}
