//! Country/city catalog, built in or loaded from a JSON file

use super::traits::CityLookup;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Catalog shipped with the binary
const BUILTIN: &[(&str, &[&str])] = &[
    (
        "India",
        &["Mumbai", "Delhi", "Bengaluru", "Chennai", "Kolkata", "Hyderabad"],
    ),
    (
        "USA",
        &["New York", "Los Angeles", "Chicago", "Houston", "Seattle"],
    ),
    ("UK", &["London", "Manchester", "Birmingham", "Edinburgh"]),
    ("Canada", &["Toronto", "Vancouver", "Montreal", "Calgary"]),
    ("Australia", &["Sydney", "Melbourne", "Brisbane", "Perth"]),
];

/// Errors raised while loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog lists no countries")]
    Empty,
    #[error("country '{0}' lists no cities")]
    NoCities(String),
    #[error("country '{0}' is listed more than once")]
    DuplicateCountry(String),
}

/// One country and its cities, as stored in a catalog file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    pub country: String,
    pub cities: Vec<String>,
}

/// Ordered country → cities mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCatalog {
    entries: Vec<CountryEntry>,
}

impl CountryCatalog {
    /// The catalog compiled into the binary
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(country, cities)| CountryEntry {
                country: country.to_string(),
                cities: cities.iter().map(|c| c.to_string()).collect(),
            })
            .collect();
        Self { entries }
    }

    /// Build a catalog from entries, rejecting empty or ambiguous data
    pub fn from_entries(entries: Vec<CountryEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.country.as_str()) {
                return Err(CatalogError::DuplicateCountry(entry.country.clone()));
            }
            if entry.cities.is_empty() {
                return Err(CatalogError::NoCities(entry.country.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// Load a catalog from a JSON array of `{"country", "cities"}` objects
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let entries: Vec<CountryEntry> =
            serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_entries(entries)
    }

    /// Load from `path` when given, falling back to the built-in catalog
    /// when there is no path or the file is unusable
    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::builtin();
        };

        match Self::load(path) {
            Ok(catalog) => {
                tracing::info!(
                    "Loaded {} countries from {}",
                    catalog.entries.len(),
                    path.display()
                );
                catalog
            }
            Err(err) => {
                tracing::warn!("Using built-in country catalog: {err}");
                Self::builtin()
            }
        }
    }
}

impl CityLookup for CountryCatalog {
    fn countries(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.country.clone()).collect()
    }

    fn cities(&self, country: &str) -> Vec<String> {
        self.entries
            .iter()
            .find(|e| e.country == country)
            .map(|e| e.cities.clone())
            .unwrap_or_default()
    }
}
