//! Embedded catalog seed

use anyhow::{Context, Result};
use serde::Deserialize;

use super::model::{Difficulty, ExternalReference, Problem};

/// Raw catalog text bundled at compile time
const CATALOG_JSON: &str = include_str!("../../data/catalog.json");

/// An immutable catalog definition, before any progress is layered on top
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    pub title: String,
    pub day: u32,
    pub week: u32,
    pub theme: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub leetcode: Option<ExternalReference>,
    pub technique: String,
}

impl CatalogEntry {
    /// Turn the definition into a pending problem
    pub fn into_problem(self) -> Problem {
        Problem {
            title: self.title,
            day: self.day,
            week: self.week,
            theme: self.theme,
            difficulty: self.difficulty,
            external_reference: self.leetcode,
            technique: self.technique,
            completed: false,
            completed_date: None,
        }
    }
}

/// Parse the bundled catalog
pub fn seed_catalog() -> Result<Vec<CatalogEntry>> {
    serde_json::from_str(CATALOG_JSON).context("Failed to parse bundled catalog")
}

/// The bundled catalog as a fresh, fully pending problem list
pub fn seed_problems() -> Result<Vec<Problem>> {
    Ok(seed_catalog()?.into_iter().map(CatalogEntry::into_problem).collect())
}
