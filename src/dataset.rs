//! Location records as written by the review fetcher (`data.json`), and the
//! glue that attaches key phrases to them.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use walkdir::WalkDir;

use crate::error::{PhraseError, Result};
use crate::extractor::{ExtractOptions, PhraseExtractor};

/// One restaurant location and its raw review texts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u64,
    /// Review texts; `null` entries are kept and read as empty reviews.
    #[serde(default)]
    pub reviews: Vec<Option<String>>,
    /// Always written, as `[]` when nothing could be extracted.
    #[serde(default)]
    pub key_phrases: Vec<String>,
    /// Fields this crate does not interpret, written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub locations: Vec<LocationRecord>,
}

impl Dataset {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PhraseError::MissingPath(path.to_path_buf()));
        }
        let json = fs::read_to_string(path).map_err(|e| PhraseError::io(path, e))?;
        let dataset = Self::from_json_str(&json)?;
        info!(
            "loaded {} locations from {}",
            dataset.locations.len(),
            path.display()
        );
        Ok(dataset)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Replaces every location's `key_phrases` with freshly extracted ones.
///
/// Locations are independent, so they are processed in parallel.
pub fn annotate(
    dataset: &mut Dataset,
    extractor: &PhraseExtractor<'_>,
    options: &ExtractOptions,
) -> Result<()> {
    dataset
        .locations
        .par_iter_mut()
        .try_for_each(|location| -> Result<()> {
            location.key_phrases = extractor.extract(&location.reviews, options)?;
            Ok(())
        })?;
    let without = dataset
        .locations
        .iter()
        .filter(|l| l.key_phrases.is_empty())
        .count();
    if without > 0 {
        warn!("{} locations have no key phrases (no usable reviews)", without);
    }
    Ok(())
}

/// Locations whose name, address, neighborhood or a key phrase contains
/// `query`, ignoring case. An empty query matches everything.
pub fn search<'a>(dataset: &'a Dataset, query: &str) -> Vec<&'a LocationRecord> {
    let needle = query.trim().to_lowercase();
    dataset
        .locations
        .iter()
        .filter(|location| {
            let hit = |field: &str| field.to_lowercase().contains(&needle);
            hit(location.name.as_str())
                || hit(location.address.as_str())
                || location.neighborhood.as_deref().is_some_and(hit)
                || location.key_phrases.iter().any(|p| hit(p.as_str()))
        })
        .collect()
}

/// Stem suffix of every file this crate exports.
pub const EXPORT_SUFFIX: &str = "_phrases";

/// A file path yields itself; a directory yields every `.json` file below it,
/// sorted, except our own exports (stems ending in `_phrases`).
pub fn collect_files(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        return vec![path.to_path_buf()];
    }
    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .filter(|p| !is_export(p))
        .collect();
    files.sort();
    files
}

fn is_export(path: &Path) -> bool {
    let skip = path
        .file_stem()
        .is_some_and(|stem| stem.to_string_lossy().ends_with(EXPORT_SUFFIX));
    if skip {
        debug!("skipping previous export {}", path.display());
    }
    skip
}
