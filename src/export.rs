//! Writing annotated datasets to disk in several formats.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::prelude::*;
use clap::ValueEnum;
use csv::WriterBuilder;

use crate::dataset::{Dataset, EXPORT_SUFFIX};
use crate::error::{PhraseError, Result};

/// Separator between phrases inside one CSV/TSV cell.
pub const PHRASE_SEPARATOR: &str = "; ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Txt,
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }
}

///Neutralize spreadsheet formulas: cells starting with `= + - @`, tab or CR get a leading `'`.
/// # Example
/// ```
/// use review_phrases::csv_safe_cell;
/// assert_eq!(csv_safe_cell("=SUM(A1)".to_string()), "'=SUM(A1)");
/// assert_eq!(csv_safe_cell("'@ok".to_string()), "'@ok");
/// assert_eq!(csv_safe_cell("crispy".to_string()), "crispy");
/// ```
pub fn csv_safe_cell(cell: String) -> String {
    match cell.chars().next() {
        Some('=' | '+' | '-' | '@' | '\t' | '\r') => format!("'{cell}"),
        _ => cell,
    }
}

/// Plain-text overview: one block per location with its key phrases.
pub fn summary(dataset: &Dataset) -> String {
    let mut out = String::new();
    if let Some(updated) = &dataset.last_updated {
        out.push_str(&format!("Last updated: {updated}\n\n"));
    }
    for location in &dataset.locations {
        let phrases = if location.key_phrases.is_empty() {
            "-".to_string()
        } else {
            location.key_phrases.join(", ")
        };
        out.push_str(&format!(
            "{} ({}, rating {:.1}, {} reviews)\n  Key phrases: {}\n\n",
            location.name,
            location.neighborhood.as_deref().unwrap_or("unknown area"),
            location.rating,
            location.review_count,
            phrases
        ));
    }
    out.push_str(&format!("locations: {}\n", dataset.locations.len()));
    out
}

/// Serializes `dataset` in `format` without touching the filesystem.
pub fn render(dataset: &Dataset, format: ExportFormat) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Json => Ok(dataset.to_json_pretty()?.into_bytes()),
        ExportFormat::Txt => Ok(summary(dataset).into_bytes()),
        ExportFormat::Csv => write_table(dataset, b','),
        ExportFormat::Tsv => write_table(dataset, b'\t'),
    }
}

fn write_table(dataset: &Dataset, delimiter: u8) -> Result<Vec<u8>> {
    let mut wtr = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    wtr.write_record([
        "name",
        "address",
        "neighborhood",
        "rating",
        "review_count",
        "key_phrases",
    ])?;
    for location in &dataset.locations {
        wtr.write_record([
            csv_safe_cell(location.name.clone()),
            csv_safe_cell(location.address.clone()),
            csv_safe_cell(location.neighborhood.clone().unwrap_or_default()),
            location.rating.to_string(),
            location.review_count.to_string(),
            csv_safe_cell(location.key_phrases.join(PHRASE_SEPARATOR)),
        ])?;
    }
    wtr.into_inner()
        .map_err(|e| PhraseError::Csv(e.into_error().into()))
}

/// `<stem>_<YYYYMMDD>_<HHMMSS>[_<n>]_phrases.<ext>`; `n` is only added from 2 on.
pub fn export_file_name(
    stem: &str,
    stamp: &DateTime<Local>,
    attempt: usize,
    format: ExportFormat,
) -> String {
    let stamp = stamp.format("%Y%m%d_%H%M%S");
    let ext = format.extension();
    if attempt <= 1 {
        format!("{stem}_{stamp}{EXPORT_SUFFIX}.{ext}")
    } else {
        format!("{stem}_{stamp}_{attempt}{EXPORT_SUFFIX}.{ext}")
    }
}

///save the rendered dataset into `dir`. Returns the path written.
///
/// Never overwrites: if the timestamped name is taken (e.g. two `data.json`
/// from sibling directories in the same second) a counter is added.
pub fn save_dataset(
    dataset: &Dataset,
    stem: &str,
    dir: &Path,
    format: ExportFormat,
) -> Result<PathBuf> {
    let bytes = render(dataset, format)?;
    let (path, mut file) = create_unique(dir, stem, format)?;
    file.write_all(&bytes).map_err(|e| PhraseError::io(&path, e))?;

    Ok(path)
}

fn create_unique(dir: &Path, stem: &str, format: ExportFormat) -> Result<(PathBuf, File)> {
    let stamp: DateTime<Local> = Local::now();
    let mut attempt = 1;
    loop {
        let path = dir.join(export_file_name(stem, &stamp, attempt, format));
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(PhraseError::io(&path, e)),
        }
    }
}
