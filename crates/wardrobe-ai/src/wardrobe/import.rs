//! CSV closet import: hydrate a wardrobe from an exported inventory sheet.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use tracing::info;

use super::domain::{GarmentCategory, WardrobeError, WardrobeItem};
use super::service::WardrobeService;
use crate::account::SessionContext;

#[derive(Debug)]
pub enum ClosetImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Wardrobe(WardrobeError),
}

impl std::fmt::Display for ClosetImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClosetImportError::Io(err) => write!(f, "failed to read closet export: {}", err),
            ClosetImportError::Csv(err) => write!(f, "invalid closet CSV data: {}", err),
            ClosetImportError::Wardrobe(err) => {
                write!(f, "could not store imported closet items: {}", err)
            }
        }
    }
}

impl std::error::Error for ClosetImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClosetImportError::Io(err) => Some(err),
            ClosetImportError::Csv(err) => Some(err),
            ClosetImportError::Wardrobe(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ClosetImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ClosetImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<WardrobeError> for ClosetImportError {
    fn from(err: WardrobeError) -> Self {
        Self::Wardrobe(err)
    }
}

/// Row that could not be turned into a wardrobe item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: u64,
    pub reason: String,
}

/// Outcome of an import run.
#[derive(Debug)]
pub struct ClosetImportReport {
    pub imported: Vec<WardrobeItem>,
    pub skipped: Vec<SkippedRow>,
}

pub struct ClosetCsvImporter;

impl ClosetCsvImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        session: &SessionContext,
    ) -> Result<ClosetImportReport, ClosetImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, session)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        session: &SessionContext,
    ) -> Result<ClosetImportReport, ClosetImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let wardrobe = WardrobeService::new(session);
        let mut next_id = wardrobe.next_id()?;
        let mut imported = Vec::new();
        let mut skipped = Vec::new();

        // Line 1 is the header row.
        for (index, record) in csv_reader.deserialize::<ClosetRow>().enumerate() {
            let line = index as u64 + 2;
            let row = record?;

            if row.name.is_empty() {
                skipped.push(SkippedRow {
                    line,
                    reason: "missing item name".to_string(),
                });
                continue;
            }

            let Some(category) = GarmentCategory::from_label(&row.category) else {
                skipped.push(SkippedRow {
                    line,
                    reason: format!("unknown category '{}'", row.category),
                });
                continue;
            };

            if row.color.is_empty() {
                skipped.push(SkippedRow {
                    line,
                    reason: "missing color".to_string(),
                });
                continue;
            }

            let acquired_on = row.acquired_date();
            imported.push(WardrobeItem {
                id: next_id,
                name: row.name,
                category,
                color: row.color.to_lowercase(),
                occasion: row.occasion,
                acquired_on,
            });
            next_id += 1;
        }

        wardrobe.append(imported.clone())?;
        info!(
            imported = imported.len(),
            skipped = skipped.len(),
            "closet import finished"
        );

        Ok(ClosetImportReport { imported, skipped })
    }
}

#[derive(Debug, Deserialize)]
struct ClosetRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Color")]
    color: String,
    #[serde(rename = "Occasion", default, deserialize_with = "empty_string_as_none")]
    occasion: Option<String>,
    #[serde(rename = "Acquired", default, deserialize_with = "empty_string_as_none")]
    acquired: Option<String>,
}

impl ClosetRow {
    // Dates outside YYYY-MM-DD are dropped rather than failing the row.
    fn acquired_date(&self) -> Option<NaiveDate> {
        self.acquired
            .as_deref()
            .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok())
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
