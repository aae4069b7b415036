//! Per-user wardrobe inventory and closet import.

pub mod domain;
mod import;
mod service;

pub use domain::{
    GarmentCategory, NewWardrobeItem, WardrobeError, WardrobeItem, WardrobeItemPatch,
};
pub use import::{ClosetCsvImporter, ClosetImportError, ClosetImportReport, SkippedRow};
pub use service::WardrobeService;
