use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Slot a garment occupies when outfits are assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GarmentCategory {
    Top,
    Bottom,
    Footwear,
    Outerwear,
    Accessory,
}

impl GarmentCategory {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Top,
            Self::Bottom,
            Self::Footwear,
            Self::Outerwear,
            Self::Accessory,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Footwear => "footwear",
            Self::Outerwear => "outerwear",
            Self::Accessory => "accessory",
        }
    }

    /// Lenient parse for import files and CLI flags.
    pub fn from_label(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "top" | "tops" => Some(Self::Top),
            "bottom" | "bottoms" => Some(Self::Bottom),
            "footwear" | "shoes" => Some(Self::Footwear),
            "outerwear" | "layer" => Some(Self::Outerwear),
            "accessory" | "accessories" => Some(Self::Accessory),
            _ => None,
        }
    }
}

/// One garment in a user's wardrobe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WardrobeItem {
    pub id: u64,
    pub name: String,
    pub category: GarmentCategory,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acquired_on: Option<NaiveDate>,
}

impl WardrobeItem {
    /// Free-form descriptor handed to the matcher: color first so coarse
    /// color tokens land inside it.
    pub fn descriptor(&self) -> String {
        format!("{} {}", self.color, self.name).to_lowercase()
    }
}

/// Fields accepted when adding an item; the service assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWardrobeItem {
    pub name: String,
    pub category: GarmentCategory,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acquired_on: Option<NaiveDate>,
}

/// Partial update; absent fields keep their stored values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WardrobeItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<GarmentCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
}

/// Error enumeration for wardrobe operations.
#[derive(Debug, thiserror::Error)]
pub enum WardrobeError {
    #[error("wardrobe item {0} not found")]
    NotFound(u64),
    #[error(transparent)]
    Storage(#[from] crate::account::StorageError),
}
