use wardrobe_ai::intelligence::Season;
use wardrobe_ai::wardrobe::{GarmentCategory, NewWardrobeItem};

pub(crate) fn parse_season(raw: &str) -> Result<Season, String> {
    match raw.trim().to_lowercase().as_str() {
        "summer" => Ok(Season::Summer),
        "winter" => Ok(Season::Winter),
        "all-season" | "all_season" | "allseason" => Ok(Season::AllSeason),
        other => Err(format!(
            "unknown season '{other}' (expected summer, winter, or all-season)"
        )),
    }
}

/// Starter closet used when the demo account has nothing to wear yet.
pub(crate) fn demo_wardrobe() -> Vec<NewWardrobeItem> {
    [
        ("Mustard Tee", GarmentCategory::Top, "yellow"),
        ("Crisp Oxford Shirt", GarmentCategory::Top, "white"),
        ("Check Flannel", GarmentCategory::Top, "checked"),
        ("Slim Jeans", GarmentCategory::Bottom, "navy"),
        ("Everyday Chinos", GarmentCategory::Bottom, "black"),
        ("Leather Sneakers", GarmentCategory::Footwear, "black"),
        ("Canvas Low-Tops", GarmentCategory::Footwear, "white"),
        ("Rain Shell", GarmentCategory::Outerwear, "navy"),
    ]
    .into_iter()
    .map(|(name, category, color)| NewWardrobeItem {
        name: name.to_string(),
        category,
        color: color.to_string(),
        occasion: None,
        acquired_on: None,
    })
    .collect()
}
