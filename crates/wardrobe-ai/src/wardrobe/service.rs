use tracing::debug;

use super::domain::{
    GarmentCategory, NewWardrobeItem, WardrobeError, WardrobeItem, WardrobeItemPatch,
};
use crate::account::SessionContext;

const WARDROBE_KEY: &str = "wardrobe_items";

/// Per-user garment inventory over the session's namespaced storage.
pub struct WardrobeService<'a> {
    session: &'a SessionContext,
}

impl<'a> WardrobeService<'a> {
    pub fn new(session: &'a SessionContext) -> Self {
        Self { session }
    }

    pub fn items(&self) -> Result<Vec<WardrobeItem>, WardrobeError> {
        Ok(self
            .session
            .load_data::<Vec<WardrobeItem>>(WARDROBE_KEY)?
            .unwrap_or_default())
    }

    pub fn by_category(&self, category: GarmentCategory) -> Result<Vec<WardrobeItem>, WardrobeError> {
        Ok(self
            .items()?
            .into_iter()
            .filter(|item| item.category == category)
            .collect())
    }

    pub fn get(&self, id: u64) -> Result<WardrobeItem, WardrobeError> {
        self.items()?
            .into_iter()
            .find(|item| item.id == id)
            .ok_or(WardrobeError::NotFound(id))
    }

    pub fn add(&self, new: NewWardrobeItem) -> Result<WardrobeItem, WardrobeError> {
        let mut items = self.items()?;
        let id = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;

        let item = WardrobeItem {
            id,
            name: new.name.trim().to_string(),
            category: new.category,
            color: new.color.trim().to_lowercase(),
            occasion: new.occasion,
            acquired_on: new.acquired_on,
        };

        items.push(item.clone());
        self.save(&items)?;
        debug!(id, name = %item.name, "wardrobe item added");
        Ok(item)
    }

    pub fn update(&self, id: u64, patch: WardrobeItemPatch) -> Result<WardrobeItem, WardrobeError> {
        let mut items = self.items()?;
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(WardrobeError::NotFound(id))?;

        if let Some(name) = patch.name {
            item.name = name.trim().to_string();
        }
        if let Some(category) = patch.category {
            item.category = category;
        }
        if let Some(color) = patch.color {
            item.color = color.trim().to_lowercase();
        }
        if let Some(occasion) = patch.occasion {
            item.occasion = Some(occasion);
        }

        let updated = item.clone();
        self.save(&items)?;
        Ok(updated)
    }

    pub fn remove(&self, id: u64) -> Result<WardrobeItem, WardrobeError> {
        let mut items = self.items()?;
        let index = items
            .iter()
            .position(|item| item.id == id)
            .ok_or(WardrobeError::NotFound(id))?;

        let removed = items.remove(index);
        self.save(&items)?;
        debug!(id, "wardrobe item removed");
        Ok(removed)
    }

    pub(crate) fn append(&self, new_items: Vec<WardrobeItem>) -> Result<(), WardrobeError> {
        let mut items = self.items()?;
        items.extend(new_items);
        self.save(&items)
    }

    pub(crate) fn next_id(&self) -> Result<u64, WardrobeError> {
        Ok(self.items()?.iter().map(|item| item.id).max().unwrap_or(0) + 1)
    }

    fn save(&self, items: &[WardrobeItem]) -> Result<(), WardrobeError> {
        self.session.save_data(WARDROBE_KEY, &items)?;
        Ok(())
    }
}
