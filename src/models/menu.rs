use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

use super::validation::{
    coerce_decimal, coerce_integer, optional_integer, require, require_text, NumericInput,
};
use super::ValidationResult;

/// Catalog defaults applied when a create request leaves a field unset
pub const DEFAULT_SWEETNESS_LEVEL: i64 = 100;
pub const DEFAULT_ICE_LEVEL: i64 = 100;
pub const DEFAULT_POPULARITY: i64 = 0;

/// A drink on the shop menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub base_price: Decimal,
    pub description: String,
    pub category: String,
    pub sweetness_level: i64,
    pub ice_level: i64,
    pub image_url: String,
    pub is_available: bool,
    pub popularity: i64,
}

/// Request model for creating a menu item, as received over the wire.
/// Every field is optional here; required-field and numeric checks run during
/// validation so a bad payload gets an envelope error instead of a decode
/// failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuItemRequest {
    pub name: Option<String>,
    pub base_price: Option<NumericInput>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub sweetness_level: Option<NumericInput>,
    pub ice_level: Option<NumericInput>,
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
    pub popularity: Option<NumericInput>,
}

/// Request model for partially updating a menu item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMenuItemRequest {
    pub name: Option<String>,
    pub base_price: Option<NumericInput>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub sweetness_level: Option<NumericInput>,
    pub ice_level: Option<NumericInput>,
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
    pub popularity: Option<NumericInput>,
}

/// Coerced form of an update request. Only these fields can change on a
/// stored item; the id has no slot here, so a payload id never reaches the
/// collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuItemPatch {
    pub name: Option<String>,
    pub base_price: Option<Decimal>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub sweetness_level: Option<i64>,
    pub ice_level: Option<i64>,
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
    pub popularity: Option<i64>,
}

/// Filters for menu listings, applied conjunctively
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuFilters {
    pub category: Option<String>,
    pub available: Option<bool>,
}

/// Recognized sort keys for menu listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSortKey {
    Price,
    Popularity,
}

impl MenuSortKey {
    /// Parse a `sortBy` parameter. The match is exact and case-sensitive;
    /// unrecognized keys mean "do not sort".
    pub fn from_param(param: &str) -> Option<Self> {
        match param {
            "price" => Some(MenuSortKey::Price),
            "popularity" => Some(MenuSortKey::Popularity),
            _ => None,
        }
    }
}

/// Sort direction for menu listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Only the literal `desc` reverses a key's natural direction; any other
    /// value keeps it.
    pub fn from_param(param: &str) -> Self {
        if param == "desc" {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }
}

/// Sort instruction for menu listings
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MenuSort {
    pub key: Option<MenuSortKey>,
    pub order: SortOrder,
}

impl MenuSort {
    /// Sort items in place. The sort is stable and an unset or unrecognized
    /// key leaves the slice untouched, so filtered order survives.
    pub fn apply(&self, items: &mut [MenuItem]) {
        if let Some(key) = self.key {
            items.sort_by(|a, b| {
                let ordering = a.compare_by(b, key);
                match self.order {
                    SortOrder::Ascending => ordering,
                    SortOrder::Descending => ordering.reverse(),
                }
            });
        }
    }
}

impl MenuItem {
    /// Build a new menu item from a create request, generating the id and
    /// filling unset fields with catalog defaults.
    pub fn from_request(request: CreateMenuItemRequest) -> ValidationResult<Self> {
        let name = require_text("name", request.name)?;
        let base_price_raw = require("basePrice", request.base_price)?;
        let base_price = coerce_decimal("basePrice", &base_price_raw)?;
        let category = require_text("category", request.category)?;

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            base_price,
            description: request.description.unwrap_or_default(),
            category,
            sweetness_level: optional_integer(
                "sweetnessLevel",
                request.sweetness_level,
                DEFAULT_SWEETNESS_LEVEL,
            )?,
            ice_level: optional_integer("iceLevel", request.ice_level, DEFAULT_ICE_LEVEL)?,
            image_url: request.image_url.unwrap_or_default(),
            is_available: request.is_available.unwrap_or(true),
            popularity: optional_integer("popularity", request.popularity, DEFAULT_POPULARITY)?,
        })
    }

    /// Merge a patch into the item. Present fields overwrite; absent fields
    /// keep their stored values.
    pub fn apply_patch(&mut self, patch: MenuItemPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(base_price) = patch.base_price {
            self.base_price = base_price;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(sweetness_level) = patch.sweetness_level {
            self.sweetness_level = sweetness_level;
        }
        if let Some(ice_level) = patch.ice_level {
            self.ice_level = ice_level;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(is_available) = patch.is_available {
            self.is_available = is_available;
        }
        if let Some(popularity) = patch.popularity {
            self.popularity = popularity;
        }
    }

    /// Check if the item matches the given filters
    pub fn matches_filters(&self, filters: &MenuFilters) -> bool {
        if let Some(category) = &filters.category {
            if self.category.to_lowercase() != category.to_lowercase() {
                return false;
            }
        }

        if let Some(available) = filters.available {
            if self.is_available != available {
                return false;
            }
        }

        true
    }

    /// Comparator for a sort key in its natural direction. Price ranks
    /// ascending; popularity ranks descending (most popular first), which
    /// means a descending sort order yields least-popular-first.
    pub fn compare_by(&self, other: &Self, key: MenuSortKey) -> Ordering {
        match key {
            MenuSortKey::Price => self.base_price.cmp(&other.base_price),
            MenuSortKey::Popularity => other.popularity.cmp(&self.popularity),
        }
    }
}

impl UpdateMenuItemRequest {
    /// Coerce raw numeric fields, turning the wire request into a typed patch
    pub fn into_patch(self) -> ValidationResult<MenuItemPatch> {
        Ok(MenuItemPatch {
            name: self.name,
            base_price: self
                .base_price
                .map(|raw| coerce_decimal("basePrice", &raw))
                .transpose()?,
            description: self.description,
            category: self.category,
            sweetness_level: self
                .sweetness_level
                .map(|raw| coerce_integer("sweetnessLevel", &raw))
                .transpose()?,
            ice_level: self
                .ice_level
                .map(|raw| coerce_integer("iceLevel", &raw))
                .transpose()?,
            image_url: self.image_url,
            is_available: self.is_available,
            popularity: self
                .popularity
                .map(|raw| coerce_integer("popularity", &raw))
                .transpose()?,
        })
    }
}
