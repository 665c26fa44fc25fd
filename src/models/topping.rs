use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{coerce_decimal, require, require_text, NumericInput};
use super::ValidationResult;

/// An add-on that can be mixed into any drink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topping {
    pub id: String,
    pub name: String,
    pub additional_price: Decimal,
    pub description: String,
    pub is_available: bool,
}

/// Request model for creating a topping, as received over the wire
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateToppingRequest {
    pub name: Option<String>,
    pub additional_price: Option<NumericInput>,
    pub description: Option<String>,
    pub is_available: Option<bool>,
}

/// Request model for partially updating a topping
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateToppingRequest {
    pub name: Option<String>,
    pub additional_price: Option<NumericInput>,
    pub description: Option<String>,
    pub is_available: Option<bool>,
}

/// Coerced form of a topping update; the id has no slot here
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToppingPatch {
    pub name: Option<String>,
    pub additional_price: Option<Decimal>,
    pub description: Option<String>,
    pub is_available: Option<bool>,
}

/// Filters for topping listings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToppingFilters {
    pub available: Option<bool>,
}

impl Topping {
    /// Build a new topping from a create request, generating the id and
    /// filling unset fields with defaults.
    pub fn from_request(request: CreateToppingRequest) -> ValidationResult<Self> {
        let name = require_text("name", request.name)?;
        let additional_price_raw = require("additionalPrice", request.additional_price)?;
        let additional_price = coerce_decimal("additionalPrice", &additional_price_raw)?;

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            additional_price,
            description: request.description.unwrap_or_default(),
            is_available: request.is_available.unwrap_or(true),
        })
    }

    /// Merge a patch into the topping. Present fields overwrite; absent
    /// fields keep their stored values.
    pub fn apply_patch(&mut self, patch: ToppingPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(additional_price) = patch.additional_price {
            self.additional_price = additional_price;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(is_available) = patch.is_available {
            self.is_available = is_available;
        }
    }

    /// Check if the topping matches the given filters
    pub fn matches_filters(&self, filters: &ToppingFilters) -> bool {
        if let Some(available) = filters.available {
            if self.is_available != available {
                return false;
            }
        }

        true
    }
}

impl UpdateToppingRequest {
    /// Coerce raw numeric fields, turning the wire request into a typed patch
    pub fn into_patch(self) -> ValidationResult<ToppingPatch> {
        Ok(ToppingPatch {
            name: self.name,
            additional_price: self
                .additional_price
                .map(|raw| coerce_decimal("additionalPrice", &raw))
                .transpose()?,
            description: self.description,
            is_available: self.is_available,
        })
    }
}
