//! The drink entity and the typed parameters accepted by catalog operations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Maximum length of a drink name, in characters.
pub const NAME_MAX_LEN: usize = 100;

/// A persisted drink.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Drink {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub duration: i32,
}

/// Validated input for creating a drink.
#[derive(Clone, Debug, PartialEq)]
pub struct NewDrink {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub duration: i32,
}

impl NewDrink {
    pub(crate) fn into_drink(self, id: i64) -> Drink {
        Drink {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            duration: self.duration,
        }
    }
}

/// Validated field replacements for an existing drink. `None` leaves the field as is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrinkChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<i32>,
}

impl DrinkChanges {
    pub fn price(price: f64) -> Self {
        DrinkChanges {
            price: Some(price),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.duration.is_none()
    }

    pub(crate) fn apply(&self, drink: &mut Drink) {
        if let Some(name) = &self.name {
            drink.name = name.clone();
        }
        if let Some(description) = &self.description {
            drink.description = Some(description.clone());
        }
        if let Some(price) = self.price {
            drink.price = price;
        }
        if let Some(duration) = self.duration {
            drink.duration = duration;
        }
    }
}

/// Conjunctive list filter. Bounds are inclusive; `name` is a case-insensitive substring.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrinkFilter {
    pub name: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_duration: Option<i32>,
    pub max_duration: Option<i32>,
}

impl DrinkFilter {
    pub fn matches(&self, drink: &Drink) -> bool {
        if let Some(name) = &self.name {
            if !drink.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        self.min_price.map_or(true, |min| drink.price >= min)
            && self.max_price.map_or(true, |max| drink.price <= max)
            && self.min_duration.map_or(true, |min| drink.duration >= min)
            && self.max_duration.map_or(true, |max| drink.duration <= max)
    }
}

/// The longest preparation duration and a drink that has it.
#[derive(Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct DurationLeader {
    pub duration: i32,
    pub name: String,
}
