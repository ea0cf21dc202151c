//! Raw request fields as sent by clients: every value is an optional string until validated.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Form body of `POST /drinks`.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct CreateDrinkForm {
    /// Drink name (required, at most 100 characters).
    pub name: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Price (required).
    #[schema(value_type = Option<f64>)]
    pub price: Option<String>,
    /// Preparation duration (required).
    #[schema(value_type = Option<i32>)]
    pub duration: Option<String>,
}

/// Form body of `PUT /drinks/{id}`. Only the fields sent are replaced.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UpdateDrinkForm {
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub price: Option<String>,
    #[schema(value_type = Option<i32>)]
    pub duration: Option<String>,
}

/// Form body of `PATCH /drinks/{id}`.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct PriceForm {
    /// New absolute price.
    #[schema(value_type = f64)]
    pub price: Option<String>,
}

/// Query string of `GET /drinks`.
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DrinkFilterQuery {
    /// Case-insensitive substring of the name.
    pub name: Option<String>,
    /// Inclusive lower price bound.
    #[param(value_type = Option<f64>)]
    pub min_price: Option<String>,
    /// Inclusive upper price bound.
    #[param(value_type = Option<f64>)]
    pub max_price: Option<String>,
    /// Inclusive lower duration bound.
    #[param(value_type = Option<i32>)]
    pub min_duration: Option<String>,
    /// Inclusive upper duration bound.
    #[param(value_type = Option<i32>)]
    pub max_duration: Option<String>,
}
