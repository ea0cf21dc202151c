//! Drink handlers: decode raw fields, validate, call the catalog, shape the response.

use crate::error::{AppError, ErrorBody};
use crate::extractors::FormFields;
use crate::forms::{CreateDrinkForm, DrinkFilterQuery, PriceForm, UpdateDrinkForm};
use crate::model::Drink;
use crate::response::{self, AveragePriceBody, MaxDurationBody, MessageBody, MinDurationBody};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Ids that are not integers can never match a drink.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str.parse().map_err(|_| AppError::drink_not_found())
}

/// Add a new drink.
#[utoipa::path(
    post,
    path = "/drinks",
    request_body(content = CreateDrinkForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Drink added", body = MessageBody),
        (status = 400, description = "Missing fields or invalid types", body = ErrorBody),
    ),
    tag = "drinks"
)]
pub async fn create_drink(
    State(state): State<AppState>,
    FormFields(form): FormFields<CreateDrinkForm>,
) -> Result<impl IntoResponse, AppError> {
    let drink = RequestValidator::new_drink(form)?;
    state.catalog.create(drink).await?;
    Ok(response::created("New drink added successfully"))
}

/// Delete a drink by id.
#[utoipa::path(
    delete,
    path = "/drinks/{id}",
    params(("id" = i64, Path, description = "Drink id")),
    responses(
        (status = 204, description = "Drink deleted"),
        (status = 404, description = "Drink not found", body = ErrorBody),
    ),
    tag = "drinks"
)]
pub async fn delete_drink(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    state.catalog.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List drinks matching all given filters, ordered by id.
#[utoipa::path(
    get,
    path = "/drinks",
    params(DrinkFilterQuery),
    responses(
        (status = 200, description = "Matching drinks", body = [Drink]),
        (status = 400, description = "Malformed numeric filter", body = ErrorBody),
    ),
    tag = "drinks"
)]
pub async fn list_drinks(
    State(state): State<AppState>,
    Query(query): Query<DrinkFilterQuery>,
) -> Result<Json<Vec<Drink>>, AppError> {
    let filter = RequestValidator::filter(query)?;
    Ok(Json(state.catalog.list(&filter).await?))
}

/// Set a drink's price.
#[utoipa::path(
    patch,
    path = "/drinks/{id}",
    params(("id" = i64, Path, description = "Drink id")),
    request_body(content = PriceForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Price updated", body = MessageBody),
        (status = 400, description = "Missing or invalid price", body = ErrorBody),
        (status = 404, description = "Drink not found", body = ErrorBody),
    ),
    tag = "drinks"
)]
pub async fn update_price(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    FormFields(form): FormFields<PriceForm>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let price = RequestValidator::price(form)?;
    state.catalog.update_price(id, price).await?;
    Ok(response::ok("Price updated successfully"))
}

/// Replace the fields sent in the form; others are left unchanged.
#[utoipa::path(
    put,
    path = "/drinks/{id}",
    params(("id" = i64, Path, description = "Drink id")),
    request_body(content = UpdateDrinkForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Drink updated", body = MessageBody),
        (status = 400, description = "Invalid field value", body = ErrorBody),
        (status = 404, description = "Drink not found", body = ErrorBody),
    ),
    tag = "drinks"
)]
pub async fn update_drink(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    FormFields(form): FormFields<UpdateDrinkForm>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let changes = RequestValidator::changes(form)?;
    state.catalog.update(id, &changes).await?;
    Ok(response::ok("Drink updated successfully"))
}

/// Mean price over all drinks.
#[utoipa::path(
    get,
    path = "/drinks/average_price",
    responses((status = 200, description = "Average price, null when empty", body = AveragePriceBody)),
    tag = "drinks"
)]
pub async fn average_price(State(state): State<AppState>) -> Result<Json<AveragePriceBody>, AppError> {
    let average_price = state.catalog.average_price().await?;
    Ok(Json(AveragePriceBody { average_price }))
}

/// Longest preparation duration and a drink that has it.
#[utoipa::path(
    get,
    path = "/drinks/max_duration",
    responses(
        (status = 200, description = "Longest duration, or a message when there are no drinks", body = MaxDurationBody),
    ),
    tag = "drinks"
)]
pub async fn max_duration(State(state): State<AppState>) -> Result<Response, AppError> {
    Ok(match state.catalog.max_duration().await? {
        Some(leader) => Json(MaxDurationBody {
            max_duration: leader.duration,
            drink_name: leader.name,
        })
        .into_response(),
        None => response::ok("No drinks found").into_response(),
    })
}

/// Shortest preparation duration.
#[utoipa::path(
    get,
    path = "/drinks/min_duration",
    responses((status = 200, description = "Shortest duration, null when empty", body = MinDurationBody)),
    tag = "drinks"
)]
pub async fn min_duration(State(state): State<AppState>) -> Result<Json<MinDurationBody>, AppError> {
    let min_duration = state.catalog.min_duration().await?;
    Ok(Json(MinDurationBody { min_duration }))
}
