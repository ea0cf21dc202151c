//! Drink routes. Static aggregate paths take precedence over `/drinks/:id`.

use crate::handlers::drinks::{
    average_price, create_drink, delete_drink, list_drinks, max_duration, min_duration,
    update_drink, update_price,
};
use crate::state::AppState;
use axum::{routing::get, routing::patch, Router};

pub fn drink_routes(state: AppState) -> Router {
    Router::new()
        .route("/drinks", get(list_drinks).post(create_drink))
        .route("/drinks/average_price", get(average_price))
        .route("/drinks/max_duration", get(max_duration))
        .route("/drinks/min_duration", get(min_duration))
        .route(
            "/drinks/:id",
            patch(update_price).put(update_drink).delete(delete_drink),
        )
        .with_state(state)
}
