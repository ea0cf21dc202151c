//! OpenAPI document for the drinks API, served at `/swagger` and browsed at `/api/docs`.

use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::forms::{CreateDrinkForm, PriceForm, UpdateDrinkForm};
use crate::model::Drink;
use crate::response::{AveragePriceBody, MaxDurationBody, MessageBody, MinDurationBody};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::drinks::create_drink,
        crate::handlers::drinks::list_drinks,
        crate::handlers::drinks::delete_drink,
        crate::handlers::drinks::update_price,
        crate::handlers::drinks::update_drink,
        crate::handlers::drinks::average_price,
        crate::handlers::drinks::max_duration,
        crate::handlers::drinks::min_duration,
    ),
    components(schemas(
        Drink,
        CreateDrinkForm,
        UpdateDrinkForm,
        PriceForm,
        MessageBody,
        ErrorBody,
        AveragePriceBody,
        MaxDurationBody,
        MinDurationBody,
    )),
    tags((name = "drinks", description = "Drink catalog")),
    info(title = "Drinks Catalog API", version = "1.0")
)]
pub struct ApiDoc;
