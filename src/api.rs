//! HTTP surface of the catalog.
//!
//! Each route maps one catalog operation onto a JSON request/response pair.
//! Path ids are parsed by axum's typed `Path` extractor, so a non-integer id
//! is rejected before any handler runs. Body rejections are folded into
//! `GardenError::InvalidInput` so clients always get the JSON envelope.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::{error, warn};
use serde::{Deserialize, Serialize};

use crate::{GardenError, NewPlant, Plant, PlantCatalog, Result, WateringRequest};

/// Outcome of a mutating request that does not return a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

impl ActionResponse {
    fn ok(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            message: message.into(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPlantResponse {
    pub success: bool,
    pub plant: Plant,
}

/// Builds the application router over a shared catalog.
pub fn router(catalog: Arc<PlantCatalog>) -> Router {
    Router::new()
        .route("/get_plants", get(get_plants))
        .route("/add_plant", post(add_plant))
        .route("/save_to_garden/{id}", post(save_to_garden))
        .route("/remove_from_garden/{id}", post(remove_from_garden))
        .route("/update_watering/{id}", post(update_watering))
        .route("/reset_watering_status", post(reset_watering_status))
        .with_state(catalog)
}

async fn get_plants(State(catalog): State<Arc<PlantCatalog>>) -> Result<Json<Vec<Plant>>> {
    Ok(Json(catalog.list_all().await?))
}

async fn add_plant(
    State(catalog): State<Arc<PlantCatalog>>,
    body: std::result::Result<Json<NewPlant>, JsonRejection>,
) -> Result<Json<AddPlantResponse>> {
    let Json(input) = body?;
    let plant = catalog.add(input).await?;
    Ok(Json(AddPlantResponse {
        success: true,
        plant,
    }))
}

async fn save_to_garden(
    State(catalog): State<Arc<PlantCatalog>>,
    Path(id): Path<u64>,
) -> Result<Json<ActionResponse>> {
    catalog.save_to_garden(id).await?;
    Ok(ActionResponse::ok("Plant saved to garden"))
}

async fn remove_from_garden(
    State(catalog): State<Arc<PlantCatalog>>,
    Path(id): Path<u64>,
) -> Result<Json<ActionResponse>> {
    catalog.remove_from_garden(id).await?;
    Ok(ActionResponse::ok("Plant removed from garden"))
}

async fn update_watering(
    State(catalog): State<Arc<PlantCatalog>>,
    Path(id): Path<u64>,
    body: std::result::Result<Json<WateringRequest>, JsonRejection>,
) -> Result<Json<ActionResponse>> {
    let Json(request) = body?;
    let time_of_day = request.time_of_day()?;
    catalog.record_watering(id, time_of_day).await?;
    Ok(ActionResponse::ok(format!(
        "{} watering recorded",
        time_of_day.label()
    )))
}

async fn reset_watering_status(
    State(catalog): State<Arc<PlantCatalog>>,
) -> Result<Json<ActionResponse>> {
    catalog.reset_all_watering_status().await?;
    Ok(ActionResponse::ok("Watering statuses reset"))
}

impl From<JsonRejection> for GardenError {
    fn from(rejection: JsonRejection) -> Self {
        warn!("Rejected request body: {}", rejection.body_text());
        GardenError::invalid_input(rejection.body_text())
    }
}

impl IntoResponse for GardenError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            GardenError::PlantNotFound { .. } => {
                (StatusCode::NOT_FOUND, "Plant not found".to_string())
            }
            GardenError::InvalidInput { message } => (StatusCode::BAD_REQUEST, message.clone()),
            GardenError::StoreUnavailable { .. } => {
                error!("Request failed: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Plant store unavailable".to_string(),
                )
            }
            _ => {
                error!("Request failed: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = ActionResponse {
            success: false,
            message,
        };
        (status, Json(body)).into_response()
    }
}
