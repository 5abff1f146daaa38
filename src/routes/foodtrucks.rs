use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{filter_trucks, nearest_trucks};
use crate::models::{ErrorResponse, HealthResponse, ListTrucksRequest, NearbyTrucksRequest, Snapshot};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub snapshot: Arc<Snapshot>,
}

impl AppState {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }
}

/// Configure all food truck routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/foodtrucks", web::get().to(list_foodtrucks))
        .route("/foodtrucks/nearby", web::get().to(list_nearby_foodtrucks));
}

/// Health check endpoint
///
/// Reports `degraded` when the dataset could not be loaded at startup.
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let snapshot = &state.snapshot;
    let status = if snapshot.is_empty() { "degraded" } else { "ok" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        records: snapshot.len(),
        loaded_at: snapshot.loaded_at(),
    })
}

/// List food trucks
///
/// GET /api/foodtrucks?applicant=&status=&street=&fooditem=
///
/// Every parameter is optional; empty values are ignored.
async fn list_foodtrucks(
    state: web::Data<AppState>,
    query: web::Query<ListTrucksRequest>,
) -> impl Responder {
    tracing::debug!("Listing food trucks with {:?}", query);

    let trucks = filter_trucks(state.snapshot.trucks(), &query.as_filter());

    tracing::debug!("Returning {} of {} food trucks", trucks.len(), state.snapshot.len());

    HttpResponse::Ok().json(trucks)
}

/// Nearby food trucks
///
/// GET /api/foodtrucks/nearby?lat=&lng=&status=APPROVED&limit=5&fooditem=
///
/// `status=ALL` searches every permit status.
async fn list_nearby_foodtrucks(
    state: web::Data<AppState>,
    query: web::Query<NearbyTrucksRequest>,
) -> impl Responder {
    if !query.has_finite_coordinates() {
        return unprocessable("Validation failed", "lat and lng must be finite numbers".to_string());
    }

    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for nearby request: field_errors={:?}", errors);
        return unprocessable("Validation failed", errors.to_string());
    }

    let nearby = query.as_query();
    tracing::debug!("Nearby search: {:?}", nearby);

    let matches = nearest_trucks(state.snapshot.trucks(), &nearby);

    tracing::info!(
        "Returning {} nearby food trucks for ({}, {})",
        matches.len(),
        query.lat,
        query.lng
    );

    HttpResponse::Ok().json(matches)
}

fn unprocessable(error: &str, message: String) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 422,
    })
}
