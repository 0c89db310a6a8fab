use axum::{Json, extract::State};
use boxline_shared::geo::{self, Connector, Location};
use serde::Serialize;

use crate::routes::AppState;

#[derive(Serialize)]
pub struct ServiceAreas {
    pub offices: Vec<Location>,
    pub markets: Vec<Location>,
    pub connectors: Vec<Connector>,
}

/// GET /api/service-areas
pub async fn list(State(app_state): State<AppState>) -> Json<ServiceAreas> {
    let map = &app_state.config.map;

    Json(ServiceAreas {
        connectors: geo::connectors(&map.offices, &map.markets),
        offices: map.offices.clone(),
        markets: map.markets.clone(),
    })
}
