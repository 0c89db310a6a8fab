use axum::{Json, extract::State};

use crate::{routes::AppState, stats::Stat};

/// GET /api/stats
pub async fn list(State(app_state): State<AppState>) -> Json<Vec<Stat>> {
    Json(app_state.stats.get().await.to_vec())
}
