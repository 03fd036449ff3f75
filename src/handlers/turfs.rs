use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use crate::errors::AppError;
use crate::models::Turf;
use crate::state::AppState;

// GET /api/turfs
pub async fn list_turfs(State(state): State<Arc<AppState>>) -> Json<Vec<Turf>> {
    let engine = state.engine.lock().unwrap();
    Json(engine.turfs().to_vec())
}

// GET /api/turfs/:id
pub async fn get_turf(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Turf>, AppError> {
    let engine = state.engine.lock().unwrap();
    engine
        .turf(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("turf {id}")))
}
