use super::types::{AssignmentsResponse, CoursesResponse, NoteRequest, NoteResponse, Stats};
use crate::{dashboard, notes::NotesGateway};
use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<NotesGateway>,
}

pub async fn get_stats() -> Json<Stats> {
    Json(dashboard::stats())
}

pub async fn get_courses() -> Json<CoursesResponse> {
    Json(CoursesResponse {
        courses: dashboard::courses(),
    })
}

pub async fn get_assignments() -> Json<AssignmentsResponse> {
    Json(AssignmentsResponse {
        assignments: dashboard::assignments(),
    })
}

pub async fn generate_notes(
    State(state): State<AppState>,
    Json(request): Json<NoteRequest>,
) -> Json<NoteResponse> {
    info!("Received notes request for topic: {}", request.topic);

    let response = state.gateway.generate_notes(request.topic).await;

    if response.is_error() {
        warn!("Returning error notes for topic: {}", response.topic);
    } else {
        info!("Generated notes for topic: {}", response.topic);
    }

    Json(response)
}
