use crate::tutor::service::ExerciseService;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no mutable data: requests never coordinate with each other.
#[derive(Clone)]
pub struct AppState {
    pub tutor: ExerciseService,
}
