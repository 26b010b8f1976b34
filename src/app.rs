use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::tracker_page))
        .route("/history", get(handlers::history_page))
        .route("/tracker/prev", post(handlers::tracker_prev))
        .route("/tracker/next", post(handlers::tracker_next))
        .route("/tracker/wizard/start", post(handlers::wizard_start_form))
        .route("/tracker/wizard/submit", post(handlers::wizard_submit_form))
        .route("/tracker/wizard/abandon", post(handlers::wizard_abandon_form))
        .route("/tracker/toggle", post(handlers::toggle_exercise_form))
        .route("/history/toggle", post(handlers::toggle_history_form))
        .route("/api/week", get(handlers::get_week))
        .route("/api/week/navigate", post(handlers::navigate_week))
        .route("/api/wizard/start", post(handlers::wizard_start))
        .route("/api/wizard/submit", post(handlers::wizard_submit))
        .route("/api/wizard/abandon", post(handlers::wizard_abandon))
        .route("/api/exercises/toggle", post(handlers::toggle_exercise))
        .route("/api/history", get(handlers::get_history))
        .route("/api/history/toggle", post(handlers::toggle_history))
        .with_state(state)
}
