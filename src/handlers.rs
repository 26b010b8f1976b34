use crate::calendar::{self, day_key, parse_day_key};
use crate::errors::AppError;
use crate::models::{
    DateRequest, DayView, ExerciseEntry, HistoryResponse, HistoryToggleResponse, NavigateRequest,
    SubmitRequest, SubmitResponse, ToggleExerciseRequest, WeekResponse, WizardView,
};
use crate::session::Session;
use crate::state::AppState;
use crate::storage::persist_area;
use crate::tracker::{Direction, TrackerView};
use crate::ui::{render_history, render_tracker};
use axum::{
    Form, Json,
    extract::State,
    response::{Html, Redirect},
};
use chrono::{Datelike, Local, NaiveDate};
use tracing::{debug, error};

// --- Pages ---

pub async fn tracker_page(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    Html(render_tracker(session.tracker()))
}

pub async fn history_page(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    Html(render_history(session.history(), today().year()))
}

pub async fn tracker_prev(State(state): State<AppState>) -> Redirect {
    state.session.lock().await.navigate(Direction::Prev);
    Redirect::to("/")
}

pub async fn tracker_next(State(state): State<AppState>) -> Redirect {
    state.session.lock().await.navigate(Direction::Next);
    Redirect::to("/")
}

pub async fn wizard_start_form(
    State(state): State<AppState>,
    Form(payload): Form<DateRequest>,
) -> Result<Redirect, AppError> {
    let date = parse_date(&payload.date)?;
    state.session.lock().await.start_entry(date);
    Ok(Redirect::to("/"))
}

pub async fn wizard_submit_form(
    State(state): State<AppState>,
    Form(payload): Form<SubmitRequest>,
) -> Redirect {
    apply_submit(&state, &payload.value).await;
    Redirect::to("/")
}

pub async fn wizard_abandon_form(
    State(state): State<AppState>,
    Form(payload): Form<DateRequest>,
) -> Result<Redirect, AppError> {
    let date = parse_date(&payload.date)?;
    if !state.session.lock().await.abandon_entry_for(date) {
        debug!(date = %payload.date, "ignoring abandon for inactive day");
    }
    Ok(Redirect::to("/"))
}

pub async fn toggle_exercise_form(
    State(state): State<AppState>,
    Form(payload): Form<ToggleExerciseRequest>,
) -> Redirect {
    apply_toggle_exercise(&state, &payload.date, &payload.id).await;
    Redirect::to("/")
}

pub async fn toggle_history_form(
    State(state): State<AppState>,
    Form(payload): Form<DateRequest>,
) -> Result<Redirect, AppError> {
    apply_toggle_history(&state, &payload.date).await?;
    Ok(Redirect::to("/history"))
}

// --- JSON API ---

pub async fn get_week(State(state): State<AppState>) -> Json<WeekResponse> {
    let session = state.session.lock().await;
    Json(week_response(session.tracker()))
}

pub async fn navigate_week(
    State(state): State<AppState>,
    Json(payload): Json<NavigateRequest>,
) -> Result<Json<WeekResponse>, AppError> {
    let direction = Direction::parse(&payload.direction)
        .ok_or_else(|| AppError::bad_request("direction must be 'prev' or 'next'"))?;

    let mut session = state.session.lock().await;
    session.navigate(direction);
    Ok(Json(week_response(session.tracker())))
}

pub async fn wizard_start(
    State(state): State<AppState>,
    Json(payload): Json<DateRequest>,
) -> Result<Json<Option<WizardView>>, AppError> {
    let date = parse_date(&payload.date)?;
    let mut session = state.session.lock().await;
    session.start_entry(date);
    Ok(Json(wizard_view(session.tracker())))
}

pub async fn wizard_submit(
    State(state): State<AppState>,
    Json(payload): Json<SubmitRequest>,
) -> Json<SubmitResponse> {
    Json(apply_submit(&state, &payload.value).await)
}

pub async fn wizard_abandon(State(state): State<AppState>) -> Json<Option<WizardView>> {
    let mut session = state.session.lock().await;
    session.abandon_entry();
    Json(wizard_view(session.tracker()))
}

pub async fn toggle_exercise(
    State(state): State<AppState>,
    Json(payload): Json<ToggleExerciseRequest>,
) -> Result<Json<ExerciseEntry>, AppError> {
    apply_toggle_exercise(&state, &payload.date, &payload.id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::not_found("no such exercise"))
}

pub async fn get_history(State(state): State<AppState>) -> Json<HistoryResponse> {
    let year = today().year();
    let session = state.session.lock().await;
    Json(HistoryResponse {
        year,
        weeks: session.history().rows(year),
    })
}

pub async fn toggle_history(
    State(state): State<AppState>,
    Json(payload): Json<DateRequest>,
) -> Result<Json<HistoryToggleResponse>, AppError> {
    Ok(Json(apply_toggle_history(&state, &payload.date).await?))
}

// --- Shared ---

async fn apply_submit(state: &AppState, value: &str) -> SubmitResponse {
    let mut session = state.session.lock().await;
    let added = {
        let mut rng = rand::thread_rng();
        session.submit_input(value, &mut rng)
    };
    if added.is_some() {
        flush(state, &session).await;
    }

    SubmitResponse {
        wizard: wizard_view(session.tracker()),
        added,
    }
}

async fn apply_toggle_exercise(state: &AppState, date: &str, id: &str) -> Option<ExerciseEntry> {
    let mut session = state.session.lock().await;
    let updated = session.toggle_exercise(date, id)?;
    flush(state, &session).await;
    Some(updated)
}

async fn apply_toggle_history(
    state: &AppState,
    date: &str,
) -> Result<HistoryToggleResponse, AppError> {
    let date = day_key(parse_date(date)?);
    let mut session = state.session.lock().await;
    let completed = session.toggle_history(&date);
    flush(state, &session).await;

    Ok(HistoryToggleResponse { date, completed })
}

/// Write-through to the data file. A failed write is logged and the
/// in-memory session stays authoritative.
async fn flush(state: &AppState, session: &Session) {
    if let Err(err) = persist_area(&state.data_path, session.storage()).await {
        error!("failed to write data file: {err}");
    }
}

fn week_response(tracker: &TrackerView) -> WeekResponse {
    WeekResponse {
        label: tracker.week_label(),
        week_start: day_key(calendar::week_start(tracker.selected_week())),
        days: tracker
            .days()
            .into_iter()
            .map(|day| {
                let date = day_key(day);
                DayView {
                    weekday: calendar::weekday_name(day),
                    label: calendar::long_date(day),
                    exercises: tracker.day(&date).to_vec(),
                    date,
                }
            })
            .collect(),
        wizard: wizard_view(tracker),
    }
}

fn wizard_view(tracker: &TrackerView) -> Option<WizardView> {
    let wizard = tracker.wizard();
    let (date, field) = (wizard.active_date()?, wizard.active_field()?);
    Some(WizardView {
        date: date.to_string(),
        field: field.as_str().to_string(),
        placeholder: field.placeholder().to_string(),
    })
}

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    parse_day_key(value).ok_or_else(|| AppError::bad_request("date must be formatted as yyyy-MM-dd"))
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
