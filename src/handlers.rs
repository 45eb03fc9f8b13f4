use crate::errors::AppError;
use crate::models::{AddRecordForm, AddRecordRequest, TrackerResponse};
use crate::progress::build_tracker;
use crate::state::AppState;
use crate::ui::{render_meditation, render_tracker};
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form, Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let store = state.store.lock().await;
    Html(render_tracker(&build_tracker(&store)))
}

pub async fn meditation() -> Html<String> {
    Html(render_meditation())
}

pub async fn get_tracker(State(state): State<AppState>) -> Result<Json<TrackerResponse>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(build_tracker(&store)))
}

pub async fn add_record(
    State(state): State<AppState>,
    Json(payload): Json<AddRecordRequest>,
) -> Result<Json<TrackerResponse>, AppError> {
    if is_blank(&payload.reason) {
        return Err(AppError::bad_request("reason must not be empty"));
    }

    let mut store = state.store.lock().await;
    store.add_record(payload.reason).await;
    Ok(Json(build_tracker(&store)))
}

/// Blank submissions are ignored, like a disabled button.
pub async fn submit_record(
    State(state): State<AppState>,
    Form(form): Form<AddRecordForm>,
) -> Redirect {
    if !is_blank(&form.reason) {
        state.store.lock().await.add_record(form.reason).await;
    }
    Redirect::to("/")
}

/// Blank checks trim; the stored reason keeps the text as typed.
fn is_blank(reason: &str) -> bool {
    reason.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_reason_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n"));
        assert!(!is_blank("  stuck in traffic "));
    }
}
