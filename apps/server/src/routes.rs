use axum::{Json, extract::State};
use serde::Serialize;

use talkcut_media::cut_output_path;
use talkcut_timeline::{Span, derive_keep_spans};

use crate::error::RouteError;
use crate::persist::atomic_write;
use crate::{AppState, DELETE_SEGMENTS_FILE, TIMELINE_FILE};

/// Outcome of a cut request, reported whether the tool succeeded or not.
#[derive(Debug, Serialize)]
pub struct CutResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CutResponse {
    fn ok(output: String) -> Self {
        Self {
            success: true,
            output: Some(output),
            error: None,
        }
    }

    pub(crate) fn failure(message: String) -> Self {
        Self {
            success: false,
            output: None,
            error: Some(message),
        }
    }
}

/// The cut request boundary: persist the delete list, derive the keep
/// spans, invoke the media tool once, report the outcome.
///
/// Persistence happens before anything that can fail downstream: if the
/// tool dies, the reviewer's selections are already on disk and the tool's
/// message is relayed verbatim. There is no retry.
pub(crate) async fn cut(
    State(state): State<AppState>,
    Json(delete_list): Json<Vec<Span>>,
) -> Result<Json<CutResponse>, RouteError> {
    let list_path = state.review_dir.join(DELETE_SEGMENTS_FILE);
    atomic_write(&list_path, &serde_json::to_string_pretty(&delete_list)?)?;
    tracing::info!(
        segments = delete_list.len(),
        path = %list_path.display(),
        "persisted delete list"
    );

    let output = cut_output_path(&state.media_file);
    let tool = state.tool.clone();
    let media = state.media_file.clone();
    let cut_target = output.clone();

    tokio::task::spawn_blocking(move || -> Result<(), RouteError> {
        let duration = tool.probe_duration(&media)?;
        let keeps = derive_keep_spans(&delete_list, duration)?;
        tracing::info!(keeps = keeps.len(), duration, "derived keep spans");
        tool.cut(&media, &keeps, &cut_target)?;
        Ok(())
    })
    .await??;

    Ok(Json(CutResponse::ok(output.display().to_string())))
}

/// Serve the exported timeline for the review surface.
pub(crate) async fn timeline(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, RouteError> {
    let raw = tokio::fs::read_to_string(state.review_dir.join(TIMELINE_FILE)).await?;
    Ok(Json(serde_json::from_str(&raw)?))
}

