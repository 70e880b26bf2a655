use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};

use crate::routes::CutResponse;

#[derive(Debug, thiserror::Error)]
pub(crate) enum RouteError {
    #[error(transparent)]
    BadCutList(#[from] talkcut_timeline::Error),
    #[error(transparent)]
    Media(#[from] talkcut_media::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("background cut task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl RouteError {
    fn status(&self) -> StatusCode {
        match self {
            Self::BadCutList(_) => StatusCode::BAD_REQUEST,
            Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound => StatusCode::NOT_FOUND,
            Self::Media(_) | Self::Io(_) | Self::Json(_) | Self::Join(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "cut request failed");
        (self.status(), Json(CutResponse::failure(self.to_string()))).into_response()
    }
}
