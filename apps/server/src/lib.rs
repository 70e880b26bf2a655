//! Review server: serves the exported timeline and review assets, and hosts
//! the one boundary operation where timeline math meets the real recording,
//! the cut request.

mod error;
mod persist;
mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{self, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use talkcut_media::MediaTool;

pub use routes::CutResponse;

/// Filename the delete list is persisted under, inside the review
/// directory. Written before every cut attempt so a failed cut never loses
/// the reviewer's selections.
pub const DELETE_SEGMENTS_FILE: &str = "delete_segments.json";

/// Filename of the exported timeline the review surface renders.
pub const TIMELINE_FILE: &str = "timeline.json";

#[derive(Clone)]
pub struct AppState {
    /// Source recording the cut is applied to.
    pub media_file: PathBuf,
    /// Directory holding the review artifacts (timeline, delete list,
    /// audio/page files served statically).
    pub review_dir: PathBuf,
    pub tool: Arc<dyn MediaTool>,
}

pub fn router(state: AppState) -> Router {
    let serve_review_dir = ServeDir::new(state.review_dir.clone());

    Router::new()
        .route("/api/cut", post(routes::cut))
        .route("/api/timeline", get(routes::timeline))
        .fallback_service(serve_review_dir)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(cors::Any)
                .allow_methods(cors::Any)
                .allow_headers(cors::Any),
        )
        .layer(TraceLayer::new_for_http())
}
