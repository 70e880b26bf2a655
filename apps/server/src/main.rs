use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::prelude::*;

use server::{AppState, router};
use talkcut_media::FfmpegTool;

#[derive(Parser)]
#[command(name = "talkcut-server", about = "Review server for transcript-driven trimming")]
struct Cli {
    #[arg(long, env = "TALKCUT_PORT", default_value_t = 8899)]
    port: u16,

    /// Source recording the cut is applied to.
    #[arg(long, env = "TALKCUT_MEDIA")]
    media: PathBuf,

    /// Directory with the review artifacts (timeline.json, page, audio).
    #[arg(long, env = "TALKCUT_REVIEW_DIR", default_value = ".")]
    review_dir: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState {
        media_file: cli.media,
        review_dir: cli.review_dir,
        tool: Arc::new(FfmpegTool::default()),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    tracing::info!(
        addr = %addr,
        media = %state.media_file.display(),
        "review server listening"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await
}
