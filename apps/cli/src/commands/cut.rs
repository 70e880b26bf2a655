use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use talkcut_media::{FfmpegTool, MediaTool, cut_output_path};
use talkcut_timeline::{Span, derive_keep_spans};

#[derive(Args)]
pub struct CutArgs {
    /// Source recording.
    #[arg(long, env = "TALKCUT_MEDIA")]
    media: PathBuf,

    /// Delete list JSON exported from review.
    #[arg(long, default_value = "delete_segments.json")]
    delete_segments: PathBuf,

    /// Output file; defaults to `<media>_cut.<ext>` next to the source.
    #[arg(long)]
    out: Option<PathBuf>,
}

pub fn run(args: CutArgs) -> anyhow::Result<()> {
    let raw = fs::read_to_string(&args.delete_segments)
        .with_context(|| format!("reading {}", args.delete_segments.display()))?;
    let cuts: Vec<Span> = serde_json::from_str(&raw).context("parsing delete list")?;

    let tool = FfmpegTool::default();
    let duration = tool.probe_duration(&args.media)?;
    let keeps = derive_keep_spans(&cuts, duration)?;
    tracing::info!(cuts = cuts.len(), keeps = keeps.len(), duration, "derived keep spans");

    let output = args.out.unwrap_or_else(|| cut_output_path(&args.media));
    tool.cut(&args.media, &keeps, &output)?;
    tracing::info!(output = %output.display(), "cut complete");

    Ok(())
}
