use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use talkcut_asr_interface::BatchResponse;
use talkcut_timeline::{DEFAULT_GAP_THRESHOLD, Span, build_timeline, remap_words};

#[derive(Args)]
pub struct TimelineArgs {
    /// Transcription result JSON from the batch provider.
    #[arg(long, env = "TALKCUT_TRANSCRIPT")]
    transcript: PathBuf,

    /// Where to write the timeline JSON.
    #[arg(long, default_value = "timeline.json")]
    out: PathBuf,

    /// Silence shorter than this is folded into the preceding word.
    #[arg(long, default_value_t = DEFAULT_GAP_THRESHOLD)]
    gap_threshold: f64,

    /// Delete list from a previous cut; word timestamps are shifted to
    /// match the already-trimmed recording.
    #[arg(long)]
    delete_segments: Option<PathBuf>,
}

pub fn run(args: TimelineArgs) -> anyhow::Result<()> {
    let raw = fs::read_to_string(&args.transcript)
        .with_context(|| format!("reading {}", args.transcript.display()))?;
    let response: BatchResponse =
        serde_json::from_str(&raw).context("parsing transcription result")?;

    let mut words = response.spoken_words();
    tracing::info!(words = words.len(), "loaded transcript");

    if let Some(path) = &args.delete_segments {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let cuts: Vec<Span> = serde_json::from_str(&raw).context("parsing delete list")?;
        words = remap_words(&words, &cuts)?;
        tracing::info!(cuts = cuts.len(), kept = words.len(), "remapped words");
    }

    let elements = build_timeline(&words, args.gap_threshold);
    fs::write(&args.out, serde_json::to_string_pretty(&elements)?)
        .with_context(|| format!("writing {}", args.out.display()))?;
    tracing::info!(elements = elements.len(), out = %args.out.display(), "wrote timeline");

    Ok(())
}
