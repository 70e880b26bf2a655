//! External media tool boundary.
//!
//! The engine computes keep spans; this crate realizes them against the
//! recording by invoking an external processing tool once per edit. The
//! invocation is a single blocking process call with no retry. A failed
//! cut is surfaced to the caller with the tool's own message (the delete
//! list has already been persisted by then, so nothing is lost).

mod error;
mod ffmpeg;

pub use error::Error;
pub use ffmpeg::FfmpegTool;

use std::path::{Path, PathBuf};

use talkcut_timeline::Span;

/// Default output location for a cut: `talk.mp4` becomes `talk_cut.mp4`,
/// next to the source.
pub fn cut_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let ext = input.extension().and_then(|s| s.to_str()).unwrap_or("mp4");
    input.with_file_name(format!("{stem}_cut.{ext}"))
}

/// The seam between timeline math and the real media tool.
///
/// Implemented by [`FfmpegTool`] in production and by recording fakes in
/// tests, so the cut-request boundary can be exercised without media files.
pub trait MediaTool: Send + Sync {
    /// Measure the total duration of the source media, in seconds.
    fn probe_duration(&self, input: &Path) -> Result<f64, Error>;

    /// Extract `keeps` from `input` in order and concatenate them into
    /// `output`. Spans are never reordered.
    fn cut(&self, input: &Path, keeps: &[Span], output: &Path) -> Result<(), Error>;
}
