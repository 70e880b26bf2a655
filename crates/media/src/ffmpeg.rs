use std::path::Path;
use std::process::Command;

use talkcut_timeline::Span;

use crate::{Error, MediaTool};

/// ffmpeg/ffprobe implementation of [`MediaTool`].
///
/// The cut is non-destructive: one `filter_complex` graph trims every keep
/// span from the single input and concatenates them, writing a new file.
#[derive(Debug, Clone)]
pub struct FfmpegTool {
    ffmpeg: String,
    ffprobe: String,
}

impl Default for FfmpegTool {
    fn default() -> Self {
        Self {
            ffmpeg: "ffmpeg".to_string(),
            ffprobe: "ffprobe".to_string(),
        }
    }
}

impl FfmpegTool {
    pub fn with_binaries(ffmpeg: impl Into<String>, ffprobe: impl Into<String>) -> Self {
        Self {
            ffmpeg: ffmpeg.into(),
            ffprobe: ffprobe.into(),
        }
    }
}

/// Build the trim/concat filter graph for a keep list.
///
/// One video and one audio branch per span, timestamps rebased with
/// `setpts`/`asetpts`, then a single `concat` joining them in order.
fn concat_filter(keeps: &[Span]) -> String {
    let mut filters = Vec::with_capacity(keeps.len() * 2);
    let mut concat_inputs = String::new();

    for (i, span) in keeps.iter().enumerate() {
        filters.push(format!(
            "[0:v]trim=start={}:end={},setpts=PTS-STARTPTS[v{i}]",
            span.start, span.end
        ));
        filters.push(format!(
            "[0:a]atrim=start={}:end={},asetpts=PTS-STARTPTS[a{i}]",
            span.start, span.end
        ));
        concat_inputs.push_str(&format!("[v{i}][a{i}]"));
    }

    format!(
        "{};{}concat=n={}:v=1:a=1[outv][outa]",
        filters.join(";"),
        concat_inputs,
        keeps.len()
    )
}

impl MediaTool for FfmpegTool {
    fn probe_duration(&self, input: &Path) -> Result<f64, Error> {
        let output = Command::new(&self.ffprobe)
            .args(["-v", "error", "-show_entries", "format=duration", "-of", "csv=p=0"])
            .arg(input)
            .output()?;

        if !output.status.success() {
            return Err(Error::ToolFailed {
                tool: "ffprobe",
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let trimmed = stdout.trim();
        trimmed.parse::<f64>().map_err(|_| Error::DurationParse {
            output: trimmed.to_string(),
        })
    }

    fn cut(&self, input: &Path, keeps: &[Span], output: &Path) -> Result<(), Error> {
        if keeps.is_empty() {
            return Err(Error::NothingToKeep);
        }

        let filter = concat_filter(keeps);
        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            segments = keeps.len(),
            "running ffmpeg cut"
        );

        let result = Command::new(&self.ffmpeg)
            .arg("-y")
            .arg("-i")
            .arg(input)
            .arg("-filter_complex")
            .arg(&filter)
            .args(["-map", "[outv]", "-map", "[outa]"])
            .arg(output)
            .output()?;

        if !result.status.success() {
            return Err(Error::ToolFailed {
                tool: "ffmpeg",
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).into_owned(),
            });
        }

        tracing::info!(output = %output.display(), "cut complete");
        Ok(())
    }
}
