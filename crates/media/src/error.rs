use std::process::ExitStatus;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("could not parse duration from ffprobe output: {output:?}")]
    DurationParse { output: String },
    #[error("{tool} exited with {status}: {stderr}")]
    ToolFailed {
        tool: &'static str,
        status: ExitStatus,
        stderr: String,
    },
    #[error("nothing to keep: the delete list covers the entire recording")]
    NothingToKeep,
}
