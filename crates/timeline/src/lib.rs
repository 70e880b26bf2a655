pub mod builder;
mod error;
pub mod keep;
pub mod merge;
pub mod playback;
pub mod remap;
pub mod selection;
pub mod types;

pub use builder::{DEFAULT_GAP_THRESHOLD, build_timeline};
pub use error::Error;
pub use keep::derive_keep_spans;
pub use merge::{DEFAULT_MERGE_TOLERANCE, merge_indices, merge_selection};
pub use playback::skip_target;
pub use remap::{deleted_before, is_deleted, remap_words};
pub use selection::{ElementStyle, SelectionMode, SelectionSet, SelectionSummary};
pub use types::{Span, TimelineElement, validate_cut_list};
