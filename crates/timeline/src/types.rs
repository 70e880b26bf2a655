use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One unit of the reviewable timeline: a spoken word or a synthetic
/// silence span.
///
/// # Invariant
///
/// Within one timeline, elements are sorted by `start` and never overlap
/// (`end[i] <= start[i+1]`). Gap elements exist precisely to keep the
/// timeline contiguous where the transcript has holes. Elements are built
/// once by [`crate::builder::build_timeline`] and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineElement {
    pub text: String,
    pub start: f64,
    pub end: f64,
    #[serde(rename = "isGap")]
    pub is_gap: bool,
}

impl TimelineElement {
    pub fn span(&self) -> Span {
        Span {
            start: self.start,
            end: self.end,
        }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// A time interval in seconds, `start <= end`.
///
/// Used for both delete spans and keep spans. Lists produced by this crate
/// are always sorted by `start` and disjoint; lists arriving from outside
/// (an imported delete list) must pass [`validate_cut_list`] before use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub start: f64,
    pub end: f64,
}

impl Span {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Strict overlap: shared interior instants only. Touching endpoints do
    /// not overlap.
    pub fn overlaps(&self, start: f64, end: f64) -> bool {
        start < self.end && end > self.start
    }

    /// Half-open containment: `start <= t < end`.
    pub fn contains(&self, t: f64) -> bool {
        self.start <= t && t < self.end
    }
}

/// Check that a cut list is well-formed: no inverted spans, sorted by
/// start, and disjoint (touching endpoints are allowed).
///
/// Fails fast with the offending index so a bad record in an imported
/// delete list can be located.
pub fn validate_cut_list(cuts: &[Span]) -> Result<(), Error> {
    let mut prev_end = f64::NEG_INFINITY;
    for (index, span) in cuts.iter().enumerate() {
        if span.start > span.end {
            return Err(Error::InvertedSpan {
                index,
                start: span.start,
                end: span.end,
            });
        }
        if span.start < prev_end {
            return Err(Error::UnsortedSpans {
                index,
                start: span.start,
                prev_end,
            });
        }
        prev_end = span.end;
    }
    Ok(())
}

/// Round to hundredths of a second. All exported timestamps go through
/// this so the JSON stays stable and human-diffable.
pub(crate) fn round2(t: f64) -> f64 {
    (t * 100.0).round() / 100.0
}
