use talkcut_asr_interface::SpokenWord;

use crate::error::Error;
use crate::types::{Span, round2, validate_cut_list};

/// Total deleted time before instant `t`: full spans ending at or before
/// `t`, plus the elapsed part of a span straddling `t`.
///
/// Monotonically non-decreasing in `t`, and zero before the first span.
pub fn deleted_before(cuts: &[Span], t: f64) -> f64 {
    let mut deleted = 0.0;
    for span in cuts {
        if span.end <= t {
            deleted += span.duration();
        } else if span.start < t {
            deleted += t - span.start;
        }
    }
    deleted
}

/// Whether the interval `[start, end]` strictly overlaps any cut span.
/// Touching endpoints do not count.
pub fn is_deleted(cuts: &[Span], start: f64, end: f64) -> bool {
    cuts.iter().any(|span| span.overlaps(start, end))
}

/// Shift a transcript onto the timeline of a recording that has already had
/// `cuts` physically removed.
///
/// Words overlapping a cut span, fully or partially, are dropped; there
/// is no partial-word truncation. Survivors shift left by the deleted
/// duration preceding them. The offset is computed once per word from its
/// start, so both timestamps shift together even when the word's end sits
/// near a span boundary, and rounding happens once on the final result.
///
/// `cuts` must be sorted and disjoint; a malformed list is rejected before
/// any word is processed.
pub fn remap_words(words: &[SpokenWord], cuts: &[Span]) -> Result<Vec<SpokenWord>, Error> {
    validate_cut_list(cuts)?;

    let mut surviving = Vec::with_capacity(words.len());
    for word in words {
        if is_deleted(cuts, word.start, word.end) {
            continue;
        }
        let offset = deleted_before(cuts, word.start);
        surviving.push(SpokenWord {
            text: word.text.clone(),
            start: round2(word.start - offset),
            end: round2(word.end - offset),
        });
    }
    Ok(surviving)
}
