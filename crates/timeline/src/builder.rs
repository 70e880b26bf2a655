use talkcut_asr_interface::SpokenWord;

use crate::types::{TimelineElement, round2};

/// Silences shorter than this are absorbed into the neighbouring words
/// rather than shown as gap elements.
pub const DEFAULT_GAP_THRESHOLD: f64 = 0.1;

/// Turn a flat, time-ordered word sequence into a gap-aware timeline.
///
/// A gap element is emitted before a word whenever the silence since the
/// previous word's end exceeds `gap_threshold`. No gap is emitted after the
/// final word; trailing silence is not represented. All emitted timestamps
/// are rounded to hundredths of a second.
///
/// # Precondition
///
/// `words` must be sorted by `start` and individually non-overlapping. The
/// builder does not re-sort; malformed input propagates as a malformed
/// timeline.
pub fn build_timeline(words: &[SpokenWord], gap_threshold: f64) -> Vec<TimelineElement> {
    let mut elements = Vec::with_capacity(words.len());
    let mut last_end = 0.0_f64;

    for word in words {
        if word.start - last_end > gap_threshold {
            elements.push(TimelineElement {
                text: String::new(),
                start: round2(last_end),
                end: round2(word.start),
                is_gap: true,
            });
        }
        elements.push(TimelineElement {
            text: word.text.clone(),
            start: round2(word.start),
            end: round2(word.end),
            is_gap: false,
        });
        last_end = word.end;
    }

    elements
}
