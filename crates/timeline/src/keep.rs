use crate::error::Error;
use crate::types::{Span, validate_cut_list};

/// Invert a delete list against the media duration into the ordered list of
/// spans to retain.
///
/// The result, extracted and concatenated in order, realizes the edit; no
/// reordering is ever performed. Together the delete and keep lists cover
/// `[0, total_duration]` exactly and share no interior instants.
///
/// Spans extending past `total_duration` (or starting before zero) are a
/// caller error and are reported, not clamped; clamping would mask a
/// mismatch with the upstream duration probe.
pub fn derive_keep_spans(cuts: &[Span], total_duration: f64) -> Result<Vec<Span>, Error> {
    validate_cut_list(cuts)?;
    for (index, span) in cuts.iter().enumerate() {
        if span.start < 0.0 || span.end > total_duration {
            return Err(Error::SpanOutOfBounds {
                index,
                start: span.start,
                end: span.end,
                duration: total_duration,
            });
        }
    }

    let mut keeps = Vec::with_capacity(cuts.len() + 1);
    let mut cursor = 0.0;
    for span in cuts {
        if span.start > cursor {
            keeps.push(Span::new(cursor, span.start));
        }
        cursor = span.end;
    }
    if cursor < total_duration {
        keeps.push(Span::new(cursor, total_duration));
    }
    Ok(keeps)
}
