use crate::types::Span;

/// Seek target for skip-ahead playback: if `t` falls inside a cut span,
/// return that span's end; otherwise `None`.
///
/// `cuts` must already be merged (sorted, disjoint, sub-tolerance
/// boundaries coalesced); that is what makes a single jump land past the
/// whole run of deleted material instead of stuttering at each boundary.
/// Binary search is valid for the same reason.
pub fn skip_target(cuts: &[Span], t: f64) -> Option<f64> {
    let idx = cuts.partition_point(|span| span.start <= t);
    let candidate = cuts.get(idx.checked_sub(1)?)?;
    candidate.contains(t).then_some(candidate.end)
}
