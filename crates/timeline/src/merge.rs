use crate::error::Error;
use crate::selection::SelectionSet;
use crate::types::{Span, TimelineElement};

/// Boundary gaps below this are coalesced when merging selected elements.
///
/// Index-adjacent selections are not always time-adjacent to the last
/// digit: upstream rounding can leave sub-hundredth residue between a
/// word's end and the following gap's start. The tolerance absorbs that
/// without requiring exact floating equality.
pub const DEFAULT_MERGE_TOLERANCE: f64 = 0.05;

/// Merge a selection into a minimal ordered list of disjoint delete spans.
pub fn merge_selection(
    selection: &SelectionSet,
    elements: &[TimelineElement],
    tolerance: f64,
) -> Result<Vec<Span>, Error> {
    merge_indices(selection.indices(), elements, tolerance)
}

/// Merge arbitrary element indices into a minimal ordered list of disjoint
/// delete spans.
///
/// Indices are sorted and deduplicated, mapped to their element spans, then
/// folded left: a span whose start is within `tolerance` of the running
/// span's end extends it; anything further away starts a new span.
///
/// Every bound in the output is a bound of some input element; no new
/// timestamps are invented. Out-of-range indices are a caller error.
pub fn merge_indices(
    indices: impl IntoIterator<Item = usize>,
    elements: &[TimelineElement],
    tolerance: f64,
) -> Result<Vec<Span>, Error> {
    let mut sorted: Vec<usize> = indices.into_iter().collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut merged: Vec<Span> = Vec::new();
    let mut current: Option<Span> = None;

    for index in sorted {
        let element = elements.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: elements.len(),
        })?;
        let next = element.span();

        match current.as_mut() {
            Some(span) if next.start - span.end < tolerance => span.end = next.end,
            Some(span) => {
                merged.push(*span);
                current = Some(next);
            }
            None => current = Some(next),
        }
    }

    if let Some(span) = current {
        merged.push(span);
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    fn element(start: f64, end: f64) -> TimelineElement {
        TimelineElement {
            text: String::new(),
            start,
            end,
            is_gap: false,
        }
    }

    #[test]
    fn coalesces_sub_tolerance_boundary_gap() {
        // gap of 0.03s between the two selected elements, below 0.05
        let elements = [element(0.0, 1.0), element(1.0, 1.03), element(1.03, 2.0)];
        let merged = merge_indices([0, 2], &elements, DEFAULT_MERGE_TOLERANCE).unwrap();
        assert_eq!(merged, [Span::new(0.0, 2.0)]);
    }

    #[test]
    fn keeps_spans_apart_beyond_tolerance() {
        let elements = [element(0.0, 1.0), element(1.5, 2.0)];
        let merged = merge_indices([0, 1], &elements, DEFAULT_MERGE_TOLERANCE).unwrap();
        assert_eq!(merged, [Span::new(0.0, 1.0), Span::new(1.5, 2.0)]);
    }

    #[test]
    fn unordered_and_duplicate_indices_are_normalized() {
        let elements = [element(0.0, 1.0), element(1.0, 2.0), element(3.0, 4.0)];
        let merged = merge_indices([2, 0, 1, 1], &elements, DEFAULT_MERGE_TOLERANCE).unwrap();
        assert_eq!(merged, [Span::new(0.0, 2.0), Span::new(3.0, 4.0)]);
    }

    #[test]
    fn empty_selection_merges_to_empty_list() {
        let elements = [element(0.0, 1.0)];
        assert!(
            merge_indices([], &elements, DEFAULT_MERGE_TOLERANCE)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn out_of_range_index_is_reported() {
        let elements = [element(0.0, 1.0)];
        assert_eq!(
            merge_indices([3], &elements, DEFAULT_MERGE_TOLERANCE),
            Err(Error::IndexOutOfRange { index: 3, len: 1 })
        );
    }

    #[test]
    fn merge_via_selection_set_matches_indices() {
        let elements = [element(0.0, 1.0), element(1.0, 2.0)];
        let mut selection = SelectionSet::new();
        selection.toggle(0);
        selection.toggle(1);
        assert_eq!(
            merge_selection(&selection, &elements, DEFAULT_MERGE_TOLERANCE).unwrap(),
            merge_indices([0, 1], &elements, DEFAULT_MERGE_TOLERANCE).unwrap()
        );
    }

    /// Build well-spaced elements from arbitrary small integers so that
    /// consecutive elements are separated by at least the tolerance.
    fn arbitrary_elements(seeds: &[(u8, u8)]) -> Vec<TimelineElement> {
        let mut out = Vec::new();
        let mut cursor = 0.0;
        for &(gap, len) in seeds {
            let start = cursor + 0.1 + f64::from(gap) / 10.0;
            let end = start + 0.1 + f64::from(len) / 10.0;
            out.push(element(start, end));
            cursor = end;
        }
        out
    }

    #[quickcheck]
    fn output_is_sorted_and_disjoint(seeds: Vec<(u8, u8)>, picks: Vec<usize>) -> bool {
        let elements = arbitrary_elements(&seeds);
        if elements.is_empty() {
            return true;
        }
        let picks: Vec<usize> = picks.into_iter().map(|p| p % elements.len()).collect();
        let merged = merge_indices(picks, &elements, DEFAULT_MERGE_TOLERANCE).unwrap();
        merged
            .windows(2)
            .all(|pair| pair[0].end <= pair[1].start && pair[0].start <= pair[1].start)
    }

    #[quickcheck]
    fn merging_is_idempotent(seeds: Vec<(u8, u8)>, picks: Vec<usize>) -> bool {
        let elements = arbitrary_elements(&seeds);
        if elements.is_empty() {
            return true;
        }
        let picks: Vec<usize> = picks.into_iter().map(|p| p % elements.len()).collect();
        let merged = merge_indices(picks, &elements, DEFAULT_MERGE_TOLERANCE).unwrap();

        // Re-run the merger over its own output, mapped 1:1 to elements.
        let as_elements: Vec<TimelineElement> =
            merged.iter().map(|s| element(s.start, s.end)).collect();
        let remerged =
            merge_indices(0..as_elements.len(), &as_elements, DEFAULT_MERGE_TOLERANCE).unwrap();
        remerged == merged
    }

    #[quickcheck]
    fn output_bounds_come_from_input_elements(seeds: Vec<(u8, u8)>, picks: Vec<usize>) -> bool {
        let elements = arbitrary_elements(&seeds);
        if elements.is_empty() {
            return true;
        }
        let picks: Vec<usize> = picks.into_iter().map(|p| p % elements.len()).collect();
        let merged = merge_indices(picks, &elements, DEFAULT_MERGE_TOLERANCE).unwrap();
        merged.iter().all(|span| {
            elements.iter().any(|e| e.start == span.start)
                && elements.iter().any(|e| e.end == span.end)
        })
    }
}
