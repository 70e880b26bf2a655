use std::collections::BTreeSet;

use serde::Serialize;

use crate::types::TimelineElement;

/// What drag-selection does to the range it sweeps over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Add,
    Remove,
}

/// How one element should be presented, derived on demand from the two
/// sets. `Confirmed` takes precedence over `Suggested`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementStyle {
    /// In the working set (will be deleted).
    Confirmed,
    /// Not in the working set, but was machine-suggested; shown as
    /// advisory so the reviewer can see what they overrode.
    Suggested,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SelectionSummary {
    pub count: usize,
    pub total_seconds: f64,
}

/// The working set of element indices marked for deletion.
///
/// The machine-suggested set is retained separately and never mutated after
/// construction; it only influences [`SelectionSet::style`] when an index
/// has been removed from the working set again. Exactly one reviewing
/// session owns a `SelectionSet`. Nothing here is persisted: the exported
/// delete list is the only durable artifact.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    working: BTreeSet<usize>,
    suggested: BTreeSet<usize>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the set with machine-suggested indices. Suggestions start out
    /// confirmed, as the review surface pre-selects them.
    pub fn with_suggestions(indices: impl IntoIterator<Item = usize>) -> Self {
        let suggested: BTreeSet<usize> = indices.into_iter().collect();
        Self {
            working: suggested.clone(),
            suggested,
        }
    }

    /// Flip membership of a single index.
    pub fn toggle(&mut self, index: usize) {
        if !self.working.remove(&index) {
            self.working.insert(index);
        }
    }

    /// Apply `mode` to every index in the inclusive range between the two
    /// bounds (either order). Idempotent: re-applying the same gesture is a
    /// no-op.
    pub fn set_range(&mut self, a: usize, b: usize, mode: SelectionMode) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        for index in lo..=hi {
            match mode {
                SelectionMode::Add => {
                    self.working.insert(index);
                }
                SelectionMode::Remove => {
                    self.working.remove(&index);
                }
            }
        }
    }

    /// Empty the working set. Suggestions are kept so cleared elements fall
    /// back to `Suggested` styling rather than `None`.
    pub fn clear(&mut self) {
        self.working.clear();
    }

    pub fn contains(&self, index: usize) -> bool {
        self.working.contains(&index)
    }

    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    /// Selected indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.working.iter().copied()
    }

    pub fn style(&self, index: usize) -> ElementStyle {
        if self.working.contains(&index) {
            ElementStyle::Confirmed
        } else if self.suggested.contains(&index) {
            ElementStyle::Suggested
        } else {
            ElementStyle::None
        }
    }

    /// Count and total duration of the current selection. Gap elements
    /// occupy real time and count toward the removed duration like words.
    ///
    /// Indices beyond `elements` contribute no duration; the merger is
    /// where out-of-range indices are treated as errors.
    pub fn summary(&self, elements: &[TimelineElement]) -> SelectionSummary {
        let total_seconds = self
            .working
            .iter()
            .filter_map(|&i| elements.get(i))
            .map(TimelineElement::duration)
            .sum();
        SelectionSummary {
            count: self.working.len(),
            total_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elements() -> Vec<TimelineElement> {
        vec![
            TimelineElement {
                text: "a".into(),
                start: 0.0,
                end: 1.0,
                is_gap: false,
            },
            TimelineElement {
                text: String::new(),
                start: 1.0,
                end: 1.5,
                is_gap: true,
            },
            TimelineElement {
                text: "b".into(),
                start: 1.5,
                end: 2.0,
                is_gap: false,
            },
        ]
    }

    #[test]
    fn toggle_flips_membership() {
        let mut set = SelectionSet::new();
        set.toggle(1);
        assert!(set.contains(1));
        set.toggle(1);
        assert!(!set.contains(1));
    }

    #[test]
    fn set_range_accepts_reversed_bounds() {
        let mut set = SelectionSet::new();
        set.set_range(2, 0, SelectionMode::Add);
        assert!(set.contains(0) && set.contains(1) && set.contains(2));
    }

    #[test]
    fn set_range_is_idempotent() {
        let mut set = SelectionSet::new();
        set.set_range(0, 2, SelectionMode::Add);
        let before: Vec<usize> = set.indices().collect();
        set.set_range(0, 2, SelectionMode::Add);
        assert_eq!(before, set.indices().collect::<Vec<_>>());

        set.set_range(1, 1, SelectionMode::Remove);
        set.set_range(1, 1, SelectionMode::Remove);
        assert_eq!(set.indices().collect::<Vec<_>>(), [0, 2]);
    }

    #[test]
    fn suggestions_start_confirmed_and_survive_clear() {
        let mut set = SelectionSet::with_suggestions([1]);
        assert_eq!(set.style(1), ElementStyle::Confirmed);

        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.style(1), ElementStyle::Suggested);
        assert_eq!(set.style(0), ElementStyle::None);
    }

    #[test]
    fn removing_a_suggested_index_falls_back_to_suggested_styling() {
        let mut set = SelectionSet::with_suggestions([0, 2]);
        set.toggle(2);
        assert_eq!(set.style(2), ElementStyle::Suggested);
        assert_eq!(set.style(0), ElementStyle::Confirmed);
    }

    #[test]
    fn summary_counts_gap_time() {
        let mut set = SelectionSet::new();
        set.toggle(1);
        set.toggle(2);
        let summary = set.summary(&elements());
        assert_eq!(summary.count, 2);
        assert!((summary.total_seconds - 1.0).abs() < 1e-9);
    }

    #[test]
    fn summary_of_empty_selection_is_zero() {
        let set = SelectionSet::new();
        let summary = set.summary(&elements());
        assert_eq!(summary.count, 0);
        assert_eq!(summary.total_seconds, 0.0);
    }
}
