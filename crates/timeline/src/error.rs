#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("selected index {index} is out of range for a timeline of {len} elements")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("cut span {index} is inverted: start {start} > end {end}")]
    InvertedSpan { index: usize, start: f64, end: f64 },
    #[error(
        "cut span {index} starts at {start}, before the previous span ends at {prev_end}; \
         cut lists must be sorted and disjoint"
    )]
    UnsortedSpans {
        index: usize,
        start: f64,
        prev_end: f64,
    },
    #[error(
        "cut span {index} [{start}, {end}] falls outside the media duration {duration}; \
         refusing to clamp; re-probe the source duration"
    )]
    SpanOutOfBounds {
        index: usize,
        start: f64,
        end: f64,
        duration: f64,
    },
}
