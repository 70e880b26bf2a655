//! Batch speech-recognition response schema.
//!
//! Timestamps on the wire are integer milliseconds; everything downstream of
//! this crate works in seconds. [`BatchResponse::spoken_words`] is the only
//! supported way to cross that boundary.

use serde::{Deserialize, Serialize};

/// One recognized token on the wire, with millisecond timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchWord {
    pub text: String,
    pub start_time: i64,
    pub end_time: i64,
}

/// A provider utterance: a run of words the recognizer grouped together.
///
/// `words` is optional on the wire; some providers omit word-level timing
/// for utterances they could not align. Those utterances carry no usable
/// timing and are skipped during flattening.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Utterance {
    #[serde(default)]
    pub text: String,
    pub start_time: i64,
    pub end_time: i64,
    #[serde(default)]
    pub words: Vec<BatchWord>,
}

/// Top-level batch recognition result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResponse {
    pub utterances: Vec<Utterance>,
}

/// A spoken word in seconds, the input unit for timeline construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpokenWord {
    pub text: String,
    pub start: f64,
    pub end: f64,
}

impl BatchResponse {
    /// Flatten all utterances into a single time-ordered word sequence,
    /// converting milliseconds to seconds.
    ///
    /// Ordering is taken from the provider as-is; batch providers emit
    /// utterances and their words already sorted by start time.
    pub fn spoken_words(&self) -> Vec<SpokenWord> {
        self.utterances
            .iter()
            .flat_map(|u| u.words.iter())
            .map(|w| SpokenWord {
                text: w.text.clone(),
                start: w.start_time as f64 / 1000.0,
                end: w.end_time as f64 / 1000.0,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_across_utterances_in_seconds() {
        let response: BatchResponse = serde_json::from_str(
            r#"{
                "utterances": [
                    {
                        "text": "hello there",
                        "start_time": 0,
                        "end_time": 1200,
                        "words": [
                            {"text": "hello", "start_time": 0, "end_time": 500},
                            {"text": "there", "start_time": 600, "end_time": 1200}
                        ]
                    },
                    {
                        "text": "again",
                        "start_time": 2000,
                        "end_time": 2500,
                        "words": [
                            {"text": "again", "start_time": 2000, "end_time": 2500}
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        let words = response.spoken_words();
        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text, "hello");
        assert_eq!(words[0].start, 0.0);
        assert_eq!(words[1].end, 1.2);
        assert_eq!(words[2].start, 2.0);
    }

    #[test]
    fn utterance_without_words_is_skipped() {
        let response: BatchResponse = serde_json::from_str(
            r#"{"utterances": [{"start_time": 0, "end_time": 900}]}"#,
        )
        .unwrap();
        assert!(response.spoken_words().is_empty());
    }
}
