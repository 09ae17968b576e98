//! Locates the JSON payload inside free-text model output.
//!
//! Models wrap payloads in prose and markdown fences, and sometimes stop mid-way.
//! Extraction slices from the first opening bracket to the last closing one and
//! does nothing cleverer: an unparsable slice is a `Parse` failure, not a cue
//! to try other heuristics.

use serde_json::Value;

use crate::tutor::ExerciseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonShape {
    Array,
    Object,
}

impl JsonShape {
    fn delimiters(self) -> (char, char) {
        match self {
            JsonShape::Array => ('[', ']'),
            JsonShape::Object => ('{', '}'),
        }
    }
}

/// Returns the maximal `open..=close` slice of `raw`, or `NotFound`.
pub fn extract_json(raw: &str, shape: JsonShape) -> Result<&str, ExerciseError> {
    let (open, close) = shape.delimiters();
    let start = raw.find(open).ok_or(ExerciseError::NotFound)?;
    let end = raw.rfind(close).ok_or(ExerciseError::NotFound)?;
    if end < start {
        return Err(ExerciseError::NotFound);
    }
    Ok(&raw[start..=end])
}

pub fn parse_candidate(candidate: &str) -> Result<Value, ExerciseError> {
    serde_json::from_str(candidate).map_err(ExerciseError::Parse)
}

/// Extract then parse. When no fragment is found the whole text is tried as
/// JSON; if that also fails the result stays `NotFound`.
pub fn decode_json(raw: &str, shape: JsonShape) -> Result<Value, ExerciseError> {
    match extract_json(raw, shape) {
        Ok(candidate) => parse_candidate(candidate),
        Err(ExerciseError::NotFound) => {
            serde_json::from_str(raw.trim()).map_err(|_| ExerciseError::NotFound)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_array_from_surrounding_prose() {
        let raw = "Sure! Here's the data: [{\"word\":\"x\",\"definition\":\"y\",\"exampleSentence\":\"z\"}] Hope that helps.";
        let slice = extract_json(raw, JsonShape::Array).unwrap();
        assert_eq!(
            slice,
            "[{\"word\":\"x\",\"definition\":\"y\",\"exampleSentence\":\"z\"}]"
        );
    }

    #[test]
    fn test_extracts_object_from_markdown_fence() {
        let raw = "```json\n{\"question\": \"q\", \"options\": [\"a\"], \"correctAnswer\": \"a\"}\n```";
        let slice = extract_json(raw, JsonShape::Object).unwrap();
        assert!(slice.starts_with('{'));
        assert!(slice.ends_with('}'));
        assert!(parse_candidate(slice).is_ok());
    }

    #[test]
    fn test_no_brackets_is_not_found() {
        let raw = "I could not think of any words today, sorry.";
        assert!(matches!(
            extract_json(raw, JsonShape::Array),
            Err(ExerciseError::NotFound)
        ));
        assert!(matches!(
            extract_json(raw, JsonShape::Object),
            Err(ExerciseError::NotFound)
        ));
    }

    #[test]
    fn test_close_before_open_is_not_found() {
        assert!(matches!(
            extract_json("] then [", JsonShape::Array),
            Err(ExerciseError::NotFound)
        ));
    }

    #[test]
    fn test_truncated_array_is_not_found() {
        let raw = "[{\"word\": \"x\", \"definition\": \"y\"";
        assert!(matches!(
            extract_json(raw, JsonShape::Array),
            Err(ExerciseError::NotFound)
        ));
    }

    #[test]
    fn test_outermost_slice_spans_two_fragments() {
        // Two separate arrays produce one slice that is not valid JSON.
        let raw = "first [1] and second [2]";
        let slice = extract_json(raw, JsonShape::Array).unwrap();
        assert_eq!(slice, "[1] and second [2]");
        assert!(matches!(
            parse_candidate(slice),
            Err(ExerciseError::Parse(_))
        ));
    }

    #[test]
    fn test_decode_parses_located_fragment() {
        let value = decode_json("Result: {\"a\": 1}.", JsonShape::Object).unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn test_decode_falls_back_to_raw_text() {
        let value = decode_json("  \"just a string\"  ", JsonShape::Array).unwrap();
        assert_eq!(value, Value::String("just a string".to_string()));
    }

    #[test]
    fn test_decode_prose_stays_not_found() {
        assert!(matches!(
            decode_json("no json here", JsonShape::Array),
            Err(ExerciseError::NotFound)
        ));
    }

    #[test]
    fn test_decode_reports_parse_failure_for_broken_fragment() {
        assert!(matches!(
            decode_json("{\"question\": oops}", JsonShape::Object),
            Err(ExerciseError::Parse(_))
        ));
    }
}
