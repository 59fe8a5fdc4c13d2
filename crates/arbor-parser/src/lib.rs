//! # Arbor Parser
//!
//! Turns the text returned by a generative model into a validated
//! [`MindMapTree`]. The pipeline has two steps:
//!
//! 1. **Extract** - locate the first ```` ```json ```` fenced block
//! 2. **Parse** - decode the JSON and require a `center` key
//!
//! ````
//! # use arbor_parser::{parse_response, ParseError};
//! fn main() -> Result<(), ParseError> {
//!     let response = r#"
//! Here is the mind map you asked for:
//! ```json
//! {"center": "Rust", "branches": [{"text": "Ownership"}]}
//! ```
//! "#;
//!     let tree = parse_response(response)?;
//!     assert_eq!(tree.center(), "Rust");
//!     Ok(())
//! }
//! ````

mod error;
mod extract;

pub use error::ParseError;
pub use extract::{JsonBlock, extract_json_block};

use arbor_core::tree::MindMapTree;
use log::debug;

/// Parses a whole model response: extracts the fenced block, then decodes it.
///
/// Error offsets are relative to `response`.
///
/// # Errors
///
/// [`ParseError::NoJson`] when there is no fenced block, otherwise any error
/// of [`parse_tree`].
pub fn parse_response(response: &str) -> Result<MindMapTree, ParseError> {
    let block = extract_json_block(response)?;
    parse_tree_at(block.content(), block.offset())
}

/// Decodes a JSON mind-map tree.
///
/// Missing `branches` or `children` arrays are treated as empty and unknown
/// keys are ignored.
///
/// # Errors
///
/// * [`ParseError::MalformedJson`] when `json` is not valid JSON or a branch
///   does not have the expected shape
/// * [`ParseError::MissingCenter`] when the top level has no `center` key
pub fn parse_tree(json: &str) -> Result<MindMapTree, ParseError> {
    parse_tree_at(json, 0)
}

fn parse_tree_at(json: &str, base_offset: usize) -> Result<MindMapTree, ParseError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|err| malformed(json, base_offset, &err))?;

    let has_center = value
        .as_object()
        .is_some_and(|object| object.contains_key("center"));
    if !has_center {
        return Err(ParseError::MissingCenter);
    }

    // Decode from the text again so shape errors keep their positions.
    let tree: MindMapTree =
        serde_json::from_str(json).map_err(|err| malformed(json, base_offset, &err))?;

    debug!(
        center = tree.center(),
        nodes = tree.node_count(),
        depth = tree.max_depth();
        "Parsed mind map tree"
    );
    Ok(tree)
}

fn malformed(json: &str, base_offset: usize, err: &serde_json::Error) -> ParseError {
    let line = err.line();
    let column = err.column();
    ParseError::MalformedJson {
        message: err.to_string(),
        line,
        column,
        offset: base_offset + offset_of(json, line, column),
    }
}

/// Byte offset of a 1-based line and column, clamped to the text.
fn offset_of(text: &str, line: usize, column: usize) -> usize {
    let line_start: usize = text
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let line_len = text[line_start..]
        .split('\n')
        .next()
        .map_or(0, str::len);
    let offset = line_start + column.saturating_sub(1).min(line_len);

    // Step back to a char boundary for multi-byte labels.
    (0..=offset.min(text.len()))
        .rev()
        .find(|&idx| text.is_char_boundary(idx))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tree_full_shape() {
        let tree = parse_tree(
            r#"{"center": "Rust", "branches": [
                {"text": "Ownership", "children": [{"text": "Borrowing"}]},
                {"text": "Traits"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(tree.center(), "Rust");
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.branches()[0].children()[0].text(), "Borrowing");
    }

    #[test]
    fn test_parse_tree_without_branches() {
        let tree = parse_tree(r#"{"center": "Alone"}"#).unwrap();
        assert!(tree.branches().is_empty());
    }

    #[test]
    fn test_missing_center() {
        assert_eq!(
            parse_tree(r#"{"branches": []}"#),
            Err(ParseError::MissingCenter)
        );
        assert_eq!(parse_tree("[1, 2]"), Err(ParseError::MissingCenter));
    }

    #[test]
    fn test_malformed_json_reports_position() {
        let err = parse_tree("{\n  \"center\": \"X\",\n  oops\n}").unwrap_err();
        match err {
            ParseError::MalformedJson { line, column, .. } => {
                assert_eq!(line, 3);
                assert!(column >= 3);
            }
            other => panic!("expected MalformedJson, got {other:?}"),
        }
    }

    #[test]
    fn test_branch_without_text_is_malformed() {
        let err = parse_tree(r#"{"center": "X", "branches": [{"children": []}]}"#).unwrap_err();
        assert!(matches!(err, ParseError::MalformedJson { .. }));
    }

    #[test]
    fn test_parse_response_offsets_point_into_response() {
        let response = "Intro\n```json\n{\"center\": }\n```";
        let err = parse_response(response).unwrap_err();
        let offset = err.offset().unwrap();
        assert!(offset >= response.find('{').unwrap());
        assert!(offset < response.len());
    }

    #[test]
    fn test_parse_response_without_fence() {
        assert_eq!(
            parse_response("I cannot help with that."),
            Err(ParseError::NoJson)
        );
    }

    #[test]
    fn test_offset_of() {
        let text = "ab\ncde\nf";
        assert_eq!(offset_of(text, 1, 1), 0);
        assert_eq!(offset_of(text, 2, 2), 4);
        assert_eq!(offset_of(text, 3, 1), 7);
        assert_eq!(offset_of(text, 3, 99), 8);
        assert_eq!(offset_of(text, 0, 0), 0);
    }
}
