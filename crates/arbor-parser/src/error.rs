//! Errors produced while turning generated text into a mind-map tree.

use thiserror::Error;

/// Failure to obtain a [`MindMapTree`](arbor_core::tree::MindMapTree) from text.
///
/// All variants are raised before any layout work starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The response text contains no ```` ```json ```` fenced block.
    #[error("no JSON content found in response")]
    NoJson,

    /// The JSON text is not valid JSON, or does not have the tree shape.
    ///
    /// `line` and `column` are 1-based and relative to the JSON text itself;
    /// `offset` is the byte offset into the source handed to the parser.
    #[error("invalid JSON format in response: {message}")]
    MalformedJson {
        message: String,
        line: usize,
        column: usize,
        offset: usize,
    },

    /// The JSON is well formed but has no `center` key.
    #[error("mind map JSON is missing the \"center\" key")]
    MissingCenter,
}

impl ParseError {
    /// A stable diagnostic code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoJson => "arbor::parse::no_json",
            Self::MalformedJson { .. } => "arbor::parse::malformed_json",
            Self::MissingCenter => "arbor::parse::missing_center",
        }
    }

    /// A hint on how to fix the input.
    pub fn help(&self) -> &'static str {
        match self {
            Self::NoJson => "wrap the mind map in a ```json ... ``` code block",
            Self::MalformedJson { .. } => {
                "expected {\"center\": \"...\", \"branches\": [{\"text\": \"...\", \"children\": [...]}]}"
            }
            Self::MissingCenter => "add a top-level \"center\" key naming the main topic",
        }
    }

    /// Byte offset of the error in the parsed source, when known.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::MalformedJson { offset, .. } => Some(*offset),
            Self::NoJson | Self::MissingCenter => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let malformed = ParseError::MalformedJson {
            message: "EOF".to_string(),
            line: 1,
            column: 1,
            offset: 0,
        };
        let codes = [
            ParseError::NoJson.code(),
            malformed.code(),
            ParseError::MissingCenter.code(),
        ];
        assert_ne!(codes[0], codes[1]);
        assert_ne!(codes[1], codes[2]);
        assert_ne!(codes[0], codes[2]);
    }

    #[test]
    fn test_offset_only_for_malformed_json() {
        let malformed = ParseError::MalformedJson {
            message: "EOF".to_string(),
            line: 2,
            column: 3,
            offset: 17,
        };
        assert_eq!(malformed.offset(), Some(17));
        assert_eq!(ParseError::NoJson.offset(), None);
        assert_eq!(ParseError::MissingCenter.offset(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ParseError::NoJson.to_string(),
            "no JSON content found in response"
        );
        assert!(ParseError::MissingCenter.to_string().contains("center"));
    }
}
