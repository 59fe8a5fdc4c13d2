//! Locating the fenced JSON block inside a free-form model response.
//!
//! Generative models wrap the tree in a Markdown code fence, surrounded by
//! arbitrary prose. The extractor skips everything up to the first
//! ```` ```json ```` marker and takes the text up to the next closing fence.

use winnow::{
    Parser as _,
    combinator::{preceded, terminated},
    error::{ContextError, ModalResult},
    stream::LocatingSlice,
    token::{literal, take_until},
};

use crate::error::ParseError;

const OPEN_FENCE: &str = "```json";
const CLOSE_FENCE: &str = "```";

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError>;

/// The JSON text found inside a response, with its position in the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonBlock<'a> {
    content: &'a str,
    offset: usize,
}

impl<'a> JsonBlock<'a> {
    /// The trimmed text between the fences.
    pub fn content(&self) -> &'a str {
        self.content
    }

    /// Byte offset of [`content`](Self::content) within the response.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Fence body: everything after the opening marker up to the closing fence.
fn fenced_body<'a>(input: &mut Input<'a>) -> IResult<(&'a str, std::ops::Range<usize>)> {
    preceded(
        (take_until(0.., OPEN_FENCE), literal(OPEN_FENCE)),
        terminated(take_until(0.., CLOSE_FENCE).with_span(), literal(CLOSE_FENCE)),
    )
    .parse_next(input)
}

/// Finds the first fenced JSON block in `text`.
///
/// Surrounding whitespace inside the fence is trimmed. Only the first block is
/// considered; a block without a closing fence does not count.
///
/// # Errors
///
/// Returns [`ParseError::NoJson`] when no complete block is present.
///
/// # Examples
///
/// ```
/// # use arbor_parser::extract_json_block;
/// let response = "Sure!\n```json\n{\"center\": \"Rust\"}\n```\nEnjoy.";
/// let block = extract_json_block(response).unwrap();
/// assert_eq!(block.content(), "{\"center\": \"Rust\"}");
/// assert_eq!(&response[block.offset()..block.offset() + 3], "{\"c");
/// ```
pub fn extract_json_block(text: &str) -> Result<JsonBlock<'_>, ParseError> {
    let mut input = LocatingSlice::new(text);
    let (body, span) = fenced_body(&mut input).map_err(|_| ParseError::NoJson)?;

    let leading = body.len() - body.trim_start().len();
    let block = JsonBlock {
        content: body.trim(),
        offset: span.start + leading,
    };

    log::trace!(offset = block.offset, len = block.content.len(); "Extracted JSON block");
    Ok(block)
}
