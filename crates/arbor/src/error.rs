//! Error types for Arbor operations.
//!
//! This module provides the main error type [`ArborError`] which wraps
//! the error conditions of every pipeline stage: parsing, storage,
//! configuration, generation and export.

use std::io;

use thiserror::Error;

use arbor_parser::ParseError;

use crate::{generate::GenerateError, storage::StorageError};

/// The main error type for Arbor operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text the error was found in, so its
/// byte offset can be rendered as a labelled span.
#[derive(Debug, Error)]
pub enum ArborError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Generation error: {0}")]
    Generate(GenerateError),

    #[error("Export error: {0}")]
    Export(#[from] crate::export::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<GenerateError> for ArborError {
    fn from(error: GenerateError) -> Self {
        match error {
            GenerateError::Parse { err, response } => Self::new_parse_error(err, response),
            other => Self::Generate(other),
        }
    }
}

impl ArborError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
