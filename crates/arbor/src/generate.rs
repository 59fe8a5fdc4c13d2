//! Generating mind-map trees from a topic.
//!
//! The remote model is a black box behind [`CompletionClient`]: it receives
//! the prompt built by [`mindmap_prompt`] and returns free-form text, from
//! which the fenced JSON block is extracted. The API key comes from a
//! [`CredentialProvider`], so no secret is ever hard-coded.

use std::env;

use log::{debug, info};
use thiserror::Error;

use arbor_core::tree::MindMapTree;
use arbor_parser::ParseError;

/// Environment variable read by [`EnvCredentialProvider::new`].
pub const API_KEY_VAR: &str = "ARBOR_API_KEY";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("topic must not be empty")]
    EmptyTopic,

    #[error("no API key available: set the {0} environment variable")]
    MissingCredentials(String),

    #[error("completion request failed: {0}")]
    Completion(String),

    #[error("{err}")]
    Parse { err: ParseError, response: String },
}

/// Sends a prompt to a generative model and returns its text response.
pub trait CompletionClient {
    fn complete(&self, api_key: &str, prompt: &str) -> Result<String, GenerateError>;
}

/// Supplies the API key for a [`CompletionClient`].
pub trait CredentialProvider {
    fn api_key(&self) -> Result<String, GenerateError>;
}

/// Reads the API key from an environment variable.
#[derive(Debug, Clone)]
pub struct EnvCredentialProvider {
    var: String,
}

impl EnvCredentialProvider {
    /// Reads [`API_KEY_VAR`].
    pub fn new() -> Self {
        Self::with_var(API_KEY_VAR)
    }

    pub fn with_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialProvider for EnvCredentialProvider {
    fn api_key(&self) -> Result<String, GenerateError> {
        match env::var(&self.var) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(GenerateError::MissingCredentials(self.var.clone())),
        }
    }
}

/// A fixed API key, e.g. one read from a secrets store by the caller.
#[derive(Clone)]
pub struct StaticCredentialProvider {
    key: String,
}

impl StaticCredentialProvider {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl std::fmt::Debug for StaticCredentialProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentialProvider")
            .field("key", &"<redacted>")
            .finish()
    }
}

impl CredentialProvider for StaticCredentialProvider {
    fn api_key(&self) -> Result<String, GenerateError> {
        Ok(self.key.clone())
    }
}

/// The instruction asking the model for a mind map of `topic`.
///
/// ```
/// # use arbor::generate::mindmap_prompt;
/// let prompt = mindmap_prompt("Photosynthesis");
/// assert!(prompt.contains("Photosynthesis"));
/// assert!(prompt.contains("```json"));
/// ```
pub fn mindmap_prompt(topic: &str) -> String {
    format!(
        r#"Create a detailed mind map structure for the topic: {topic}
The response must be in JSON format with the following structure:
{{
    "center": "main topic",
    "branches": [
        {{
            "text": "branch topic",
            "children": [
                {{"text": "sub-topic"}},
                {{"text": "sub-topic", "children": [{{"text": "detail"}}]}}
            ]
        }}
    ]
}}
Provide the response in a code block with ```json and ``` markers."#
    )
}

/// Topic to tree pipeline: prompt, completion, extraction, parsing.
#[derive(Debug)]
pub struct Generator<C, P> {
    client: C,
    credentials: P,
}

impl<C: CompletionClient, P: CredentialProvider> Generator<C, P> {
    pub fn new(client: C, credentials: P) -> Self {
        Self {
            client,
            credentials,
        }
    }

    /// Asks the model for a mind map of `topic` and parses the answer.
    ///
    /// # Errors
    ///
    /// * [`GenerateError::EmptyTopic`] for a blank topic, before any request
    /// * errors of the credential provider and the client, unchanged
    /// * [`GenerateError::Parse`] if the response holds no valid tree
    pub fn generate(&self, topic: &str) -> Result<MindMapTree, GenerateError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(GenerateError::EmptyTopic);
        }

        let api_key = self.credentials.api_key()?;
        info!(topic = topic; "Requesting mind map");
        let response = self.client.complete(&api_key, &mindmap_prompt(topic))?;
        debug!(len = response.len(); "Completion received");

        arbor_parser::parse_response(&response)
            .map_err(|err| GenerateError::Parse { err, response })
    }
}
