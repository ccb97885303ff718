// src/client/mod.rs
//! Form client for the generator: reads the form, posts it to `/generate`
//! and writes the outcome into the result node.
use thiserror::Error;

pub mod form;
pub mod render;
pub mod submit;

pub use form::FormState;
pub use render::TerminalSink;
pub use submit::{SubmitEvent, SubmitHandler};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Form element '#{0}' not found")]
    MissingElement(&'static str),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}
