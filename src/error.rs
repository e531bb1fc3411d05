use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GsfaError {
    #[error("failed to start session: {0}")]
    SessionStart(String),

    #[error("failed to navigate to {url}: {reason}")]
    Navigation { url: String, reason: String },

    #[error("failed to read config file {path}: {reason}")]
    Config { path: PathBuf, reason: String },
}

/// Text retrieval failure for a single element or link.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("link `{text}` has no {attribute} attribute")]
    MissingAttribute { text: String, attribute: &'static str },

    #[error("link `{text}` has unresolvable href `{href}`: {reason}")]
    InvalidHref {
        text: String,
        href: String,
        reason: String,
    },

    #[error("element text unavailable: {0}")]
    Unavailable(String),
}
