// src/error.rs

//! Unified error handling for the price research application.

use std::fmt;

use thiserror::Error;

use crate::models::Site;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// How a listing source failed.
///
/// All three kinds are recovered per site: the pipeline logs the error and
/// moves on to the next site/spec instead of aborting the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// The site could not be reached at all.
    Unavailable,
    /// The page loaded but the expected structure was not found.
    LayoutChanged,
    /// The request exceeded the configured timeout.
    Timeout,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Unavailable => write!(f, "source unavailable"),
            SourceKind::LayoutChanged => write!(f, "page layout changed"),
            SourceKind::Timeout => write!(f, "request timed out"),
        }
    }
}

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Configuration or search-spec error. Fatal: aborts the run before
    /// any site is queried.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A listing source failed. Recovered per site.
    #[error("{kind} for {site}: {message}")]
    Source {
        site: Site,
        kind: SourceKind,
        message: String,
    },

    /// Writing the results file failed. Fatal: aborts before the notifier
    /// is invoked.
    #[error("Write error for {path}: {message}")]
    Write { path: String, message: String },

    /// Email dispatch failed. Recovered: the results file already exists
    /// on disk, so the run is still considered successful.
    #[error("Send error: {0}")]
    Send(String),
}

impl AppError {
    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a listing-source error.
    pub fn source(site: Site, kind: SourceKind, message: impl fmt::Display) -> Self {
        Self::Source {
            site,
            kind,
            message: message.to_string(),
        }
    }

    /// Create a write error with the offending path.
    pub fn write(path: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Write {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create an email dispatch error.
    pub fn send(message: impl fmt::Display) -> Self {
        Self::Send(message.to_string())
    }

    /// Whether this error is recovered per site rather than aborting the run.
    pub fn is_source_error(&self) -> bool {
        matches!(self, Self::Source { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_errors_are_recoverable() {
        let err = AppError::source(Site::Amazon, SourceKind::Timeout, "deadline elapsed");
        assert!(err.is_source_error());
        assert!(!AppError::config("bad row").is_source_error());
    }

    #[test]
    fn source_error_display_names_site_and_kind() {
        let err = AppError::source(
            Site::MercadoLivre,
            SourceKind::LayoutChanged,
            "results container missing",
        );
        let msg = err.to_string();
        assert!(msg.contains("mercado_livre"));
        assert!(msg.contains("layout changed"));
    }
}
