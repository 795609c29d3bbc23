//! Notifier: dispatches the results file by email.
//!
//! The pipeline only depends on the `Notifier` trait; SMTP is one backend.

pub mod smtp;

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;

// Re-export for convenience
pub use smtp::SmtpNotifier;

/// A destination for the finished results file.
///
/// Called exactly once per run, after the report was written, whether or not
/// any results were found. A send failure never rolls back the file on disk.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send the results file to the configured recipient.
    async fn send(&self, attachment: &Path) -> Result<()>;
}
