/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Diagnostics sink.
//!
//! Non-fatal conditions (unsupported types, unmatched enum constants,
//! installation failures) and per-field progress are reported through the
//! [`Diagnostics`] trait. Fatal parse failures are returned as errors instead.

use tracing::{error, info, warn};

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Progress information.
    Info,
    /// The field was left without an initializer.
    Warn,
    /// Supporting code could not be generated.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        };
        f.write_str(s)
    }
}

/// One diagnostic about one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity.
    pub severity: Severity,
    /// Name of the class declaring the field.
    pub class: String,
    /// Name of the field.
    pub field: String,
    /// Human-readable message.
    pub message: String,
}

/// Receiver of diagnostics emitted during a pass.
pub trait Diagnostics {
    /// Records a diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);

    /// Records an informational diagnostic.
    fn info(&mut self, class: &str, field: &str, message: String) {
        self.report(Diagnostic {
            severity: Severity::Info,
            class: class.to_string(),
            field: field.to_string(),
            message,
        });
    }

    /// Records a warning.
    fn warn(&mut self, class: &str, field: &str, message: String) {
        self.report(Diagnostic {
            severity: Severity::Warn,
            class: class.to_string(),
            field: field.to_string(),
            message,
        });
    }

    /// Records an error.
    fn error(&mut self, class: &str, field: &str, message: String) {
        self.report(Diagnostic {
            severity: Severity::Error,
            class: class.to_string(),
            field: field.to_string(),
            message,
        });
    }
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        let Diagnostic {
            severity,
            class,
            field,
            message,
        } = diagnostic;
        match severity {
            Severity::Info => info!(%class, %field, "{}", message),
            Severity::Warn => warn!(%class, %field, "{}", message),
            Severity::Error => error!(%class, %field, "{}", message),
        }
    }
}

/// Collects diagnostics in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingDiagnostics {
    entries: Vec<Diagnostic>,
}

impl RecordingDiagnostics {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded diagnostics in emission order.
    #[must_use]
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Returns the diagnostics recorded for one field.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.entries.iter().filter(move |d| d.field == field)
    }

    /// Returns the number of diagnostics with the given severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.entries.iter().filter(|d| d.severity == severity).count()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }
}
