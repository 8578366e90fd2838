//! Error types for project analysis.
//!
//! Failures fall into three classes:
//!
//! - **InvalidArgument**: rejected input (malformed options or results records,
//!   a module without a usable `src_path`). Raised before any collaborator runs
//!   for the offending input.
//! - **ModuleAnalysisFailure**: the per-module analyzer failed. The message is
//!   prefixed with the module's `src_path`; the [`AnalyzerErrorKind`] is kept.
//! - **CollaboratorFailure**: a plugin hook failed. Propagated unmodified.
//!
//! # Example
//!
//! ```rust
//! use project_complexity::errors::{AnalyzerError, Error};
//!
//! let err = Error::module_analysis("src/a.js", AnalyzerError::syntax("Unexpected token"));
//! assert_eq!(err.to_string(), "src/a.js: Unexpected token");
//! assert_eq!(err.category(), "ModuleAnalysisFailure");
//! ```

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for project analysis operations
#[derive(Debug, Error)]
pub enum Error {
    /// Input rejected before any work was done for it
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The per-module analyzer failed. `source` is the analyzer's own error,
    /// unprefixed.
    #[error("{src_path}: {source}")]
    ModuleAnalysis {
        src_path: String,
        #[source]
        source: AnalyzerError,
    },

    /// A plugin hook failed
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),

    /// Configuration file errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        path: Option<PathBuf>,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Wrap an analyzer failure; the message reads `"{src_path}: {message}"`.
    pub fn module_analysis(src_path: impl Into<String>, source: AnalyzerError) -> Self {
        Self::ModuleAnalysis {
            src_path: src_path.into(),
            source,
        }
    }

    /// Create a configuration error with path context
    pub fn configuration(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Configuration {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Get the error category name.
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "InvalidArgument",
            Self::ModuleAnalysis { .. } => "ModuleAnalysisFailure",
            Self::Collaborator(_) => "CollaboratorFailure",
            Self::Configuration { .. } => "Config",
            Self::Io(_) => "I/O",
            Self::Json(_) => "JSON",
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// The analyzer failure as one kind-preserving error whose message carries
    /// the `src_path` prefix.
    pub fn into_analyzer_error(self) -> Option<AnalyzerError> {
        match self {
            Self::ModuleAnalysis { src_path, source } => Some(source.prefixed(&src_path)),
            _ => None,
        }
    }

    /// The `src_path` of the module whose analysis failed, if any.
    pub fn src_path(&self) -> Option<&str> {
        match self {
            Self::ModuleAnalysis { src_path, .. } => Some(src_path),
            _ => None,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Classification of per-module analyzer failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalyzerErrorKind {
    /// The AST is malformed (contains error or missing nodes)
    Syntax,
    /// The AST uses a construct the analyzer does not handle
    Unsupported,
    /// Anything else inside the analyzer
    Internal,
}

impl fmt::Display for AnalyzerErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Syntax => "syntax",
            Self::Unsupported => "unsupported",
            Self::Internal => "internal",
        };
        f.write_str(name)
    }
}

/// Failure reported by a [`ModuleAnalyzer`](crate::analyzers::ModuleAnalyzer).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AnalyzerError {
    kind: AnalyzerErrorKind,
    message: String,
}

impl AnalyzerError {
    pub fn new(kind: AnalyzerErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn syntax(message: impl Into<String>) -> Self {
        Self::new(AnalyzerErrorKind::Syntax, message)
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::new(AnalyzerErrorKind::Unsupported, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AnalyzerErrorKind::Internal, message)
    }

    pub fn kind(&self) -> AnalyzerErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Same kind, message rewritten to `"{prefix}: {message}"`.
    pub fn prefixed(self, prefix: &str) -> Self {
        Self {
            kind: self.kind,
            message: format!("{}: {}", prefix, self.message),
        }
    }
}
