//! Structured error types for the hyroc crates.

use std::fmt;

use thiserror::Error;

/// The argument a precondition failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputKind {
    /// Classifier score vector.
    Scores,
    /// Ground-truth label vector.
    Labels,
    /// False/true positive rate sequences handed to AUC integration.
    Rates,
    /// The set of classifiers and their display names.
    Classifiers,
    /// Color palette used for style assignment.
    Palette,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Scores => "scores",
            Self::Labels => "labels",
            Self::Rates => "rate sequences",
            Self::Classifiers => "classifier set",
            Self::Palette => "palette",
        };
        f.write_str(name)
    }
}

/// Unified error type for all hyroc operations.
#[derive(Debug, Error)]
pub enum HyrocError {
    /// A precondition on one of the inputs was violated.
    #[error("invalid {input}: {reason}")]
    InvalidInput {
        /// Which input failed validation.
        input: InputKind,
        /// What was wrong with it.
        reason: String,
    },
}

impl HyrocError {
    /// Invalid score vector.
    pub fn scores(reason: impl Into<String>) -> Self {
        Self::invalid(InputKind::Scores, reason)
    }

    /// Invalid ground-truth labels.
    pub fn labels(reason: impl Into<String>) -> Self {
        Self::invalid(InputKind::Labels, reason)
    }

    /// Invalid fpr/tpr sequences.
    pub fn rates(reason: impl Into<String>) -> Self {
        Self::invalid(InputKind::Rates, reason)
    }

    /// Invalid classifier set.
    pub fn classifiers(reason: impl Into<String>) -> Self {
        Self::invalid(InputKind::Classifiers, reason)
    }

    /// Invalid palette or palette index.
    pub fn palette(reason: impl Into<String>) -> Self {
        Self::invalid(InputKind::Palette, reason)
    }

    fn invalid(input: InputKind, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            input,
            reason: reason.into(),
        }
    }

    /// The input that failed validation.
    pub fn input(&self) -> InputKind {
        match self {
            Self::InvalidInput { input, .. } => *input,
        }
    }

    /// What was wrong with the input, without the input name.
    pub fn reason(&self) -> &str {
        match self {
            Self::InvalidInput { reason, .. } => reason,
        }
    }

    /// Prefix the reason with `context`, keeping the input kind.
    pub fn with_context(self, context: impl fmt::Display) -> Self {
        match self {
            Self::InvalidInput { input, reason } => Self::InvalidInput {
                input,
                reason: format!("{}: {}", context, reason),
            },
        }
    }
}

/// Convenience alias used throughout the hyroc crates.
pub type Result<T> = std::result::Result<T, HyrocError>;
