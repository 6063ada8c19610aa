use thiserror::Error;

pub(crate) const REPORT_BUG_MSG: &str =
    " This indicates a bug in Schyntax. Please open an issue on github.";

/// Crate specific Errors implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The schedule string was rejected by the lexer, parser, or validator.
    /// The message ends with a two-line snippet of the offending input.
    #[error("{message}")]
    Parse {
        /// Human-readable description, including the source snippet.
        message: String,
        /// The original schedule string.
        input: String,
        /// Byte offset of the offending token within `input`.
        index: usize,
    },
    /// The search horizon was exhausted without finding a matching instant.
    #[error("A valid time was not found for the schedule.")]
    ValidTimeNotFound {
        /// The original schedule string.
        input: String,
    },
    /// An internal invariant was violated.
    #[error("{message}")]
    Internal {
        /// Description of the violated invariant.
        message: String,
        /// The original schedule string.
        input: String,
    },
}

impl Error {
    pub(crate) fn parse(message: impl Into<String>, input: &str, index: usize) -> Self {
        let mut message = message.into();
        message.push_str(&string_snippet(input, index));
        Self::Parse {
            message,
            input: input.to_string(),
            index,
        }
    }

    pub(crate) fn internal(message: impl Into<String>, input: &str) -> Self {
        let mut message = message.into();
        message.push_str(REPORT_BUG_MSG);
        Self::Internal {
            message,
            input: input.to_string(),
        }
    }

    /// The schedule string which produced this error.
    pub fn input(&self) -> &str {
        match self {
            Self::Parse { input, .. } => input,
            Self::ValidTimeNotFound { input } => input,
            Self::Internal { input, .. } => input,
        }
    }

    /// Byte offset of the offending token, for parse errors.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Parse { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Two-line context snippet: up to 20 characters before the index and 50
/// after, followed by a caret under the offending column.
fn string_snippet(input: &str, index: usize) -> String {
    let before: Vec<char> = input[..index].chars().collect();
    let after: Vec<char> = input[index..].chars().collect();

    let before = &before[before.len().saturating_sub(20)..];
    let after = &after[..after.len().min(50)];

    format!(
        "\n\n{}{}\n{}^\n",
        before.iter().collect::<String>(),
        after.iter().collect::<String>(),
        " ".repeat(before.len()),
    )
}
