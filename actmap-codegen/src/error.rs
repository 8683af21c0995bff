//! Mapping file errors
//!
//! Every problem found while reading a mapping file is fatal. Each variant
//! records the 1-based line number and the full text of the offending line
//! so the user can locate it.

use thiserror::Error;

/// Result type for mapping file parsing.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// A fatal problem in a mapping file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A mapping line has fewer than three tokens.
    #[error("line {line}: invalid tuple, expected 3 elements (address button value), found {found}\n  > {text}")]
    InvalidTupleArity {
        line: usize,
        text: String,
        found: usize,
    },

    /// A `group` line is not followed by exactly one integer.
    #[error("line {line}: invalid group directive, expected `group <integer>`\n  > {text}")]
    InvalidGroupDirective { line: usize, text: String },

    /// The address token is not four colon-separated hex byte pairs.
    #[error("line {line}: invalid address `{token}`, expected ##:##:##:## where # is a hex digit\n  > {text}")]
    InvalidAddressFormat {
        line: usize,
        text: String,
        token: String,
    },

    /// The button token is not an integer in [-2, 8].
    #[error("line {line}: button ID `{token}` must be in the range [-2..8]\n  > {text}")]
    ButtonOutOfRange {
        line: usize,
        text: String,
        token: String,
    },

    /// The value token is not an integer.
    #[error("line {line}: invalid value `{token}`, expected a signed integer\n  > {text}")]
    InvalidValue {
        line: usize,
        text: String,
        token: String,
    },
}

impl ConfigError {
    /// 1-based line number of the offending line.
    pub fn line(&self) -> usize {
        match self {
            Self::InvalidTupleArity { line, .. }
            | Self::InvalidGroupDirective { line, .. }
            | Self::InvalidAddressFormat { line, .. }
            | Self::ButtonOutOfRange { line, .. }
            | Self::InvalidValue { line, .. } => *line,
        }
    }

    /// Full text of the offending line.
    pub fn text(&self) -> &str {
        match self {
            Self::InvalidTupleArity { text, .. }
            | Self::InvalidGroupDirective { text, .. }
            | Self::InvalidAddressFormat { text, .. }
            | Self::ButtonOutOfRange { text, .. }
            | Self::InvalidValue { text, .. } => text,
        }
    }
}
