//! Error types for entity ID parsing and validation.

use thiserror::Error;

/// Errors that can occur when parsing, converting or validating entity IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The text is not a well-formed identifier.
    #[error("malformed entity ID '{input}': {reason}")]
    Malformed {
        input: String,
        reason: MalformedReason,
    },

    /// The checksum attached to an ID does not match the target ledger.
    #[error("checksum mismatch for {id}: expected '{expected}', got '{actual}'")]
    ChecksumMismatch {
        id: String,
        expected: String,
        actual: String,
    },

    /// The text is not a valid EVM (solidity) address.
    #[error("invalid EVM address '{input}': {message}")]
    InvalidEvmAddress { input: String, message: String },

    /// The shard does not fit into the 4 bytes an EVM address reserves for it.
    #[error("shard {0} does not fit in an EVM address")]
    ShardOutOfRange(u64),

    /// The text does not name a ledger.
    #[error("invalid ledger ID '{0}'")]
    InvalidLedgerId(String),

    /// The text does not name an entity kind.
    #[error("unknown entity kind '{0}'")]
    UnknownKind(String),
}

/// Why a piece of text was rejected as an identifier.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    #[error("input is empty")]
    Empty,

    #[error("expected 3 segments separated by '.', found {found}")]
    SegmentCount { found: usize },

    #[error("segment {position} is empty")]
    EmptySegment { position: usize },

    #[error("segment {position} contains a non-digit character")]
    NonDigit { position: usize },

    #[error("segment {position} does not fit in an unsigned 64-bit integer")]
    Overflow { position: usize },

    #[error("checksum must be exactly five lowercase letters")]
    Checksum,

    #[error("missing '/' or '@' before the serial number")]
    MissingSerial,

    #[error("serial number is not an unsigned 64-bit integer")]
    Serial,
}

impl IdError {
    pub(crate) fn malformed(input: &str, reason: MalformedReason) -> Self {
        IdError::Malformed {
            input: input.to_string(),
            reason,
        }
    }

    /// Returns true if this error indicates syntactically malformed input.
    pub fn is_malformed(&self) -> bool {
        matches!(self, IdError::Malformed { .. })
    }

    /// Returns true if this error indicates a checksum problem.
    pub fn is_checksum_error(&self) -> bool {
        matches!(
            self,
            IdError::ChecksumMismatch { .. }
                | IdError::Malformed {
                    reason: MalformedReason::Checksum,
                    ..
                }
        )
    }

    /// Returns the malformed-input reason, if any.
    pub fn malformed_reason(&self) -> Option<MalformedReason> {
        match self {
            IdError::Malformed { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}
