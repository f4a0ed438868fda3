//! Token Ledger Errors

use lib_governance::{ErrorCategory, GovernanceError};
use lib_types::{Amount, Bps};
use thiserror::Error;

/// Error during token operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Contract is paused")]
    Paused,

    #[error("Contract is already paused")]
    AlreadyPaused,

    #[error("Contract is not paused")]
    NotPaused,

    #[error("Recipient cannot be the zero address")]
    ZeroAddressRecipient,

    #[error("Recipient cannot be the ledger contract address")]
    ContractAddressRecipient,

    #[error("Insufficient balance: have {have}, need {need}")]
    InsufficientBalance { have: Amount, need: Amount },

    #[error("Amount {amount} is below the minimum transfer amount {minimum}")]
    BelowMinimum { amount: Amount, minimum: Amount },

    #[error("Zero amount not allowed")]
    ZeroAmount,

    #[error("Arithmetic overflow")]
    Overflow,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Governance(#[from] GovernanceError),
}

impl TokenError {
    /// Classify this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            TokenError::Paused | TokenError::AlreadyPaused | TokenError::NotPaused => {
                ErrorCategory::StateConflict
            }
            TokenError::ZeroAddressRecipient
            | TokenError::ContractAddressRecipient
            | TokenError::BelowMinimum { .. }
            | TokenError::ZeroAmount
            | TokenError::InvalidConfig(_) => ErrorCategory::Validation,
            TokenError::InsufficientBalance { .. } | TokenError::Overflow => ErrorCategory::Ledger,
            TokenError::Governance(err) => err.category(),
        }
    }

    /// Whether the caller lacked the right to act
    pub fn is_authorization(&self) -> bool {
        self.category() == ErrorCategory::Authorization
    }
}

/// Result type for token operations
pub type TokenResult<T> = Result<T, TokenError>;

/// Error loading or validating a [`crate::TokenConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Commission rate {0} bps exceeds 10000")]
    InvalidCommission(Bps),

    #[error("Decimals {0} exceed the 38 digits an Amount can scale")]
    InvalidDecimals(u8),

    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    #[error("Configuration parsing error: {0}")]
    Parsing(#[from] toml::de::Error),
}
