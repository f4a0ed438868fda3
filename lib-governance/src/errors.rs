//! Governance Errors

use thiserror::Error;
use lib_types::Address;

use crate::topic::Topic;

/// Coarse classification of a rejection, for callers that branch on cause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Malformed request: bad address, amount or topic
    Validation,
    /// Caller may not perform the operation right now
    Authorization,
    /// Owner-set size or membership rule violated
    Capacity,
    /// Request conflicts with current state
    StateConflict,
    /// Balance or supply bookkeeping rejected the request
    Ledger,
}

/// Error during governance operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GovernanceError {
    // =========================================================================
    // Validation
    // =========================================================================
    #[error("Invalid address: {0:?} cannot be an owner")]
    InvalidAddress(Address),

    #[error("Account cannot be the zero address")]
    ZeroAddress,

    #[error("Account cannot be the ledger contract address")]
    ContractAddress,

    #[error("Cannot transfer ownership to yourself")]
    SelfTransfer,

    #[error("Invalid topic: {0}")]
    InvalidTopic(String),

    // =========================================================================
    // Authorization
    // =========================================================================
    #[error("Caller {0:?} is not an owner")]
    CallerNotOwner(Address),

    #[error("No approval pending for {requested}")]
    NoApproval { requested: Topic },

    #[error("Approval pending for {pending}, not {requested}")]
    TopicMismatch { pending: Topic, requested: Topic },

    #[error("Quorum not reached for {topic}: {votes} of {required} votes")]
    QuorumNotReached {
        topic: Topic,
        votes: usize,
        required: usize,
    },

    // =========================================================================
    // Capacity / membership
    // =========================================================================
    #[error("Account {0:?} is already an owner")]
    AlreadyOwner(Address),

    #[error("Account {0:?} is not an owner")]
    NotOwner(Address),

    #[error("Owner capacity exceeded: at most {max} owners")]
    CapacityExceeded { max: usize },

    #[error("An owner cannot remove itself")]
    SelfRemoval,

    #[error("Removal would leave fewer than {min} owner")]
    MinimumMembership { min: usize },

    #[error("Owner {0:?} holds the commission role; reassign it before removal")]
    CommissionHolderRemoval(Address),

    #[error("Voting requires 2 to 3 owners, have {count}")]
    InvalidMemberCount { count: usize },

    // =========================================================================
    // State conflict
    // =========================================================================
    #[error("Account {0:?} is already the commission holder")]
    AlreadyHolder(Address),

    #[error("Topic {0} is already pending")]
    TopicAlreadyPending(Topic),

    #[error("No topic pending; set a topic before voting")]
    NoPendingTopic,

    #[error("Owner {0:?} already voted on the pending topic")]
    AlreadyVoted(Address),

    #[error("Multisig is already enabled")]
    MultisigAlreadyEnabled,

    #[error("Multisig is not enabled")]
    MultisigNotEnabled,
}

impl GovernanceError {
    /// Classify this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            GovernanceError::InvalidAddress(_)
            | GovernanceError::ZeroAddress
            | GovernanceError::ContractAddress
            | GovernanceError::SelfTransfer
            | GovernanceError::InvalidTopic(_) => ErrorCategory::Validation,

            GovernanceError::CallerNotOwner(_)
            | GovernanceError::NoApproval { .. }
            | GovernanceError::TopicMismatch { .. }
            | GovernanceError::QuorumNotReached { .. } => ErrorCategory::Authorization,

            GovernanceError::AlreadyOwner(_)
            | GovernanceError::NotOwner(_)
            | GovernanceError::CapacityExceeded { .. }
            | GovernanceError::SelfRemoval
            | GovernanceError::MinimumMembership { .. }
            | GovernanceError::CommissionHolderRemoval(_)
            | GovernanceError::InvalidMemberCount { .. } => ErrorCategory::Capacity,

            GovernanceError::AlreadyHolder(_)
            | GovernanceError::TopicAlreadyPending(_)
            | GovernanceError::NoPendingTopic
            | GovernanceError::AlreadyVoted(_)
            | GovernanceError::MultisigAlreadyEnabled
            | GovernanceError::MultisigNotEnabled => ErrorCategory::StateConflict,
        }
    }

    /// Whether the caller lacked the right to act
    pub fn is_authorization(&self) -> bool {
        self.category() == ErrorCategory::Authorization
    }
}

/// Result type for governance operations
pub type GovernanceResult<T> = Result<T, GovernanceError>;
