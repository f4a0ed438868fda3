//! Ledger Events
//!
//! Every committed state change appends events; a rejected call appends
//! none. Mint and burn appear as transfers from and to the zero address.

use serde::{Deserialize, Serialize};

use lib_governance::Topic;
use lib_types::{Address, Amount};

/// Observable ledger and governance events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenEvent {
    /// Value moved between accounts (net of commission for the recipient leg)
    Transfer {
        from: Address,
        to: Address,
        value: Amount,
    },

    OwnerAdded {
        owner: Address,
        by: Address,
    },

    OwnerRemoved {
        owner: Address,
        by: Address,
    },

    /// An owner seat changed hands
    OwnershipTransferred {
        previous: Address,
        new: Address,
    },

    CommissionHolderChanged {
        previous: Address,
        new: Address,
    },

    Paused {
        by: Address,
    },

    Unpaused {
        by: Address,
    },

    MultisigEnabled {
        by: Address,
    },

    MultisigDisabled {
        by: Address,
    },

    /// A topic was declared for voting
    TopicSet {
        topic: Topic,
        by: Address,
    },

    /// An owner voted on the pending topic
    VoteCast {
        topic: Topic,
        voter: Address,
        votes: usize,
        required: usize,
    },
}

impl TokenEvent {
    /// Get event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            TokenEvent::Transfer { .. } => "transfer",
            TokenEvent::OwnerAdded { .. } => "owner_added",
            TokenEvent::OwnerRemoved { .. } => "owner_removed",
            TokenEvent::OwnershipTransferred { .. } => "ownership_transferred",
            TokenEvent::CommissionHolderChanged { .. } => "commission_holder_changed",
            TokenEvent::Paused { .. } => "paused",
            TokenEvent::Unpaused { .. } => "unpaused",
            TokenEvent::MultisigEnabled { .. } => "multisig_enabled",
            TokenEvent::MultisigDisabled { .. } => "multisig_disabled",
            TokenEvent::TopicSet { .. } => "topic_set",
            TokenEvent::VoteCast { .. } => "vote_cast",
        }
    }

    /// Shorthand constructor for transfers
    pub fn transfer(from: Address, to: Address, value: Amount) -> Self {
        TokenEvent::Transfer { from, to, value }
    }
}
