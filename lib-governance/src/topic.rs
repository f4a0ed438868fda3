//! Governance Topics
//!
//! The closed set of privileged operations an approval can be granted for.
//! Each topic authorizes exactly one governed mutation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::GovernanceError;

/// Privileged operation awaiting (or not awaiting) approval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Topic {
    /// Nothing pending
    #[default]
    None,
    /// Add a new owner
    AddNewOwner,
    /// Remove an existing owner
    RemoveOwner,
    /// Hand an owner seat to a new account
    TransferOwnership,
    /// Reassign the commission holder
    SetCommissionHolder,
    /// Mint new supply
    IncreaseTokenSupply,
    /// Burn existing supply
    ReduceTokenSupply,
    /// Pause transfers
    Pause,
    /// Resume transfers
    Unpause,
    /// Return to the single-owner fast path
    DisableMultisign,
}

impl Topic {
    /// Every topic that can be declared for voting
    pub const GOVERNED: [Topic; 9] = [
        Topic::AddNewOwner,
        Topic::RemoveOwner,
        Topic::TransferOwnership,
        Topic::SetCommissionHolder,
        Topic::IncreaseTokenSupply,
        Topic::ReduceTokenSupply,
        Topic::Pause,
        Topic::Unpause,
        Topic::DisableMultisign,
    ];

    /// Canonical upper-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::None => "NONE",
            Topic::AddNewOwner => "ADD_NEW_OWNER",
            Topic::RemoveOwner => "REMOVE_OWNER",
            Topic::TransferOwnership => "TRANSFER_OWNERSHIP",
            Topic::SetCommissionHolder => "SET_COMMISSION_HOLDER",
            Topic::IncreaseTokenSupply => "INCREASE_TOKEN_SUPPLY",
            Topic::ReduceTokenSupply => "REDUCE_TOKEN_SUPPLY",
            Topic::Pause => "PAUSE",
            Topic::Unpause => "UNPAUSE",
            Topic::DisableMultisign => "DISABLE_MULTISIGN",
        }
    }

    /// Whether this topic names an operation (everything except `None`)
    pub fn is_governed(&self) -> bool {
        !matches!(self, Topic::None)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = GovernanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NONE" => Ok(Topic::None),
            "ADD_NEW_OWNER" => Ok(Topic::AddNewOwner),
            "REMOVE_OWNER" => Ok(Topic::RemoveOwner),
            "TRANSFER_OWNERSHIP" => Ok(Topic::TransferOwnership),
            "SET_COMMISSION_HOLDER" => Ok(Topic::SetCommissionHolder),
            "INCREASE_TOKEN_SUPPLY" => Ok(Topic::IncreaseTokenSupply),
            "REDUCE_TOKEN_SUPPLY" => Ok(Topic::ReduceTokenSupply),
            "PAUSE" => Ok(Topic::Pause),
            "UNPAUSE" => Ok(Topic::Unpause),
            "DISABLE_MULTISIGN" => Ok(Topic::DisableMultisign),
            other => Err(GovernanceError::InvalidTopic(other.to_string())),
        }
    }
}
