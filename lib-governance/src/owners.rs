//! Owner Registry
//!
//! Fixed-capacity ordered set of governing accounts plus the designated
//! commission holder.
//!
//! # Invariants
//!
//! - `MIN_OWNERS <= len() <= MAX_OWNERS`
//! - Owners are distinct and never the zero address
//! - The commission holder is always a current owner
//!
//! Every mutator validates completely before touching state, so a rejected
//! call leaves the registry exactly as it was.

use serde::{Deserialize, Serialize};

use lib_types::Address;

use crate::errors::{GovernanceError, GovernanceResult};

/// Maximum number of simultaneous owners
pub const MAX_OWNERS: usize = 3;

/// Minimum number of owners; the set is never emptied
pub const MIN_OWNERS: usize = 1;

/// Governing accounts and the commission holder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerRegistry {
    /// Owners in insertion order; transfers keep the slot
    owners: Vec<Address>,
    /// Receives all transfer commission
    commission_holder: Address,
}

impl OwnerRegistry {
    /// Create a registry whose sole owner (and commission holder) is `owner`
    pub fn genesis(owner: Address) -> GovernanceResult<Self> {
        if owner.is_zero() {
            return Err(GovernanceError::InvalidAddress(owner));
        }
        let mut owners = Vec::with_capacity(MAX_OWNERS);
        owners.push(owner);
        Ok(Self {
            owners,
            commission_holder: owner,
        })
    }

    /// Membership query
    pub fn is_owner(&self, addr: &Address) -> bool {
        self.owners.contains(addr)
    }

    /// Owners in slot order
    pub fn owners(&self) -> &[Address] {
        &self.owners
    }

    /// Number of owners
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Always false once constructed; present for API symmetry
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Whether no further owner can be added
    pub fn is_full(&self) -> bool {
        self.owners.len() >= MAX_OWNERS
    }

    /// Current commission holder
    pub fn commission_holder(&self) -> Address {
        self.commission_holder
    }

    /// Append a new owner
    pub fn add_owner(&mut self, addr: Address) -> GovernanceResult<()> {
        if addr.is_zero() {
            return Err(GovernanceError::InvalidAddress(addr));
        }
        if self.is_owner(&addr) {
            return Err(GovernanceError::AlreadyOwner(addr));
        }
        if self.is_full() {
            return Err(GovernanceError::CapacityExceeded { max: MAX_OWNERS });
        }

        self.owners.push(addr);
        Ok(())
    }

    /// Remove `addr` on behalf of `caller`
    ///
    /// The commission holder cannot be removed; reassign the role first.
    pub fn remove_owner(&mut self, addr: Address, caller: Address) -> GovernanceResult<()> {
        let position = self
            .owners
            .iter()
            .position(|owner| *owner == addr)
            .ok_or(GovernanceError::NotOwner(addr))?;

        if addr == caller {
            return Err(GovernanceError::SelfRemoval);
        }
        if self.owners.len() <= MIN_OWNERS {
            return Err(GovernanceError::MinimumMembership { min: MIN_OWNERS });
        }
        if addr == self.commission_holder {
            return Err(GovernanceError::CommissionHolderRemoval(addr));
        }

        self.owners.remove(position);
        Ok(())
    }

    /// Replace owner `from` with `to`, keeping its slot
    ///
    /// `contract` is the ledger's own address, which can never own a seat.
    /// Returns true when the commission role moved along with the seat.
    pub fn transfer_ownership(
        &mut self,
        from: Address,
        to: Address,
        contract: Address,
    ) -> GovernanceResult<bool> {
        if to == from {
            return Err(GovernanceError::SelfTransfer);
        }
        if to.is_zero() {
            return Err(GovernanceError::ZeroAddress);
        }
        if to == contract {
            return Err(GovernanceError::ContractAddress);
        }
        if self.is_owner(&to) {
            return Err(GovernanceError::AlreadyOwner(to));
        }
        let slot = self
            .owners
            .iter_mut()
            .find(|owner| **owner == from)
            .ok_or(GovernanceError::NotOwner(from))?;

        *slot = to;
        let holder_moved = self.commission_holder == from;
        if holder_moved {
            self.commission_holder = to;
        }
        Ok(holder_moved)
    }

    /// Reassign the commission role, returning the previous holder
    pub fn set_commission_holder(&mut self, addr: Address) -> GovernanceResult<Address> {
        if addr.is_zero() {
            return Err(GovernanceError::ZeroAddress);
        }
        if !self.is_owner(&addr) {
            return Err(GovernanceError::NotOwner(addr));
        }
        if addr == self.commission_holder {
            return Err(GovernanceError::AlreadyHolder(addr));
        }

        Ok(std::mem::replace(&mut self.commission_holder, addr))
    }
}
