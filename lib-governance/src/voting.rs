//! Voting Engine
//!
//! Multisig flag, the single pending topic and its ballot.
//!
//! # State machine
//!
//! ```text
//! Idle ──set_topic──▶ TopicSet ──vote──▶ Voting ──vote──▶ QuorumReached
//!  ▲                                                          │
//!  └────────────── consume(approval) / disable_multisig ◀─────┘
//! ```
//!
//! Quorum is unanimity: every current owner must have voted. Votes from
//! accounts that are no longer owners never count.
//!
//! `authorize` only inspects state and may be called any number of times.
//! Single use comes from the caller pairing each applied mutation with
//! `consume`, which clears the topic and ballot so the next `authorize` for a
//! governed topic needs a fresh vote. A failed mutation skips `consume` and
//! leaves the approval state intact.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use lib_types::Address;

use crate::errors::{GovernanceError, GovernanceResult};
use crate::owners::{OwnerRegistry, MAX_OWNERS};
use crate::topic::Topic;

/// Minimum owner count for which voting is defined
pub const MIN_VOTING_OWNERS: usize = 2;

/// Observable voting phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VotingState {
    /// No topic pending
    Idle,
    /// Topic declared, no live votes yet
    TopicSet,
    /// Some but not all owners have voted
    Voting,
    /// Every current owner has voted
    QuorumReached,
}

/// How an approval was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalPath {
    /// Multisig disabled: any owner acts alone
    SingleOwner,
    /// Multisig enabled but only one owner exists
    SoleOwner,
    /// Unanimous ballot on the matching topic
    Multisig,
}

/// Evidence that `topic` was authorized against the current state
///
/// Not `Clone`. Handing it to [`VotingEngine::consume`] resets the ballot; the
/// engine itself does not track outstanding approvals.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "an approval must be consumed once the governed mutation succeeds"]
pub struct Approval {
    topic: Topic,
    path: ApprovalPath,
}

impl Approval {
    /// Topic this approval covers
    pub fn topic(&self) -> Topic {
        self.topic
    }

    /// Route by which it was granted
    pub fn path(&self) -> ApprovalPath {
        self.path
    }
}

/// Multisig mode, pending topic and ballot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingEngine {
    multisig_enabled: bool,
    topic: Topic,
    ballot: BTreeSet<Address>,
}

impl VotingEngine {
    /// Multisig disabled, nothing pending
    pub fn new() -> Self {
        Self::default()
    }

    pub fn multisig_enabled(&self) -> bool {
        self.multisig_enabled
    }

    pub fn pending_topic(&self) -> Topic {
        self.topic
    }

    /// Accounts that voted on the pending topic
    pub fn ballot(&self) -> impl Iterator<Item = &Address> {
        self.ballot.iter()
    }

    pub fn has_voted(&self, addr: &Address) -> bool {
        self.ballot.contains(addr)
    }

    /// Votes cast by accounts that are still owners
    pub fn live_votes(&self, owners: &OwnerRegistry) -> usize {
        self.ballot.iter().filter(|voter| owners.is_owner(voter)).count()
    }

    /// Unanimity among current owners on a declared topic
    pub fn has_quorum(&self, owners: &OwnerRegistry) -> bool {
        self.topic.is_governed()
            && owners.len() >= MIN_VOTING_OWNERS
            && self.live_votes(owners) >= owners.len()
    }

    pub fn state(&self, owners: &OwnerRegistry) -> VotingState {
        if !self.topic.is_governed() {
            VotingState::Idle
        } else if self.has_quorum(owners) {
            VotingState::QuorumReached
        } else if self.live_votes(owners) == 0 {
            VotingState::TopicSet
        } else {
            VotingState::Voting
        }
    }

    pub fn enable_multisig(&mut self) -> GovernanceResult<()> {
        if self.multisig_enabled {
            return Err(GovernanceError::MultisigAlreadyEnabled);
        }
        self.multisig_enabled = true;
        Ok(())
    }

    /// Turn multisig off and drop any pending topic and ballot
    pub fn disable_multisig(&mut self) -> GovernanceResult<()> {
        if !self.multisig_enabled {
            return Err(GovernanceError::MultisigNotEnabled);
        }
        self.multisig_enabled = false;
        self.reset();
        Ok(())
    }

    /// Declare the operation owners are about to vote on
    pub fn set_topic(&mut self, topic: Topic, owners: &OwnerRegistry) -> GovernanceResult<()> {
        if !self.multisig_enabled {
            return Err(GovernanceError::MultisigNotEnabled);
        }
        if !topic.is_governed() {
            return Err(GovernanceError::InvalidTopic(topic.to_string()));
        }
        if self.topic.is_governed() {
            return Err(GovernanceError::TopicAlreadyPending(self.topic));
        }
        if topic == Topic::AddNewOwner && owners.is_full() {
            return Err(GovernanceError::CapacityExceeded { max: MAX_OWNERS });
        }

        self.topic = topic;
        self.ballot.clear();
        Ok(())
    }

    /// Record `caller`'s vote for the pending topic
    ///
    /// Returns true when this vote completed the quorum.
    pub fn vote(&mut self, caller: Address, owners: &OwnerRegistry) -> GovernanceResult<bool> {
        let count = owners.len();
        if !(MIN_VOTING_OWNERS..=MAX_OWNERS).contains(&count) {
            return Err(GovernanceError::InvalidMemberCount { count });
        }
        if !self.topic.is_governed() {
            return Err(GovernanceError::NoPendingTopic);
        }
        if !owners.is_owner(&caller) {
            return Err(GovernanceError::NotOwner(caller));
        }
        if self.ballot.contains(&caller) {
            return Err(GovernanceError::AlreadyVoted(caller));
        }

        self.ballot.insert(caller);
        Ok(self.has_quorum(owners))
    }

    /// Check whether `caller` may perform `topic` right now
    ///
    /// Does not modify state; pass the approval to [`Self::consume`] once the
    /// operation has been applied.
    pub fn authorize(
        &self,
        topic: Topic,
        caller: Address,
        owners: &OwnerRegistry,
    ) -> GovernanceResult<Approval> {
        if !topic.is_governed() {
            return Err(GovernanceError::InvalidTopic(topic.to_string()));
        }
        if !owners.is_owner(&caller) {
            return Err(GovernanceError::CallerNotOwner(caller));
        }

        if !self.multisig_enabled {
            return Ok(Approval {
                topic,
                path: ApprovalPath::SingleOwner,
            });
        }
        if owners.len() < MIN_VOTING_OWNERS {
            return Ok(Approval {
                topic,
                path: ApprovalPath::SoleOwner,
            });
        }

        if !self.topic.is_governed() {
            return Err(GovernanceError::NoApproval { requested: topic });
        }
        if self.topic != topic {
            return Err(GovernanceError::TopicMismatch {
                pending: self.topic,
                requested: topic,
            });
        }
        if !self.has_quorum(owners) {
            return Err(GovernanceError::QuorumNotReached {
                topic,
                votes: self.live_votes(owners),
                required: owners.len(),
            });
        }

        Ok(Approval {
            topic,
            path: ApprovalPath::Multisig,
        })
    }

    /// Spend an approval: return to `Idle`
    pub fn consume(&mut self, approval: Approval) -> Topic {
        self.reset();
        approval.topic
    }

    fn reset(&mut self) {
        self.topic = Topic::None;
        self.ballot.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(n: u8) -> Address {
        Address::new([n; 32])
    }

    fn owners(count: u8) -> OwnerRegistry {
        let mut registry = OwnerRegistry::genesis(addr(1)).unwrap();
        for n in 2..=count {
            registry.add_owner(addr(n)).unwrap();
        }
        registry
    }

    fn enabled() -> VotingEngine {
        let mut engine = VotingEngine::new();
        engine.enable_multisig().unwrap();
        engine
    }

    #[test]
    fn test_single_owner_path_when_disabled() {
        let engine = VotingEngine::new();
        let registry = owners(3);

        let approval = engine.authorize(Topic::Pause, addr(2), &registry).unwrap();
        assert_eq!(approval.path(), ApprovalPath::SingleOwner);
        assert_eq!(approval.topic(), Topic::Pause);

        assert_eq!(
            engine.authorize(Topic::Pause, addr(9), &registry),
            Err(GovernanceError::CallerNotOwner(addr(9)))
        );
    }

    #[test]
    fn test_sole_owner_path_when_enabled() {
        let engine = enabled();
        let registry = owners(1);

        let approval = engine.authorize(Topic::AddNewOwner, addr(1), &registry).unwrap();
        assert_eq!(approval.path(), ApprovalPath::SoleOwner);
    }

    #[test]
    fn test_enable_disable() {
        let mut engine = VotingEngine::new();
        assert_eq!(engine.disable_multisig(), Err(GovernanceError::MultisigNotEnabled));

        engine.enable_multisig().unwrap();
        assert!(engine.multisig_enabled());
        assert_eq!(engine.enable_multisig(), Err(GovernanceError::MultisigAlreadyEnabled));

        let registry = owners(2);
        engine.set_topic(Topic::Pause, &registry).unwrap();
        engine.vote(addr(1), &registry).unwrap();

        engine.disable_multisig().unwrap();
        assert!(!engine.multisig_enabled());
        assert_eq!(engine.pending_topic(), Topic::None);
        assert_eq!(engine.ballot().count(), 0);
    }

    #[test]
    fn test_set_topic_rules() {
        let mut engine = VotingEngine::new();
        let registry = owners(2);

        assert_eq!(
            engine.set_topic(Topic::Pause, &registry),
            Err(GovernanceError::MultisigNotEnabled)
        );

        engine.enable_multisig().unwrap();
        assert_eq!(
            engine.set_topic(Topic::None, &registry),
            Err(GovernanceError::InvalidTopic("NONE".to_string()))
        );

        engine.set_topic(Topic::AddNewOwner, &registry).unwrap();
        assert_eq!(engine.state(&registry), VotingState::TopicSet);
        assert_eq!(
            engine.set_topic(Topic::DisableMultisign, &registry),
            Err(GovernanceError::TopicAlreadyPending(Topic::AddNewOwner))
        );
    }

    #[test]
    fn test_add_topic_rejected_at_capacity() {
        let mut engine = enabled();
        let registry = owners(3);

        assert_eq!(
            engine.set_topic(Topic::AddNewOwner, &registry),
            Err(GovernanceError::CapacityExceeded { max: MAX_OWNERS })
        );
        assert_eq!(engine.pending_topic(), Topic::None);
        engine.set_topic(Topic::RemoveOwner, &registry).unwrap();
    }

    #[test]
    fn test_vote_rules() {
        let mut engine = enabled();
        let registry = owners(2);

        assert_eq!(engine.vote(addr(1), &registry), Err(GovernanceError::NoPendingTopic));

        engine.set_topic(Topic::Pause, &registry).unwrap();
        assert_eq!(
            engine.vote(addr(7), &registry),
            Err(GovernanceError::NotOwner(addr(7)))
        );

        assert_eq!(engine.vote(addr(1), &registry), Ok(false));
        assert_eq!(engine.state(&registry), VotingState::Voting);
        assert_eq!(
            engine.vote(addr(1), &registry),
            Err(GovernanceError::AlreadyVoted(addr(1)))
        );

        assert_eq!(engine.vote(addr(2), &registry), Ok(true));
        assert_eq!(engine.state(&registry), VotingState::QuorumReached);
    }

    #[test]
    fn test_vote_requires_two_or_three_owners() {
        let mut engine = enabled();
        let registry = owners(1);
        engine.set_topic(Topic::Pause, &registry).unwrap();

        assert_eq!(
            engine.vote(addr(1), &registry),
            Err(GovernanceError::InvalidMemberCount { count: 1 })
        );
    }

    #[test]
    fn test_member_count_checked_before_topic() {
        let mut engine = enabled();
        let registry = owners(1);

        assert_eq!(
            engine.vote(addr(1), &registry),
            Err(GovernanceError::InvalidMemberCount { count: 1 })
        );
        // Applies to outsiders too
        assert_eq!(
            engine.vote(addr(9), &registry),
            Err(GovernanceError::InvalidMemberCount { count: 1 })
        );
    }

    #[test]
    fn test_unanimity_required() {
        let mut engine = enabled();
        let registry = owners(3);
        engine.set_topic(Topic::IncreaseTokenSupply, &registry).unwrap();

        engine.vote(addr(1), &registry).unwrap();
        engine.vote(addr(2), &registry).unwrap();
        assert_eq!(
            engine.authorize(Topic::IncreaseTokenSupply, addr(1), &registry),
            Err(GovernanceError::QuorumNotReached {
                topic: Topic::IncreaseTokenSupply,
                votes: 2,
                required: 3,
            })
        );

        engine.vote(addr(3), &registry).unwrap();
        let approval = engine
            .authorize(Topic::IncreaseTokenSupply, addr(3), &registry)
            .unwrap();
        assert_eq!(approval.path(), ApprovalPath::Multisig);
    }

    #[test]
    fn test_authorize_topic_checks() {
        let mut engine = enabled();
        let registry = owners(2);

        assert_eq!(
            engine.authorize(Topic::Pause, addr(1), &registry),
            Err(GovernanceError::NoApproval { requested: Topic::Pause })
        );

        engine.set_topic(Topic::Unpause, &registry).unwrap();
        engine.vote(addr(1), &registry).unwrap();
        engine.vote(addr(2), &registry).unwrap();
        assert_eq!(
            engine.authorize(Topic::Pause, addr(1), &registry),
            Err(GovernanceError::TopicMismatch {
                pending: Topic::Unpause,
                requested: Topic::Pause,
            })
        );
    }

    #[test]
    fn test_consume_prevents_replay() {
        let mut engine = enabled();
        let registry = owners(2);
        engine.set_topic(Topic::RemoveOwner, &registry).unwrap();
        engine.vote(addr(1), &registry).unwrap();
        engine.vote(addr(2), &registry).unwrap();

        let approval = engine.authorize(Topic::RemoveOwner, addr(1), &registry).unwrap();
        // Authorizing twice without consuming does not change anything
        let again = engine.authorize(Topic::RemoveOwner, addr(2), &registry).unwrap();
        assert_eq!(again.path(), ApprovalPath::Multisig);
        drop(again);

        assert_eq!(engine.consume(approval), Topic::RemoveOwner);
        assert_eq!(engine.state(&registry), VotingState::Idle);
        assert_eq!(engine.ballot().count(), 0);

        let err = engine.authorize(Topic::RemoveOwner, addr(1), &registry).unwrap_err();
        assert!(err.is_authorization());
    }

    #[test]
    fn test_votes_of_removed_owners_do_not_count() {
        let mut engine = enabled();
        let mut registry = owners(3);
        engine.set_topic(Topic::Pause, &registry).unwrap();
        engine.vote(addr(3), &registry).unwrap();
        engine.vote(addr(1), &registry).unwrap();

        registry.remove_owner(addr(3), addr(1)).unwrap();
        assert!(engine.has_voted(&addr(3)));
        assert_eq!(engine.live_votes(&registry), 1);
        assert!(!engine.has_quorum(&registry));

        engine.vote(addr(2), &registry).unwrap();
        assert!(engine.has_quorum(&registry));
    }
}
