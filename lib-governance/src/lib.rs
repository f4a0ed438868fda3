//! Owner Governance - Bounded-Membership Unanimity Voting
//!
//! This crate provides the governance state that gates every privileged
//! ledger operation.
//!
//! # Key Principles
//!
//! 1. **Bounded membership**: 1 to 3 owners, never empty, never more
//! 2. **Two paths**: any owner acts alone while multisig is disabled; once
//!    enabled, every current owner must vote for the pending topic
//! 3. **One vote cycle, one action**: committing a governed operation clears
//!    the topic and ballot, so repeating it needs a fresh vote
//! 4. **Closed topics**: operations are named by the [`Topic`] enum, never by
//!    free-form strings
//!
//! # Usage
//!
//! ```
//! use lib_governance::{OwnerRegistry, Topic, VotingEngine};
//! use lib_types::Address;
//!
//! let alice = Address::new([1u8; 32]);
//! let bob = Address::new([2u8; 32]);
//!
//! let mut owners = OwnerRegistry::genesis(alice).unwrap();
//! let mut voting = VotingEngine::new();
//!
//! let approval = voting.authorize(Topic::AddNewOwner, alice, &owners).unwrap();
//! owners.add_owner(bob).unwrap();
//! voting.consume(approval);
//!
//! voting.enable_multisig().unwrap();
//! voting.set_topic(Topic::Pause, &owners).unwrap();
//! voting.vote(alice, &owners).unwrap();
//! voting.vote(bob, &owners).unwrap();
//! assert!(voting.authorize(Topic::Pause, bob, &owners).is_ok());
//! ```

pub mod errors;
pub mod owners;
pub mod topic;
pub mod voting;

pub use errors::{ErrorCategory, GovernanceError, GovernanceResult};
pub use owners::{OwnerRegistry, MAX_OWNERS, MIN_OWNERS};
pub use topic::Topic;
pub use voting::{Approval, ApprovalPath, VotingEngine, VotingState, MIN_VOTING_OWNERS};
