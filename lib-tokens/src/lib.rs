//! Governed Token Ledger
//!
//! A fungible-asset ledger whose privileged operations are gated by a small
//! owner group.
//!
//! # Key Types
//!
//! - [`GovernedToken`]: the ledger façade; every operation goes through it
//! - [`TokenConfig`]: transfer floor, commission schedule and decimals
//! - [`Ledger`]: balance storage seam, with [`InMemoryLedger`] as the default
//! - [`TokenEvent`]: observable record of every committed change
//!
//! # Execution
//!
//! Plain transfers use [`GovernedToken::transfer`], which charges the
//! commission to non-owners and routes it to the commission holder through
//! [`apply_commission_transfer`]. Supply, pause and membership changes are
//! authorized by [`lib_governance::VotingEngine`] and consume their approval
//! only after the change has been applied.

pub mod config;
pub mod contract;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod pause;
pub mod transfer;

pub use config::{TokenConfig, DEFAULT_DECIMALS, DEFAULT_MIN_TX_AMOUNT};
pub use contract::GovernedToken;
pub use errors::{ConfigError, TokenError, TokenResult};
pub use events::TokenEvent;
pub use ledger::{InMemoryLedger, Ledger};
pub use pause::PauseGate;
pub use transfer::{apply_commission_transfer, move_balance, TransferResult};
