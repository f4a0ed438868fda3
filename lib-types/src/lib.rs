//! Governed ledger primitives.
//! Stable, protocol-neutral, behavior-free.

pub mod primitives;

pub use primitives::{Address, Amount, Bps, MAX_BPS};
