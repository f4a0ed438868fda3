//! Commission Fee Model
//!
//! Pure, deterministic commission computation for ledger transfers.
//!
//! # Design Principles
//!
//! 1. **Pure functions** - No side effects, no global state
//! 2. **Deterministic** - Same inputs produce identical outputs across all platforms
//! 3. **No floats** - All arithmetic uses integer basis points
//! 4. **Sender-favoring rounding** - Fractional fees are floored, never rounded up
//!
//! Crediting the fee to the commission holder is the ledger's job; this crate
//! only decides how much of a transfer is commission.
//!
//! # Usage
//!
//! ```
//! use lib_fees::CommissionSchedule;
//!
//! let schedule = CommissionSchedule::default(); // 1%
//! let split = schedule.split(1_000, false);
//! assert_eq!(split.fee, 10);
//! assert_eq!(split.net, 990);
//! ```

pub mod commission;

#[cfg(test)]
mod golden_vectors;

pub use commission::{CommissionSchedule, FeeSplit, DEFAULT_COMMISSION_BPS};
