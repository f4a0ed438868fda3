//! Commission Schedule (Pure Function)
//!
//! # Rules (enforced in code)
//!
//! - `fee = floor(amount * fee_bps / 10_000)`
//! - Exempt senders (current owners) pay no commission
//! - `net + fee == amount` for every split
//! - u128 arithmetic, overflow-safe

use serde::{Deserialize, Serialize};

use lib_types::{Amount, Bps, MAX_BPS};

/// Default commission: 100 bps (1%)
pub const DEFAULT_COMMISSION_BPS: Bps = 100;

/// Flat commission charged on transfers by non-exempt senders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionSchedule {
    /// Commission in basis points (0-10000)
    pub fee_bps: Bps,
}

/// Outcome of splitting a transfer amount into recipient share and commission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSplit {
    /// Amount credited to the recipient
    pub net: Amount,
    /// Amount credited to the commission holder
    pub fee: Amount,
}

impl CommissionSchedule {
    /// Create a schedule with the given rate
    pub const fn new(fee_bps: Bps) -> Self {
        Self { fee_bps }
    }

    /// A schedule that never charges
    pub const fn zero() -> Self {
        Self { fee_bps: 0 }
    }

    /// Whether the rate is within 0-100%
    pub fn is_valid(&self) -> bool {
        self.fee_bps <= MAX_BPS
    }

    /// Commission owed on `amount`, floored
    ///
    /// At the default 100 bps this is exactly `amount / 100`.
    pub fn compute_fee(&self, amount: Amount) -> Amount {
        if self.fee_bps == 0 {
            return 0;
        }
        let bps = self.fee_bps.min(MAX_BPS) as Amount;
        let max = MAX_BPS as Amount;

        // amount * bps / max without overflowing near Amount::MAX
        (amount / max) * bps + (amount % max) * bps / max
    }

    /// Commission for a sender, zero when the sender is exempt
    pub fn effective_fee(&self, amount: Amount, exempt: bool) -> Amount {
        if exempt {
            0
        } else {
            self.compute_fee(amount)
        }
    }

    /// Split `amount` into the recipient's share and the commission
    pub fn split(&self, amount: Amount, exempt: bool) -> FeeSplit {
        let fee = self.effective_fee(amount, exempt);
        FeeSplit {
            net: amount - fee,
            fee,
        }
    }
}

impl Default for CommissionSchedule {
    fn default() -> Self {
        Self::new(DEFAULT_COMMISSION_BPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_schedule() {
        let schedule = CommissionSchedule::zero();
        assert_eq!(schedule.compute_fee(1_000_000), 0);
        assert_eq!(schedule.split(1_000_000, false).net, 1_000_000);
    }

    #[test]
    fn test_default_is_one_percent_floored() {
        let schedule = CommissionSchedule::default();
        assert_eq!(schedule.compute_fee(10_000), 100);
        assert_eq!(schedule.compute_fee(199), 1);
        assert_eq!(schedule.compute_fee(99), 0);
    }

    #[test]
    fn test_exempt_sender_pays_nothing() {
        let schedule = CommissionSchedule::default();
        let split = schedule.split(50_000, true);
        assert_eq!(split.fee, 0);
        assert_eq!(split.net, 50_000);
    }

    #[test]
    fn test_validity() {
        assert!(CommissionSchedule::new(MAX_BPS).is_valid());
        assert!(!CommissionSchedule::new(MAX_BPS + 1).is_valid());
    }

    #[test]
    fn test_no_overflow_at_max_amount() {
        let schedule = CommissionSchedule::default();
        let fee = schedule.compute_fee(Amount::MAX);
        assert_eq!(fee, Amount::MAX / 100);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_default_fee_is_floor_of_one_percent(amount in 0u128..=u64::MAX as u128) {
                let schedule = CommissionSchedule::default();
                prop_assert_eq!(schedule.compute_fee(amount), amount / 100);
            }
        }

        proptest! {
            #[test]
            fn prop_split_conserves_amount(
                amount in any::<u128>(),
                fee_bps in 0u16..=MAX_BPS,
                exempt in any::<bool>(),
            ) {
                let split = CommissionSchedule::new(fee_bps).split(amount, exempt);
                prop_assert_eq!(split.net + split.fee, amount);
                prop_assert!(split.fee <= amount);
                if exempt {
                    prop_assert_eq!(split.fee, 0);
                }
            }
        }
    }
}
