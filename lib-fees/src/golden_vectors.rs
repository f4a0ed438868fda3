//! Golden vectors for the commission schedule.
//!
//! Amounts are in base units with 8 decimals unless noted. Any change to
//! these values changes ledger balances and must be deliberate.

use crate::commission::CommissionSchedule;

const UNIT: u128 = 100_000_000;

#[test]
fn golden_holder_to_holder_transfer() {
    // 1000 whole tokens between two non-owners
    let split = CommissionSchedule::default().split(1_000 * UNIT, false);
    assert_eq!(split.fee, 10 * UNIT);
    assert_eq!(split.net, 990 * UNIT);
}

#[test]
fn golden_half_of_minted_supply() {
    // 50000 whole tokens: 500 to the commission holder, not 500 + 1
    let split = CommissionSchedule::default().split(50_000 * UNIT, false);
    assert_eq!(split.fee, 500 * UNIT);
    assert_eq!(split.net, 49_500 * UNIT);
}

#[test]
fn golden_minimum_amount_transfer() {
    // The default floor of 100 base units yields exactly one unit of commission
    let split = CommissionSchedule::default().split(100, false);
    assert_eq!(split.fee, 1);
    assert_eq!(split.net, 99);
}

#[test]
fn golden_fractional_fee_is_floored() {
    let split = CommissionSchedule::default().split(12_345, false);
    assert_eq!(split.fee, 123);
    assert_eq!(split.net, 12_222);
}

#[test]
fn golden_owner_sender_exempt() {
    let split = CommissionSchedule::default().split(99, true);
    assert_eq!(split.fee, 0);
    assert_eq!(split.net, 99);
}

#[test]
fn golden_custom_rate() {
    // 2.5%
    let split = CommissionSchedule::new(250).split(10_000, false);
    assert_eq!(split.fee, 250);
    assert_eq!(split.net, 9_750);
}

#[test]
fn determinism_repeated_computation() {
    let schedule = CommissionSchedule::default();
    let first = schedule.compute_fee(987_654_321);
    for _ in 0..100 {
        assert_eq!(schedule.compute_fee(987_654_321), first);
    }
}
