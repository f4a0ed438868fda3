//! Commission Transfer Execution
//!
//! `apply_commission_transfer` moves value between accounts and routes the
//! commission to the holder. Pause, recipient and floor checks belong to the
//! caller (`GovernedToken::transfer`); this function only enforces what the
//! ledger itself must guarantee.

use lib_types::{Address, Amount};

use crate::errors::{TokenError, TokenResult};
use crate::ledger::Ledger;

/// Result of a successful transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferResult {
    /// Amount debited from the sender
    pub amount: Amount,
    /// Amount credited to the recipient
    pub net: Amount,
    /// Amount credited to the commission holder
    pub fee: Amount,
}

/// Apply a transfer with commission
///
/// # Enforcement
///
/// - **Conservation**: `amount == net + fee`; total supply is unchanged
/// - **Balance**: the sender holds at least `amount`
/// - **Fee routing**: the holder leg is skipped entirely when `fee == 0`
///
/// All checks run before the first write. If a credit fails after the debit,
/// the legs already written are reversed before the error is returned.
pub fn apply_commission_transfer(
    ledger: &mut dyn Ledger,
    from: Address,
    to: Address,
    amount: Amount,
    fee: Amount,
    commission_holder: Address,
) -> TokenResult<TransferResult> {
    let net = amount.checked_sub(fee).ok_or(TokenError::Overflow)?;

    let have = ledger.balance_of(&from);
    if have < amount {
        return Err(TokenError::InsufficientBalance { have, need: amount });
    }

    ledger.debit(&from, amount)?;
    if let Err(err) = ledger.credit(&to, net) {
        ledger.credit(&from, amount)?;
        return Err(err);
    }
    if fee > 0 {
        if let Err(err) = ledger.credit(&commission_holder, fee) {
            ledger.debit(&to, net)?;
            ledger.credit(&from, amount)?;
            return Err(err);
        }
    }

    Ok(TransferResult { amount, net, fee })
}

/// Move `amount` from `from` to `to` without commission
///
/// Used when a governance role hands its balance over. The debit is reversed
/// if the credit fails.
pub fn move_balance(
    ledger: &mut dyn Ledger,
    from: Address,
    to: Address,
    amount: Amount,
) -> TokenResult<()> {
    ledger.debit(&from, amount)?;
    if let Err(err) = ledger.credit(&to, amount) {
        ledger.credit(&from, amount)?;
        return Err(err);
    }
    Ok(())
}
