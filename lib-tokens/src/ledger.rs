//! Ledger Storage
//!
//! Balance and supply bookkeeping the governed token builds on.

use std::collections::BTreeMap;

use lib_types::{Address, Amount};

use crate::errors::{TokenError, TokenResult};

/// Trait for balance storage operations
///
/// `credit`/`debit` move value between accounts without touching supply;
/// `mint`/`burn` change balance and total supply together.
///
/// Every failing call must leave the ledger unchanged. A debit or burn larger
/// than the balance fails. A credit that restores value debited earlier in the
/// same operation must succeed, since multi-leg writes
/// ([`crate::apply_commission_transfer`], [`crate::move_balance`]) reverse
/// their earlier legs that way when a later one fails.
pub trait Ledger {
    /// Balance of an account (zero when unknown)
    fn balance_of(&self, account: &Address) -> Amount;

    /// Total supply in circulation
    fn total_supply(&self) -> Amount;

    /// Add to a balance
    fn credit(&mut self, account: &Address, amount: Amount) -> TokenResult<()>;

    /// Subtract from a balance
    fn debit(&mut self, account: &Address, amount: Amount) -> TokenResult<()>;

    /// Create new supply in `account`
    fn mint(&mut self, account: &Address, amount: Amount) -> TokenResult<()>;

    /// Destroy supply held by `account`
    fn burn(&mut self, account: &Address, amount: Amount) -> TokenResult<()>;
}

/// Map-backed ledger
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryLedger {
    balances: BTreeMap<Address, Amount>,
    total_supply: Amount,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accounts with a non-zero balance
    pub fn holders(&self) -> impl Iterator<Item = (&Address, &Amount)> {
        self.balances.iter()
    }

    /// Sum of all balances equals total supply
    pub fn is_conserved(&self) -> bool {
        self.balances
            .values()
            .try_fold(0 as Amount, |acc, v| acc.checked_add(*v))
            == Some(self.total_supply)
    }

    fn new_credit_balance(&self, account: &Address, amount: Amount) -> TokenResult<Amount> {
        self.balance_of(account)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)
    }

    fn new_debit_balance(&self, account: &Address, amount: Amount) -> TokenResult<Amount> {
        let have = self.balance_of(account);
        have.checked_sub(amount)
            .ok_or(TokenError::InsufficientBalance { have, need: amount })
    }

    fn store(&mut self, account: &Address, balance: Amount) {
        if balance == 0 {
            self.balances.remove(account);
        } else {
            self.balances.insert(*account, balance);
        }
    }
}

impl Ledger for InMemoryLedger {
    fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or(0)
    }

    fn total_supply(&self) -> Amount {
        self.total_supply
    }

    fn credit(&mut self, account: &Address, amount: Amount) -> TokenResult<()> {
        let balance = self.new_credit_balance(account, amount)?;
        self.store(account, balance);
        Ok(())
    }

    fn debit(&mut self, account: &Address, amount: Amount) -> TokenResult<()> {
        let balance = self.new_debit_balance(account, amount)?;
        self.store(account, balance);
        Ok(())
    }

    fn mint(&mut self, account: &Address, amount: Amount) -> TokenResult<()> {
        let supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        let balance = self.new_credit_balance(account, amount)?;
        self.store(account, balance);
        self.total_supply = supply;
        Ok(())
    }

    fn burn(&mut self, account: &Address, amount: Amount) -> TokenResult<()> {
        let balance = self.new_debit_balance(account, amount)?;
        let supply = self
            .total_supply
            .checked_sub(amount)
            .ok_or(TokenError::Overflow)?;
        self.store(account, balance);
        self.total_supply = supply;
        Ok(())
    }
}
