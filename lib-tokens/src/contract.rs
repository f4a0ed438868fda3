//! Governed Token
//!
//! The single authority over ledger and governance state. Every privileged
//! operation runs the same sequence:
//!
//! 1. **authorize** the caller for the operation's [`Topic`] (read-only)
//! 2. **validate** the request against current state
//! 3. **apply** the mutation
//! 4. **consume** the approval and record events
//!
//! Any failure in steps 1-3 returns before state changes, so the approval
//! survives for a corrected retry and no events are recorded.

use tracing::{debug, info, warn};

use lib_governance::{
    Approval, GovernanceError, OwnerRegistry, Topic, VotingEngine, VotingState,
};
use lib_types::{Address, Amount};

use crate::config::TokenConfig;
use crate::errors::{TokenError, TokenResult};
use crate::events::TokenEvent;
use crate::ledger::{InMemoryLedger, Ledger};
use crate::pause::PauseGate;
use crate::transfer::{apply_commission_transfer, move_balance, TransferResult};

/// Fee-bearing ledger gated by owner governance
#[derive(Debug, Clone)]
pub struct GovernedToken<L: Ledger = InMemoryLedger> {
    config: TokenConfig,
    /// The ledger's own address; never a recipient or owner
    contract_address: Address,
    owners: OwnerRegistry,
    voting: VotingEngine,
    pause: PauseGate,
    ledger: L,
    events: Vec<TokenEvent>,
}

impl GovernedToken<InMemoryLedger> {
    /// Create a token backed by an empty in-memory ledger
    pub fn new(
        config: TokenConfig,
        contract_address: Address,
        genesis_owner: Address,
    ) -> TokenResult<Self> {
        Self::with_ledger(config, contract_address, genesis_owner, InMemoryLedger::new())
    }
}

impl<L: Ledger> GovernedToken<L> {
    /// Create a token over an existing ledger with `genesis_owner` as the sole
    /// owner and commission holder
    ///
    /// Fails with [`TokenError::InvalidConfig`] when `config` does not pass
    /// [`TokenConfig::validate`].
    pub fn with_ledger(
        config: TokenConfig,
        contract_address: Address,
        genesis_owner: Address,
        ledger: L,
    ) -> TokenResult<Self> {
        config
            .validate()
            .map_err(|err| TokenError::InvalidConfig(err.to_string()))?;
        if genesis_owner == contract_address {
            return Err(GovernanceError::ContractAddress.into());
        }
        let owners = OwnerRegistry::genesis(genesis_owner)?;

        info!(
            "Governed token created: owner={}, min_tx_amount={}, commission={}bps",
            genesis_owner, config.min_tx_amount, config.commission.fee_bps
        );

        Ok(Self {
            config,
            contract_address,
            owners,
            voting: VotingEngine::new(),
            pause: PauseGate::new(),
            ledger,
            events: Vec::new(),
        })
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    pub fn contract_address(&self) -> Address {
        self.contract_address
    }

    pub fn is_owner(&self, addr: &Address) -> bool {
        self.owners.is_owner(addr)
    }

    pub fn owners(&self) -> &[Address] {
        self.owners.owners()
    }

    pub fn amount_owners(&self) -> usize {
        self.owners.len()
    }

    pub fn commission_holder(&self) -> Address {
        self.owners.commission_holder()
    }

    pub fn multisig_enabled(&self) -> bool {
        self.voting.multisig_enabled()
    }

    pub fn pending_topic(&self) -> Topic {
        self.voting.pending_topic()
    }

    pub fn voting_state(&self) -> VotingState {
        self.voting.state(&self.owners)
    }

    pub fn has_voted(&self, addr: &Address) -> bool {
        self.voting.has_voted(addr)
    }

    /// Votes on the pending topic cast by current owners
    pub fn vote_count(&self) -> usize {
        self.voting.live_votes(&self.owners)
    }

    pub fn paused(&self) -> bool {
        self.pause.is_paused()
    }

    pub fn balance_of(&self, account: &Address) -> Amount {
        self.ledger.balance_of(account)
    }

    pub fn total_supply(&self) -> Amount {
        self.ledger.total_supply()
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Events recorded since the last [`Self::take_events`]
    pub fn events(&self) -> &[TokenEvent] {
        &self.events
    }

    /// Drain recorded events
    pub fn take_events(&mut self) -> Vec<TokenEvent> {
        std::mem::take(&mut self.events)
    }

    // =========================================================================
    // Transfers
    // =========================================================================

    /// Transfer `amount` from `sender` to `recipient`
    ///
    /// Non-owners pay the commission and are held to the minimum amount;
    /// owners are exempt from both.
    pub fn transfer(
        &mut self,
        sender: Address,
        recipient: Address,
        amount: Amount,
    ) -> TokenResult<TransferResult> {
        self.pause.ensure_open()?;
        self.check_recipient(&recipient)?;

        let have = self.ledger.balance_of(&sender);
        if have < amount {
            return Err(TokenError::InsufficientBalance { have, need: amount });
        }

        let exempt = self.owners.is_owner(&sender);
        if !exempt && amount < self.config.min_tx_amount {
            return Err(TokenError::BelowMinimum {
                amount,
                minimum: self.config.min_tx_amount,
            });
        }

        let split = self.config.commission.split(amount, exempt);
        let holder = self.owners.commission_holder();
        let result = apply_commission_transfer(
            &mut self.ledger,
            sender,
            recipient,
            amount,
            split.fee,
            holder,
        )?;

        self.events.push(TokenEvent::transfer(sender, recipient, result.net));
        if result.fee > 0 {
            self.events.push(TokenEvent::transfer(sender, holder, result.fee));
        }

        debug!(
            "Transfer {} -> {}: amount={}, net={}, fee={}",
            sender, recipient, amount, result.net, result.fee
        );
        Ok(result)
    }

    // =========================================================================
    // Supply
    // =========================================================================

    /// Mint `amount` into `to`
    pub fn increase_token_supply(
        &mut self,
        caller: Address,
        to: Address,
        amount: Amount,
    ) -> TokenResult<()> {
        let approval = self.authorize(Topic::IncreaseTokenSupply, caller)?;
        self.check_recipient(&to)?;
        if amount == 0 {
            return Err(TokenError::ZeroAmount);
        }

        self.ledger.mint(&to, amount)?;

        self.commit(approval, [TokenEvent::transfer(Address::ZERO, to, amount)]);
        info!(
            "Supply increased by {} to {}: total_supply={}",
            amount,
            to,
            self.ledger.total_supply()
        );
        Ok(())
    }

    /// Burn `amount` held by `from`
    pub fn reduce_token_supply(
        &mut self,
        caller: Address,
        from: Address,
        amount: Amount,
    ) -> TokenResult<()> {
        let approval = self.authorize(Topic::ReduceTokenSupply, caller)?;
        if amount == 0 {
            return Err(TokenError::ZeroAmount);
        }
        let have = self.ledger.balance_of(&from);
        if have < amount {
            return Err(TokenError::InsufficientBalance { have, need: amount });
        }

        self.ledger.burn(&from, amount)?;

        self.commit(approval, [TokenEvent::transfer(from, Address::ZERO, amount)]);
        info!(
            "Supply reduced by {} from {}: total_supply={}",
            amount,
            from,
            self.ledger.total_supply()
        );
        Ok(())
    }

    // =========================================================================
    // Pause
    // =========================================================================

    pub fn pause(&mut self, caller: Address) -> TokenResult<()> {
        let approval = self.authorize(Topic::Pause, caller)?;
        self.pause.pause()?;

        self.commit(approval, [TokenEvent::Paused { by: caller }]);
        info!("Transfers paused by {}", caller);
        Ok(())
    }

    pub fn unpause(&mut self, caller: Address) -> TokenResult<()> {
        let approval = self.authorize(Topic::Unpause, caller)?;
        self.pause.unpause()?;

        self.commit(approval, [TokenEvent::Unpaused { by: caller }]);
        info!("Transfers resumed by {}", caller);
        Ok(())
    }

    // =========================================================================
    // Owner management
    // =========================================================================

    pub fn add_owner(&mut self, caller: Address, new_owner: Address) -> TokenResult<()> {
        let approval = self.authorize(Topic::AddNewOwner, caller)?;
        self.owners.add_owner(new_owner)?;

        self.commit(
            approval,
            [TokenEvent::OwnerAdded {
                owner: new_owner,
                by: caller,
            }],
        );
        info!("Owner {} added by {} ({} owners)", new_owner, caller, self.owners.len());
        Ok(())
    }

    pub fn remove_owner(&mut self, caller: Address, owner: Address) -> TokenResult<()> {
        let approval = self.authorize(Topic::RemoveOwner, caller)?;
        self.owners.remove_owner(owner, caller)?;

        self.commit(approval, [TokenEvent::OwnerRemoved { owner, by: caller }]);
        info!("Owner {} removed by {} ({} owners)", owner, caller, self.owners.len());
        Ok(())
    }

    /// Hand the caller's owner seat, and its whole balance, to `new_owner`
    ///
    /// The commission role follows the seat when the caller held it. The
    /// balance moves without commission.
    pub fn transfer_ownership(&mut self, caller: Address, new_owner: Address) -> TokenResult<()> {
        let approval = self.authorize(Topic::TransferOwnership, caller)?;

        // Stage the registry change so the balance move can still fail cleanly
        let mut owners = self.owners.clone();
        let holder_moved = owners.transfer_ownership(caller, new_owner, self.contract_address)?;

        let balance = self.ledger.balance_of(&caller);
        if balance > 0 {
            move_balance(&mut self.ledger, caller, new_owner, balance)?;
        }
        self.owners = owners;

        let mut events = vec![TokenEvent::OwnershipTransferred {
            previous: caller,
            new: new_owner,
        }];
        if balance > 0 {
            events.push(TokenEvent::transfer(caller, new_owner, balance));
        }
        if holder_moved {
            events.push(TokenEvent::CommissionHolderChanged {
                previous: caller,
                new: new_owner,
            });
        }
        self.commit(approval, events);

        info!(
            "Ownership transferred {} -> {}: balance_moved={}, commission_holder_moved={}",
            caller, new_owner, balance, holder_moved
        );
        Ok(())
    }

    /// Reassign the commission role to another owner
    ///
    /// The outgoing holder's whole balance moves to the new holder without
    /// commission.
    pub fn set_commission_holder(&mut self, caller: Address, holder: Address) -> TokenResult<()> {
        let approval = self.authorize(Topic::SetCommissionHolder, caller)?;

        let mut owners = self.owners.clone();
        let previous = owners.set_commission_holder(holder)?;

        let balance = self.ledger.balance_of(&previous);
        if balance > 0 {
            move_balance(&mut self.ledger, previous, holder, balance)?;
        }
        self.owners = owners;

        let mut events = vec![TokenEvent::CommissionHolderChanged {
            previous,
            new: holder,
        }];
        if balance > 0 {
            events.push(TokenEvent::transfer(previous, holder, balance));
        }
        self.commit(approval, events);

        info!(
            "Commission holder changed {} -> {} by {}: balance_moved={}",
            previous, holder, caller, balance
        );
        Ok(())
    }

    // =========================================================================
    // Multisig and voting
    // =========================================================================

    /// Switch to collective voting; any owner may do this
    pub fn enable_multisig(&mut self, caller: Address) -> TokenResult<()> {
        self.require_owner(caller)?;
        self.voting.enable_multisig()?;

        self.events.push(TokenEvent::MultisigEnabled { by: caller });
        info!("Multisig enabled by {} ({} owners)", caller, self.owners.len());
        Ok(())
    }

    /// Return to the single-owner path; needs an approved DISABLE_MULTISIGN
    /// while more than one owner exists
    pub fn disable_multisig(&mut self, caller: Address) -> TokenResult<()> {
        if !self.voting.multisig_enabled() {
            return Err(GovernanceError::MultisigNotEnabled.into());
        }
        let approval = self.authorize(Topic::DisableMultisign, caller)?;
        self.voting.disable_multisig()?;

        self.commit(approval, [TokenEvent::MultisigDisabled { by: caller }]);
        info!("Multisig disabled by {}", caller);
        Ok(())
    }

    /// Declare the operation owners will vote on
    pub fn set_topic(&mut self, caller: Address, topic: Topic) -> TokenResult<()> {
        self.require_owner(caller)?;
        self.voting.set_topic(topic, &self.owners)?;

        self.events.push(TokenEvent::TopicSet { topic, by: caller });
        debug!("Topic {} set by {}", topic, caller);
        Ok(())
    }

    /// [`Self::set_topic`] with the topic given by its canonical name
    pub fn set_topic_by_name(&mut self, caller: Address, name: &str) -> TokenResult<()> {
        let topic: Topic = name.parse()?;
        self.set_topic(caller, topic)
    }

    /// Cast `caller`'s vote; returns true when it completed the quorum
    pub fn vote(&mut self, caller: Address) -> TokenResult<bool> {
        let reached = self.voting.vote(caller, &self.owners)?;

        let topic = self.voting.pending_topic();
        let votes = self.voting.live_votes(&self.owners);
        let required = self.owners.len();
        self.events.push(TokenEvent::VoteCast {
            topic,
            voter: caller,
            votes,
            required,
        });

        if reached {
            info!("Quorum reached for {}: {}/{} votes", topic, votes, required);
        } else {
            debug!("Vote on {} by {}: {}/{}", topic, caller, votes, required);
        }
        Ok(reached)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn authorize(&self, topic: Topic, caller: Address) -> TokenResult<Approval> {
        self.voting
            .authorize(topic, caller, &self.owners)
            .map_err(|err| {
                warn!("Rejected {} by {}: {}", topic, caller, err);
                err.into()
            })
    }

    fn commit(&mut self, approval: Approval, events: impl IntoIterator<Item = TokenEvent>) {
        let topic = self.voting.consume(approval);
        self.events.extend(events);
        debug!("Approval for {} consumed", topic);
    }

    fn require_owner(&self, caller: Address) -> TokenResult<()> {
        if !self.owners.is_owner(&caller) {
            return Err(GovernanceError::CallerNotOwner(caller).into());
        }
        Ok(())
    }

    fn check_recipient(&self, recipient: &Address) -> TokenResult<()> {
        if recipient.is_zero() {
            return Err(TokenError::ZeroAddressRecipient);
        }
        if *recipient == self.contract_address {
            return Err(TokenError::ContractAddressRecipient);
        }
        Ok(())
    }
}
