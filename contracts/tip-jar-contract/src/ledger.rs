use soroban_sdk::{Env, String};

use crate::constants::{
    DEFAULT_MIN_TIP_AMOUNT, INITIAL_DEBUG_AMOUNT, INITIAL_TIP_COUNT, INITIAL_TIP_TOTAL, NO_TIPPER,
};
use crate::types::{DataKey, Error, TipInfo};

/// In-memory copy of the five tip jar slots.
///
/// The methods that change a `TipLedger` only validate and mutate the struct;
/// persisting it is left to `load`/`store` so the rules can be exercised
/// without touching contract storage.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TipLedger {
    pub last_tipper: String,
    pub total_tips: u64,
    pub tip_count: u64,
    pub min_tip_amount: u64,
    pub debug_last_amount: u64,
}

impl TipLedger {
    /// Ledger state of a freshly deployed tip jar
    pub fn new(env: &Env) -> Self {
        Self {
            last_tipper: String::from_str(env, NO_TIPPER),
            total_tips: INITIAL_TIP_TOTAL,
            tip_count: INITIAL_TIP_COUNT,
            min_tip_amount: DEFAULT_MIN_TIP_AMOUNT,
            debug_last_amount: INITIAL_DEBUG_AMOUNT,
        }
    }

    /// Read all slots from instance storage, falling back to the deployment defaults
    pub fn load(env: &Env) -> Self {
        let storage = env.storage().instance();

        Self {
            last_tipper: storage
                .get(&DataKey::LastTipper)
                .unwrap_or_else(|| String::from_str(env, NO_TIPPER)),
            total_tips: storage
                .get(&DataKey::TotalTips)
                .unwrap_or(INITIAL_TIP_TOTAL),
            tip_count: storage
                .get(&DataKey::TipCount)
                .unwrap_or(INITIAL_TIP_COUNT),
            min_tip_amount: storage
                .get(&DataKey::MinTipAmount)
                .unwrap_or(DEFAULT_MIN_TIP_AMOUNT),
            debug_last_amount: storage
                .get(&DataKey::DebugLastAmount)
                .unwrap_or(INITIAL_DEBUG_AMOUNT),
        }
    }

    /// Write every slot back to instance storage
    pub fn store(&self, env: &Env) {
        let storage = env.storage().instance();

        storage.set(&DataKey::LastTipper, &self.last_tipper);
        storage.set(&DataKey::TotalTips, &self.total_tips);
        storage.set(&DataKey::TipCount, &self.tip_count);
        storage.set(&DataKey::MinTipAmount, &self.min_tip_amount);
        storage.set(&DataKey::DebugLastAmount, &self.debug_last_amount);
    }

    /// Write only the debug slot
    pub fn store_debug_amount(&self, env: &Env) {
        env.storage()
            .instance()
            .set(&DataKey::DebugLastAmount, &self.debug_last_amount);
    }

    /// Remember the amount of a tip attempt, whether or not it is accepted
    pub fn record_attempt(&mut self, amount: u64) {
        self.debug_last_amount = amount;
    }

    pub fn check_tip(&self, amount: u64) -> Result<(), Error> {
        if amount < self.min_tip_amount {
            return Err(Error::BelowMinimumTip);
        }

        Ok(())
    }

    /// Validate a tip and fold it into the totals. Nothing changes on error.
    pub fn accept_tip(&mut self, name: String, amount: u64) -> Result<(), Error> {
        self.check_tip(amount)?;

        let total_tips = self
            .total_tips
            .checked_add(amount)
            .ok_or(Error::TotalOverflow)?;
        let tip_count = self.tip_count.checked_add(1).ok_or(Error::TotalOverflow)?;

        self.last_tipper = name;
        self.total_tips = total_tips;
        self.tip_count = tip_count;

        Ok(())
    }

    /// Record the attempt, then accept the tip if it meets the minimum.
    ///
    /// The debug amount stays updated even when this returns an error; on
    /// chain the host discards it together with the rest of the failed call.
    pub fn send_tip(&mut self, name: String, amount: u64) -> Result<(), Error> {
        self.record_attempt(amount);
        self.accept_tip(name, amount)
    }

    pub fn set_min_tip(&mut self, amount: u64) -> Result<(), Error> {
        if amount == 0 {
            return Err(Error::InvalidMinimum);
        }

        self.min_tip_amount = amount;
        Ok(())
    }

    pub fn info(&self) -> TipInfo {
        (
            self.last_tipper.clone(),
            self.total_tips,
            self.tip_count,
            self.min_tip_amount,
        )
    }
}
