use soroban_sdk::{log, Env, String};

use crate::ledger::TipLedger;
use crate::types::{Error, TipInfo};

pub struct TipManager;

impl TipManager {
    /// Write the deployment defaults into every slot
    pub fn init(env: &Env) {
        let ledger = TipLedger::new(env);
        ledger.store(env);

        log!(env, "tip jar initialized", ledger.min_tip_amount);
    }

    /// Record a tip attempt and, if it meets the minimum, add it to the totals
    pub fn send_tip(env: &Env, name: String, amount: u64) -> Result<(), Error> {
        let mut ledger = TipLedger::load(env);

        // The debug slot is written before the amount is checked
        ledger.record_attempt(amount);
        ledger.store_debug_amount(env);
        log!(env, "tip attempt", name, amount);

        if let Err(err) = ledger.accept_tip(name.clone(), amount) {
            log!(env, "tip rejected", amount, ledger.min_tip_amount);
            return Err(err);
        }

        ledger.store(env);
        log!(
            env,
            "tip accepted",
            name,
            amount,
            ledger.total_tips,
            ledger.tip_count
        );

        Ok(())
    }

    /// Replace the minimum tip amount. Zero is refused.
    pub fn set_min_tip(env: &Env, amount: u64) -> Result<(), Error> {
        let mut ledger = TipLedger::load(env);
        let previous = ledger.min_tip_amount;

        if let Err(err) = ledger.set_min_tip(amount) {
            log!(env, "minimum tip rejected", amount);
            return Err(err);
        }

        ledger.store(env);
        log!(env, "minimum tip updated", previous, amount);

        Ok(())
    }

    pub fn get_tip_info(env: &Env) -> TipInfo {
        TipLedger::load(env).info()
    }

    pub fn get_debug_info(env: &Env) -> u64 {
        TipLedger::load(env).debug_last_amount
    }
}
