#![no_std]

pub mod constants;
pub mod interface;
pub mod ledger;
pub mod tips;
pub mod types;

use soroban_sdk::{contract, contractimpl, Env, String};

use crate::interface::TipJarTrait;
use crate::tips::TipManager;
use crate::types::Error;

#[contract]
pub struct TipJarContract;

#[contractimpl]
impl TipJarContract {
    /// Runs once at deployment and seeds every slot with its default
    pub fn __constructor(env: Env) {
        TipManager::init(&env);
    }
}

#[contractimpl]
impl TipJarTrait for TipJarContract {
    fn send_tip(env: Env, name: String, amount: u64) -> Result<(), Error> {
        TipManager::send_tip(&env, name, amount)
    }

    fn set_min_tip(env: Env, amount: u64) -> Result<(), Error> {
        TipManager::set_min_tip(&env, amount)
    }

    fn get_tip_info(env: Env) -> (String, u64, u64, u64) {
        TipManager::get_tip_info(&env)
    }

    fn get_debug_info(env: Env) -> u64 {
        TipManager::get_debug_info(&env)
    }
}
