//! Interface documentation for the Tip Jar Contract
//!
//! The contract accepts named tips, keeps a running total and count, and
//! rejects tips below a configurable minimum.

use crate::types::Error;
use soroban_sdk::{Env, String};

/// Contract Interface
pub trait TipJarTrait {
    /// Send a tip tagged with the sender's display name
    ///
    /// The attempted amount is recorded as the debug amount before it is
    /// validated. A rejected call is rolled back as a whole by the host.
    ///
    /// # Arguments
    /// * `name` - Display name of the tipper, may be empty
    /// * `amount` - Tip amount
    ///
    /// # Errors
    /// * `BelowMinimumTip` - If `amount` is lower than the current minimum
    /// * `TotalOverflow` - If the running total or count would overflow
    fn send_tip(env: Env, name: String, amount: u64) -> Result<(), Error>;

    /// Change the minimum tip amount
    ///
    /// Any caller may change the minimum.
    ///
    /// # Arguments
    /// * `amount` - The new minimum
    ///
    /// # Errors
    /// * `InvalidMinimum` - If `amount` is zero
    fn set_min_tip(env: Env, amount: u64) -> Result<(), Error>;

    /// Get the last tipper, total tipped, number of tips and current minimum
    fn get_tip_info(env: Env) -> (String, u64, u64, u64);

    /// Get the amount of the most recent tip attempt
    fn get_debug_info(env: Env) -> u64;
}
