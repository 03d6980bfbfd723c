use soroban_sdk::{contracterror, contracttype, String};

/// Storage keys for the tip jar slots, all kept in instance storage
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    LastTipper,      // Name supplied with the most recent accepted tip
    TotalTips,       // Sum of accepted tip amounts
    TipCount,        // Number of accepted tips
    MinTipAmount,    // Current minimum acceptable tip
    DebugLastAmount, // Amount of the most recent attempted tip
}

/// Snapshot returned by `get_tip_info`: (last_tipper, total_tips, tip_count, min_tip_amount)
pub type TipInfo = (String, u64, u64, u64);

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    BelowMinimumTip = 1, // Tip amount is lower than the configured minimum
    InvalidMinimum = 2,  // Minimum tip must be greater than zero
    TotalOverflow = 3,   // Running total or count no longer fits in a u64
}
