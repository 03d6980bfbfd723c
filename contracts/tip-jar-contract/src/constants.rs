/// Minimum accepted tip right after deployment, in the smallest unit of the tipped asset.
pub const DEFAULT_MIN_TIP_AMOUNT: u64 = 1000;

pub const INITIAL_TIP_TOTAL: u64 = 0;
pub const INITIAL_TIP_COUNT: u64 = 0;
pub const INITIAL_DEBUG_AMOUNT: u64 = 0;

/// Name recorded before anyone has tipped.
pub const NO_TIPPER: &str = "";
