use num_bigint::BigInt;

/// Overhead applied on top of an estimated fee when suggesting a max fee (50%)
pub const DEFAULT_MAX_FEE_OVERHEAD_PERCENT: u32 = 50;

/// Policy turning an estimated overall fee into a suggested max fee
///
/// The parser only knows that such a bound exists; how generous it is belongs
/// to whoever signs the transaction.
pub trait MaxFeePolicy {
    /// Compute the suggested max fee for the given overall fee
    fn max_fee(&self, overall_fee: &BigInt) -> BigInt;
}

/// Percentage overhead on top of the estimate
///
/// This is the default policy: `fee + fee * percent / 100`, rounding toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeOverhead {
    percent: u32,
}

impl FeeOverhead {
    /// Creates a policy adding `percent` percent to every estimate
    pub fn new(percent: u32) -> Self {
        Self { percent }
    }

    pub fn percent(&self) -> u32 {
        self.percent
    }
}

impl Default for FeeOverhead {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FEE_OVERHEAD_PERCENT)
    }
}

impl MaxFeePolicy for FeeOverhead {
    fn max_fee(&self, overall_fee: &BigInt) -> BigInt {
        estimated_fee_to_max_fee(overall_fee, self.percent)
    }
}

/// Add `overhead_percent` percent to an estimated fee
///
/// # Arguments
///
/// * `estimated_fee` - The overall fee reported by the node
/// * `overhead_percent` - Margin to add, in percent
///
/// # Returns
///
/// * `BigInt` - The estimate plus the truncated margin
pub fn estimated_fee_to_max_fee(estimated_fee: &BigInt, overhead_percent: u32) -> BigInt {
    estimated_fee + (estimated_fee * BigInt::from(overhead_percent)) / BigInt::from(100u32)
}
