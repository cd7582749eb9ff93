//! # Deposit Distribution
//!
//! ```text
//! parent_cut = floor(amount * rate / 10_000)        (if a parent is linked)
//! remainder  = amount - parent_cut
//! share_i    = floor(remainder * shares[i] / 10_000) for i < n-1
//! share_last = remainder - sum(share_i)
//! ```
//!
//! The last beneficiary absorbs all rounding dust, so the credits always sum
//! to `amount` exactly.

use crate::domain::{Distribution, ParentRoyalty, SplitConfig, SplitterError};
use royalty_types::{BPS_DENOMINATOR, U256};

/// `floor(amount * bps / 10_000)`.
///
/// Fails with `Overflow` if `amount * 10_000` does not fit in U256, whatever
/// the actual `bps`, so the same amount is accepted or rejected uniformly.
pub fn apply_bps(amount: U256, bps: u16) -> Result<U256, SplitterError> {
    let denominator = U256::from(BPS_DENOMINATOR);
    amount
        .checked_mul(denominator)
        .ok_or(SplitterError::Overflow)?;
    // amount * bps <= amount * 10_000 for any valid bps
    let product = amount
        .checked_mul(U256::from(bps))
        .ok_or(SplitterError::Overflow)?;
    Ok(product / denominator)
}

/// Computes the credits for a deposit of `amount` without mutating anything.
pub fn compute_distribution(
    amount: U256,
    config: &SplitConfig,
    parent: Option<&ParentRoyalty>,
) -> Result<Distribution, SplitterError> {
    if amount.is_zero() {
        return Err(SplitterError::ZeroDeposit);
    }
    // Uniform overflow gate, also covers the no-parent path
    apply_bps(amount, 0)?;

    let (parent_credit, remainder) = match parent {
        Some(royalty) if royalty.rate > 0 => {
            let cut = apply_bps(amount, royalty.rate)?;
            (Some((royalty.recipient, cut)), amount - cut)
        }
        _ => (None, amount),
    };

    let mut credits = Vec::with_capacity(config.len());
    let mut distributed = U256::zero();
    let last = config.len().saturating_sub(1);

    for (i, (beneficiary, share)) in config.entries().enumerate() {
        let value = if i == last {
            remainder - distributed
        } else {
            apply_bps(remainder, share)?
        };
        distributed += value;
        credits.push((beneficiary, value));
    }

    Ok(Distribution {
        amount,
        parent_credit,
        credits,
    })
}

// =============================================================================
// TESTS
// =============================================================================
