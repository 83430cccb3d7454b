use soroban_sdk::{panic_with_error, BytesN, Env};

use crate::types::{FeeSplit, LedgerError, BPS_DENOMINATOR};

/// Splits a positive `amount` into the platform fee and the provider share.
///
/// The fee is `floor(amount * fee_bps / 10_000)`, computed in two parts so
/// the product never overflows. Any truncation remainder stays with the
/// provider.
pub fn split_amount(amount: i128, fee_bps: u32) -> FeeSplit {
    let bps = fee_bps as i128;
    let whole = (amount / BPS_DENOMINATOR) * bps;
    let partial = (amount % BPS_DENOMINATOR) * bps / BPS_DENOMINATOR;
    let fee = whole + partial;
    FeeSplit {
        fee,
        provider_share: amount - fee,
    }
}

pub fn is_zero_id(id: &BytesN<32>) -> bool {
    id.to_array() == [0u8; 32]
}

pub fn checked_credit(e: &Env, balance: i128, amount: i128) -> i128 {
    balance
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(e, LedgerError::Overflow))
}
