use soroban_sdk::{log, panic_with_error, token::TokenClient, Address, Env};

use crate::{
    access,
    types::{AssetKind, LedgerError},
};

/// Resolves an asset kind to the token contract that settles it.
pub fn resolve(e: &Env, kind: &AssetKind) -> Address {
    match kind {
        AssetKind::Native => access::native_asset(e),
        AssetKind::Token(asset) => asset.clone(),
    }
}

pub fn validate(e: &Env, kind: &AssetKind) {
    if resolve(e, kind) == e.current_contract_address() {
        panic_with_error!(e, LedgerError::InvalidAsset);
    }
}

/// Moves `amount` out of the ledger's own holdings.
pub fn transfer_out(e: &Env, asset: &Address, to: &Address, amount: i128) {
    transfer(e, asset, &e.current_contract_address(), to, amount);
}

/// Pulls `amount` from `from` into the ledger. `from` must have authorized
/// the enclosing invocation.
pub fn transfer_in(e: &Env, asset: &Address, from: &Address, amount: i128) {
    transfer(e, asset, from, &e.current_contract_address(), amount);
}

fn transfer(e: &Env, asset: &Address, from: &Address, to: &Address, amount: i128) {
    let client = TokenClient::new(e, asset);
    match client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => {}
        _ => {
            log!(e, "asset transfer failed", asset.clone(), amount);
            panic_with_error!(e, LedgerError::TransferFailed)
        }
    }
}
