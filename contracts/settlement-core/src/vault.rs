use soroban_sdk::{log, panic_with_error, symbol_short, Address, BytesN, Env};

use crate::{
    access, asset, storage,
    types::{LedgerError, PlatformWithdrawnLog, ProviderWithdrawnLog},
};

/// Pays `amount` of `asset` out of the agent's credit to its provider.
///
/// The balance is debited before the outbound transfer. A failed transfer
/// aborts the invocation, which also discards the debit.
pub fn withdraw_provider(
    e: &Env,
    provider: &Address,
    agent_id: &BytesN<32>,
    asset: &Address,
    amount: i128,
) {
    access::require_provider(e, provider, agent_id);
    if amount <= 0 {
        panic_with_error!(e, LedgerError::InvalidAmount);
    }

    let balance = storage::read_provider_balance(e, agent_id, asset);
    if balance < amount {
        panic_with_error!(e, LedgerError::InsufficientBalance);
    }
    storage::write_provider_balance(e, agent_id, asset, balance - amount);
    storage::bump_agent(e, agent_id);
    storage::bump_instance(e);

    asset::transfer_out(e, asset, provider, amount);
    log!(e, "provider withdrawn", agent_id.clone(), amount);

    e.events().publish(
        (symbol_short!("provider"), symbol_short!("withdrawn")),
        ProviderWithdrawnLog {
            agent_id: agent_id.clone(),
            provider: provider.clone(),
            asset: asset.clone(),
            amount,
        },
    );
}

/// Pays accrued platform fees in `asset` to the configured fee recipient,
/// never to the caller.
pub fn withdraw_platform(e: &Env, caller: &Address, asset: &Address, amount: i128) {
    access::require_owner(e, caller);
    if amount <= 0 {
        panic_with_error!(e, LedgerError::InvalidAmount);
    }

    let balance = storage::read_platform_balance(e, asset);
    if balance < amount {
        panic_with_error!(e, LedgerError::InsufficientBalance);
    }
    storage::write_platform_balance(e, asset, balance - amount);
    storage::bump_instance(e);

    let recipient = access::fee_recipient(e);
    asset::transfer_out(e, asset, &recipient, amount);
    log!(e, "platform withdrawn", asset.clone(), amount);

    e.events().publish(
        (symbol_short!("platform"), symbol_short!("withdrawn")),
        PlatformWithdrawnLog {
            recipient,
            asset: asset.clone(),
            amount,
        },
    );
}

pub fn provider_balance(e: &Env, agent_id: &BytesN<32>, asset: &Address) -> i128 {
    storage::read_provider_balance(e, agent_id, asset)
}

pub fn platform_balance(e: &Env, asset: &Address) -> i128 {
    storage::read_platform_balance(e, asset)
}
