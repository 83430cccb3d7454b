use soroban_sdk::{log, panic_with_error, symbol_short, Address, BytesN, Env};

use crate::{
    asset, storage,
    types::{LedgerError, PaymentRecord, PaymentRecordedLog},
    utils::{checked_credit, is_zero_id, split_amount},
};

/// Records one billable invocation and splits `amount` between the agent's
/// provider and the platform.
///
/// `usage_id` is consumed exactly once. A replay fails with `DuplicateUsage`
/// before any balance is touched, so callers must treat that error as
/// "already applied".
pub fn record_payment(
    e: &Env,
    agent_id: &BytesN<32>,
    payer: &Address,
    amount: i128,
    usage_id: &BytesN<32>,
) -> PaymentRecord {
    if amount <= 0 {
        panic_with_error!(e, LedgerError::InvalidAmount);
    }
    if is_zero_id(usage_id) {
        panic_with_error!(e, LedgerError::InvalidUsageId);
    }
    if storage::has_payment(e, usage_id) {
        panic_with_error!(e, LedgerError::DuplicateUsage);
    }

    let agent = match storage::read_agent(e, agent_id) {
        Some(agent) => agent,
        None => panic_with_error!(e, LedgerError::AgentNotFound),
    };
    if !agent.active {
        panic_with_error!(e, LedgerError::AgentInactive);
    }
    storage::bump_agent(e, agent_id);
    storage::bump_instance(e);

    let asset = asset::resolve(e, &agent.asset);
    let split = split_amount(amount, agent.fee_bps);

    let provider_balance = storage::read_provider_balance(e, agent_id, &asset);
    storage::write_provider_balance(
        e,
        agent_id,
        &asset,
        checked_credit(e, provider_balance, split.provider_share),
    );

    let platform_balance = storage::read_platform_balance(e, &asset);
    storage::write_platform_balance(e, &asset, checked_credit(e, platform_balance, split.fee));

    let record = PaymentRecord {
        agent_id: agent_id.clone(),
        payer: payer.clone(),
        asset,
        amount,
        fee: split.fee,
        provider_share: split.provider_share,
        timestamp: e.ledger().timestamp(),
    };
    storage::write_payment(e, usage_id, &record);
    log!(e, "payment recorded", usage_id.clone(), amount, split.fee);

    e.events().publish(
        (symbol_short!("payment"), symbol_short!("recorded")),
        PaymentRecordedLog {
            usage_id: usage_id.clone(),
            agent_id: record.agent_id.clone(),
            payer: record.payer.clone(),
            asset: record.asset.clone(),
            amount,
            fee: record.fee,
            provider_share: record.provider_share,
            recorded_at: record.timestamp,
        },
    );

    record
}

pub fn get_payment(e: &Env, usage_id: &BytesN<32>) -> PaymentRecord {
    match storage::read_payment(e, usage_id) {
        Some(record) => record,
        None => panic_with_error!(e, LedgerError::PaymentNotFound),
    }
}

pub fn has_payment(e: &Env, usage_id: &BytesN<32>) -> bool {
    storage::has_payment(e, usage_id)
}
