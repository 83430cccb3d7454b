use soroban_sdk::{log, panic_with_error, symbol_short, Address, BytesN, Env};

use crate::{
    access, asset,
    storage::{self, AgentRecord},
    types::{
        AgentConfig, AgentRegisteredLog, AgentUpdatedLog, AssetKind, LedgerError, MAX_FEE_BPS,
    },
    utils::is_zero_id,
};

/// Binds `provider` to a fresh `agent_id`. The binding is permanent.
pub fn register_agent(
    e: &Env,
    provider: &Address,
    agent_id: &BytesN<32>,
    asset_kind: AssetKind,
    fee_bps: u32,
) {
    provider.require_auth();
    if is_zero_id(agent_id) {
        panic_with_error!(e, LedgerError::InvalidAgentId);
    }
    asset::validate(e, &asset_kind);
    ensure_fee(e, fee_bps);
    if storage::has_agent(e, agent_id) {
        panic_with_error!(e, LedgerError::AlreadyRegistered);
    }

    let asset = asset::resolve(e, &asset_kind);
    let record = AgentRecord {
        provider: provider.clone(),
        asset: asset_kind,
        fee_bps,
        active: true,
    };
    storage::write_agent(e, agent_id, &record);
    storage::bump_instance(e);
    log!(e, "agent registered", agent_id.clone(), fee_bps);

    e.events().publish(
        (symbol_short!("agent"), symbol_short!("register")),
        AgentRegisteredLog {
            agent_id: agent_id.clone(),
            provider: provider.clone(),
            asset,
            fee_bps,
        },
    );
}

/// Rewrites the mutable part of an agent's configuration. Provider and id
/// never change.
pub fn update_agent(
    e: &Env,
    provider: &Address,
    agent_id: &BytesN<32>,
    asset_kind: AssetKind,
    fee_bps: u32,
    active: bool,
) {
    let mut record = access::require_provider(e, provider, agent_id);
    asset::validate(e, &asset_kind);
    ensure_fee(e, fee_bps);

    let asset = asset::resolve(e, &asset_kind);
    record.asset = asset_kind;
    record.fee_bps = fee_bps;
    record.active = active;
    storage::write_agent(e, agent_id, &record);
    storage::bump_instance(e);
    log!(e, "agent updated", agent_id.clone(), fee_bps, active);

    e.events().publish(
        (symbol_short!("agent"), symbol_short!("updated")),
        AgentUpdatedLog {
            agent_id: agent_id.clone(),
            asset,
            fee_bps,
            active,
        },
    );
}

pub fn get_agent(e: &Env, agent_id: &BytesN<32>) -> AgentConfig {
    let record = read_agent_or_panic(e, agent_id);
    AgentConfig {
        agent_id: agent_id.clone(),
        asset: asset::resolve(e, &record.asset),
        provider: record.provider,
        fee_bps: record.fee_bps,
        active: record.active,
    }
}

pub(crate) fn read_agent_or_panic(e: &Env, agent_id: &BytesN<32>) -> AgentRecord {
    match storage::read_agent(e, agent_id) {
        Some(record) => record,
        None => panic_with_error!(e, LedgerError::AgentNotFound),
    }
}

fn ensure_fee(e: &Env, fee_bps: u32) {
    if fee_bps > MAX_FEE_BPS {
        panic_with_error!(e, LedgerError::FeeTooHigh);
    }
}
