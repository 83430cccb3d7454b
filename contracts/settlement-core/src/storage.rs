use soroban_sdk::{contracttype, Address, BytesN, Env, IntoVal, Val};

use crate::types::{AssetKind, PaymentRecord};

const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    FeeRecipient,
    NativeAsset,
    Agent(BytesN<32>),
    Payment(BytesN<32>),
    ProviderBalance(BytesN<32>, Address),
    PlatformBalance(Address),
    Reporter(Address),
}

#[derive(Clone)]
#[contracttype]
pub struct AgentRecord {
    pub provider: Address,
    pub asset: AssetKind,
    pub fee_bps: u32,
    pub active: bool,
}

pub(crate) fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn write_persistent<V: IntoVal<Env, Val>>(e: &Env, key: &DataKey, value: &V) {
    let storage = e.storage().persistent();
    storage.set(key, value);
    storage.extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub(crate) fn read_agent(e: &Env, agent_id: &BytesN<32>) -> Option<AgentRecord> {
    e.storage()
        .persistent()
        .get::<_, AgentRecord>(&DataKey::Agent(agent_id.clone()))
}

pub(crate) fn bump_agent(e: &Env, agent_id: &BytesN<32>) {
    e.storage().persistent().extend_ttl(
        &DataKey::Agent(agent_id.clone()),
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub(crate) fn has_agent(e: &Env, agent_id: &BytesN<32>) -> bool {
    e.storage()
        .persistent()
        .has(&DataKey::Agent(agent_id.clone()))
}

pub(crate) fn write_agent(e: &Env, agent_id: &BytesN<32>, record: &AgentRecord) {
    write_persistent(e, &DataKey::Agent(agent_id.clone()), record);
}

pub(crate) fn read_payment(e: &Env, usage_id: &BytesN<32>) -> Option<PaymentRecord> {
    e.storage()
        .persistent()
        .get::<_, PaymentRecord>(&DataKey::Payment(usage_id.clone()))
}

pub(crate) fn has_payment(e: &Env, usage_id: &BytesN<32>) -> bool {
    e.storage()
        .persistent()
        .has(&DataKey::Payment(usage_id.clone()))
}

pub(crate) fn write_payment(e: &Env, usage_id: &BytesN<32>, record: &PaymentRecord) {
    write_persistent(e, &DataKey::Payment(usage_id.clone()), record);
}

pub(crate) fn read_provider_balance(e: &Env, agent_id: &BytesN<32>, asset: &Address) -> i128 {
    e.storage()
        .persistent()
        .get::<_, i128>(&DataKey::ProviderBalance(agent_id.clone(), asset.clone()))
        .unwrap_or(0)
}

pub(crate) fn write_provider_balance(
    e: &Env,
    agent_id: &BytesN<32>,
    asset: &Address,
    amount: i128,
) {
    write_persistent(
        e,
        &DataKey::ProviderBalance(agent_id.clone(), asset.clone()),
        &amount,
    );
}

pub(crate) fn read_platform_balance(e: &Env, asset: &Address) -> i128 {
    e.storage()
        .persistent()
        .get::<_, i128>(&DataKey::PlatformBalance(asset.clone()))
        .unwrap_or(0)
}

pub(crate) fn write_platform_balance(e: &Env, asset: &Address, amount: i128) {
    write_persistent(e, &DataKey::PlatformBalance(asset.clone()), &amount);
}

pub(crate) fn is_reporter(e: &Env, reporter: &Address) -> bool {
    e.storage()
        .persistent()
        .get::<_, bool>(&DataKey::Reporter(reporter.clone()))
        .unwrap_or(false)
}

pub(crate) fn write_reporter(e: &Env, reporter: &Address, allowed: bool) {
    let key = DataKey::Reporter(reporter.clone());
    if allowed {
        write_persistent(e, &key, &true);
    } else {
        e.storage().persistent().remove(&key);
    }
}
