use settlement_core::{access, ledger, registry, vault, AgentConfig, AssetKind, PaymentRecord};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};

/// Settlement ledger for agents priced in arbitrary token contracts.
///
/// Payments are attested by allowlisted reporters that have verified the
/// transfer off-ledger. The ledger credits what the reporter asserts; a
/// withdrawal the ledger cannot cover fails with `TransferFailed`.
#[contract]
pub struct TokenSettlement;

#[contractimpl]
impl TokenSettlement {
    pub fn init(e: Env, owner: Address, fee_recipient: Address) {
        access::init_config(&e, &owner, &fee_recipient, None);
    }

    pub fn set_fee_recipient(e: Env, caller: Address, new_recipient: Address) {
        access::set_fee_recipient(&e, &caller, &new_recipient);
    }

    pub fn set_reporter(e: Env, caller: Address, reporter: Address, allowed: bool) {
        access::set_reporter(&e, &caller, &reporter, allowed);
    }

    pub fn is_reporter(e: Env, reporter: Address) -> bool {
        access::is_reporter(&e, &reporter)
    }

    pub fn register_agent(
        e: Env,
        provider: Address,
        agent_id: BytesN<32>,
        asset: Address,
        fee_bps: u32,
    ) {
        registry::register_agent(&e, &provider, &agent_id, AssetKind::Token(asset), fee_bps);
    }

    pub fn update_agent(
        e: Env,
        provider: Address,
        agent_id: BytesN<32>,
        asset: Address,
        fee_bps: u32,
        active: bool,
    ) {
        registry::update_agent(
            &e,
            &provider,
            &agent_id,
            AssetKind::Token(asset),
            fee_bps,
            active,
        );
    }

    pub fn record_payment(
        e: Env,
        reporter: Address,
        agent_id: BytesN<32>,
        payer: Address,
        amount: i128,
        usage_id: BytesN<32>,
    ) -> PaymentRecord {
        access::require_reporter(&e, &reporter);
        ledger::record_payment(&e, &agent_id, &payer, amount, &usage_id)
    }

    pub fn withdraw_provider(
        e: Env,
        provider: Address,
        agent_id: BytesN<32>,
        asset: Address,
        amount: i128,
    ) {
        vault::withdraw_provider(&e, &provider, &agent_id, &asset, amount);
    }

    pub fn withdraw_platform(e: Env, caller: Address, asset: Address, amount: i128) {
        vault::withdraw_platform(&e, &caller, &asset, amount);
    }

    pub fn get_agent(e: Env, agent_id: BytesN<32>) -> AgentConfig {
        registry::get_agent(&e, &agent_id)
    }

    pub fn provider_balance(e: Env, agent_id: BytesN<32>, asset: Address) -> i128 {
        vault::provider_balance(&e, &agent_id, &asset)
    }

    pub fn platform_balance(e: Env, asset: Address) -> i128 {
        vault::platform_balance(&e, &asset)
    }

    pub fn get_payment(e: Env, usage_id: BytesN<32>) -> PaymentRecord {
        ledger::get_payment(&e, &usage_id)
    }

    pub fn has_payment(e: Env, usage_id: BytesN<32>) -> bool {
        ledger::has_payment(&e, &usage_id)
    }

    pub fn owner(e: Env) -> Address {
        access::owner(&e)
    }

    pub fn fee_recipient(e: Env) -> Address {
        access::fee_recipient(&e)
    }
}
