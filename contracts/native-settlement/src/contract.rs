use settlement_core::{
    access, asset, ledger, registry, vault, AgentConfig, AssetKind, PaymentRecord,
};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};

/// Settlement ledger whose payments are made in the native asset.
///
/// `pay` is both the payment and its record: the amount is pulled from the
/// payer in the same invocation that credits the split.
#[contract]
pub struct NativeSettlement;

#[contractimpl]
impl NativeSettlement {
    pub fn init(e: Env, owner: Address, fee_recipient: Address, native_asset: Address) {
        access::init_config(&e, &owner, &fee_recipient, Some(native_asset));
    }

    pub fn set_fee_recipient(e: Env, caller: Address, new_recipient: Address) {
        access::set_fee_recipient(&e, &caller, &new_recipient);
    }

    pub fn register_agent(e: Env, provider: Address, agent_id: BytesN<32>, fee_bps: u32) {
        registry::register_agent(&e, &provider, &agent_id, AssetKind::Native, fee_bps);
    }

    pub fn update_agent(
        e: Env,
        provider: Address,
        agent_id: BytesN<32>,
        fee_bps: u32,
        active: bool,
    ) {
        registry::update_agent(&e, &provider, &agent_id, AssetKind::Native, fee_bps, active);
    }

    pub fn pay(
        e: Env,
        payer: Address,
        agent_id: BytesN<32>,
        usage_id: BytesN<32>,
        amount: i128,
    ) -> PaymentRecord {
        payer.require_auth();
        let record = ledger::record_payment(&e, &agent_id, &payer, amount, &usage_id);
        asset::transfer_in(&e, &record.asset, &payer, amount);
        record
    }

    pub fn withdraw_provider(e: Env, provider: Address, agent_id: BytesN<32>, amount: i128) {
        let asset = access::native_asset(&e);
        vault::withdraw_provider(&e, &provider, &agent_id, &asset, amount);
    }

    pub fn withdraw_platform(e: Env, caller: Address, amount: i128) {
        let asset = access::native_asset(&e);
        vault::withdraw_platform(&e, &caller, &asset, amount);
    }

    pub fn get_agent(e: Env, agent_id: BytesN<32>) -> AgentConfig {
        registry::get_agent(&e, &agent_id)
    }

    pub fn provider_balance(e: Env, agent_id: BytesN<32>) -> i128 {
        vault::provider_balance(&e, &agent_id, &access::native_asset(&e))
    }

    pub fn platform_balance(e: Env) -> i128 {
        vault::platform_balance(&e, &access::native_asset(&e))
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

    pub fn native_asset(e: Env) -> Address {
        access::native_asset(&e)
    }
}
