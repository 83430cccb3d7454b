use soroban_sdk::{log, panic_with_error, symbol_short, Address, BytesN, Env};

use crate::{
    storage::{self, AgentRecord, DataKey},
    types::{FeeRecipientLog, LedgerError, ReporterLog},
};

/// Stores the immutable owner and the initial fee recipient. A native asset
/// is only configured by deployments that settle in it.
pub fn init_config(
    e: &Env,
    owner: &Address,
    fee_recipient: &Address,
    native_asset: Option<Address>,
) {
    let instance = e.storage().instance();
    if instance.has(&DataKey::Owner) {
        panic_with_error!(e, LedgerError::AlreadyInitialized);
    }
    ensure_recipient(e, fee_recipient);

    instance.set(&DataKey::Owner, owner);
    instance.set(&DataKey::FeeRecipient, fee_recipient);
    if let Some(asset) = native_asset {
        if asset == e.current_contract_address() {
            panic_with_error!(e, LedgerError::InvalidAsset);
        }
        instance.set(&DataKey::NativeAsset, &asset);
    }
    storage::bump_instance(e);
}

pub fn owner(e: &Env) -> Address {
    match e.storage().instance().get::<_, Address>(&DataKey::Owner) {
        Some(owner) => owner,
        None => panic_with_error!(e, LedgerError::NotInitialized),
    }
}

pub fn fee_recipient(e: &Env) -> Address {
    match e
        .storage()
        .instance()
        .get::<_, Address>(&DataKey::FeeRecipient)
    {
        Some(recipient) => recipient,
        None => panic_with_error!(e, LedgerError::NotInitialized),
    }
}

pub fn native_asset(e: &Env) -> Address {
    match e
        .storage()
        .instance()
        .get::<_, Address>(&DataKey::NativeAsset)
    {
        Some(asset) => asset,
        None => panic_with_error!(e, LedgerError::NotInitialized),
    }
}

/// Authenticates `caller` and checks it is the owner fixed at init.
pub fn require_owner(e: &Env, caller: &Address) {
    caller.require_auth();
    if *caller != owner(e) {
        panic_with_error!(e, LedgerError::NotOwner);
    }
}

/// Authenticates `caller` and returns the agent it is bound to. Unknown
/// agents have no provider, so they fail the same way as a stranger does.
pub(crate) fn require_provider(e: &Env, caller: &Address, agent_id: &BytesN<32>) -> AgentRecord {
    caller.require_auth();
    match storage::read_agent(e, agent_id) {
        Some(record) if record.provider == *caller => record,
        _ => panic_with_error!(e, LedgerError::NotProvider),
    }
}

pub fn set_fee_recipient(e: &Env, caller: &Address, new_recipient: &Address) {
    require_owner(e, caller);
    ensure_recipient(e, new_recipient);

    let previous = fee_recipient(e);
    e.storage()
        .instance()
        .set(&DataKey::FeeRecipient, new_recipient);
    storage::bump_instance(e);

    e.events().publish(
        (symbol_short!("fee"), symbol_short!("recipient")),
        FeeRecipientLog {
            previous,
            recipient: new_recipient.clone(),
        },
    );
}

pub fn set_reporter(e: &Env, caller: &Address, reporter: &Address, allowed: bool) {
    require_owner(e, caller);
    storage::write_reporter(e, reporter, allowed);
    storage::bump_instance(e);
    log!(e, "reporter updated", reporter.clone(), allowed);

    e.events().publish(
        (symbol_short!("reporter"), symbol_short!("updated")),
        ReporterLog {
            reporter: reporter.clone(),
            allowed,
        },
    );
}

pub fn is_reporter(e: &Env, reporter: &Address) -> bool {
    storage::is_reporter(e, reporter)
}

pub fn require_reporter(e: &Env, reporter: &Address) {
    reporter.require_auth();
    if !storage::is_reporter(e, reporter) {
        panic_with_error!(e, LedgerError::NotReporter);
    }
}

fn ensure_recipient(e: &Env, recipient: &Address) {
    // the ledger cannot withdraw to itself
    if *recipient == e.current_contract_address() {
        panic_with_error!(e, LedgerError::InvalidRecipient);
    }
}
