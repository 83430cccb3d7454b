extern crate std;

use soroban_sdk::{
    contract,
    testutils::{
        storage::{Instance as _, Persistent as _},
        Address as _, Ledger as _,
    },
    Address, BytesN, Env,
};

use crate::{
    access, ledger,
    storage::{
        self, AgentRecord, DataKey, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD,
    },
    utils::{is_zero_id, split_amount},
    AssetKind, FeeSplit, BPS_DENOMINATOR, MAX_FEE_BPS,
};

#[contract]
pub struct Harness;

#[test]
fn split_of_five_percent_fee() {
    assert_eq!(
        split_amount(1_000, 500),
        FeeSplit {
            fee: 50,
            provider_share: 950,
        }
    );
}

#[test]
fn truncation_remainder_goes_to_provider() {
    // 10_001 * 1 / 10_000 = 1.0001
    let split = split_amount(10_001, 1);
    assert_eq!(split.fee, 1);
    assert_eq!(split.provider_share, 10_000);

    // 7 * 333 / 10_000 = 0.2331
    let split = split_amount(7, 333);
    assert_eq!(split.fee, 0);
    assert_eq!(split.provider_share, 7);
}

#[test]
fn zero_fee_credits_everything_to_provider() {
    let split = split_amount(123_456_789, 0);
    assert_eq!(split.fee, 0);
    assert_eq!(split.provider_share, 123_456_789);
}

#[test]
fn split_conserves_amount_and_floors_fee() {
    let amounts: [i128; 7] = [1, 9_999, 10_000, 10_001, 123_457, 1_000_000_007, 98_765_432_123];
    let rates: [u32; 6] = [0, 1, 250, 333, 4_999, MAX_FEE_BPS];
    for amount in amounts {
        for bps in rates {
            let split = split_amount(amount, bps);
            assert_eq!(split.fee + split.provider_share, amount);
            assert_eq!(split.fee, amount * bps as i128 / BPS_DENOMINATOR);
        }
    }
}

#[test]
fn split_does_not_overflow_near_i128_max() {
    let split = split_amount(i128::MAX, MAX_FEE_BPS);
    assert_eq!(split.fee, i128::MAX / 2);
    assert_eq!(split.fee + split.provider_share, i128::MAX);
}

#[test]
fn zero_identifier_detection() {
    let e = Env::default();
    assert!(is_zero_id(&BytesN::from_array(&e, &[0u8; 32])));

    let mut bytes = [0u8; 32];
    bytes[31] = 1;
    assert!(!is_zero_id(&BytesN::from_array(&e, &bytes)));
}

#[test]
fn recording_a_payment_extends_instance_and_agent_ttl() {
    let e = Env::default();
    let ledger_addr = e.register(Harness, ());
    let agent_id = BytesN::from_array(&e, &[1u8; 32]);
    let asset = Address::generate(&e);
    let payer = Address::generate(&e);

    e.as_contract(&ledger_addr, || {
        access::init_config(&e, &Address::generate(&e), &Address::generate(&e), None);
        storage::write_agent(
            &e,
            &agent_id,
            &AgentRecord {
                provider: Address::generate(&e),
                asset: AssetKind::Token(asset.clone()),
                fee_bps: 100,
                active: true,
            },
        );
    });

    // two days pass without any write to the agent or the instance
    e.ledger().with_mut(|li| li.sequence_number += 2 * 17_280);

    e.as_contract(&ledger_addr, || {
        let agent_key = DataKey::Agent(agent_id.clone());
        assert!(e.storage().instance().get_ttl() < INSTANCE_LIFETIME_THRESHOLD);
        assert!(e.storage().persistent().get_ttl(&agent_key) < PERSISTENT_LIFETIME_THRESHOLD);

        let usage_id = BytesN::from_array(&e, &[2u8; 32]);
        ledger::record_payment(&e, &agent_id, &payer, 1_000, &usage_id);

        assert_eq!(e.storage().instance().get_ttl(), INSTANCE_BUMP_AMOUNT);
        assert_eq!(e.storage().persistent().get_ttl(&agent_key), PERSISTENT_BUMP_AMOUNT);
    });
}
