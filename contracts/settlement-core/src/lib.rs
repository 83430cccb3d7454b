#![no_std]

//! Accounting shared by the settlement contracts: agent registration,
//! exactly-once payment recording with a basis-point fee split, and guarded
//! withdrawal of the resulting credit. Every entry point expects to run
//! inside a contract invocation and aborts with a [`LedgerError`].

pub mod access;
pub mod asset;
pub mod ledger;
pub mod registry;
mod storage;
mod types;
pub mod utils;
pub mod vault;

pub use types::{
    AgentConfig, AgentRegisteredLog, AgentUpdatedLog, AssetKind, FeeRecipientLog, FeeSplit,
    LedgerError, PaymentRecord, PaymentRecordedLog, PlatformWithdrawnLog, ProviderWithdrawnLog,
    ReporterLog, BPS_DENOMINATOR, MAX_FEE_BPS,
};

#[cfg(test)]
mod test;
