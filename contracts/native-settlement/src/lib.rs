#![no_std]

mod contract;

pub use contract::{NativeSettlement, NativeSettlementClient};
pub use settlement_core::{AgentConfig, LedgerError, PaymentRecord};
