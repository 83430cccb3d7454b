#![no_std]

mod contract;

pub use contract::{TokenSettlement, TokenSettlementClient};
pub use settlement_core::{AgentConfig, LedgerError, PaymentRecord};
