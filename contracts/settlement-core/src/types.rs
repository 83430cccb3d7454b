use soroban_sdk::{contracterror, contracttype, Address, BytesN};

/// Highest fee an agent may charge, in basis points (50%).
pub const MAX_FEE_BPS: u32 = 5_000;

pub const BPS_DENOMINATOR: i128 = 10_000;

/// Where an agent's payments are settled.
///
/// `Native` resolves to the native asset contract configured at init;
/// `Token` carries the asset contract address directly.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum AssetKind {
    Native,
    Token(Address),
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AgentConfig {
    pub agent_id: BytesN<32>,
    pub provider: Address,
    pub asset: Address,
    pub fee_bps: u32,
    pub active: bool,
}

/// Append-only audit entry for one billable invocation.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PaymentRecord {
    pub agent_id: BytesN<32>,
    pub payer: Address,
    pub asset: Address,
    pub amount: i128,
    pub fee: i128,
    pub provider_share: i128,
    pub timestamp: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FeeSplit {
    pub fee: i128,
    pub provider_share: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct AgentRegisteredLog {
    pub agent_id: BytesN<32>,
    pub provider: Address,
    pub asset: Address,
    pub fee_bps: u32,
}

#[derive(Clone)]
#[contracttype]
pub struct AgentUpdatedLog {
    pub agent_id: BytesN<32>,
    pub asset: Address,
    pub fee_bps: u32,
    pub active: bool,
}

#[derive(Clone)]
#[contracttype]
pub struct PaymentRecordedLog {
    pub usage_id: BytesN<32>,
    pub agent_id: BytesN<32>,
    pub payer: Address,
    pub asset: Address,
    pub amount: i128,
    pub fee: i128,
    pub provider_share: i128,
    pub recorded_at: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct ProviderWithdrawnLog {
    pub agent_id: BytesN<32>,
    pub provider: Address,
    pub asset: Address,
    pub amount: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct PlatformWithdrawnLog {
    pub recipient: Address,
    pub asset: Address,
    pub amount: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct FeeRecipientLog {
    pub previous: Address,
    pub recipient: Address,
}

#[derive(Clone)]
#[contracttype]
pub struct ReporterLog {
    pub reporter: Address,
    pub allowed: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracterror]
#[repr(u32)]
pub enum LedgerError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidAgentId = 3,
    InvalidAsset = 4,
    FeeTooHigh = 5,
    AlreadyRegistered = 6,
    AgentNotFound = 7,
    AgentInactive = 8,
    NotProvider = 9,
    NotOwner = 10,
    InvalidAmount = 11,
    InvalidUsageId = 12,
    DuplicateUsage = 13,
    InsufficientBalance = 14,
    TransferFailed = 15,
    InvalidRecipient = 16,
    NotReporter = 17,
    PaymentNotFound = 18,
    Overflow = 19,
}
