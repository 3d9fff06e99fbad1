//! Events for off-chain indexers. Together they carry enough identifiers to
//! reconstruct protocol state from a log stream alone.

use anchor_lang::prelude::*;

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}

#[event]
pub struct ProviderAdded {
    pub provider: Pubkey,
}

#[event]
pub struct ProviderRemoved {
    pub provider: Pubkey,
}

#[event]
pub struct CooldownUpdated {
    pub cooldown_seconds: u64,
}

#[event]
pub struct OracleUpdated {
    pub oracle_pubkey: Pubkey,
}

#[event]
pub struct ProtocolPaused {
    pub slot: u64,
}

#[event]
pub struct ProtocolUnpaused {
    pub slot: u64,
}

#[event]
pub struct BatchOpened {
    pub batch_id: u64,
    pub slot: u64,
}

#[event]
pub struct BatchClosed {
    pub batch_id: u64,
    pub bond_count: u64,
    pub slot: u64,
}

#[event]
pub struct BondSubmitted {
    pub provider: Pubkey,
    pub bond_id: u64,
    pub batch_id: u64,
}

#[event]
pub struct DecryptionRequested {
    pub request_id: u64,
    pub batch_id: u64,
    pub state_hash: [u8; 32],
}

#[event]
pub struct DecryptionFulfilled {
    pub request_id: u64,
    pub batch_id: u64,
    pub total_amount: u64,
    pub bond_count: u64,
}
