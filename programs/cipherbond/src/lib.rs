use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod fhe;
pub mod instructions;
pub mod state;
pub mod utils;

pub use constants::*;
pub use contexts::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;
pub use utils::*;

use solana_security_txt::security_txt;

security_txt! {
    // Required fields
    name: "CipherBond",
    project_url: "https://cipherbond.dev",
    contacts: "email:security@cipherbond.dev,link:https://github.com/cipherbond/cipherbond/issues",
    policy: "https://github.com/cipherbond/cipherbond/blob/main/SECURITY.md",

    // Optional fields
    preferred_languages: "en",
    source_code: "https://github.com/cipherbond/cipherbond"
}

declare_id!("2ZBto6gscujLwiYSd7XTghSQDywiEaqPF7SXcip9kTH4");

#[program]
pub mod cipherbond {
    use super::*;
    use crate::instructions::{admin, lifecycle, oracle, providers, submit};

    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        cooldown_seconds: u64,
        oracle_pubkey: Pubkey,
    ) -> Result<()> {
        admin::initialize_config(ctx, cooldown_seconds, oracle_pubkey)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        admin::transfer_ownership(ctx, new_owner)
    }

    pub fn pause(ctx: Context<SetPause>) -> Result<()> {
        admin::pause(ctx)
    }

    pub fn unpause(ctx: Context<SetPause>) -> Result<()> {
        admin::unpause(ctx)
    }

    pub fn set_cooldown_seconds(ctx: Context<SetCooldown>, cooldown_seconds: u64) -> Result<()> {
        admin::set_cooldown_seconds(ctx, cooldown_seconds)
    }

    // ----------------------------
    // Provider registry
    // ----------------------------
    pub fn add_provider(ctx: Context<AddProvider>, provider: Pubkey) -> Result<()> {
        providers::add_provider(ctx, provider)
    }

    pub fn remove_provider(ctx: Context<RemoveProvider>, provider: Pubkey) -> Result<()> {
        providers::remove_provider(ctx, provider)
    }

    // ----------------------------
    // Batch lifecycle
    // ----------------------------
    pub fn open_batch(ctx: Context<OpenBatch>) -> Result<()> {
        lifecycle::open_batch(ctx)
    }

    pub fn close_batch(ctx: Context<CloseBatch>) -> Result<()> {
        lifecycle::close_batch(ctx)
    }

    // core
    // Fully qualified argument types: the #[program] macro re-emits these
    // signatures outside this module's `use` scope.
    pub fn submit_bond(
        ctx: Context<SubmitBond>,
        encrypted_amount: crate::fhe::CiphertextHandle,
        encrypted_maturity: crate::fhe::CiphertextHandle,
    ) -> Result<()> {
        submit::submit_bond(ctx, encrypted_amount, encrypted_maturity)
    }

    // ----------------------------
    // Oracle decryption protocol
    // ----------------------------
    pub fn set_oracle_pubkey(ctx: Context<SetOraclePubkey>, oracle_pubkey: Pubkey) -> Result<()> {
        oracle::set_oracle_pubkey(ctx, oracle_pubkey)
    }

    pub fn request_batch_decryption(
        ctx: Context<RequestBatchDecryption>,
        batch_id: u64,
    ) -> Result<()> {
        oracle::request_batch_decryption(ctx, batch_id)
    }

    pub fn fulfill_decryption(
        ctx: Context<FulfillDecryption>,
        request_id: u64,
        total_amount: u64,
        bond_count: u64,
    ) -> Result<()> {
        oracle::fulfill_decryption(ctx, request_id, total_amount, bond_count)
    }
}
