// programs/cipherbond/src/contexts.rs

use anchor_lang::prelude::*;

use crate::state::{Batch, Bond, Config, DecryptionContext, ProviderAccount};

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + Config::INIT_SPACE,
        seeds = [crate::CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    pub owner: Signer<'info>,
}

#[derive(Accounts)]
pub struct SetPause<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    pub owner: Signer<'info>,
}

#[derive(Accounts)]
pub struct SetCooldown<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    pub owner: Signer<'info>,
}

#[derive(Accounts)]
pub struct SetOraclePubkey<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    pub owner: Signer<'info>,
}

#[derive(Accounts)]
#[instruction(provider: Pubkey)]
pub struct AddProvider<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    // init_if_needed keeps add/remove idempotent: re-adding a removed
    // provider reuses the same account and just flips `active` back on.
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + ProviderAccount::INIT_SPACE,
        seeds = [crate::PROVIDER_SEED, provider.as_ref()],
        bump
    )]
    pub provider_account: Account<'info, ProviderAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
#[instruction(provider: Pubkey)]
pub struct RemoveProvider<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    // init_if_needed as in AddProvider: removing a never-added provider is
    // an idempotent no-op, not an account-resolution failure.
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + ProviderAccount::INIT_SPACE,
        seeds = [crate::PROVIDER_SEED, provider.as_ref()],
        bump
    )]
    pub provider_account: Account<'info, ProviderAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
pub struct OpenBatch<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = owner,
        space = 8 + Batch::INIT_SPACE,
        seeds = [crate::BATCH_SEED, config.next_batch_id.to_le_bytes().as_ref()],
        bump
    )]
    pub batch: Account<'info, Batch>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
pub struct CloseBatch<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [crate::BATCH_SEED, config.current_batch_id.to_le_bytes().as_ref()],
        bump = batch.bump
    )]
    pub batch: Account<'info, Batch>,

    pub owner: Signer<'info>,
}

#[derive(Accounts)]
pub struct SubmitBond<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [crate::BATCH_SEED, config.current_batch_id.to_le_bytes().as_ref()],
        bump = batch.bump
    )]
    pub batch: Account<'info, Batch>,

    #[account(
        mut,
        seeds = [crate::PROVIDER_SEED, provider.key().as_ref()],
        bump = provider_account.bump
    )]
    pub provider_account: Account<'info, ProviderAccount>,

    #[account(
        init,
        payer = provider,
        space = 8 + Bond::INIT_SPACE,
        seeds = [crate::BOND_SEED, config.next_bond_id.to_le_bytes().as_ref()],
        bump
    )]
    pub bond: Account<'info, Bond>,

    #[account(mut)]
    pub provider: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
#[instruction(batch_id: u64)]
pub struct RequestBatchDecryption<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        seeds = [crate::BATCH_SEED, batch_id.to_le_bytes().as_ref()],
        bump = batch.bump
    )]
    pub batch: Account<'info, Batch>,

    #[account(
        init,
        payer = owner,
        space = 8 + DecryptionContext::INIT_SPACE,
        seeds = [crate::DECRYPTION_SEED, config.next_request_id.to_le_bytes().as_ref()],
        bump
    )]
    pub decryption_context: Account<'info, DecryptionContext>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
#[instruction(request_id: u64)]
pub struct FulfillDecryption<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [crate::DECRYPTION_SEED, request_id.to_le_bytes().as_ref()],
        bump = decryption_context.bump
    )]
    pub decryption_context: Account<'info, DecryptionContext>,

    #[account(
        seeds = [crate::BATCH_SEED, decryption_context.batch_id.to_le_bytes().as_ref()],
        bump = batch.bump
    )]
    pub batch: Account<'info, Batch>,

    /// Not owner-gated: the ed25519 proof is the authorization.
    pub caller: Signer<'info>,

    /// CHECK: instruction sysvar (for ed25519 introspection). Address enforced.
    #[account(address = anchor_lang::solana_program::sysvar::instructions::ID)]
    pub instructions: UncheckedAccount<'info>,
}
