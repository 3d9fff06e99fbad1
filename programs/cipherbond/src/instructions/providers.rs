use anchor_lang::prelude::*;

use crate::errors::CipherBondError;
use crate::events::{ProviderAdded, ProviderRemoved};
use crate::utils::upsert_provider;
use crate::{AddProvider, RemoveProvider};

// Both toggles are idempotent: re-adding an active provider and removing an
// absent or already-removed one are no-ops. The account stays alive across
// removals so the cooldown timestamp survives re-adding.

pub fn add_provider(ctx: Context<AddProvider>, provider: Pubkey) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require_keys_eq!(cfg.owner, ctx.accounts.owner.key(), CipherBondError::NotOwner);

    let acc = &mut ctx.accounts.provider_account;
    upsert_provider(
        acc,
        provider,
        ctx.bumps.provider_account,
        Clock::get()?.slot,
        true,
    );

    emit!(ProviderAdded { provider });

    Ok(())
}

pub fn remove_provider(ctx: Context<RemoveProvider>, provider: Pubkey) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require_keys_eq!(cfg.owner, ctx.accounts.owner.key(), CipherBondError::NotOwner);

    let acc = &mut ctx.accounts.provider_account;
    upsert_provider(
        acc,
        provider,
        ctx.bumps.provider_account,
        Clock::get()?.slot,
        false,
    );

    emit!(ProviderRemoved { provider });

    Ok(())
}
