use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::CipherBondError;
use crate::events::{CooldownUpdated, OwnershipTransferred, ProtocolPaused, ProtocolUnpaused};
use crate::state::Config;
use crate::utils::valid_cooldown;
use crate::{InitializeConfig, SetCooldown, SetPause, TransferOwnership};

pub fn initialize_config(
    ctx: Context<InitializeConfig>,
    cooldown_seconds: u64,
    oracle_pubkey: Pubkey,
) -> Result<()> {
    require!(valid_cooldown(cooldown_seconds), CipherBondError::InvalidCooldown);

    let cfg: &mut Account<Config> = &mut ctx.accounts.config;

    cfg.owner = ctx.accounts.owner.key();
    cfg.bump = ctx.bumps.config;

    cfg.paused = false;
    cfg.cooldown_seconds = cooldown_seconds;
    cfg.oracle_pubkey = oracle_pubkey;

    cfg.batch_open = false;
    cfg.current_batch_id = 0;
    cfg.next_batch_id = FIRST_BATCH_ID;

    cfg.next_bond_id = 1;
    cfg.next_request_id = FIRST_REQUEST_ID;
    cfg.last_decryption_request_ts = 0;

    cfg.version = INITIAL_VERSION;

    Ok(())
}

pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(cfg.owner, ctx.accounts.owner.key(), CipherBondError::NotOwner);

    let previous_owner = cfg.owner;
    cfg.owner = new_owner;

    emit!(OwnershipTransferred {
        previous_owner,
        new_owner,
    });

    Ok(())
}

pub fn pause(ctx: Context<SetPause>) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(cfg.owner, ctx.accounts.owner.key(), CipherBondError::NotOwner);
    require!(!cfg.paused, CipherBondError::PausedState);

    cfg.paused = true;

    emit!(ProtocolPaused {
        slot: Clock::get()?.slot,
    });

    Ok(())
}

// Deliberately no already-unpaused guard: the owner may call this any time.
pub fn unpause(ctx: Context<SetPause>) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(cfg.owner, ctx.accounts.owner.key(), CipherBondError::NotOwner);

    cfg.paused = false;

    emit!(ProtocolUnpaused {
        slot: Clock::get()?.slot,
    });

    Ok(())
}

pub fn set_cooldown_seconds(ctx: Context<SetCooldown>, cooldown_seconds: u64) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(cfg.owner, ctx.accounts.owner.key(), CipherBondError::NotOwner);
    require!(valid_cooldown(cooldown_seconds), CipherBondError::InvalidCooldown);

    cfg.cooldown_seconds = cooldown_seconds;

    emit!(CooldownUpdated { cooldown_seconds });

    Ok(())
}
