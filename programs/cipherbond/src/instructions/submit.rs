use anchor_lang::prelude::*;

use crate::errors::CipherBondError;
use crate::events::BondSubmitted;
use crate::fhe::CiphertextHandle;
use crate::utils::{cooldown_elapsed, record_submission};
use crate::SubmitBond;

pub fn submit_bond(
    ctx: Context<SubmitBond>,
    encrypted_amount: CiphertextHandle,
    encrypted_maturity: CiphertextHandle,
) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require!(!cfg.paused, CipherBondError::PausedState);

    let provider_pk = ctx.accounts.provider.key();
    let provider = &mut ctx.accounts.provider_account;
    require!(provider.active, CipherBondError::NotProvider);

    require!(cfg.batch_open, CipherBondError::BatchNotOpen);

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    require!(
        cooldown_elapsed(provider.last_submission_ts, now, cfg.cooldown_seconds),
        CipherBondError::CooldownActive
    );

    let batch = &mut ctx.accounts.batch;
    record_submission(batch, &encrypted_amount, &encrypted_maturity)?;

    let bond_id = cfg.next_bond_id;
    cfg.next_bond_id = bond_id
        .checked_add(1)
        .ok_or(CipherBondError::MathOverflow)?;

    let bond = &mut ctx.accounts.bond;
    bond.bond_id = bond_id;
    bond.batch_id = batch.batch_id;
    bond.provider = provider_pk;
    bond.bump = ctx.bumps.bond;
    bond.encrypted_amount = encrypted_amount;
    bond.encrypted_maturity = encrypted_maturity;
    bond.created_slot = clock.slot;

    provider.last_submission_ts = now;
    provider.bonds_submitted = provider
        .bonds_submitted
        .checked_add(1)
        .ok_or(CipherBondError::MathOverflow)?;

    emit!(BondSubmitted {
        provider: provider_pk,
        bond_id,
        batch_id: batch.batch_id,
    });

    Ok(())
}
