use anchor_lang::prelude::*;

use crate::errors::CipherBondError;
use crate::events::{BatchClosed, BatchOpened};
use crate::fhe;
use crate::utils::{allocate_batch_id, finalize_open_batch};
use crate::{CloseBatch, OpenBatch};

pub fn open_batch(ctx: Context<OpenBatch>) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(cfg.owner, ctx.accounts.owner.key(), CipherBondError::NotOwner);
    require!(!cfg.paused, CipherBondError::PausedState);

    let batch_id = allocate_batch_id(cfg)?;
    let current_slot = Clock::get()?.slot;

    let batch = &mut ctx.accounts.batch;
    batch.batch_id = batch_id;
    batch.bump = ctx.bumps.batch;

    batch.total_amount_ct = fhe::zero_handle();
    batch.bond_count = 0;

    batch.finalized = false;
    batch.created_slot = current_slot;
    batch.closed_slot = 0;

    emit!(BatchOpened {
        batch_id,
        slot: current_slot,
    });

    Ok(())
}

pub fn close_batch(ctx: Context<CloseBatch>) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(cfg.owner, ctx.accounts.owner.key(), CipherBondError::NotOwner);
    require!(!cfg.paused, CipherBondError::PausedState);

    let batch = &mut ctx.accounts.batch;
    let current_slot = Clock::get()?.slot;

    finalize_open_batch(cfg, batch, current_slot)?;

    emit!(BatchClosed {
        batch_id: batch.batch_id,
        bond_count: batch.bond_count,
        slot: current_slot,
    });

    Ok(())
}
