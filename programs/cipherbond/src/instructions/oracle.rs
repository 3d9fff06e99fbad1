use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions::{
    load_current_index_checked, load_instruction_at_checked,
};

use crate::errors::CipherBondError;
use crate::events::{DecryptionFulfilled, DecryptionRequested, OracleUpdated};
use crate::utils::{
    batch_state_hash, cooldown_elapsed, parse_ed25519_ix_pubkey_and_msg,
    validate_decryption_target, verify_reveal_preconditions,
};
use crate::{FulfillDecryption, RequestBatchDecryption, SetOraclePubkey};

pub fn set_oracle_pubkey(ctx: Context<SetOraclePubkey>, oracle_pubkey: Pubkey) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(cfg.owner, ctx.accounts.owner.key(), CipherBondError::NotOwner);

    cfg.oracle_pubkey = oracle_pubkey;

    emit!(OracleUpdated { oracle_pubkey });

    Ok(())
}

/// Phase 1: commit to the finalized batch's ciphertext state and hand the
/// reveal off to the oracle. Returns immediately; the decryption happens
/// out-of-band and comes back through fulfill_decryption.
pub fn request_batch_decryption(ctx: Context<RequestBatchDecryption>, batch_id: u64) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(cfg.owner, ctx.accounts.owner.key(), CipherBondError::NotOwner);
    require!(!cfg.paused, CipherBondError::PausedState);
    require!(
        cfg.oracle_pubkey != Pubkey::default(),
        CipherBondError::OracleNotSet
    );

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    require!(
        cooldown_elapsed(cfg.last_decryption_request_ts, now, cfg.cooldown_seconds),
        CipherBondError::CooldownActive
    );

    let batch = &ctx.accounts.batch;
    validate_decryption_target(batch_id, cfg.next_batch_id, batch.finalized)?;

    let state_hash = batch_state_hash(ctx.program_id, batch);

    let request_id = cfg.next_request_id;
    cfg.next_request_id = request_id
        .checked_add(1)
        .ok_or(CipherBondError::MathOverflow)?;
    cfg.last_decryption_request_ts = now;

    let dctx = &mut ctx.accounts.decryption_context;
    dctx.request_id = request_id;
    dctx.batch_id = batch_id;
    dctx.bump = ctx.bumps.decryption_context;
    dctx.state_hash = state_hash;
    dctx.processed = false;
    dctx.requested_slot = clock.slot;
    dctx.processed_slot = 0;

    emit!(DecryptionRequested {
        request_id,
        batch_id,
        state_hash,
    });

    Ok(())
}

/// Phase 2: oracle callback. Tx layout must be
/// [ ed25519_verify(reveal msg), fulfill_decryption ].
///
/// Check order is strict: replay, then state commitment, then proof, then
/// mark processed. See verify_reveal_preconditions.
pub fn fulfill_decryption(
    ctx: Context<FulfillDecryption>,
    _request_id: u64,
    total_amount: u64,
    bond_count: u64,
) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require!(
        cfg.oracle_pubkey != Pubkey::default(),
        CipherBondError::OracleNotSet
    );

    let dctx = &mut ctx.accounts.decryption_context;
    let batch = &ctx.accounts.batch;

    // --- ed25519 introspection ---
    let ix_sys = ctx.accounts.instructions.to_account_info();
    let current_ix = load_current_index_checked(&ix_sys)? as usize;
    require!(current_ix >= 1, CipherBondError::MissingOrInvalidEd25519Ix);

    let ed_ix = load_instruction_at_checked(current_ix - 1, &ix_sys)
        .map_err(|_| error!(CipherBondError::MissingOrInvalidEd25519Ix))?;
    let (proof_pubkey, proof_msg) = parse_ed25519_ix_pubkey_and_msg(&ed_ix)?;

    verify_reveal_preconditions(
        dctx,
        batch,
        ctx.program_id,
        &cfg.oracle_pubkey,
        &proof_pubkey,
        &proof_msg,
        total_amount,
        bond_count,
    )?;

    // Close the replay window before any further side effect.
    dctx.processed = true;
    dctx.processed_slot = Clock::get()?.slot;

    msg!(
        "decryption fulfilled: request {} batch {} total {} count {}",
        dctx.request_id,
        dctx.batch_id,
        total_amount,
        bond_count
    );

    emit!(DecryptionFulfilled {
        request_id: dctx.request_id,
        batch_id: dctx.batch_id,
        total_amount,
        bond_count,
    });

    Ok(())
}
