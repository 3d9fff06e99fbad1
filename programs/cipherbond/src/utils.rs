use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;

use crate::{
    constants::{FIRST_BATCH_ID, MAX_COOLDOWN_SECONDS},
    errors::CipherBondError,
    fhe::{self, CiphertextHandle},
    state::{Batch, Config, DecryptionContext, ProviderAccount},
};

// Ed25519SigVerify111111111111111111111111111
pub fn ed25519_program_id() -> Pubkey {
    Pubkey::new_from_array([
        3, 125, 70, 214, 124, 147, 251, 190, 18, 249, 66, 143, 131, 141, 64, 255,
        5, 112, 116, 73, 39, 244, 138, 100, 252, 202, 112, 68, 128, 0, 0, 0,
    ])
}

// -------------------------
// Cooldown throttling
// -------------------------

/// Configured cooldowns must be non-zero and within the sane range; zero
/// would disable throttling, and anything past the cap has no legitimate use.
pub fn valid_cooldown(cooldown_seconds: u64) -> bool {
    cooldown_seconds > 0 && cooldown_seconds <= MAX_COOLDOWN_SECONDS
}

/// A zero timestamp means the caller has never acted, so the first call is
/// always allowed. A cooldown past i64::MAX saturates: it throttles forever,
/// it never wraps negative.
pub fn cooldown_elapsed(last_ts: i64, now: i64, cooldown_seconds: u64) -> bool {
    let cooldown = i64::try_from(cooldown_seconds).unwrap_or(i64::MAX);
    last_ts == 0 || now.saturating_sub(last_ts) >= cooldown
}

// -------------------------
// Provider registry core
// -------------------------

/// Shared by add_provider and remove_provider: initializes a fresh account
/// once, then only toggles `active`. Both directions are idempotent, and the
/// cooldown timestamp survives a remove/re-add cycle.
pub fn upsert_provider(
    acc: &mut ProviderAccount,
    provider: Pubkey,
    bump: u8,
    current_slot: u64,
    active: bool,
) {
    if acc.provider == Pubkey::default() {
        acc.provider = provider;
        acc.bump = bump;
        acc.last_submission_ts = 0;
        acc.bonds_submitted = 0;
        acc.registered_slot = current_slot;
    }
    acc.active = active;
}

// -------------------------
// Batch lifecycle core
// -------------------------

/// Allocates the next batch id and flips the protocol into the open state.
/// The caller is responsible for initializing the Batch account itself.
pub fn allocate_batch_id(config: &mut Config) -> Result<u64> {
    require!(!config.batch_open, CipherBondError::BatchAlreadyOpen);

    let batch_id = config.next_batch_id;
    config.next_batch_id = batch_id
        .checked_add(1)
        .ok_or(CipherBondError::MathOverflow)?;
    config.current_batch_id = batch_id;
    config.batch_open = true;

    Ok(batch_id)
}

/// Freezes the currently open batch. From here on its aggregate is immutable
/// and the batch is eligible for a decryption request.
pub fn finalize_open_batch(config: &mut Config, batch: &mut Batch, current_slot: u64) -> Result<()> {
    require!(config.batch_open, CipherBondError::BatchNotOpen);
    require!(
        batch.batch_id == config.current_batch_id,
        CipherBondError::BatchPdaMismatch
    );

    batch.finalized = true;
    batch.closed_slot = current_slot;
    config.batch_open = false;

    Ok(())
}

// -------------------------
// Submission core
// -------------------------

/// Folds one bond into the open batch: homomorphic add into the running total
/// plus a checked count increment. Both encrypted inputs must already be in
/// initialized ciphertext form; an uninitialized handle is a caller error,
/// never silently re-initialized here.
pub fn record_submission(
    batch: &mut Batch,
    encrypted_amount: &CiphertextHandle,
    encrypted_maturity: &CiphertextHandle,
) -> Result<()> {
    require!(
        fhe::is_initialized(encrypted_amount),
        CipherBondError::UninitializedCiphertext
    );
    require!(
        fhe::is_initialized(encrypted_maturity),
        CipherBondError::UninitializedCiphertext
    );

    batch.total_amount_ct = fhe::add_ciphertexts(&batch.total_amount_ct, encrypted_amount);
    batch.bond_count = batch
        .bond_count
        .checked_add(1)
        .ok_or(CipherBondError::MathOverflow)?;

    Ok(())
}

// -------------------------
// Decryption request/callback core
// -------------------------

/// The ordered handle list a reveal is committed to: the running encrypted
/// total, then the bond count re-encoded as a ciphertext. The oracle decrypts
/// exactly this list.
pub fn batch_reveal_handles(batch: &Batch) -> [CiphertextHandle; 2] {
    [batch.total_amount_ct, fhe::trivial_encrypt(batch.bond_count)]
}

pub fn batch_state_hash(program_id: &Pubkey, batch: &Batch) -> [u8; 32] {
    fhe::state_commitment(program_id, batch.batch_id, &batch_reveal_handles(batch))
}

/// Only a closed batch with an in-range id may be revealed.
pub fn validate_decryption_target(batch_id: u64, next_batch_id: u64, finalized: bool) -> Result<()> {
    require!(
        batch_id >= FIRST_BATCH_ID && batch_id < next_batch_id,
        CipherBondError::InvalidBatch
    );
    require!(finalized, CipherBondError::InvalidBatch);
    Ok(())
}

/// Canonical message the oracle must sign to authenticate a reveal. Binding
/// the program id, request id and state hash makes a signature useless for
/// any other program, request, or batch snapshot.
pub fn expected_reveal_msg(
    program_id: &Pubkey,
    request_id: u64,
    state_hash: &[u8; 32],
    total_amount: u64,
    bond_count: u64,
) -> Vec<u8> {
    let mut out = Vec::with_capacity(b"cipherbond:reveal_v1".len() + 32 + 8 + 32 + 8 + 8);
    out.extend_from_slice(b"cipherbond:reveal_v1");
    out.extend_from_slice(program_id.as_ref());
    out.extend_from_slice(&request_id.to_le_bytes());
    out.extend_from_slice(state_hash);
    out.extend_from_slice(&total_amount.to_le_bytes());
    out.extend_from_slice(&bond_count.to_le_bytes());
    out
}

/// The callback gate. Check order is load-bearing:
/// replay first, then state, then proof. Reordering would either reopen the
/// replay window or let an invalid proof be probed against fresh state.
pub fn verify_reveal_preconditions(
    dctx: &DecryptionContext,
    batch: &Batch,
    program_id: &Pubkey,
    oracle_pubkey: &Pubkey,
    proof_pubkey: &Pubkey,
    proof_msg: &[u8],
    total_amount: u64,
    bond_count: u64,
) -> Result<()> {
    require!(!dctx.processed, CipherBondError::ReplayAttempt);

    let recomputed = batch_state_hash(program_id, batch);
    require!(
        recomputed == dctx.state_hash,
        CipherBondError::StateMismatch
    );

    require_keys_eq!(*proof_pubkey, *oracle_pubkey, CipherBondError::InvalidProof);

    let expected = expected_reveal_msg(
        program_id,
        dctx.request_id,
        &dctx.state_hash,
        total_amount,
        bond_count,
    );
    require!(
        proof_msg == expected.as_slice(),
        CipherBondError::InvalidProof
    );

    Ok(())
}

// -------------------------
// Ed25519 instruction introspection
// -------------------------

pub fn parse_ed25519_ix_pubkey_and_msg(ix: &Instruction) -> Result<(Pubkey, Vec<u8>)> {
    require!(
        ix.program_id == ed25519_program_id(),
        CipherBondError::MissingOrInvalidEd25519Ix
    );

    let data = &ix.data;
    require!(data.len() >= 16, CipherBondError::MissingOrInvalidEd25519Ix);

    let num_sigs = data[0];
    require!(num_sigs == 1, CipherBondError::MissingOrInvalidEd25519Ix);

    // Require "self-contained" offsets (instruction_index == u16::MAX), so the
    // signed payload cannot be smuggled in from a different instruction.
    let sig_ix = u16::from_le_bytes([data[4], data[5]]);
    let pk_ix = u16::from_le_bytes([data[8], data[9]]);
    let msg_ix = u16::from_le_bytes([data[14], data[15]]);
    require!(sig_ix == u16::MAX, CipherBondError::MissingOrInvalidEd25519Ix);
    require!(pk_ix == u16::MAX, CipherBondError::MissingOrInvalidEd25519Ix);
    require!(msg_ix == u16::MAX, CipherBondError::MissingOrInvalidEd25519Ix);

    let pk_off = u16::from_le_bytes([data[6], data[7]]) as usize;
    let msg_off = u16::from_le_bytes([data[10], data[11]]) as usize;
    let msg_sz = u16::from_le_bytes([data[12], data[13]]) as usize;

    require!(
        pk_off + 32 <= data.len(),
        CipherBondError::MissingOrInvalidEd25519Ix
    );
    require!(
        msg_off + msg_sz <= data.len(),
        CipherBondError::MissingOrInvalidEd25519Ix
    );

    let pk_bytes: [u8; 32] = data[pk_off..pk_off + 32]
        .try_into()
        .map_err(|_| error!(CipherBondError::MissingOrInvalidEd25519Ix))?;
    let msg = data[msg_off..msg_off + msg_sz].to_vec();

    Ok((Pubkey::new_from_array(pk_bytes), msg))
}
