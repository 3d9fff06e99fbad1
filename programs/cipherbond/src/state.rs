use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Config {
    pub owner: Pubkey,
    pub bump: u8,

    pub paused: bool,

    /// Minimum seconds between submissions per provider, and between
    /// decryption requests by the owner. Never zero.
    pub cooldown_seconds: u64,

    /// Key the oracle signs reveal messages with (ed25519 introspection).
    pub oracle_pubkey: Pubkey,

    // Batch lifecycle: at most one batch accepts submissions at a time.
    pub batch_open: bool,
    pub current_batch_id: u64,
    pub next_batch_id: u64,

    pub next_bond_id: u64,
    pub next_request_id: u64,

    pub last_decryption_request_ts: i64,

    pub version: u16,
}

#[account]
#[derive(InitSpace)]
pub struct ProviderAccount {
    pub provider: Pubkey,
    pub bump: u8,

    /// add_provider / remove_provider toggle this; both are idempotent.
    pub active: bool,

    pub last_submission_ts: i64,
    pub bonds_submitted: u64,

    pub registered_slot: u64,
}

#[account]
#[derive(InitSpace)]
pub struct Batch {
    pub batch_id: u64,
    pub bump: u8,

    /// Running homomorphic sum of all bond amounts submitted to this batch.
    /// Spelled as a literal array: InitSpace cannot see through the
    /// CiphertextHandle alias.
    pub total_amount_ct: [u8; 32],

    /// Plaintext bond count. Not privacy-sensitive, tracked directly.
    pub bond_count: u64,

    /// Set by close_batch. A finalized batch is immutable and is the only
    /// kind eligible for a decryption request.
    pub finalized: bool,

    pub created_slot: u64,
    pub closed_slot: u64,
}

#[account]
#[derive(InitSpace)]
pub struct Bond {
    pub bond_id: u64,
    pub batch_id: u64,
    pub provider: Pubkey,
    pub bump: u8,

    pub encrypted_amount: [u8; 32],
    pub encrypted_maturity: [u8; 32],

    pub created_slot: u64,
}

#[account]
#[derive(InitSpace)]
pub struct DecryptionContext {
    pub request_id: u64,
    pub batch_id: u64,
    pub bump: u8,

    /// Commitment over the ciphertext state at request time. The callback
    /// recomputes it from current state and rejects on any difference.
    pub state_hash: [u8; 32],

    /// false -> true exactly once; a second callback is a replay.
    pub processed: bool,

    pub requested_slot: u64,
    pub processed_slot: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fhe;

    // Locks in the InitSpace layout, ciphertext handle fields included.
    #[test]
    fn account_space_matches_layout() {
        assert_eq!(Config::INIT_SPACE, 32 + 1 + 1 + 8 + 32 + 1 + 8 + 8 + 8 + 8 + 8 + 2);
        assert_eq!(ProviderAccount::INIT_SPACE, 32 + 1 + 1 + 8 + 8 + 8);
        assert_eq!(Batch::INIT_SPACE, 8 + 1 + 32 + 8 + 1 + 8 + 8);
        assert_eq!(Bond::INIT_SPACE, 8 + 8 + 32 + 1 + 32 + 32 + 8);
        assert_eq!(DecryptionContext::INIT_SPACE, 8 + 8 + 1 + 32 + 1 + 8 + 8);
    }

    // The stored fields must stay assignment-compatible with handles coming
    // out of the fhe module.
    #[test]
    fn handle_fields_accept_fhe_handles() {
        let mut batch = Batch {
            batch_id: 1,
            bump: 255,
            total_amount_ct: fhe::zero_handle(),
            bond_count: 0,
            finalized: false,
            created_slot: 0,
            closed_slot: 0,
        };
        batch.total_amount_ct = fhe::add_ciphertexts(&batch.total_amount_ct, &fhe::trivial_encrypt(7));
        assert!(fhe::is_initialized(&batch.total_amount_ct));
    }
}
