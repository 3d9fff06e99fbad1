use anchor_lang::prelude::*;

#[error_code]
pub enum CipherBondError {
    #[msg("Caller is not the protocol owner")]
    NotOwner,
    #[msg("Caller is not a registered provider")]
    NotProvider,
    #[msg("Protocol paused")]
    PausedState,

    #[msg("No batch is currently open")]
    BatchNotOpen,
    #[msg("A batch is already open")]
    BatchAlreadyOpen,
    #[msg("Invalid or non-finalized batch")]
    InvalidBatch,
    #[msg("Batch PDA mismatch")]
    BatchPdaMismatch,

    #[msg("Cooldown has not elapsed")]
    CooldownActive,
    #[msg("Cooldown must be non-zero")]
    InvalidCooldown,

    #[msg("Ciphertext handle is not initialized")]
    UninitializedCiphertext,

    #[msg("Decryption request already processed")]
    ReplayAttempt,
    #[msg("Ciphertext state changed since the decryption request")]
    StateMismatch,
    #[msg("Decryption proof is invalid")]
    InvalidProof,

    #[msg("Missing or invalid ed25519 verify instruction")]
    MissingOrInvalidEd25519Ix,

    #[msg("Oracle pubkey not set")]
    OracleNotSet,

    #[msg("Math overflow")]
    MathOverflow,
}
