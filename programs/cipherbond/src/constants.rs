// Centralized Protocol Constants

// PDA seeds
// =========

pub const CONFIG_SEED: &[u8] = b"config_v1";
pub const PROVIDER_SEED: &[u8] = b"provider_v1";
pub const BATCH_SEED: &[u8] = b"batch_v1";
pub const BOND_SEED: &[u8] = b"bond_v1";
pub const DECRYPTION_SEED: &[u8] = b"decryption_v1";

// Protocol defaults
// =================

/// Default per-caller cooldown between submissions / decryption requests.
/// Throttles spam without getting in the way of normal issuance cadence.
pub const DEFAULT_COOLDOWN_SECONDS: u64 = 60;

/// Upper bound on the configurable cooldown (one year). Keeps the value far
/// away from i64 timestamp arithmetic edge cases.
pub const MAX_COOLDOWN_SECONDS: u64 = 31_536_000;

/// Batch ids are 1-based; id 0 is the "no batch" sentinel and never valid.
pub const FIRST_BATCH_ID: u64 = 1;

/// First oracle decryption request id.
pub const FIRST_REQUEST_ID: u64 = 1;

/// Initial version for account structures.
pub const INITIAL_VERSION: u16 = 1;
