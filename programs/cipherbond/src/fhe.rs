//! Symbolic ciphertext-handle algebra.
//!
//! The program never sees plaintext bond amounts. Ciphertexts live off-chain
//! in the oracle's coprocessor; on-chain they are referenced by opaque 32-byte
//! handles. Every operation here derives a new handle deterministically, and
//! the coprocessor mirrors the same derivation over its plaintext store, so a
//! handle is a stable correlation key for a value only the oracle can decrypt.

use anchor_lang::prelude::*;
use solana_sha256_hasher::hashv;

/// Opaque reference to an encrypted value.
pub type CiphertextHandle = [u8; 32];

/// The all-zero handle is the uninitialized sentinel; no derivation below can
/// produce it.
pub const UNINITIALIZED_HANDLE: CiphertextHandle = [0u8; 32];

pub fn is_initialized(handle: &CiphertextHandle) -> bool {
    *handle != UNINITIALIZED_HANDLE
}

/// Wrap a public integer as a ciphertext handle.
pub fn trivial_encrypt(value: u64) -> CiphertextHandle {
    hashv(&[b"cb:fhe:trivial".as_ref(), value.to_le_bytes().as_ref()]).to_bytes()
}

/// Homomorphic addition. Order-sensitive on purpose: the coprocessor replays
/// additions in submission order, so the fold over a batch is canonical.
pub fn add_ciphertexts(lhs: &CiphertextHandle, rhs: &CiphertextHandle) -> CiphertextHandle {
    hashv(&[b"cb:fhe:add".as_ref(), lhs.as_ref(), rhs.as_ref()]).to_bytes()
}

/// Additive identity a fresh batch aggregate starts from.
pub fn zero_handle() -> CiphertextHandle {
    trivial_encrypt(0)
}

/// Commitment over an ordered handle list, bound to this program's identity
/// and the target batch so a reveal cannot be replayed across programs or
/// batches.
pub fn state_commitment(
    program_id: &Pubkey,
    batch_id: u64,
    handles: &[CiphertextHandle],
) -> [u8; 32] {
    let batch_le = batch_id.to_le_bytes();
    let mut parts: Vec<&[u8]> = Vec::with_capacity(3 + handles.len());
    parts.push(b"cb:state".as_ref());
    parts.push(program_id.as_ref());
    parts.push(batch_le.as_ref());
    for h in handles {
        parts.push(h.as_ref());
    }
    hashv(&parts).to_bytes()
}

#[cfg(test)]
pub mod mock {
    //! Deterministic stand-in for the off-chain coprocessor: a plaintext
    //! store keyed by handle, mirroring every on-chain derivation.

    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct MockCoprocessor {
        store: HashMap<CiphertextHandle, u64>,
    }

    impl MockCoprocessor {
        pub fn new() -> Self {
            let mut cp = Self::default();
            cp.store.insert(zero_handle(), 0);
            cp
        }

        /// Provider-side encrypt: registers the plaintext under a handle the
        /// program treats as opaque. A salt keeps equal amounts from
        /// colliding, like a real encryption would.
        pub fn encrypt(&mut self, value: u64, salt: u64) -> CiphertextHandle {
            let handle = hashv(&[
                b"cb:fhe:enc".as_ref(),
                value.to_le_bytes().as_ref(),
                salt.to_le_bytes().as_ref(),
            ])
            .to_bytes();
            self.store.insert(handle, value);
            handle
        }

        pub fn encrypt_trivial(&mut self, value: u64) -> CiphertextHandle {
            let handle = trivial_encrypt(value);
            self.store.insert(handle, value);
            handle
        }

        /// Mirror of the on-chain homomorphic add.
        pub fn add(&mut self, lhs: &CiphertextHandle, rhs: &CiphertextHandle) -> CiphertextHandle {
            let sum = self.store[lhs] + self.store[rhs];
            let handle = add_ciphertexts(lhs, rhs);
            self.store.insert(handle, sum);
            handle
        }

        pub fn decrypt(&self, handle: &CiphertextHandle) -> Option<u64> {
            self.store.get(handle).copied()
        }
    }
}
