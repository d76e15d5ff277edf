//! Deterministic candidate derivation
//!
//! A candidate address is the SHA256 digest of the seed material
//! `namespace || authority || nonce (8-byte little-endian) || program_id`,
//! encoded in base58. Same inputs always produce the same output, so a
//! nonce range can be re-derived after a restart without changing results.

use crate::error::{Result, SearchError};
use sha2::{Digest, Sha256};

/// Maximum length of a single seed component
pub const MAX_SEED_LEN: usize = 32;

/// Namespace seed used for mint derivation
pub const TOKEN_MINT_NAMESPACE: &[u8] = b"token_mint";

/// Default program id the addresses are derived under
pub const DEFAULT_PROGRAM_ID: &str = "GsxaG11BPNpbkBkzJgW7GkRRJ3o3bjJEqAqhsv814N2s";

/// Derive the candidate address bytes for a nonce
pub fn derive_address(
    namespace: &[u8],
    authority: &[u8; 32],
    program_id: &[u8; 32],
    nonce: u64,
) -> Result<[u8; 32]> {
    if namespace.len() > MAX_SEED_LEN {
        return Err(SearchError::SeedTooLong(namespace.len()));
    }

    let mut hasher = Sha256::new();
    hasher.update(namespace);
    hasher.update(authority);
    hasher.update(nonce.to_le_bytes());
    hasher.update(program_id);

    let digest = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    Ok(out)
}

/// Canonical text encoding of a derived address
pub fn encode_address(raw: &[u8; 32]) -> String {
    bs58::encode(raw).into_string()
}

/// Parse a base58 string into a 32-byte key (authority or program id)
pub fn parse_base58_key(s: &str) -> Result<[u8; 32]> {
    let bytes = bs58::decode(s)
        .into_vec()
        .map_err(|e| SearchError::InvalidKey(format!("{}: {}", s, e)))?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| SearchError::InvalidKey(format!("{}: expected 32 bytes, got {}", s, bytes.len())))
}
