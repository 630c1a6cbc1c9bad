//! Gravatar-compatible content hash derivation.

use md5::{Digest, Md5};

/// Compute the gravatar lookup hash for an identity.
///
/// Normalizes the identity (trim surrounding whitespace, lowercase) and
/// returns the MD5 digest as 32 lowercase hex characters. Deterministic and
/// infallible; the normalization matches the gravatar reference vectors, so
/// hashes interoperate with the wider gravatar ecosystem.
#[must_use]
pub fn identity_hash(identity: &str) -> String {
    let normalized = identity.trim().to_lowercase();
    hex::encode(Md5::digest(normalized.as_bytes()))
}

/// Hash of the empty string; what gravatar sees when no identity survives
/// normalization.
pub const EMPTY_IDENTITY_HASH: &str = "d41d8cd98f00b204e9800998ecf8427e";
