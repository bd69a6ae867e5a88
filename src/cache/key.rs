//! Cache key derivation

use sha2::{Digest, Sha256};

/// Derive a deterministic cache key for an endpoint invocation.
///
/// Parameters are sorted into a canonical `k=v&k=v` string before
/// hashing, so key derivation is order-independent. The key is the
/// SHA-256 hex digest of `endpoint|canonical`.
pub fn cache_key(endpoint: &str, params: &[(&str, &str)]) -> String {
    let mut sorted = params.to_vec();
    sorted.sort_by_key(|&(k, _)| k);

    let canonical = sorted
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    let digest = Sha256::digest(format!("{}|{}", endpoint, canonical));
    format!("{:x}", digest)
}
