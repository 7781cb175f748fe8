use sha2::{Digest, Sha256};

const SUFFIX_LENGTH: usize = 12;
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Derive a physical name for a resource the caller left unnamed.
///
/// Shape is `<logical id>-<suffix>`, where the suffix is derived from the
/// client request token, so retries of the same request produce the same
/// name. The logical id is truncated to keep the result within
/// `max_length` characters; if even the suffix does not fit, it is cut too.
pub fn generate_resource_identifier(
    logical_resource_identifier: Option<&str>,
    client_request_token: &str,
    max_length: usize,
) -> String {
    let digest = Sha256::digest(client_request_token.as_bytes());
    let suffix: String = digest
        .iter()
        .take(SUFFIX_LENGTH)
        .map(|b| ALPHABET[usize::from(*b) % ALPHABET.len()] as char)
        .collect();

    let max_prefix = max_length.saturating_sub(SUFFIX_LENGTH + 1);
    let prefix: String = logical_resource_identifier
        .unwrap_or_default()
        .chars()
        .take(max_prefix)
        .collect();

    if prefix.is_empty() {
        suffix.chars().take(max_length).collect()
    } else {
        format!("{prefix}-{suffix}")
    }
}
