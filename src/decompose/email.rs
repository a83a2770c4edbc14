use std::sync::LazyLock;

use regex::Regex;
use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::core::{EmailRecord, LookupError};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("e-mail pattern is valid")
});

/// Validate and fingerprint an e-mail address.
///
/// The address is trimmed and lowercased before matching and hashing, so the
/// SHA-1/SHA-256 fingerprints are stable across capitalization and can be
/// correlated with breach corpora keyed the same way. `domain_has_mx` is left
/// `None`; the resolver fills it from a DNS probe.
pub fn decompose_email(raw: &str) -> Result<EmailRecord, LookupError> {
    let email = raw.trim().to_lowercase();

    if !EMAIL_RE.is_match(&email) {
        return Err(LookupError::invalid_format(format!(
            "'{email}' is not a valid e-mail address"
        )));
    }

    let domain = email
        .split_once('@')
        .map(|(_, d)| d.to_string())
        .unwrap_or_default();

    Ok(EmailRecord {
        sha1: hex::encode(Sha1::digest(email.as_bytes())),
        sha256: hex::encode(Sha256::digest(email.as_bytes())),
        domain,
        email,
        domain_has_mx: None,
        mail_servers: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits() {
        let e = decompose_email("  Fulano.Silva@Example.COM.br ").unwrap();
        assert_eq!(e.email, "fulano.silva@example.com.br");
        assert_eq!(e.domain, "example.com.br");
        assert!(e.domain_has_mx.is_none());
    }

    #[test]
    fn known_hashes() {
        let e = decompose_email("test@example.com").unwrap();
        assert_eq!(e.sha1, "567159d622ffbb50b11b0efd307be358624a26ee");
        assert_eq!(
            e.sha256,
            "973dfe463ec85785f5f95af5ba3906eedb2d931c24e69824a89ea65dba4e813b"
        );
    }

    #[test]
    fn hash_ignores_case() {
        let a = decompose_email("A@B.CO").unwrap();
        let b = decompose_email("a@b.co").unwrap();
        assert_eq!(a.sha256, b.sha256);
    }

    #[test]
    fn rejects_malformed() {
        assert!(decompose_email("no-at-sign.com").is_err());
        assert!(decompose_email("a@nodot").is_err());
        assert!(decompose_email("a b@c.com").is_err());
        assert!(decompose_email("@example.com").is_err());
    }
}
