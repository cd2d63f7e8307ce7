//! Signature tests for coindcx-crypto

use coindcx_crypto::{sign, verify, Credentials, RequestSigner, SecretKey};

const PAYLOAD: &[u8] = br#"{"a":1}"#;
const TIMESTAMP: i64 = 1_700_000_000_000;

/// Known HMAC-SHA256 vector for secret "s".
#[test]
fn known_vector() {
    let signature = sign(&SecretKey::new("s"), PAYLOAD, TIMESTAMP).unwrap();
    assert_eq!(
        signature,
        "ee9e27cb48db9c3b564ca287c53f71a1fcf174c2ebd892b8070030b58e84c7e5"
    );
}

/// Repeated calls produce identical output
#[test]
fn signing_is_deterministic() {
    let secret = SecretKey::new("s");
    let first = sign(&secret, PAYLOAD, TIMESTAMP).unwrap();
    for _ in 0..10 {
        assert_eq!(sign(&secret, PAYLOAD, TIMESTAMP).unwrap(), first);
    }
}

/// Output is 64 lowercase hex characters
#[test]
fn signature_is_lowercase_hex() {
    let signature = sign(&SecretKey::new("another secret"), b"{}", 0).unwrap();
    assert_eq!(signature.len(), 64);
    assert!(signature
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
}

/// Changing one payload byte changes the signature
#[test]
fn payload_change_changes_signature() {
    let signature = sign(&SecretKey::new("s"), br#"{"a":2}"#, TIMESTAMP).unwrap();
    assert_eq!(
        signature,
        "e6509f4e7859595f2522a737146b616961dda0dbf1a290355ac55b7753059aa9"
    );
}

/// Changing the timestamp changes the signature
#[test]
fn timestamp_change_changes_signature() {
    let signature = sign(&SecretKey::new("s"), PAYLOAD, TIMESTAMP + 1).unwrap();
    assert_eq!(
        signature,
        "918e4f72e043d9e080e5f68ec6f89a1e7ae9ceae055769c1aab0e1ed2b011ea1"
    );
}

/// Different secrets give different signatures
#[test]
fn secret_change_changes_signature() {
    let a = sign(&SecretKey::new("s"), PAYLOAD, TIMESTAMP).unwrap();
    let b = sign(&SecretKey::new("t"), PAYLOAD, TIMESTAMP).unwrap();
    assert_ne!(a, b);
}

/// Whitespace in the serialized payload is significant
#[test]
fn whitespace_is_significant() {
    let secret = SecretKey::new("s");
    let compact = sign(&secret, br#"{"a":1}"#, TIMESTAMP).unwrap();
    let spaced = sign(&secret, br#"{"a": 1}"#, TIMESTAMP).unwrap();
    assert_ne!(compact, spaced);
}

/// Verify accepts the produced signature and rejects tampering
#[test]
fn verify_roundtrip_and_tamper() {
    let signer = RequestSigner::new(Credentials::new("key", "s"));
    let signature = signer.sign(PAYLOAD, TIMESTAMP).unwrap();

    assert!(signer.verify(PAYLOAD, TIMESTAMP, &signature));
    assert!(!signer.verify(br#"{"a":2}"#, TIMESTAMP, &signature));
    assert!(!signer.verify(PAYLOAD, TIMESTAMP + 1, &signature));
    assert!(!verify(&SecretKey::new("t"), PAYLOAD, TIMESTAMP, &signature));
}

/// Empty secrets are valid HMAC keys
#[test]
fn empty_secret_still_signs() {
    let signature = sign(&SecretKey::new(""), PAYLOAD, TIMESTAMP).unwrap();
    assert_eq!(signature.len(), 64);
}
