//! Integration tests for passcipher
//!
//! Exercise the crate-root functions the way a config or CLI layer would.

use std::thread;

use passcipher::{
    CipherError, CipherParams, KeyDigest, decrypt_bytes, decrypt_string, encrypt_bytes,
    encrypt_string, random_string,
};

const SALT: &str = "salt1234";
const PASS: &str = "encpass1";

#[test]
fn test_encrypt_decrypt_password() {
    let encrypted = encrypt_string("mypassword", SALT, PASS).unwrap();
    assert_eq!(encrypted.len(), 16);

    let decrypted = decrypt_bytes(&encrypted, SALT, PASS).unwrap();
    assert_eq!(decrypted, b"mypassword");
}

#[test]
fn test_empty_salt_differs_but_roundtrips() {
    let salted = encrypt_string("mypassword", SALT, PASS).unwrap();
    let unsalted = encrypt_string("mypassword", "", PASS).unwrap();
    assert_ne!(salted, unsalted);

    let decrypted = decrypt_bytes(&unsalted, "", PASS).unwrap();
    assert_eq!(decrypted, b"mypassword");
}

#[test]
fn test_empty_salt_and_pass() {
    let encrypted = encrypt_string("mypassword", "", "").unwrap();
    let decrypted = decrypt_bytes(&encrypted, "", "").unwrap();
    assert_eq!(decrypted, b"mypassword");
}

#[test]
fn test_deterministic() {
    let first = encrypt_bytes(b"same input", SALT, PASS).unwrap();
    let second = encrypt_bytes(b"same input", SALT, PASS).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_plaintext_roundtrip() {
    let encrypted = encrypt_bytes(b"", SALT, PASS).unwrap();
    assert_eq!(encrypted.len(), 16);
    assert!(decrypt_bytes(&encrypted, SALT, PASS).unwrap().is_empty());
}

#[test]
fn test_decrypt_empty_input() {
    let result = decrypt_bytes(&[], "test", "test");
    assert!(matches!(result, Err(CipherError::DecryptionFailed)));

    let result = decrypt_string("", "test", "test");
    assert!(matches!(result, Err(CipherError::DecryptionFailed)));
}

#[test]
fn test_bad_salt_and_pass() {
    let encrypted = encrypt_string("mypassword", SALT, PASS).unwrap();

    let err = decrypt_bytes(&encrypted, "badSalt", PASS).unwrap_err();
    assert!(err.to_string().contains("bad salt/pass"));

    let err = decrypt_bytes(&encrypted, SALT, "badPass").unwrap_err();
    assert!(err.to_string().contains("bad salt/pass"));
}

#[test]
fn test_decrypt_string_carries_raw_bytes() {
    // This particular ciphertext happens to be valid UTF-8
    let encrypted = encrypt_string("secret-8139", SALT, PASS).unwrap();
    assert_eq!(hex::encode(&encrypted), "d39d2626080946dfa803324129673145");

    let as_text = String::from_utf8(encrypted).unwrap();
    let decrypted = decrypt_string(&as_text, SALT, PASS).unwrap();
    assert_eq!(decrypted, b"secret-8139");
}

#[test]
fn test_input_buffer_untouched() {
    let data = vec![1u8, 2, 3, 4, 5];
    let encrypted = encrypt_bytes(&data, SALT, PASS).unwrap();
    assert_eq!(data, vec![1, 2, 3, 4, 5]);
    assert_ne!(&encrypted[..5], &data[..]);
}

#[test]
fn test_random_string() {
    let got = random_string(10);
    assert_eq!(got.len(), 10);
    let next = random_string(10);
    assert_ne!(got, next, "Got two identical random strings - seed problem");
    assert!(random_string(0).is_empty());
}

#[test]
fn test_generated_params_roundtrip() {
    let params = CipherParams::generate();
    let encrypted = params.encrypt(b"generated secret").unwrap();

    let same = CipherParams::new(params.salt(), params.passphrase());
    assert_eq!(same.decrypt(&encrypted).unwrap(), b"generated secret");
}

#[test]
fn test_sha256_params_match_root_functions_only_for_md5() {
    let md5 = CipherParams::new(SALT, PASS).encrypt(b"mypassword").unwrap();
    assert_eq!(md5, encrypt_bytes(b"mypassword", SALT, PASS).unwrap());

    let sha = CipherParams::new(SALT, PASS)
        .with_digest(KeyDigest::Sha256)
        .encrypt(b"mypassword")
        .unwrap();
    assert_ne!(md5, sha);
}

#[test]
fn test_concurrent_use() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let salt = random_string(8);
                let plaintext = format!("payload from thread {}", i);
                let encrypted = encrypt_string(&plaintext, &salt, PASS).unwrap();
                let decrypted = decrypt_bytes(&encrypted, &salt, PASS).unwrap();
                assert_eq!(decrypted, plaintext.as_bytes());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
