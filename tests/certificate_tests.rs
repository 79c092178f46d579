use pretty_assertions::assert_eq;
use std::fs;
use tls_interop_support::certificate::{Cert, Certificates, KeyEncoding};
use tls_interop_support::{Algorithm, Error};

const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/pems/");

// Certificates whose files are shipped in tests/pems
fn fixture(cert: Cert) -> Cert {
    cert.with_location(FIXTURES)
}

fn leak(dir: &tempfile::TempDir) -> &'static str {
    Box::leak(format!("{}/", dir.path().display()).into_boxed_str())
}

#[test]
fn test_load_ecdsa_certificates() {
    let details = fixture(Certificates::ECDSA_256).load_certificate().unwrap();
    assert_eq!(details.algorithm, Algorithm::Ec);
    assert_eq!(details.key_size, 256);
    assert_eq!(details.public_key_algorithm, "1.2.840.10045.2.1");
    assert_eq!(details.signature_algorithm, "1.2.840.10045.4.3.2");
    assert!(details.subject.contains("ecdsa-p256.test"));
    assert!(details.is_self_signed());

    let details = fixture(Certificates::ECDSA_384).load_certificate().unwrap();
    assert_eq!(details.algorithm, Algorithm::Ec);
    assert_eq!(details.key_size, 384);
}

#[test]
fn test_load_rsa_certificate() {
    let details = fixture(Certificates::RSA_2048_SHA256).load_certificate().unwrap();
    assert_eq!(details.algorithm, Algorithm::Rsa);
    assert_eq!(details.key_size, 2048);
    assert_eq!(details.public_key_algorithm, "1.2.840.113549.1.1.1");
    assert_eq!(details.signature_algorithm, "1.2.840.113549.1.1.11");
}

#[test]
fn test_load_private_keys() {
    let key = fixture(Certificates::ECDSA_256).load_private_key().unwrap();
    assert_eq!(key.encoding, KeyEncoding::Sec1);
    assert!(!key.der.is_empty());

    let key = fixture(Certificates::RSA_2048_SHA256).load_private_key().unwrap();
    assert_eq!(key.encoding, KeyEncoding::Pkcs1);

    // Key material stays out of debug output
    let rendered = format!("{:?}", key);
    assert!(rendered.contains("der_len"));
    assert!(!rendered.contains("der:"));
}

#[test]
fn test_verify_fixtures_on_disk() {
    for cert in [Certificates::ECDSA_256, Certificates::ECDSA_384, Certificates::RSA_2048_SHA256] {
        let details = fixture(cert).verify_on_disk().unwrap();
        assert_eq!(details.algorithm, cert.algorithm);
    }
}

#[test]
fn test_verify_detects_wrong_key_algorithm() {
    let dir = tempfile::tempdir().unwrap();
    fs::copy(
        format!("{}rsa_2048_sha256_client_cert.pem", FIXTURES),
        dir.path().join("mislabeled_cert.pem"),
    )
    .unwrap();

    let cert = Cert::new("ECDSA_MISLABELED", "mislabeled").with_location(leak(&dir));
    let err = cert.verify_on_disk().unwrap_err();
    assert!(matches!(err, Error::CertificateError(_)));
    assert!(err.to_string().contains("expects a EC key"));
}

#[test]
fn test_verify_detects_mismatched_key_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::copy(
        format!("{}ecdsa_p256_pkcs1_cert.pem", FIXTURES),
        dir.path().join("pair_cert.pem"),
    )
    .unwrap();
    fs::copy(
        format!("{}rsa_2048_sha256_client_key.pem", FIXTURES),
        dir.path().join("pair_key.pem"),
    )
    .unwrap();

    let cert = Cert::new("ECDSA_PAIR", "pair").with_location(leak(&dir));
    assert!(matches!(cert.verify_on_disk(), Err(Error::CertificateError(_))));
}

#[test]
fn test_pem_without_certificate() {
    let dir = tempfile::tempdir().unwrap();
    fs::copy(
        format!("{}ecdsa_p256_pkcs1_key.pem", FIXTURES),
        dir.path().join("keyonly_cert.pem"),
    )
    .unwrap();
    fs::write(dir.path().join("keyonly_key.pem"), "not a pem file\n").unwrap();

    let cert = Cert::new("ECDSA_KEYONLY", "keyonly").with_location(leak(&dir));

    let err = cert.load_certificate().unwrap_err();
    assert!(err.to_string().contains("No certificate found"));

    let err = cert.load_private_key().unwrap_err();
    assert!(err.to_string().contains("No private key found"));
}

#[test]
fn test_missing_files_are_io_errors() {
    // The default location is relative to the suite's working directory
    let cert = Certificates::RSA_4096_SHA512.with_location("/nonexistent/pems/");
    assert!(matches!(cert.load_certificate(), Err(Error::IoError(_))));
    assert!(matches!(cert.load_private_key(), Err(Error::IoError(_))));
}
