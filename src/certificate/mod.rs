use crate::error::{Error, Result};
use crate::tls::{Algorithm, Cipher, Curve, CERT_FILE_SUFFIX, KEY_FILE_SUFFIX, TEST_CERT_DIRECTORY};
use crate::utils;
use std::fmt;
use std::path::PathBuf;

pub mod pem;

pub use pem::{CertificateDetails, KeyEncoding, PrivateKey};

/// Length of the key-size suffix shared by EC cert names and curve names
/// ("ECDSA_256" / "P-256").
const CURVE_SUFFIX_LEN: usize = 3;

/// A certificate/key pair on disk, addressed by file prefix.
///
/// Files live at `<location><prefix>_cert.pem` and `<location><prefix>_key.pem`.
/// Nothing is read until one of the `load_*` methods is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cert {
    pub name: &'static str,
    pub prefix: &'static str,
    pub location: &'static str,
    pub algorithm: Algorithm,
}

impl Cert {
    pub const fn new(name: &'static str, prefix: &'static str) -> Self {
        Self {
            name,
            prefix,
            location: TEST_CERT_DIRECTORY,
            algorithm: Algorithm::from_name(name),
        }
    }

    /// The same certificate looked up under another directory. `location`
    /// is prepended verbatim, so it should end with a separator.
    pub const fn with_location(self, location: &'static str) -> Self {
        Self { location, ..self }
    }

    pub fn cert_path(&self) -> PathBuf {
        PathBuf::from(format!("{}{}{}", self.location, self.prefix, CERT_FILE_SUFFIX))
    }

    pub fn key_path(&self) -> PathBuf {
        PathBuf::from(format!("{}{}{}", self.location, self.prefix, KEY_FILE_SUFFIX))
    }

    pub fn compatible_with_cipher(&self, cipher: &Cipher) -> bool {
        self.algorithm == cipher.algorithm || cipher.algorithm == Algorithm::Any
    }

    /// Non-EC certificates work with any curve. EC certificates are issued
    /// for one curve and must share its key size suffix.
    pub fn compatible_with_curve(&self, curve: &Curve) -> bool {
        if self.algorithm != Algorithm::Ec {
            return true;
        }

        utils::trailing(curve.name, CURVE_SUFFIX_LEN) == utils::trailing(self.name, CURVE_SUFFIX_LEN)
    }

    pub fn load_certificate(&self) -> Result<CertificateDetails> {
        pem::load_certificate(&self.cert_path())
    }

    pub fn load_private_key(&self) -> Result<PrivateKey> {
        pem::load_private_key(&self.key_path())
    }

    /// Load both files and check they agree with the algorithm derived from
    /// the certificate name.
    pub fn verify_on_disk(&self) -> Result<CertificateDetails> {
        let details = self.load_certificate()?;
        if self.algorithm != Algorithm::Any && details.algorithm != self.algorithm {
            return Err(Error::CertificateError(format!(
                "{} expects a {} key but {} holds a {} key",
                self.name,
                self.algorithm,
                self.cert_path().display(),
                details.algorithm
            )));
        }

        let key = self.load_private_key()?;
        let key_algorithm = key.encoding.algorithm();
        if key_algorithm != Algorithm::Any && key_algorithm != details.algorithm {
            return Err(Error::CertificateError(format!(
                "{} holds a {} key but the certificate is {}",
                self.key_path().display(),
                key_algorithm,
                details.algorithm
            )));
        }

        log::debug!("Verified {} ({} {} bits)", self.name, details.algorithm, details.key_size);
        Ok(details)
    }
}

impl fmt::Display for Cert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// When referencing certificates, use these values.
pub struct Certificates;

impl Certificates {
    pub const RSA_1024_SHA256: Cert = Cert::new("RSA_1024_SHA256", "rsa_1024_sha256_client");
    pub const RSA_1024_SHA384: Cert = Cert::new("RSA_1024_SHA384", "rsa_1024_sha384_client");
    pub const RSA_1024_SHA512: Cert = Cert::new("RSA_1024_SHA512", "rsa_1024_sha512_client");
    pub const RSA_2048_SHA256: Cert = Cert::new("RSA_2048_SHA256", "rsa_2048_sha256_client");
    pub const RSA_2048_SHA384: Cert = Cert::new("RSA_2048_SHA384", "rsa_2048_sha384_client");
    pub const RSA_2048_SHA512: Cert = Cert::new("RSA_2048_SHA512", "rsa_2048_sha512_client");
    pub const RSA_3072_SHA256: Cert = Cert::new("RSA_3072_SHA256", "rsa_3072_sha256_client");
    pub const RSA_3072_SHA384: Cert = Cert::new("RSA_3072_SHA384", "rsa_3072_sha384_client");
    pub const RSA_3072_SHA512: Cert = Cert::new("RSA_3072_SHA512", "rsa_3072_sha512_client");
    pub const RSA_4096_SHA256: Cert = Cert::new("RSA_4096_SHA256", "rsa_4096_sha256_client");
    pub const RSA_4096_SHA384: Cert = Cert::new("RSA_4096_SHA384", "rsa_4096_sha384_client");
    pub const RSA_4096_SHA512: Cert = Cert::new("RSA_4096_SHA512", "rsa_4096_sha512_client");
    pub const ECDSA_256: Cert = Cert::new("ECDSA_256", "ecdsa_p256_pkcs1");
    pub const ECDSA_384: Cert = Cert::new("ECDSA_384", "ecdsa_p384_pkcs1");

    pub const RSA_2048_SHA256_WILDCARD: Cert = Cert::new("RSA_2048_SHA256_WILDCARD", "rsa_2048_sha256_wildcard");

    pub const ALL: &'static [Cert] = &[
        Self::RSA_1024_SHA256,
        Self::RSA_1024_SHA384,
        Self::RSA_1024_SHA512,
        Self::RSA_2048_SHA256,
        Self::RSA_2048_SHA384,
        Self::RSA_2048_SHA512,
        Self::RSA_3072_SHA256,
        Self::RSA_3072_SHA384,
        Self::RSA_3072_SHA512,
        Self::RSA_4096_SHA256,
        Self::RSA_4096_SHA384,
        Self::RSA_4096_SHA512,
        Self::ECDSA_256,
        Self::ECDSA_384,
        Self::RSA_2048_SHA256_WILDCARD,
    ];
}
