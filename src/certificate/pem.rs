use crate::error::{Error, Result};
use crate::tls::Algorithm;
use rustls_pemfile::Item;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use x509_parser::prelude::*;
use x509_parser::public_key::PublicKey;
use zeroize::Zeroizing;

/// What the leaf certificate in a PEM file actually contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateDetails {
    pub subject: String,
    pub issuer: String,
    pub algorithm: Algorithm,
    /// Public key size in bits (modulus for RSA, field size for EC).
    pub key_size: usize,
    pub public_key_algorithm: String,
    pub signature_algorithm: String,
}

impl CertificateDetails {
    pub fn is_self_signed(&self) -> bool {
        self.subject == self.issuer
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEncoding {
    /// `RSA PRIVATE KEY`
    Pkcs1,
    /// `EC PRIVATE KEY`
    Sec1,
    /// `PRIVATE KEY`, algorithm not visible without decoding
    Pkcs8,
}

impl KeyEncoding {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            KeyEncoding::Pkcs1 => Algorithm::Rsa,
            KeyEncoding::Sec1 => Algorithm::Ec,
            KeyEncoding::Pkcs8 => Algorithm::Any,
        }
    }
}

pub struct PrivateKey {
    pub encoding: KeyEncoding,
    pub der: Zeroizing<Vec<u8>>,
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("encoding", &self.encoding)
            .field("der_len", &self.der.len())
            .finish()
    }
}

fn read_items(path: &Path) -> Result<Vec<Item>> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut items = Vec::new();

    while let Some(item) = rustls_pemfile::read_one(&mut reader)? {
        items.push(item);
    }

    log::debug!("Read {} PEM item(s) from {}", items.len(), path.display());
    Ok(items)
}

pub fn parse_certificate(cert_der: &[u8]) -> Result<CertificateDetails> {
    let (_, cert) = X509Certificate::from_der(cert_der)
        .map_err(|e| Error::CertificateError(format!("Failed to parse X.509 certificate: {}", e)))?;

    let spki = cert.public_key();
    let parsed_key = spki
        .parsed()
        .map_err(|e| Error::CertificateError(format!("Failed to parse public key: {}", e)))?;

    let (algorithm, key_size) = match parsed_key {
        PublicKey::RSA(rsa) => (Algorithm::Rsa, rsa.key_size()),
        PublicKey::EC(point) => (Algorithm::Ec, point.key_size()),
        _ => (Algorithm::Any, 0),
    };

    Ok(CertificateDetails {
        subject: cert.subject().to_string(),
        issuer: cert.issuer().to_string(),
        algorithm,
        key_size,
        public_key_algorithm: spki.algorithm.algorithm.to_id_string(),
        signature_algorithm: cert.signature_algorithm.algorithm.to_id_string(),
    })
}

/// Parse the first certificate found in the PEM file at `path`.
pub fn load_certificate(path: &Path) -> Result<CertificateDetails> {
    let der = read_items(path)?
        .into_iter()
        .find_map(|item| match item {
            Item::X509Certificate(der) => Some(der),
            _ => None,
        })
        .ok_or_else(|| {
            Error::CertificateError(format!("No certificate found in {}", path.display()))
        })?;

    parse_certificate(&der)
}

/// Read the first private key found in the PEM file at `path`.
pub fn load_private_key(path: &Path) -> Result<PrivateKey> {
    for item in read_items(path)? {
        let key = match item {
            Item::RSAKey(der) => PrivateKey { encoding: KeyEncoding::Pkcs1, der: Zeroizing::new(der) },
            Item::ECKey(der) => PrivateKey { encoding: KeyEncoding::Sec1, der: Zeroizing::new(der) },
            Item::PKCS8Key(der) => PrivateKey { encoding: KeyEncoding::Pkcs8, der: Zeroizing::new(der) },
            _ => continue,
        };
        return Ok(key);
    }

    Err(Error::CertificateError(format!(
        "No private key found in {}",
        path.display()
    )))
}
