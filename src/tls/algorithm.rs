use crate::utils::const_contains;
use std::fmt;

/// Public-key algorithm a certificate carries or a cipher suite requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Ec,
    Rsa,
    /// No constraint on the key algorithm.
    Any,
}

impl Algorithm {
    /// Classify a cipher or certificate by its name.
    ///
    /// "ECDSA" wins over "RSA", so `ECDHE-ECDSA-*` suites are EC even though
    /// neither substring check is anchored.
    pub const fn from_name(name: &str) -> Self {
        if const_contains(name, "ECDSA") {
            Algorithm::Ec
        } else if const_contains(name, "RSA") {
            Algorithm::Rsa
        } else {
            Algorithm::Any
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Ec => "EC",
            Algorithm::Rsa => "RSA",
            Algorithm::Any => "ANY",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
