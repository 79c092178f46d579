use super::algorithm::Algorithm;
use super::constants::DH_PARAMS_2048;
use super::protocol::{Protocol, Protocols};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A cipher suite (or named cipher preference) under test.
///
/// Two ciphers are equal when their names are equal; the remaining fields are
/// metadata used to pick compatible test parameters.
#[derive(Debug, Clone, Copy)]
pub struct Cipher {
    pub name: &'static str,
    /// Oldest protocol version the cipher can be negotiated with.
    pub min_version: Protocol,
    /// Supported by the OpenSSL 1.1.1 reference provider.
    pub openssl1_1_1: bool,
    pub fips: bool,
    /// Extra provider parameter, currently the DH parameters file.
    pub parameters: Option<&'static str>,
    pub algorithm: Algorithm,
}

impl Cipher {
    pub const fn new(name: &'static str, min_version: Protocol, openssl1_1_1: bool, fips: bool) -> Self {
        Self {
            name,
            min_version,
            openssl1_1_1,
            fips,
            parameters: None,
            algorithm: Algorithm::from_name(name),
        }
    }

    pub const fn with_parameters(self, parameters: &'static str) -> Self {
        Self {
            parameters: Some(parameters),
            ..self
        }
    }

    /// Whether this cipher can be negotiated at `protocol`.
    pub fn usable_with(&self, protocol: Protocol) -> bool {
        protocol >= self.min_version
    }
}

impl PartialEq for Cipher {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Cipher {}

impl PartialEq<str> for Cipher {
    fn eq(&self, other: &str) -> bool {
        self.name == other
    }
}

impl PartialEq<&str> for Cipher {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

impl Hash for Cipher {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// When referencing ciphers, use these values.
pub struct Ciphers;

impl Ciphers {
    pub const DHE_RSA_DES_CBC3_SHA: Cipher = Cipher::new("DHE-RSA-DES-CBC3-SHA", Protocols::SSLV3, false, false);
    pub const DHE_RSA_AES128_SHA: Cipher =
        Cipher::new("DHE-RSA-AES128-SHA", Protocols::SSLV3, true, false).with_parameters(DH_PARAMS_2048);
    pub const DHE_RSA_AES256_SHA: Cipher =
        Cipher::new("DHE-RSA-AES256-SHA", Protocols::SSLV3, true, false).with_parameters(DH_PARAMS_2048);
    pub const DHE_RSA_AES128_SHA256: Cipher =
        Cipher::new("DHE-RSA-AES128-SHA256", Protocols::TLS12, true, true).with_parameters(DH_PARAMS_2048);
    pub const DHE_RSA_AES256_SHA256: Cipher =
        Cipher::new("DHE-RSA-AES256-SHA256", Protocols::TLS12, true, true).with_parameters(DH_PARAMS_2048);
    pub const DHE_RSA_AES128_GCM_SHA256: Cipher =
        Cipher::new("DHE-RSA-AES128-GCM-SHA256", Protocols::TLS12, true, true).with_parameters(DH_PARAMS_2048);
    pub const DHE_RSA_AES256_GCM_SHA384: Cipher =
        Cipher::new("DHE-RSA-AES256-GCM-SHA384", Protocols::TLS12, true, true).with_parameters(DH_PARAMS_2048);
    pub const DHE_RSA_CHACHA20_POLY1305: Cipher =
        Cipher::new("DHE-RSA-CHACHA20-POLY1305", Protocols::TLS12, true, false).with_parameters(DH_PARAMS_2048);

    pub const AES128_SHA: Cipher = Cipher::new("AES128-SHA", Protocols::SSLV3, true, true);
    pub const AES256_SHA: Cipher = Cipher::new("AES256-SHA", Protocols::SSLV3, true, true);
    pub const AES128_SHA256: Cipher = Cipher::new("AES128-SHA256", Protocols::TLS12, true, true);
    pub const AES256_SHA256: Cipher = Cipher::new("AES256-SHA256", Protocols::TLS12, true, true);
    pub const AES128_GCM_SHA256: Cipher = Cipher::new("TLS_AES_128_GCM_SHA256", Protocols::TLS13, true, true);
    pub const AES256_GCM_SHA384: Cipher = Cipher::new("TLS_AES_256_GCM_SHA384", Protocols::TLS13, true, true);

    pub const ECDHE_ECDSA_AES128_SHA: Cipher = Cipher::new("ECDHE-ECDSA-AES128-SHA", Protocols::SSLV3, true, false);
    pub const ECDHE_ECDSA_AES256_SHA: Cipher = Cipher::new("ECDHE-ECDSA-AES256-SHA", Protocols::SSLV3, true, false);
    pub const ECDHE_ECDSA_AES128_SHA256: Cipher =
        Cipher::new("ECDHE-ECDSA-AES128-SHA256", Protocols::TLS12, true, true);
    pub const ECDHE_ECDSA_AES256_SHA384: Cipher =
        Cipher::new("ECDHE-ECDSA-AES256-SHA384", Protocols::TLS12, true, true);
    pub const ECDHE_ECDSA_AES128_GCM_SHA256: Cipher =
        Cipher::new("ECDHE-ECDSA-AES128-GCM-SHA256", Protocols::TLS12, true, true);
    pub const ECDHE_ECDSA_AES256_GCM_SHA384: Cipher =
        Cipher::new("ECDHE-ECDSA-AES256-GCM-SHA384", Protocols::TLS12, true, true);
    pub const ECDHE_ECDSA_CHACHA20_POLY1305: Cipher =
        Cipher::new("ECDHE-ECDSA-CHACHA20-POLY1305", Protocols::TLS12, true, false);

    pub const ECDHE_RSA_DES_CBC3_SHA: Cipher = Cipher::new("ECDHE-RSA-DES-CBC3-SHA", Protocols::SSLV3, false, false);
    pub const ECDHE_RSA_AES128_SHA: Cipher = Cipher::new("ECDHE-RSA-AES128-SHA", Protocols::SSLV3, true, false);
    pub const ECDHE_RSA_AES256_SHA: Cipher = Cipher::new("ECDHE-RSA-AES256-SHA", Protocols::SSLV3, true, false);
    pub const ECDHE_RSA_RC4_SHA: Cipher = Cipher::new("ECDHE-RSA-RC4-SHA", Protocols::SSLV3, false, false);
    pub const ECDHE_RSA_AES128_SHA256: Cipher = Cipher::new("ECDHE-RSA-AES128-SHA256", Protocols::TLS12, true, true);
    pub const ECDHE_RSA_AES256_SHA384: Cipher = Cipher::new("ECDHE-RSA-AES256-SHA384", Protocols::TLS12, true, true);
    pub const ECDHE_RSA_AES128_GCM_SHA256: Cipher =
        Cipher::new("ECDHE-RSA-AES128-GCM-SHA256", Protocols::TLS12, true, true);
    pub const ECDHE_RSA_AES256_GCM_SHA384: Cipher =
        Cipher::new("ECDHE-RSA-AES256-GCM-SHA384", Protocols::TLS12, true, true);
    pub const ECDHE_RSA_CHACHA20_POLY1305: Cipher =
        Cipher::new("ECDHE-RSA-CHACHA20-POLY1305", Protocols::TLS12, true, false);
    pub const CHACHA20_POLY1305_SHA256: Cipher =
        Cipher::new("TLS_CHACHA20_POLY1305_SHA256", Protocols::TLS13, true, false);

    // Named cipher preferences of the library under test, not single suites
    pub const KMS_TLS_1_0_2018_10: Cipher = Cipher::new("KMS-TLS-1-0-2018-10", Protocols::TLS10, false, false);
    pub const KMS_PQ_TLS_1_0_2019_06: Cipher = Cipher::new("KMS-PQ-TLS-1-0-2019-06", Protocols::TLS10, false, false);
    pub const KMS_PQ_TLS_1_0_2020_02: Cipher = Cipher::new("KMS-PQ-TLS-1-0-2020-02", Protocols::TLS10, false, false);
    pub const PQ_SIKE_TEST_TLS_1_0_2019_11: Cipher =
        Cipher::new("PQ-SIKE-TEST-TLS-1-0-2019-11", Protocols::TLS10, false, false);
    pub const PQ_SIKE_TEST_TLS_1_0_2020_02: Cipher =
        Cipher::new("PQ-SIKE-TEST-TLS-1-0-2020-02", Protocols::TLS10, false, false);

    pub const ALL: &'static [Cipher] = &[
        Self::DHE_RSA_DES_CBC3_SHA,
        Self::DHE_RSA_AES128_SHA,
        Self::DHE_RSA_AES256_SHA,
        Self::DHE_RSA_AES128_SHA256,
        Self::DHE_RSA_AES256_SHA256,
        Self::DHE_RSA_AES128_GCM_SHA256,
        Self::DHE_RSA_AES256_GCM_SHA384,
        Self::DHE_RSA_CHACHA20_POLY1305,
        Self::AES128_SHA,
        Self::AES256_SHA,
        Self::AES128_SHA256,
        Self::AES256_SHA256,
        Self::AES128_GCM_SHA256,
        Self::AES256_GCM_SHA384,
        Self::ECDHE_ECDSA_AES128_SHA,
        Self::ECDHE_ECDSA_AES256_SHA,
        Self::ECDHE_ECDSA_AES128_SHA256,
        Self::ECDHE_ECDSA_AES256_SHA384,
        Self::ECDHE_ECDSA_AES128_GCM_SHA256,
        Self::ECDHE_ECDSA_AES256_GCM_SHA384,
        Self::ECDHE_ECDSA_CHACHA20_POLY1305,
        Self::ECDHE_RSA_DES_CBC3_SHA,
        Self::ECDHE_RSA_AES128_SHA,
        Self::ECDHE_RSA_AES256_SHA,
        Self::ECDHE_RSA_RC4_SHA,
        Self::ECDHE_RSA_AES128_SHA256,
        Self::ECDHE_RSA_AES256_SHA384,
        Self::ECDHE_RSA_AES128_GCM_SHA256,
        Self::ECDHE_RSA_AES256_GCM_SHA384,
        Self::ECDHE_RSA_CHACHA20_POLY1305,
        Self::CHACHA20_POLY1305_SHA256,
        Self::KMS_TLS_1_0_2018_10,
        Self::KMS_PQ_TLS_1_0_2019_06,
        Self::KMS_PQ_TLS_1_0_2020_02,
        Self::PQ_SIKE_TEST_TLS_1_0_2019_11,
        Self::PQ_SIKE_TEST_TLS_1_0_2020_02,
    ];
}
