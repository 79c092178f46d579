use super::protocol::{Protocol, Protocols};
use std::fmt;

/// A named elliptic curve for key exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Curve {
    pub name: &'static str,
    pub min_protocol: Protocol,
}

impl Curve {
    /// A curve usable from SSLv3 onwards.
    pub const fn new(name: &'static str) -> Self {
        Self::with_min_protocol(name, Protocols::SSLV3)
    }

    pub const fn with_min_protocol(name: &'static str, min_protocol: Protocol) -> Self {
        Self { name, min_protocol }
    }

    pub fn usable_with(&self, protocol: Protocol) -> bool {
        protocol >= self.min_protocol
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// When referencing curves, use these values. Don't hardcode curve names.
pub struct Curves;

impl Curves {
    pub const X25519: Curve = Curve::with_min_protocol("X25519", Protocols::TLS13);
    pub const P256: Curve = Curve::new("P-256");
    pub const P384: Curve = Curve::new("P-384");

    pub const ALL: &'static [Curve] = &[Self::X25519, Self::P256, Self::P384];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_min_protocol() {
        assert_eq!(Curves::P256.min_protocol, Protocols::SSLV3);
        assert_eq!(Curves::P384.min_protocol, Protocols::SSLV3);
        assert_eq!(Curves::X25519.min_protocol, Protocols::TLS13);
    }

    #[test]
    fn test_curve_usable_with() {
        assert!(!Curves::X25519.usable_with(Protocols::TLS12));
        assert!(Curves::X25519.usable_with(Protocols::TLS13));
        assert!(Curves::P256.usable_with(Protocols::TLS10));
    }

    #[test]
    fn test_curve_display() {
        assert_eq!(Curves::P256.to_string(), "P-256");
        assert_eq!(Curves::X25519.to_string(), "X25519");
    }
}
