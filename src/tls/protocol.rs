use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A TLS/SSL protocol version.
///
/// Ordering, equality and hashing only look at `value`, the version number
/// the TLS library under test uses internally. `name` is for display.
#[derive(Debug, Clone, Copy)]
pub struct Protocol {
    pub name: &'static str,
    pub value: u8,
}

impl Protocol {
    pub const fn new(name: &'static str, value: u8) -> Self {
        Self { name, value }
    }
}

impl PartialEq for Protocol {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Protocol {}

impl PartialOrd for Protocol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Protocol {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for Protocol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// When referencing protocols, use these values.
///
/// The ordinals are hardcoded in the library under test and are not
/// expected to change.
pub struct Protocols;

impl Protocols {
    pub const TLS13: Protocol = Protocol::new("TLS1.3", 34);
    pub const TLS12: Protocol = Protocol::new("TLS1.2", 33);
    pub const TLS11: Protocol = Protocol::new("TLS1.1", 32);
    pub const TLS10: Protocol = Protocol::new("TLS1.0", 31);
    pub const SSLV3: Protocol = Protocol::new("SSLv3", 30);

    pub const ALL: &'static [Protocol] = &[
        Self::TLS13,
        Self::TLS12,
        Self::TLS11,
        Self::TLS10,
        Self::SSLV3,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_protocol_ordering() {
        assert!(Protocols::TLS13 > Protocols::TLS12);
        assert!(Protocols::TLS12 > Protocols::TLS11);
        assert!(Protocols::TLS11 > Protocols::TLS10);
        assert!(Protocols::TLS10 > Protocols::SSLV3);
        assert!(Protocols::SSLV3 <= Protocols::SSLV3);
        assert!(Protocols::TLS12 >= Protocols::TLS12);
    }

    #[test]
    fn test_protocol_equality_uses_value_only() {
        let renamed = Protocol::new("TLSv1.2", 33);
        assert_eq!(renamed, Protocols::TLS12);
        assert_ne!(Protocols::TLS12, Protocols::TLS13);

        let set: HashSet<Protocol> = [renamed, Protocols::TLS12].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_protocol_display() {
        assert_eq!(Protocols::TLS13.to_string(), "TLS1.3");
        assert_eq!(Protocols::SSLV3.to_string(), "SSLv3");
    }

    #[test]
    fn test_all_is_sorted_newest_first() {
        assert_eq!(Protocols::ALL.len(), 5);
        assert!(Protocols::ALL.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(Protocols::ALL.iter().max(), Some(&Protocols::TLS13));
    }
}
