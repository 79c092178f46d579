/// First byte value produced by [`data_bytes`].
pub const PAYLOAD_FIRST_BYTE: u8 = 128;

/// Number of distinct values [`data_bytes`] cycles through (128..=254).
pub const PAYLOAD_CYCLE_LEN: usize = 127;

/// Generate `n_bytes` of payload to send over a TLS connection.
///
/// The values cycle through 128..=254 and never fall in the ASCII range, so
/// interactive clients (e.g. `openssl s_client`) don't mistake the payload
/// for connected commands.
pub fn data_bytes(n_bytes: usize) -> Vec<u8> {
    (0..n_bytes)
        .map(|i| PAYLOAD_FIRST_BYTE + (i % PAYLOAD_CYCLE_LEN) as u8)
        .collect()
}

/// `str::contains` usable in const context.
pub const fn const_contains(haystack: &str, needle: &str) -> bool {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();

    if needle.len() > haystack.len() {
        return false;
    }

    let mut start = 0;
    while start + needle.len() <= haystack.len() {
        let mut matched = 0;
        while matched < needle.len() && haystack[start + matched] == needle[matched] {
            matched += 1;
        }
        if matched == needle.len() {
            return true;
        }
        start += 1;
    }

    false
}

/// The last `n` bytes of `s`, or all of `s` if it is shorter.
///
/// Falls back to the whole string when the cut would split a multi-byte
/// character; registry names are ASCII.
pub fn trailing(s: &str, n: usize) -> &str {
    let start = s.len().saturating_sub(n);
    s.get(start..).unwrap_or(s)
}
