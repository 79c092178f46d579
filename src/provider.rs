use crate::certificate::Cert;
use crate::tls::{Cipher, Curve, Protocol};
use bytes::Bytes;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Client,
    Server,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Client => f.write_str("client"),
            Mode::Server => f.write_str("server"),
        }
    }
}

/// Everything a process launcher needs to start one TLS client or server.
///
/// No combination of fields is rejected here; an unsupported one shows up
/// later as a failing exit code or stderr in the launcher's `Results`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderOptions {
    pub mode: Option<Mode>,
    pub host: Option<String>,
    /// Kept as a string since it ends up on a command line.
    pub port: Option<String>,
    pub cipher: Option<Cipher>,
    pub curve: Option<Curve>,
    /// Path to a key PEM
    pub key: Option<PathBuf>,
    /// Path to a certificate PEM
    pub cert: Option<PathBuf>,
    pub use_session_ticket: bool,
    /// Accept certificates that fail verification.
    pub insecure: bool,
    pub protocol: Option<Protocol>,
    /// Sent to the peer once the handshake completes.
    pub data_to_send: Option<Bytes>,

    pub use_client_auth: bool,
    pub client_key_file: Option<PathBuf>,
    pub client_certificate_file: Option<PathBuf>,
    pub client_trust_store: Option<PathBuf>,

    /// Server side: connections to accept before exiting, including the first.
    pub reconnects_before_exit: Option<u32>,
    /// Client side: reconnect after the first connection.
    pub reconnect: bool,
    /// Client side: check the server certificate against the host name.
    pub verify_hostname: bool,
    /// SNI value the client sends.
    pub server_name: Option<String>,

    /// Passed through to the provider unchanged.
    pub extra_flags: Vec<String>,
}

impl ProviderOptions {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode: Some(mode),
            ..Self::default()
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Accepts anything printable; `with_port(443)` and `with_port("443")`
    /// store the same value.
    pub fn with_port(mut self, port: impl fmt::Display) -> Self {
        self.port = Some(port.to_string());
        self
    }

    pub fn with_cipher(mut self, cipher: Cipher) -> Self {
        self.cipher = Some(cipher);
        self
    }

    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = Some(curve);
        self
    }

    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = Some(protocol);
        self
    }

    /// Use `cert`'s certificate and key files.
    pub fn with_cert(mut self, cert: &Cert) -> Self {
        self.cert = Some(cert.cert_path());
        self.key = Some(cert.key_path());
        self
    }

    /// Enable client authentication with `cert` as the client identity.
    pub fn with_client_auth(mut self, cert: &Cert) -> Self {
        self.use_client_auth = true;
        self.client_certificate_file = Some(cert.cert_path());
        self.client_key_file = Some(cert.key_path());
        self
    }

    pub fn with_client_trust_store(mut self, path: impl Into<PathBuf>) -> Self {
        self.client_trust_store = Some(path.into());
        self
    }

    pub fn with_data_to_send(mut self, data: impl Into<Bytes>) -> Self {
        self.data_to_send = Some(data.into());
        self
    }

    pub fn with_session_ticket(mut self, enabled: bool) -> Self {
        self.use_session_ticket = enabled;
        self
    }

    pub fn with_insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    pub fn with_reconnects_before_exit(mut self, count: u32) -> Self {
        self.reconnects_before_exit = Some(count);
        self
    }

    pub fn with_reconnect(mut self, reconnect: bool) -> Self {
        self.reconnect = reconnect;
        self
    }

    pub fn with_verify_hostname(mut self, verify: bool) -> Self {
        self.verify_hostname = verify;
        self
    }

    pub fn with_server_name(mut self, server_name: impl Into<String>) -> Self {
        self.server_name = Some(server_name.into());
        self
    }

    pub fn with_extra_flag(mut self, flag: impl Into<String>) -> Self {
        self.extra_flags.push(flag.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificate::Certificates;
    use crate::tls::{Ciphers, Curves, Protocols};
    use crate::utils::data_bytes;

    #[test]
    fn test_defaults_are_absent_or_false() {
        let options = ProviderOptions::default();

        assert_eq!(options.mode, None);
        assert_eq!(options.port, None);
        assert_eq!(options.cipher, None);
        assert!(!options.use_session_ticket);
        assert!(!options.insecure);
        assert!(!options.use_client_auth);
        assert!(!options.reconnect);
        assert!(!options.verify_hostname);
        assert!(options.extra_flags.is_empty());
    }

    #[test]
    fn test_port_is_stored_as_string() {
        let options = ProviderOptions::new(Mode::Server).with_port(443);
        assert_eq!(options.port.as_deref(), Some("443"));

        let options = ProviderOptions::new(Mode::Server).with_port("443");
        assert_eq!(options.port.as_deref(), Some("443"));

        let options = ProviderOptions::new(Mode::Client).with_port(8000u16);
        assert_eq!(options.port, Some("8000".to_string()));
    }

    #[test]
    fn test_client_options() {
        let cert = Certificates::ECDSA_256;
        let options = ProviderOptions::new(Mode::Client)
            .with_host("localhost")
            .with_port(8200)
            .with_cipher(Ciphers::ECDHE_ECDSA_AES128_GCM_SHA256)
            .with_curve(Curves::P256)
            .with_protocol(Protocols::TLS12)
            .with_client_auth(&cert)
            .with_client_trust_store("../pems/ca.pem")
            .with_data_to_send(data_bytes(64))
            .with_server_name("www.example.com")
            .with_extra_flag("-tls1_2");

        assert_eq!(options.mode, Some(Mode::Client));
        assert!(options.use_client_auth);
        assert_eq!(options.client_certificate_file, Some(cert.cert_path()));
        assert_eq!(options.client_key_file, Some(cert.key_path()));
        assert_eq!(options.protocol, Some(Protocols::TLS12));
        assert_eq!(options.data_to_send.as_ref().map(|d| d.len()), Some(64));
        assert_eq!(options.extra_flags, vec!["-tls1_2".to_string()]);
    }

    #[test]
    fn test_server_options() {
        let cert = Certificates::RSA_2048_SHA256;
        let options = ProviderOptions::new(Mode::Server)
            .with_cert(&cert)
            .with_session_ticket(true)
            .with_reconnects_before_exit(6);

        assert_eq!(options.cert, Some(cert.cert_path()));
        assert_eq!(options.key, Some(cert.key_path()));
        assert!(options.use_session_ticket);
        assert_eq!(options.reconnects_before_exit, Some(6));
        assert!(!options.use_client_auth);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(Mode::Client.to_string(), "client");
        assert_eq!(Mode::Server.to_string(), "server");
    }
}
