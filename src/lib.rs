//! Support code for TLS interoperability tests.
//!
//! Tests pick protocols, ciphers, curves and certificates from the
//! registries in [`tls`] and [`certificate`], describe the process to start
//! with [`ProviderOptions`], take a port from [`AvailablePorts`], and get a
//! [`Results`] back from whatever launches the process.

pub mod error;
pub mod utils;
pub mod tls;
pub mod certificate;
pub mod ports;
pub mod results;
pub mod provider;
pub mod config;

pub use error::{CommandTimedOut, Error, Result, TimeoutError};
pub use certificate::{Cert, Certificates};
pub use tls::{Algorithm, Cipher, Ciphers, Curve, Curves, Protocol, Protocols};
pub use ports::{AvailablePorts, WorkerId};
pub use results::Results;
pub use provider::{Mode, ProviderOptions};
pub use config::SuiteConfig;
pub use utils::data_bytes;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install `env_logger`, filtered by `RUST_LOG`. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
