// Re-export submodules
pub mod constants;
pub mod algorithm;
pub mod protocol;
pub mod cipher;
pub mod curve;

// Re-export main types from child modules
pub use constants::*;
pub use algorithm::Algorithm;
pub use protocol::{Protocol, Protocols};
pub use cipher::{Cipher, Ciphers};
pub use curve::{Curve, Curves};
