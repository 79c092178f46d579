// Filesystem layout

// Directory holding the test certificates and keys, relative to the
// directory the suite runs from. Always ends with a path separator.
macro_rules! test_cert_directory {
    () => {
        "../pems/"
    };
}

pub const TEST_CERT_DIRECTORY: &str = test_cert_directory!();

// Diffie-Hellman parameters used by the DHE cipher suites
pub const DH_PARAMS_2048: &str = concat!(test_cert_directory!(), "dhparams_2048.pem");

pub const CERT_FILE_SUFFIX: &str = "_cert.pem";
pub const KEY_FILE_SUFFIX: &str = "_key.pem";

// Parallel workers

// Set by the parallel test runner to "gw0", "gw1", ...
pub const WORKER_ENV_VAR: &str = "PYTEST_XDIST_WORKER";

// Width of the port band owned by each worker
pub const PORTS_PER_WORKER: u16 = 100;

// Default port range handed out to tests
pub const DEFAULT_PORT_LOW: u16 = 8000;
pub const DEFAULT_PORT_HIGH: u16 = 30000;
