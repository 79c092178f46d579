use std::fmt;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Port range exhausted: no ports left below {high} (range started at {low})")]
    PortsExhausted { low: u16, high: u16 },

    #[error("Timeout: {0}")]
    Timeout(#[from] TimeoutError),

    #[error("Certificate error: {0}")]
    CertificateError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A launched command that did not finish within its allotted time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTimedOut {
    pub cmd: Vec<String>,
    pub timeout: Duration,
}

impl CommandTimedOut {
    pub fn new<I, S>(cmd: I, timeout: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cmd: cmd.into_iter().map(Into::into).collect(),
            timeout,
        }
    }
}

impl fmt::Display for CommandTimedOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Command '{:?}' timed out after {} seconds",
            self.cmd,
            self.timeout.as_secs_f64()
        )
    }
}

impl std::error::Error for CommandTimedOut {}

/// Presentation wrapper around [`CommandTimedOut`].
///
/// The rendered message is the underlying timeout message followed by the
/// command line, so a failing test log shows exactly what was run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeoutError {
    pub exception: CommandTimedOut,
}

impl TimeoutError {
    pub fn new(exception: CommandTimedOut) -> Self {
        Self { exception }
    }

    pub fn command_line(&self) -> String {
        self.exception.cmd.join(" ")
    }
}

impl From<CommandTimedOut> for TimeoutError {
    fn from(exception: CommandTimedOut) -> Self {
        Self::new(exception)
    }
}

impl fmt::Display for TimeoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.exception, self.command_line())
    }
}

impl std::error::Error for TimeoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_error_appends_command_line() {
        let inner = CommandTimedOut::new(["s2nc", "-c", "default", "localhost", "8000"], Duration::from_secs(5));
        let err = TimeoutError::from(inner);

        assert_eq!(err.command_line(), "s2nc -c default localhost 8000");
        assert_eq!(
            err.to_string(),
            "Command '[\"s2nc\", \"-c\", \"default\", \"localhost\", \"8000\"]' timed out after 5 seconds s2nc -c default localhost 8000"
        );
    }

    #[test]
    fn test_timeout_converts_into_crate_error() {
        let inner = CommandTimedOut::new(["openssl", "s_server"], Duration::from_millis(1500));
        let err: Error = TimeoutError::from(inner).into();

        assert!(matches!(err, Error::Timeout(_)));
        assert!(err.to_string().ends_with("openssl s_server"));
        assert!(err.to_string().contains("1.5 seconds"));
    }

    #[test]
    fn test_ports_exhausted_message() {
        let err = Error::PortsExhausted { low: 8000, high: 8002 };
        assert_eq!(
            err.to_string(),
            "Port range exhausted: no ports left below 8002 (range started at 8000)"
        );
    }
}
