use crate::error::{Error, TimeoutError};
use bytes::Bytes;
use std::fmt;
use std::process::Output;

/// What a managed client or server process left behind.
///
/// Built by the process launcher once the process exits or times out, then
/// only read by the test.
#[derive(Debug)]
pub struct Results {
    pub stdout: Bytes,
    pub stderr: Bytes,
    /// `None` when the process was killed by a signal or never exited.
    pub exit_code: Option<i32>,
    /// Any error raised while running the process.
    pub exception: Option<Error>,
}

impl Results {
    pub fn new(
        stdout: impl Into<Bytes>,
        stderr: impl Into<Bytes>,
        exit_code: Option<i32>,
        exception: Option<Error>,
    ) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit_code,
            exception,
        }
    }

    pub fn from_output(output: Output) -> Self {
        Self::new(output.stdout, output.stderr, output.status.code(), None)
    }

    /// A process that had to be stopped after its timeout. Whatever output
    /// was collected before the kill is kept.
    pub fn timed_out(timeout: TimeoutError, stdout: impl Into<Bytes>, stderr: impl Into<Bytes>) -> Self {
        Self::new(stdout, stderr, None, Some(Error::Timeout(timeout)))
    }

    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0) && self.exception.is_none()
    }

    pub fn stdout_contains(&self, needle: &[u8]) -> bool {
        contains(&self.stdout, needle)
    }

    pub fn stderr_contains(&self, needle: &[u8]) -> bool {
        contains(&self.stderr, needle)
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|window| window == needle)
}

impl fmt::Display for Results {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stdout: {}", String::from_utf8_lossy(&self.stdout))?;
        writeln!(f, "Stderr: {}", String::from_utf8_lossy(&self.stderr))?;
        match self.exit_code {
            Some(code) => writeln!(f, "Exit code: {}", code)?,
            None => writeln!(f, "Exit code: None")?,
        }
        match &self.exception {
            Some(e) => write!(f, "Exception: {}", e),
            None => write!(f, "Exception: None"),
        }
    }
}
