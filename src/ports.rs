use crate::error::{Error, Result};
use crate::tls::{PORTS_PER_WORKER, WORKER_ENV_VAR};
use regex::Regex;
use std::ops::Range;
use std::sync::{LazyLock, Mutex, PoisonError};

static WORKER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"gw(\d+)").expect("worker pattern is a valid regex"));

/// Index of a parallel test worker.
///
/// Each worker owns a band of [`PORTS_PER_WORKER`] ports starting at
/// `low + id * PORTS_PER_WORKER`, so workers never hand out the same port.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkerId(pub u32);

impl WorkerId {
    /// Parse a runner-provided worker name such as `gw3`.
    ///
    /// The first `gw<digits>` match anywhere in the string is used. Anything
    /// else is worker 0.
    pub fn parse(worker: &str) -> Self {
        let Some(digits) = WORKER_PATTERN.captures(worker).and_then(|caps| caps.get(1)) else {
            log::debug!("No worker id in {:?}, using worker 0", worker);
            return Self(0);
        };

        match digits.as_str().parse::<u32>() {
            Ok(id) => {
                log::debug!("Parsed worker id {} from {:?}", id, worker);
                Self(id)
            }
            Err(e) => {
                log::warn!("Ignoring unusable worker id {:?}: {}", worker, e);
                Self(0)
            }
        }
    }

    /// Read the worker id from the parallel test runner's environment.
    pub fn from_env() -> Self {
        match std::env::var(WORKER_ENV_VAR) {
            Ok(worker) => Self::parse(&worker),
            Err(_) => Self(0),
        }
    }

    /// First port of this worker's band above `low`.
    pub fn band_start(&self, low: u16) -> u32 {
        u32::from(low).saturating_add(self.0.saturating_mul(u32::from(PORTS_PER_WORKER)))
    }
}

/// Hands out unique port numbers to tests running in parallel.
///
/// `next_port` is safe to call from any number of threads; every call gets a
/// distinct port, issued in increasing order. The sequence is never reset,
/// and running past `high` is an error rather than a wraparound.
#[derive(Debug)]
pub struct AvailablePorts {
    low: u16,
    high: u16,
    ports: Mutex<Range<u32>>,
}

impl AvailablePorts {
    /// `high` is exclusive. Callers running N workers need
    /// `high - low >= 100 * N` to keep the bands disjoint.
    pub fn new(low: u16, high: u16, worker: WorkerId) -> Self {
        let start = worker.band_start(low);
        log::debug!("Worker {} allocating ports from {} below {}", worker.0, start, high);

        Self {
            low,
            high,
            ports: Mutex::new(start..u32::from(high)),
        }
    }

    /// Allocator for the worker named in the environment.
    pub fn from_env(low: u16, high: u16) -> Self {
        Self::new(low, high, WorkerId::from_env())
    }

    pub fn next_port(&self) -> Result<u16> {
        // The range is only advanced inside the lock, so a poisoned lock
        // still holds a consistent counter.
        let mut ports = self.ports.lock().unwrap_or_else(PoisonError::into_inner);

        let next = ports.next().and_then(|port| u16::try_from(port).ok());
        match next {
            Some(port) => {
                log::debug!("Allocated port {}", port);
                Ok(port)
            }
            None => {
                log::warn!("Port range {}..{} exhausted", self.low, self.high);
                Err(Error::PortsExhausted {
                    low: self.low,
                    high: self.high,
                })
            }
        }
    }

    /// Ports left before `high`.
    pub fn remaining(&self) -> usize {
        self.ports.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Iterator for &AvailablePorts {
    type Item = u16;

    /// Stops at exhaustion; use [`AvailablePorts::next_port`] to see the error.
    fn next(&mut self) -> Option<u16> {
        self.next_port().ok()
    }
}
