use crate::ports::{AvailablePorts, WorkerId};
use crate::tls::{DEFAULT_PORT_HIGH, DEFAULT_PORT_LOW};

/// Session-wide settings for a test run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuiteConfig {
    pub port_low: u16,
    /// Exclusive upper bound of the port range.
    pub port_high: u16,
    pub worker: WorkerId,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            port_low: DEFAULT_PORT_LOW,
            port_high: DEFAULT_PORT_HIGH,
            worker: WorkerId::default(),
        }
    }
}

impl SuiteConfig {
    /// Defaults, with the worker id taken from the parallel test runner.
    pub fn from_env() -> Self {
        let worker = WorkerId::from_env();
        log::debug!("Running as worker {}", worker.0);

        Self {
            worker,
            ..Self::default()
        }
    }

    pub fn with_port_range(mut self, low: u16, high: u16) -> Self {
        self.port_low = low;
        self.port_high = high;
        self
    }

    pub fn with_worker(mut self, worker: WorkerId) -> Self {
        self.worker = worker;
        self
    }

    pub fn available_ports(&self) -> AvailablePorts {
        AvailablePorts::new(self.port_low, self.port_high, self.worker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SuiteConfig::default();
        assert_eq!(config.port_low, 8000);
        assert_eq!(config.port_high, 30000);
        assert_eq!(config.worker, WorkerId(0));
    }

    #[test]
    fn test_available_ports_uses_worker_band() {
        let ports = SuiteConfig::default()
            .with_worker(WorkerId(2))
            .available_ports();
        assert_eq!(ports.next_port().unwrap(), 8200);

        let ports = SuiteConfig::default()
            .with_port_range(20000, 20010)
            .available_ports();
        assert_eq!(ports.next_port().unwrap(), 20000);
        assert_eq!(ports.remaining(), 9);
    }
}
