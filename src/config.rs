use camino::Utf8PathBuf;
use std::time::Duration;

/// 100 kHz test clock.
pub const DEFAULT_CLOCK_PERIOD: Duration = Duration::from_micros(10);
pub const DEFAULT_RESET_CYCLES: u32 = 10;
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Simulated clock period, only used to report simulated time.
    pub clock_period: Duration,
    /// Cycles the reset is held at the start of a sequence.
    pub reset_cycles: u32,
    /// Where Verilator builds the RTL model.
    pub artifacts_dir: Utf8PathBuf,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            clock_period: DEFAULT_CLOCK_PERIOD,
            reset_cycles: DEFAULT_RESET_CYCLES,
            artifacts_dir: Utf8PathBuf::from(DEFAULT_ARTIFACTS_DIR),
        }
    }
}

impl HarnessConfig {
    pub fn with_reset_cycles(mut self, reset_cycles: u32) -> Self {
        self.reset_cycles = reset_cycles;
        self
    }

    pub fn with_artifacts_dir(mut self, artifacts_dir: impl Into<Utf8PathBuf>) -> Self {
        self.artifacts_dir = artifacts_dir.into();
        self
    }
}
