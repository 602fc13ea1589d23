use crate::signals::Signal;

/// A check that did not hold on the device under test.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    #[error("cycle {cycle}: expected {signal}={expected:#04x}, got {actual:#04x}")]
    Mismatch {
        signal: Signal,
        expected: u8,
        actual: u8,
        cycle: u64,
    },
    #[error("cycle {cycle}: devices diverge on {signal} ({left:#04x} vs {right:#04x})")]
    Divergence {
        signal: Signal,
        left: u8,
        right: u8,
        cycle: u64,
    },
}

impl CheckError {
    pub const fn signal(&self) -> Signal {
        match self {
            CheckError::Mismatch { signal, .. } | CheckError::Divergence { signal, .. } => *signal,
        }
    }

    pub const fn cycle(&self) -> u64 {
        match self {
            CheckError::Mismatch { cycle, .. } | CheckError::Divergence { cycle, .. } => *cycle,
        }
    }
}

pub type CheckResult<T = ()> = Result<T, CheckError>;
