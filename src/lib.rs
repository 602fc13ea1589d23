pub mod config;
pub mod dut;
pub mod error;
pub mod harness;
pub mod lockstep;
pub mod model;
pub mod scenario;
pub mod signals;
pub mod simulator;

pub use config::HarnessConfig;
pub use dut::{Dut, ModelDut};
pub use error::{CheckError, CheckResult};
pub use harness::Harness;
pub use lockstep::{random_stimulus, Lockstep};
pub use model::CounterModel;
pub use scenario::run_project_sequence;
pub use signals::{Control, PinInputs, PinOutputs, Signal};
pub use simulator::*;
