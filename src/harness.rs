//! Clock generation and checks around a [`Dut`].

use std::time::Duration;

use crate::{
    config::HarnessConfig,
    dut::Dut,
    error::{CheckError, CheckResult},
    signals::{Control, PinInputs, PinOutputs, Signal},
};

pub struct Harness<D> {
    dut: D,
    inputs: PinInputs,
    config: HarnessConfig,
    cycle_count: u64,
}

impl<D: Dut> Harness<D> {
    pub fn new(dut: D, config: HarnessConfig) -> Self {
        Self {
            dut,
            inputs: PinInputs::new(),
            config,
            cycle_count: 0,
        }
    }

    /// Enables the device, clears both buses and asserts reset with the clock low.
    pub fn start(&mut self) {
        self.inputs = PinInputs::new();
        self.dut.set_clk(false);
        self.apply();
    }

    pub fn dut(&self) -> &D {
        &self.dut
    }

    pub fn dut_mut(&mut self) -> &mut D {
        &mut self.dut
    }

    pub fn into_dut(self) -> D {
        self.dut
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn inputs(&self) -> &PinInputs {
        &self.inputs
    }

    pub fn cycles(&self) -> u64 {
        self.cycle_count
    }

    /// Simulated time elapsed since the harness was created.
    pub fn sim_time(&self) -> Duration {
        let cycles = u32::try_from(self.cycle_count).unwrap_or(u32::MAX);
        self.config.clock_period.saturating_mul(cycles)
    }

    pub fn set_inputs(&mut self, inputs: PinInputs) {
        self.inputs = inputs;
        self.apply();
    }

    pub fn set_rst_n(&mut self, rst_n: bool) {
        self.inputs.rst_n = rst_n;
        self.apply();
    }

    pub fn set_ui_in(&mut self, ui_in: u8) {
        self.inputs.ui_in = ui_in;
        self.apply();
    }

    pub fn set_control(&mut self, control: Control) {
        self.set_ui_in(control.bits());
    }

    pub fn set_uio_in(&mut self, uio_in: u8) {
        self.inputs.uio_in = uio_in;
        self.apply();
    }

    fn apply(&mut self) {
        log::trace!("drive {:?}", self.inputs);
        self.dut.drive(&self.inputs);
        self.dut.settle();
    }

    /// Single clock period: rising edge, then falling edge.
    pub fn step(&mut self) {
        self.dut.set_clk(true);
        self.dut.settle();

        self.dut.set_clk(false);
        self.dut.settle();

        self.cycle_count += 1;
        log::debug!(
            "cycle {} @ {:?}: {:?}",
            self.cycle_count,
            self.sim_time(),
            self.dut.sample()
        );
    }

    pub fn clock_cycles(&mut self, cycles: u32) {
        for _ in 0..cycles {
            self.step();
        }
    }

    /// Holds reset for `cycles` clock periods, then releases it.
    pub fn reset(&mut self, cycles: u32) {
        self.set_rst_n(false);
        self.clock_cycles(cycles);
        self.set_rst_n(true);
    }

    pub fn outputs(&self) -> PinOutputs {
        self.dut.sample()
    }

    pub fn count(&self) -> u8 {
        self.outputs().uo_out
    }

    pub fn expect(&self, signal: Signal, expected: u8) -> CheckResult {
        let actual = self.outputs().get(signal);
        if actual == expected {
            Ok(())
        } else {
            Err(CheckError::Mismatch {
                signal,
                expected,
                actual,
                cycle: self.cycle_count,
            })
        }
    }

    pub fn expect_count(&self, expected: u8) -> CheckResult {
        self.expect(Signal::UoOut, expected)
    }

    pub fn expect_uio_out(&self, expected: u8) -> CheckResult {
        self.expect(Signal::UioOut, expected)
    }

    pub fn expect_uio_oe(&self, expected: u8) -> CheckResult {
        self.expect(Signal::UioOe, expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dut::ModelDut;

    fn harness() -> Harness<ModelDut> {
        let mut harness = Harness::new(ModelDut::new(), HarnessConfig::default());
        harness.start();
        harness
    }

    #[test]
    fn test_reset_then_count() {
        let mut harness = harness();
        harness.reset(10);
        assert_eq!(harness.cycles(), 10);
        assert_eq!(harness.count(), 0);

        harness.clock_cycles(3);
        assert_eq!(harness.count(), 3);
        assert_eq!(harness.sim_time(), Duration::from_micros(130));
    }

    #[test]
    fn test_expect_reports_mismatch() {
        let mut harness = harness();
        harness.reset(1);
        harness.step();
        let err = harness.expect_count(5).unwrap_err();
        assert_eq!(
            err,
            CheckError::Mismatch {
                signal: Signal::UoOut,
                expected: 5,
                actual: 1,
                cycle: 2,
            }
        );
    }

    #[test]
    fn test_control_change_is_combinational() {
        let mut harness = harness();
        harness.reset(1);
        harness.set_control(Control::TRI_STATE);
        assert_eq!(harness.cycles(), 1);
        assert!(harness.expect_uio_oe(0xFF).is_ok());
        assert!(harness.expect_uio_out(0).is_ok());
    }
}
