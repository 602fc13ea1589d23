//! End-to-end verification sequence for the counter project.
//!
//! Every phase leaves the device in the state the next phase expects, so the
//! phases only make sense in the order [`run_project_sequence`] runs them.

use crate::{
    dut::Dut,
    error::CheckResult,
    harness::Harness,
    signals::{Control, OE_ALL},
};

pub const LOAD_VALUE: u8 = 0x42;
pub const OVERFLOW_VALUE: u8 = 0xFF;

pub fn run_project_sequence<D: Dut>(harness: &mut Harness<D>) -> CheckResult {
    log::info!("Start");
    reset_phase(harness);
    counting_phase(harness)?;
    load_phase(harness)?;
    tri_state_phase(harness)?;
    reset_release_phase(harness)?;
    overflow_phase(harness)?;
    log::info!(
        "Sequence passed after {} cycles ({:?} simulated)",
        harness.cycles(),
        harness.sim_time()
    );
    Ok(())
}

pub fn reset_phase<D: Dut>(harness: &mut Harness<D>) {
    log::info!("Reset");
    harness.start();
    let cycles = harness.config().reset_cycles;
    harness.reset(cycles);
}

pub fn counting_phase<D: Dut>(harness: &mut Harness<D>) -> CheckResult {
    log::info!("Test normal counting");
    harness.clock_cycles(1);
    harness.expect_count(1)?;

    harness.clock_cycles(1);
    harness.expect_count(2)
}

/// Loads 0x42, then lets it count once more.
pub fn load_phase<D: Dut>(harness: &mut Harness<D>) -> CheckResult {
    log::info!("Test loading value");
    harness.set_uio_in(LOAD_VALUE);
    harness.set_control(Control::LOAD);
    harness.clock_cycles(1);
    harness.expect_count(LOAD_VALUE)?;

    harness.set_control(Control::empty());
    harness.clock_cycles(1);
    harness.expect_count(LOAD_VALUE + 1)
}

pub fn tri_state_phase<D: Dut>(harness: &mut Harness<D>) -> CheckResult {
    log::info!("Test tri-state enable");
    harness.set_control(Control::TRI_STATE);
    harness.clock_cycles(1);
    harness.expect_count(LOAD_VALUE + 2)?;
    harness.expect_uio_oe(OE_ALL)?;
    harness.expect_uio_out(LOAD_VALUE + 2)
}

pub fn reset_release_phase<D: Dut>(harness: &mut Harness<D>) -> CheckResult {
    log::info!("Test reset");
    harness.reset(1);
    harness.expect_count(0)
}

/// Loads 0xFF and checks the next increment wraps to zero.
pub fn overflow_phase<D: Dut>(harness: &mut Harness<D>) -> CheckResult {
    log::info!("Test overflow");
    harness.set_uio_in(OVERFLOW_VALUE);
    harness.set_control(Control::LOAD);
    harness.clock_cycles(1);
    harness.expect_count(OVERFLOW_VALUE)?;

    harness.set_control(Control::empty());
    harness.clock_cycles(1);
    harness.expect_count(0)
}
