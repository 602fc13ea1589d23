//! Runs two devices on the same stimulus and compares them every cycle.

use rand::Rng;

use crate::{
    dut::Dut,
    error::{CheckError, CheckResult},
    signals::{PinInputs, PinOutputs, Signal},
};

pub struct Lockstep<A, B> {
    left: A,
    right: B,
    cycle_count: u64,
}

impl<A: Dut, B: Dut> Lockstep<A, B> {
    /// Both devices start with the clock low and the power-on inputs applied.
    pub fn new(mut left: A, mut right: B) -> Self {
        let inputs = PinInputs::new();
        for dut in [&mut left as &mut dyn Dut, &mut right] {
            dut.set_clk(false);
            dut.drive(&inputs);
            dut.settle();
        }
        Self {
            left,
            right,
            cycle_count: 0,
        }
    }

    pub fn left(&self) -> &A {
        &self.left
    }

    pub fn right(&self) -> &B {
        &self.right
    }

    pub fn cycles(&self) -> u64 {
        self.cycle_count
    }

    /// Applies `inputs`, clocks both devices once and compares their outputs.
    pub fn step(&mut self, inputs: &PinInputs) -> CheckResult {
        for dut in [&mut self.left as &mut dyn Dut, &mut self.right] {
            dut.drive(inputs);
            dut.settle();
            dut.set_clk(true);
            dut.settle();
            dut.set_clk(false);
            dut.settle();
        }
        self.cycle_count += 1;
        self.compare(inputs)
    }

    pub fn run<'a, I>(&mut self, stimulus: I) -> CheckResult
    where
        I: IntoIterator<Item = &'a PinInputs>,
    {
        for inputs in stimulus {
            self.step(inputs)?;
        }
        Ok(())
    }

    fn compare(&self, inputs: &PinInputs) -> CheckResult {
        let left = self.left.sample();
        let right = self.right.sample();
        log::trace!("cycle {}: {left:?} / {right:?}", self.cycle_count);

        diff(Signal::UoOut, &left, &right, self.cycle_count)?;
        // The bidirectional bus is only defined while it is driven.
        if inputs.control().tri_state() {
            diff(Signal::UioOe, &left, &right, self.cycle_count)?;
            diff(Signal::UioOut, &left, &right, self.cycle_count)?;
        }
        Ok(())
    }
}

/// Random pin stimulus. Roughly one cycle in `reset_every` asserts reset so
/// long runs keep revisiting the reset path.
pub fn random_stimulus<R: Rng>(rng: &mut R, cycles: usize, reset_every: u32) -> Vec<PinInputs> {
    (0..cycles)
        .map(|_| PinInputs {
            rst_n: reset_every == 0 || rng.gen_ratio(reset_every - 1, reset_every),
            ena: true,
            ui_in: rng.gen(),
            uio_in: rng.gen(),
        })
        .collect()
}

fn diff(signal: Signal, left: &PinOutputs, right: &PinOutputs, cycle: u64) -> CheckResult {
    let (left, right) = (left.get(signal), right.get(signal));
    if left == right {
        Ok(())
    } else {
        Err(CheckError::Divergence {
            signal,
            left,
            right,
            cycle,
        })
    }
}
