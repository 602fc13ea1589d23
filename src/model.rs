//! Cycle-accurate reference model of the counter.

use crate::signals::{PinInputs, PinOutputs, OE_ALL, OE_NONE};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[must_use]
pub struct CounterModel {
    count: u8,
}

impl CounterModel {
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    #[inline]
    #[must_use]
    pub const fn count(&self) -> u8 {
        self.count
    }

    /// Next count for the given inputs. Reset wins over load, load wins over increment.
    #[must_use]
    pub const fn next_count(&self, inputs: &PinInputs) -> u8 {
        if inputs.in_reset() {
            0
        } else if inputs.control().load() {
            inputs.uio_in
        } else {
            self.count.wrapping_add(1)
        }
    }

    /// Rising clock edge.
    pub fn tick(&mut self, inputs: &PinInputs) {
        self.count = self.next_count(inputs);
    }

    /// Combinational outputs for the current count and inputs.
    pub const fn outputs(&self, inputs: &PinInputs) -> PinOutputs {
        if inputs.control().tri_state() {
            PinOutputs {
                uo_out: self.count,
                uio_out: self.count,
                uio_oe: OE_ALL,
            }
        } else {
            PinOutputs {
                uo_out: self.count,
                uio_out: 0,
                uio_oe: OE_NONE,
            }
        }
    }
}
