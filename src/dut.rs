//! Pin-level access shared by the software model and the Verilated RTL.

use crate::{
    model::CounterModel,
    signals::{PinInputs, PinOutputs},
};

/// A clocked device driven through the Tiny Tapeout pins.
///
/// Writes through [`Dut::drive`] and [`Dut::set_clk`] take effect on the next
/// [`Dut::settle`]. A low-to-high clock change between two settles is a rising
/// edge; otherwise settling only refreshes the combinational outputs.
pub trait Dut {
    fn drive(&mut self, inputs: &PinInputs);
    fn set_clk(&mut self, high: bool);
    fn settle(&mut self);
    fn sample(&self) -> PinOutputs;
}

impl<D: Dut + ?Sized> Dut for &mut D {
    fn drive(&mut self, inputs: &PinInputs) {
        (**self).drive(inputs);
    }

    fn set_clk(&mut self, high: bool) {
        (**self).set_clk(high);
    }

    fn settle(&mut self) {
        (**self).settle();
    }

    fn sample(&self) -> PinOutputs {
        (**self).sample()
    }
}

/// [`CounterModel`] behind a pin interface, with inputs latched at the edge.
#[derive(Debug, Default, Clone)]
pub struct ModelDut {
    model: CounterModel,
    pending: PinInputs,
    inputs: PinInputs,
    clk: bool,
    settled_clk: bool,
}

impl ModelDut {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn model(&self) -> &CounterModel {
        &self.model
    }
}

impl Dut for ModelDut {
    fn drive(&mut self, inputs: &PinInputs) {
        self.pending = *inputs;
    }

    fn set_clk(&mut self, high: bool) {
        self.clk = high;
    }

    fn settle(&mut self) {
        self.inputs = self.pending;
        if self.clk && !self.settled_clk {
            self.model.tick(&self.inputs);
        }
        self.settled_clk = self.clk;
    }

    fn sample(&self) -> PinOutputs {
        self.model.outputs(&self.inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::{Control, OE_ALL};

    #[test]
    fn test_only_rising_edges_tick() {
        let mut dut = ModelDut::new();
        dut.drive(&PinInputs::new().with_rst_n(true));
        dut.set_clk(true);
        dut.settle();
        assert_eq!(dut.sample().uo_out, 1);

        // Holding the clock high is not another edge.
        dut.settle();
        assert_eq!(dut.sample().uo_out, 1);

        dut.set_clk(false);
        dut.settle();
        assert_eq!(dut.sample().uo_out, 1);
    }

    #[test]
    fn test_drive_applies_on_settle() {
        let mut dut = ModelDut::new();
        dut.drive(
            &PinInputs::new()
                .with_rst_n(true)
                .with_control(Control::TRI_STATE),
        );
        assert_eq!(dut.sample().uio_oe, 0);
        dut.settle();
        assert_eq!(dut.sample().uio_oe, OE_ALL);
        assert_eq!(dut.model().count(), 0);
    }
}
