use camino::Utf8Path;
use eyre::Result;
use marlin::{
    verilator::{VerilatorRuntime, VerilatorRuntimeOptions},
    verilog::prelude::*,
};

use crate::{
    dut::Dut,
    signals::{PinInputs, PinOutputs},
};

// Testbench top, wraps rtl/tt_um_counter.v
#[verilog(src = "counter_tb.v", name = "counter_tb")]
pub struct CounterTestbench;

pub fn create_counter_runtime(artifacts: &Utf8Path) -> Result<VerilatorRuntime> {
    let include_paths = [Utf8Path::new("rtl"), Utf8Path::new(".")];
    let src_files = [
        Utf8Path::new("counter_tb.v"),
        Utf8Path::new("rtl/tt_um_counter.v"),
    ];

    log::debug!("building counter_tb into {artifacts}");
    VerilatorRuntime::new(
        artifacts,
        &src_files,
        &include_paths,
        [],
        VerilatorRuntimeOptions::default_logging(),
    )
    .map_err(|e| eyre::eyre!("Failed to create runtime: {}", e))
}

impl Dut for CounterTestbench<'_> {
    fn drive(&mut self, inputs: &PinInputs) {
        self.rst_n = u8::from(inputs.rst_n);
        self.ena = u8::from(inputs.ena);
        self.ui_in = inputs.ui_in;
        self.uio_in = inputs.uio_in;
    }

    fn set_clk(&mut self, high: bool) {
        self.clk = u8::from(high);
    }

    fn settle(&mut self) {
        self.eval();
    }

    fn sample(&self) -> PinOutputs {
        PinOutputs {
            uo_out: self.uo_out,
            uio_out: self.uio_out,
            uio_oe: self.uio_oe,
        }
    }
}
