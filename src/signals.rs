//! Pin-level view of the Tiny Tapeout counter.

use bitflags::bitflags;
use std::fmt;

/// Output-enable mask with every `uio` line driven.
pub const OE_ALL: u8 = 0xFF;

/// Output-enable mask with every `uio` line released.
pub const OE_NONE: u8 = 0x00;

bitflags! {
    // ui_in
    //
    // xxxx xxTL
    //        |+- Load: sample uio_in into the count on the next rising edge
    //        +-- Tri-state enable: drive the count onto uio_out, uio_oe = 0xFF
    #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
    #[must_use]
    pub struct Control: u8 {
        const LOAD = 0x01;
        const TRI_STATE = 0x02;
    }
}

impl Control {
    /// Decodes a raw `ui_in` byte. Bits 2-7 are not connected and are dropped.
    pub const fn from_ui_in(ui_in: u8) -> Self {
        Self::from_bits_truncate(ui_in)
    }

    #[inline]
    #[must_use]
    pub const fn load(self) -> bool {
        self.contains(Self::LOAD)
    }

    #[inline]
    #[must_use]
    pub const fn tri_state(self) -> bool {
        self.contains(Self::TRI_STATE)
    }
}

/// Values presented on the input pins, everything except `clk`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub struct PinInputs {
    /// Active-low reset.
    pub rst_n: bool,
    pub ena: bool,
    pub ui_in: u8,
    pub uio_in: u8,
}

impl Default for PinInputs {
    fn default() -> Self {
        Self::new()
    }
}

impl PinInputs {
    /// Power-on pin state: enabled, reset asserted, buses at zero.
    pub const fn new() -> Self {
        Self {
            rst_n: false,
            ena: true,
            ui_in: 0,
            uio_in: 0,
        }
    }

    pub const fn with_rst_n(mut self, rst_n: bool) -> Self {
        self.rst_n = rst_n;
        self
    }

    pub const fn with_ui_in(mut self, ui_in: u8) -> Self {
        self.ui_in = ui_in;
        self
    }

    pub const fn with_control(mut self, control: Control) -> Self {
        self.ui_in = control.bits();
        self
    }

    pub const fn with_uio_in(mut self, uio_in: u8) -> Self {
        self.uio_in = uio_in;
        self
    }

    #[inline]
    pub const fn control(&self) -> Control {
        Control::from_ui_in(self.ui_in)
    }

    #[inline]
    #[must_use]
    pub const fn in_reset(&self) -> bool {
        !self.rst_n
    }
}

/// Values sampled from the output pins.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub struct PinOutputs {
    pub uo_out: u8,
    pub uio_out: u8,
    pub uio_oe: u8,
}

impl PinOutputs {
    pub const fn get(&self, signal: Signal) -> u8 {
        match signal {
            Signal::UoOut => self.uo_out,
            Signal::UioOut => self.uio_out,
            Signal::UioOe => self.uio_oe,
        }
    }
}

/// Output pins that checks can refer to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Signal {
    UoOut,
    UioOut,
    UioOe,
}

impl Signal {
    pub const fn name(self) -> &'static str {
        match self {
            Signal::UoOut => "uo_out",
            Signal::UioOut => "uio_out",
            Signal::UioOe => "uio_oe",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_ignores_unused_bits() {
        let control = Control::from_ui_in(0b1111_1101);
        assert!(control.load());
        assert!(!control.tri_state());
        assert_eq!(control.bits(), 0x01);
    }

    #[test]
    fn test_pin_inputs_builders() {
        let inputs = PinInputs::new()
            .with_rst_n(true)
            .with_control(Control::LOAD | Control::TRI_STATE)
            .with_uio_in(0x42);
        assert!(!inputs.in_reset());
        assert!(inputs.ena);
        assert_eq!(inputs.ui_in, 0x03);
        assert_eq!(inputs.uio_in, 0x42);
        assert!(inputs.control().load());
        assert!(inputs.control().tri_state());
    }

    #[test]
    fn test_signal_names() {
        assert_eq!(Signal::UoOut.to_string(), "uo_out");
        assert_eq!(Signal::UioOe.to_string(), "uio_oe");
        let outputs = PinOutputs {
            uo_out: 1,
            uio_out: 2,
            uio_oe: 3,
        };
        assert_eq!(outputs.get(Signal::UioOut), 2);
    }
}
