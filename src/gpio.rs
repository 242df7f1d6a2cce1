//! # GPIO Facade
//!
//! The [`Pi`] handle returned by the setup functions in the crate root. It
//! owns the host backend and a pin numbering scheme, translates incoming pin
//! numbers to BCM numbering, and forwards every operation to exactly one
//! [`HostIo`] primitive. No validation, buffering, or status interpretation
//! happens here; whatever the backend reports is returned unchanged.

use std::fmt;

use crate::error::IoError;
use crate::hal::{HostIo, Level, PinMode, Pull};

/// Pin numbering scheme of a facade handle.
///
/// Each setup variant selects one scheme; the scheme decides how caller pin
/// numbers map to the BCM numbers the host backend understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numbering {
    /// Legacy wiringPi pin numbers (wPi column of `gpio readall`)
    WiringPi,
    /// Broadcom GPIO numbers, passed through untouched
    Bcm,
    /// Physical positions on the 40-pin header
    Physical,
    /// Unprivileged "sys" mode; BCM-numbered
    Sys,
}

impl fmt::Display for Numbering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numbering::WiringPi => write!(f, "wiringPi"),
            Numbering::Bcm => write!(f, "BCM"),
            Numbering::Physical => write!(f, "physical"),
            Numbering::Sys => write!(f, "sys"),
        }
    }
}

/// wiringPi pin number -> BCM GPIO, 40-pin header revision.
/// Entries 17..=20 belonged to the Rev. 1 P5 header and are absent here.
const WPI_TO_BCM: [Option<u8>; 32] = [
    Some(17), // wPi 0
    Some(18), // wPi 1
    Some(27), // wPi 2
    Some(22), // wPi 3
    Some(23), // wPi 4
    Some(24), // wPi 5
    Some(25), // wPi 6
    Some(4),  // wPi 7
    Some(2),  // wPi 8  (SDA.1)
    Some(3),  // wPi 9  (SCL.1)
    Some(8),  // wPi 10 (CE0)
    Some(7),  // wPi 11 (CE1)
    Some(10), // wPi 12 (MOSI)
    Some(9),  // wPi 13 (MISO)
    Some(11), // wPi 14 (SCLK)
    Some(14), // wPi 15 (TxD)
    Some(15), // wPi 16 (RxD)
    None,     // wPi 17
    None,     // wPi 18
    None,     // wPi 19
    None,     // wPi 20
    Some(5),  // wPi 21
    Some(6),  // wPi 22
    Some(13), // wPi 23
    Some(19), // wPi 24
    Some(26), // wPi 25
    Some(12), // wPi 26
    Some(16), // wPi 27
    Some(20), // wPi 28
    Some(21), // wPi 29
    Some(0),  // wPi 30 (SDA.0)
    Some(1),  // wPi 31 (SCL.0)
];

/// Physical header position -> BCM GPIO. Index 0 is unused; power and
/// ground positions map to none.
const PHYS_TO_BCM: [Option<u8>; 41] = [
    None,     // no position 0
    None,     // 1: 3.3V
    None,     // 2: 5V
    Some(2),  // 3
    None,     // 4: 5V
    Some(3),  // 5
    None,     // 6: GND
    Some(4),  // 7
    Some(14), // 8
    None,     // 9: GND
    Some(15), // 10
    Some(17), // 11
    Some(18), // 12
    Some(27), // 13
    None,     // 14: GND
    Some(22), // 15
    Some(23), // 16
    None,     // 17: 3.3V
    Some(24), // 18
    Some(10), // 19
    None,     // 20: GND
    Some(9),  // 21
    Some(25), // 22
    Some(11), // 23
    Some(8),  // 24
    None,     // 25: GND
    Some(7),  // 26
    Some(0),  // 27
    Some(1),  // 28
    Some(5),  // 29
    None,     // 30: GND
    Some(6),  // 31
    Some(12), // 32
    Some(13), // 33
    None,     // 34: GND
    Some(19), // 35
    Some(16), // 36
    Some(26), // 37
    Some(20), // 38
    None,     // 39: GND
    Some(21), // 40
];

impl Numbering {
    /// Translate a caller pin number into the BCM number the backend uses.
    ///
    /// BCM and sys schemes pass the number through without a range check;
    /// pin legality beyond the mapping tables is the backend's business.
    pub fn to_bcm(self, pin: u8) -> Result<u8, IoError> {
        let mapped = match self {
            Numbering::Bcm | Numbering::Sys => Some(pin),
            Numbering::WiringPi => WPI_TO_BCM.get(pin as usize).copied().flatten(),
            Numbering::Physical => PHYS_TO_BCM.get(pin as usize).copied().flatten(),
        };
        mapped.ok_or_else(|| IoError::UnmappedPin {
            pin,
            numbering: self.to_string(),
        })
    }
}

/// Handle over an initialized GPIO host.
///
/// Replaces the process-wide global state a C GPIO library hides behind its
/// setup call: the one-time initialization becomes an owned value threaded
/// through every subsequent operation.
pub struct Pi<H> {
    pub(crate) host: H,
    numbering: Numbering,
}

impl<H: HostIo> Pi<H> {
    /// Initialize `host` under the given numbering scheme and wrap it.
    ///
    /// The setup functions in the crate root call this with the Raspberry Pi
    /// backend; tests call it with mock hosts.
    pub fn with_host(mut host: H, numbering: Numbering) -> Result<Self, IoError> {
        host.init(numbering)?;
        Ok(Self { host, numbering })
    }

    /// The numbering scheme this handle was set up with.
    pub fn numbering(&self) -> Numbering {
        self.numbering
    }

    fn bcm(&self, pin: u8) -> Result<u8, IoError> {
        self.numbering.to_bcm(pin)
    }

    /// Configure a pin as a push-pull output.
    pub fn pin_mode_output(&mut self, pin: u8) -> Result<(), IoError> {
        let pin = self.bcm(pin)?;
        self.host.pin_mode(pin, PinMode::Output)
    }

    /// Configure a pin as a high-impedance input.
    pub fn pin_mode_input(&mut self, pin: u8) -> Result<(), IoError> {
        let pin = self.bcm(pin)?;
        self.host.pin_mode(pin, PinMode::Input)
    }

    /// Configure a pin for its hardware PWM alternate function.
    pub fn pin_mode_pwm(&mut self, pin: u8) -> Result<(), IoError> {
        let pin = self.bcm(pin)?;
        self.host.pin_mode(pin, PinMode::Pwm)
    }

    /// Configure a pin as a GPCLK clock source.
    pub fn pin_mode_clock(&mut self, pin: u8) -> Result<(), IoError> {
        let pin = self.bcm(pin)?;
        self.host.pin_mode(pin, PinMode::Clock)
    }

    /// Drive a pin to the given logic level.
    pub fn digital_write(&mut self, pin: u8, level: Level) -> Result<(), IoError> {
        let pin = self.bcm(pin)?;
        self.host.digital_write(pin, level)
    }

    /// Read the logic level of a pin.
    pub fn digital_read(&mut self, pin: u8) -> Result<Level, IoError> {
        let pin = self.bcm(pin)?;
        self.host.digital_read(pin)
    }

    /// Set the PWM duty value of a pin (0..=1024 by default).
    pub fn pwm_write(&mut self, pin: u8, value: u32) -> Result<(), IoError> {
        let pin = self.bcm(pin)?;
        self.host.pwm_write(pin, value)
    }

    /// Write an analog value to a pin.
    ///
    /// The Raspberry Pi backend has no DAC; see
    /// [`RppalHost`](crate::hal::raspberry_pi::RppalHost) for its behavior.
    pub fn analog_write(&mut self, pin: u8, value: i32) -> Result<(), IoError> {
        let pin = self.bcm(pin)?;
        self.host.analog_write(pin, value)
    }

    /// Read an analog value from a pin.
    pub fn analog_read(&mut self, pin: u8) -> Result<i32, IoError> {
        let pin = self.bcm(pin)?;
        self.host.analog_read(pin)
    }

    /// Disable the internal pull resistor of a pin.
    pub fn pull_off(&mut self, pin: u8) -> Result<(), IoError> {
        let pin = self.bcm(pin)?;
        self.host.set_pull(pin, Pull::Off)
    }

    /// Enable the internal pull-down resistor of a pin.
    pub fn pull_down(&mut self, pin: u8) -> Result<(), IoError> {
        let pin = self.bcm(pin)?;
        self.host.set_pull(pin, Pull::Down)
    }

    /// Enable the internal pull-up resistor of a pin.
    pub fn pull_up(&mut self, pin: u8) -> Result<(), IoError> {
        let pin = self.bcm(pin)?;
        self.host.set_pull(pin, Pull::Up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcm_is_identity() {
        for pin in 0..=60u8 {
            assert_eq!(Numbering::Bcm.to_bcm(pin).unwrap(), pin);
            assert_eq!(Numbering::Sys.to_bcm(pin).unwrap(), pin);
        }
    }

    #[test]
    fn test_wiringpi_table() {
        assert_eq!(Numbering::WiringPi.to_bcm(0).unwrap(), 17);
        assert_eq!(Numbering::WiringPi.to_bcm(1).unwrap(), 18);
        assert_eq!(Numbering::WiringPi.to_bcm(7).unwrap(), 4);
        assert_eq!(Numbering::WiringPi.to_bcm(12).unwrap(), 10); // MOSI
        assert_eq!(Numbering::WiringPi.to_bcm(29).unwrap(), 21);
        assert!(Numbering::WiringPi.to_bcm(17).is_err());
        assert!(Numbering::WiringPi.to_bcm(32).is_err());
    }

    #[test]
    fn test_physical_table() {
        assert_eq!(Numbering::Physical.to_bcm(11).unwrap(), 17);
        assert_eq!(Numbering::Physical.to_bcm(12).unwrap(), 18);
        assert_eq!(Numbering::Physical.to_bcm(40).unwrap(), 21);
        // power and ground positions have no GPIO
        for pos in [1u8, 2, 4, 6, 9, 14, 17, 20, 25, 30, 34, 39] {
            assert!(Numbering::Physical.to_bcm(pos).is_err(), "position {pos}");
        }
        assert!(Numbering::Physical.to_bcm(0).is_err());
        assert!(Numbering::Physical.to_bcm(41).is_err());
    }

    #[test]
    fn test_wiringpi_and_physical_agree() {
        // wPi 0 sits at physical position 11, wPi 1 at 12
        assert_eq!(
            Numbering::WiringPi.to_bcm(0).unwrap(),
            Numbering::Physical.to_bcm(11).unwrap()
        );
        assert_eq!(
            Numbering::WiringPi.to_bcm(1).unwrap(),
            Numbering::Physical.to_bcm(12).unwrap()
        );
    }

    #[test]
    fn test_unmapped_pin_error_carries_scheme() {
        let err = Numbering::Physical.to_bcm(6).unwrap_err();
        match err {
            IoError::UnmappedPin { pin, numbering } => {
                assert_eq!(pin, 6);
                assert_eq!(numbering, "physical");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
