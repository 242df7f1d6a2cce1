//! # Host I/O Abstraction Layer
//!
//! This module defines the host traits the facade forwards to, together with
//! the pin-level types shared by every backend. The facade performs no logic
//! of its own: each public operation maps onto exactly one trait call, so a
//! backend (real or mock) sees the caller's arguments untouched.

use crate::error::IoError;
use crate::gpio::Numbering;

/// Electrical mode of a GPIO pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    /// High-impedance input
    Input,
    /// Push-pull output
    Output,
    /// Hardware PWM alternate function
    Pwm,
    /// GPCLK alternate function
    Clock,
}

/// Logic level of a digital pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

impl From<u8> for Level {
    /// Any nonzero value reads as high, matching the integer convention
    /// of C GPIO libraries.
    fn from(value: u8) -> Self {
        if value == 0 {
            Level::Low
        } else {
            Level::High
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        match level {
            Level::Low => 0,
            Level::High => 1,
        }
    }
}

/// Internal pull resistor state of an input pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pull {
    Off,
    Down,
    Up,
}

/// Host I/O trait standing in for the underlying GPIO library.
///
/// Pin numbers reaching this trait are always BCM-numbered; scheme
/// translation happens in the [`Pi`](crate::gpio::Pi) handle before the
/// forwarding call.
pub trait HostIo {
    /// Open the host's GPIO device. Called exactly once per handle, by
    /// whichever setup variant created it.
    fn init(&mut self, numbering: Numbering) -> Result<(), IoError>;

    /// Change the electrical mode of a pin
    fn pin_mode(&mut self, pin: u8, mode: PinMode) -> Result<(), IoError>;

    /// Drive a pin to a logic level
    fn digital_write(&mut self, pin: u8, level: Level) -> Result<(), IoError>;

    /// Read the logic level of a pin
    fn digital_read(&mut self, pin: u8) -> Result<Level, IoError>;

    /// Set the PWM duty value of a pin
    fn pwm_write(&mut self, pin: u8, value: u32) -> Result<(), IoError>;

    /// Write an analog value to a pin (DAC hardware permitting)
    fn analog_write(&mut self, pin: u8, value: i32) -> Result<(), IoError>;

    /// Read an analog value from a pin (ADC hardware permitting)
    fn analog_read(&mut self, pin: u8) -> Result<i32, IoError>;

    /// Configure the internal pull resistor of a pin
    fn set_pull(&mut self, pin: u8, pull: Pull) -> Result<(), IoError>;
}

// Platform implementations
#[cfg(feature = "raspberry-pi")]
pub mod raspberry_pi;

// Re-export platform implementations for convenience
#[cfg(feature = "raspberry-pi")]
pub use raspberry_pi::RppalHost;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_integer() {
        assert_eq!(Level::from(0u8), Level::Low);
        assert_eq!(Level::from(1u8), Level::High);
        assert_eq!(Level::from(0xFFu8), Level::High);
    }

    #[test]
    fn test_level_to_integer() {
        assert_eq!(u8::from(Level::Low), 0);
        assert_eq!(u8::from(Level::High), 1);
    }
}
