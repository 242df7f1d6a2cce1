//! GPIO/SPI Facade Constants
//!
//! This module defines constants shared by the facade and the Raspberry Pi
//! host backend, following the conventions of the BCM283x/BCM2711 SoCs.

/// Logic low, as an integer digital value
pub const LOW: u8 = 0;

/// Logic high, as an integer digital value
pub const HIGH: u8 = 1;

/// Default PWM duty range (duty values are clamped to 0..=PWM_RANGE)
pub const PWM_RANGE: u32 = 1024;

/// Default hardware PWM frequency in Hz (19.2 MHz base clock / 32 / 1024)
pub const PWM_FREQUENCY_HZ: f64 = 585.94;

/// Number of chip-select lines on the primary SPI bus
pub const SPI_CHANNELS: u8 = 2;

/// Default SPI clock speed in Hz used by the CLI when none is given
pub const SPI_SPEED_DEFAULT: u32 = 1_000_000;
