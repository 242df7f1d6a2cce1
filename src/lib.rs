//! # pi-gpio-rs - A Rust Crate for Raspberry Pi GPIO/SPI Access
//!
//! The pi-gpio-rs crate provides a minimal, stable facade over Raspberry Pi
//! GPIO and SPI hardware. Each operation forwards its arguments to exactly
//! one primitive of the underlying host backend and returns the result
//! unchanged; the facade adds no validation, buffering, or retry logic.
//!
//! ## Features
//!
//! - Four setup variants selecting a pin numbering scheme (wiringPi, BCM,
//!   physical header position, unprivileged sys mode)
//! - Pin mode control: input, output, hardware PWM, GPCLK clock source
//! - Digital read/write, PWM duty write, analog read/write
//! - Internal pull resistor control (off, pull-down, pull-up)
//! - Optional SPI capability: channel setup and in-place full-duplex transfer
//! - Host backend behind a trait, so callers can substitute mocks in tests
//! - Support for logging and error handling
//!
//! ## Usage
//!
//! To use the pi-gpio-rs crate in your Rust project, add the following to
//! your Cargo.toml file:
//!
//! ```toml
//! [dependencies]
//! pi-gpio-rs = "1.0"
//! ```
//!
//! Then set up a handle and drive pins through it:
//!
//! ```rust,no_run
//! use pi_gpio_rs::{setup_gpio, IoError, Level};
//!
//! fn blink() -> Result<(), IoError> {
//!     let mut pi = setup_gpio()?; // BCM numbering
//!     pi.pin_mode_output(17)?;
//!     pi.digital_write(17, Level::High)?;
//!     Ok(())
//! }
//! ```

pub mod constants;
pub mod error;
pub mod gpio;
pub mod hal;
pub mod logging;
pub mod spi;

pub use crate::error::IoError;
pub use crate::logging::{init_logger, log_info};

// Core facade types
pub use gpio::{Numbering, Pi};
pub use hal::{HostIo, Level, PinMode, Pull};
pub use spi::SpiHost;

// Raspberry Pi host backend
#[cfg(feature = "raspberry-pi")]
pub use hal::raspberry_pi::RppalHost;

/// Set up a handle using legacy wiringPi pin numbering.
///
/// # Returns
/// * `Ok(Pi<RppalHost>)` - Initialized handle over the Raspberry Pi backend
/// * `Err(IoError)` - GPIO device could not be opened
#[cfg(feature = "raspberry-pi")]
pub fn setup() -> Result<Pi<RppalHost>, IoError> {
    Pi::with_host(RppalHost::new(), Numbering::WiringPi)
}

/// Set up a handle using Broadcom (BCM) GPIO numbering.
///
/// # Returns
/// * `Ok(Pi<RppalHost>)` - Initialized handle over the Raspberry Pi backend
/// * `Err(IoError)` - GPIO device could not be opened
#[cfg(feature = "raspberry-pi")]
pub fn setup_gpio() -> Result<Pi<RppalHost>, IoError> {
    Pi::with_host(RppalHost::new(), Numbering::Bcm)
}

/// Set up a handle using physical 40-pin header positions.
///
/// # Returns
/// * `Ok(Pi<RppalHost>)` - Initialized handle over the Raspberry Pi backend
/// * `Err(IoError)` - GPIO device could not be opened
#[cfg(feature = "raspberry-pi")]
pub fn setup_phys() -> Result<Pi<RppalHost>, IoError> {
    Pi::with_host(RppalHost::new(), Numbering::Physical)
}

/// Set up a handle in unprivileged "sys" mode, using BCM numbering.
///
/// The backend opens `/dev/gpiomem`, which needs no root privileges, so
/// this differs from [`setup_gpio`] only in the numbering constant it
/// passes to the backend.
///
/// # Returns
/// * `Ok(Pi<RppalHost>)` - Initialized handle over the Raspberry Pi backend
/// * `Err(IoError)` - GPIO device could not be opened
#[cfg(feature = "raspberry-pi")]
pub fn setup_sys() -> Result<Pi<RppalHost>, IoError> {
    Pi::with_host(RppalHost::new(), Numbering::Sys)
}
