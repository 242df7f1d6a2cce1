//! # GPIO/SPI Error Handling
//!
//! This module defines the IoError enum, which represents the different error
//! types that can occur in the pi-gpio-rs crate. The facade itself never
//! interprets or recovers from these; they carry whatever the host backend
//! reported.

use thiserror::Error;

/// Represents the different error types that can occur in the GPIO/SPI crate.
#[derive(Debug, Error)]
pub enum IoError {
    /// Indicates the host backend was used before initialization.
    #[error("GPIO host not initialized")]
    NotInitialized,

    /// Indicates an error reported by the underlying GPIO driver.
    #[error("GPIO error: {0}")]
    Gpio(String),

    /// Indicates an error reported by the underlying PWM driver.
    #[error("PWM error: {0}")]
    Pwm(String),

    /// Indicates an error reported by the underlying SPI driver.
    #[error("SPI error: {0}")]
    Spi(String),

    /// Indicates an SPI transfer on a channel that was never set up.
    #[error("SPI channel {0} not set up")]
    SpiChannelNotSetup(u8),

    /// Indicates a pin number with no BCM equivalent in the active scheme.
    #[error("Pin {pin} has no BCM mapping in {numbering} numbering")]
    UnmappedPin { pin: u8, numbering: String },

    /// Indicates an operation the host hardware cannot perform.
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// A catch‑all error for uncategorized cases.
    #[error("Other error: {0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IoError::UnmappedPin {
            pin: 9,
            numbering: "physical".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Pin 9 has no BCM mapping in physical numbering"
        );

        let err = IoError::SpiChannelNotSetup(1);
        assert_eq!(err.to_string(), "SPI channel 1 not set up");
    }
}
