//! # SPI Capability
//!
//! Optional SPI surface of the facade. A backend that can drive an SPI bus
//! implements [`SpiHost`] in addition to [`HostIo`](crate::hal::HostIo); the
//! transfer methods on [`Pi`] become available through that bound. As with
//! GPIO, each method forwards to exactly one backend primitive: no speed or
//! channel range checks are added here.

use crate::error::IoError;
use crate::gpio::Pi;
use crate::hal::HostIo;

/// SPI bus operations of a host backend.
pub trait SpiHost {
    /// Open an SPI channel at the given clock speed in Hz.
    fn spi_setup(&mut self, channel: u8, speed: u32) -> Result<(), IoError>;

    /// Full-duplex transfer on a previously set up channel.
    ///
    /// `buf` is written out on MOSI and overwritten in place with the bytes
    /// received on MISO. Returns the number of bytes transferred.
    fn spi_transfer(&mut self, channel: u8, buf: &mut [u8]) -> Result<usize, IoError>;
}

impl<H: HostIo + SpiHost> Pi<H> {
    /// Open an SPI channel at the given clock speed in Hz.
    pub fn spi_setup(&mut self, channel: u8, speed: u32) -> Result<(), IoError> {
        self.host.spi_setup(channel, speed)
    }

    /// Transfer `buf` over an SPI channel, mutating it in place with the
    /// received bytes.
    pub fn spi_transfer(&mut self, channel: u8, buf: &mut [u8]) -> Result<usize, IoError> {
        self.host.spi_transfer(channel, buf)
    }
}
