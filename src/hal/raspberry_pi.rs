//! # Raspberry Pi Host Implementation
//!
//! Host backend for Raspberry Pi boards built on the rppal crate, covering
//! GPIO pin control via `/dev/gpiomem`, hardware PWM via the sysfs PWM
//! interface, and SPI via `/dev/spidev0.x`.
//!
//! ## Supported Platforms
//!
//! - **Raspberry Pi 4**: BCM2711 SoC
//! - **Raspberry Pi 5**: BCM2712 SoC (RP1 I/O controller)
//!
//! All pin numbers at this layer are BCM GPIO numbers; numbering-scheme
//! translation happens in the facade handle before calls arrive here.
//!
//! ## Alternate functions
//!
//! PWM and clock modes select the ALT function of the pins that carry them
//! on the 40-pin header:
//!
//! ```text
//! BCM GPIO │ Function │ ALT
//! ─────────┼──────────┼─────
//! 12, 13   │ PWM0/1   │ Alt0
//! 18, 19   │ PWM0/1   │ Alt5
//! 4, 5, 6  │ GPCLK0-2 │ Alt0
//! ```
//!
//! ## Hardware Requirements
//!
//! - SPI enabled in `/boot/config.txt` (add `dtparam=spi=on`)
//! - Hardware PWM requires `dtoverlay=pwm-2chan` or equivalent

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use rppal::gpio::{Bias, Gpio, IoPin, Mode};
use rppal::pwm::{Channel, Polarity, Pwm};
use rppal::spi::{Bus, Mode as SpiMode, SlaveSelect, Spi};

use crate::constants::{PWM_FREQUENCY_HZ, PWM_RANGE};
use crate::error::IoError;
use crate::gpio::Numbering;
use crate::hal::{HostIo, Level, PinMode, Pull};
use crate::spi::SpiHost;

impl From<Level> for rppal::gpio::Level {
    fn from(level: Level) -> Self {
        match level {
            Level::Low => rppal::gpio::Level::Low,
            Level::High => rppal::gpio::Level::High,
        }
    }
}

impl From<rppal::gpio::Level> for Level {
    fn from(level: rppal::gpio::Level) -> Self {
        match level {
            rppal::gpio::Level::Low => Level::Low,
            rppal::gpio::Level::High => Level::High,
        }
    }
}

/// Map a BCM pin to its hardware PWM channel, if it has one.
fn pwm_channel(pin: u8) -> Option<Channel> {
    match pin {
        12 | 18 => Some(Channel::Pwm0),
        13 | 19 => Some(Channel::Pwm1),
        _ => None,
    }
}

/// Resolve the rppal pin mode for a requested facade mode on a given pin.
fn rppal_mode(pin: u8, mode: PinMode) -> Result<Mode, IoError> {
    match mode {
        PinMode::Input => Ok(Mode::Input),
        PinMode::Output => Ok(Mode::Output),
        PinMode::Pwm => match pin {
            12 | 13 => Ok(Mode::Alt0),
            18 | 19 => Ok(Mode::Alt5),
            _ => Err(IoError::Unsupported(format!(
                "GPIO {pin} has no hardware PWM function"
            ))),
        },
        PinMode::Clock => match pin {
            4 | 5 | 6 => Ok(Mode::Alt0),
            _ => Err(IoError::Unsupported(format!(
                "GPIO {pin} has no GPCLK function"
            ))),
        },
    }
}

/// rppal-backed host for Raspberry Pi 4 and 5.
///
/// Pins are acquired lazily on first use and kept for the lifetime of the
/// host. Acquired pins keep their state when the host is dropped, matching
/// the behavior of C GPIO libraries that poke registers directly.
pub struct RppalHost {
    /// GPIO device, opened by `init`
    gpio: Option<Gpio>,
    /// Pins acquired so far, keyed by BCM number
    pins: HashMap<u8, IoPin>,
    /// Hardware PWM channels in use, keyed by channel index
    pwm: HashMap<u8, Pwm>,
    /// SPI buses opened by `spi_setup`, indexed by chip select
    spi: [Option<Spi>; 2],
}

impl RppalHost {
    /// Create an unopened host. The facade's setup call runs `init` before
    /// any pin operation can reach it.
    pub fn new() -> Self {
        Self {
            gpio: None,
            pins: HashMap::new(),
            pwm: HashMap::new(),
            spi: [None, None],
        }
    }

    /// Fetch the pin from the cache, acquiring it in `initial` mode on
    /// first touch.
    fn pin(&mut self, pin: u8, initial: Mode) -> Result<&mut IoPin, IoError> {
        let gpio = self.gpio.as_ref().ok_or(IoError::NotInitialized)?.clone();
        match self.pins.entry(pin) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let mut io = gpio
                    .get(pin)
                    .map_err(|e| IoError::Gpio(e.to_string()))?
                    .into_io(initial);
                // pin state outlives the handle, as register-level GPIO
                // libraries leave it
                io.set_reset_on_drop(false);
                log::debug!("Acquired GPIO {pin} ({initial:?})");
                Ok(entry.insert(io))
            }
        }
    }
}

impl Default for RppalHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostIo for RppalHost {
    fn init(&mut self, numbering: Numbering) -> Result<(), IoError> {
        let gpio = Gpio::new().map_err(|e| IoError::Gpio(e.to_string()))?;
        self.gpio = Some(gpio);
        log::info!("Raspberry Pi GPIO host initialized ({numbering} numbering)");
        Ok(())
    }

    fn pin_mode(&mut self, pin: u8, mode: PinMode) -> Result<(), IoError> {
        let target = rppal_mode(pin, mode)?;
        let io = self.pin(pin, target)?;
        io.set_mode(target);
        Ok(())
    }

    fn digital_write(&mut self, pin: u8, level: Level) -> Result<(), IoError> {
        let io = self.pin(pin, Mode::Output)?;
        io.write(level.into());
        Ok(())
    }

    fn digital_read(&mut self, pin: u8) -> Result<Level, IoError> {
        let io = self.pin(pin, Mode::Input)?;
        Ok(io.read().into())
    }

    fn pwm_write(&mut self, pin: u8, value: u32) -> Result<(), IoError> {
        if self.gpio.is_none() {
            return Err(IoError::NotInitialized);
        }
        let channel = pwm_channel(pin).ok_or_else(|| {
            IoError::Unsupported(format!("GPIO {pin} has no hardware PWM function"))
        })?;
        let duty = f64::from(value.min(PWM_RANGE)) / f64::from(PWM_RANGE);
        match self.pwm.entry(channel as u8) {
            Entry::Occupied(entry) => entry
                .get()
                .set_duty_cycle(duty)
                .map_err(|e| IoError::Pwm(e.to_string())),
            Entry::Vacant(entry) => {
                let pwm =
                    Pwm::with_frequency(channel, PWM_FREQUENCY_HZ, duty, Polarity::Normal, true)
                        .map_err(|e| IoError::Pwm(e.to_string()))?;
                log::debug!("Opened PWM channel {} for GPIO {pin}", channel as u8);
                entry.insert(pwm);
                Ok(())
            }
        }
    }

    fn analog_write(&mut self, pin: u8, value: i32) -> Result<(), IoError> {
        // no DAC on the Pi itself; writes are accepted and dropped
        log::debug!("analog_write({pin}, {value}) ignored: no DAC on this host");
        Ok(())
    }

    fn analog_read(&mut self, pin: u8) -> Result<i32, IoError> {
        // no ADC on the Pi itself; reads yield 0
        log::debug!("analog_read({pin}) -> 0: no ADC on this host");
        Ok(0)
    }

    fn set_pull(&mut self, pin: u8, pull: Pull) -> Result<(), IoError> {
        let io = self.pin(pin, Mode::Input)?;
        io.set_bias(match pull {
            Pull::Off => Bias::Off,
            Pull::Down => Bias::PullDown,
            Pull::Up => Bias::PullUp,
        });
        Ok(())
    }
}

impl SpiHost for RppalHost {
    fn spi_setup(&mut self, channel: u8, speed: u32) -> Result<(), IoError> {
        // only bit 0 selects the chip select line on spidev0
        let channel = channel & 1;
        let slave = if channel == 0 {
            SlaveSelect::Ss0
        } else {
            SlaveSelect::Ss1
        };
        let spi = Spi::new(Bus::Spi0, slave, speed, SpiMode::Mode0)
            .map_err(|e| IoError::Spi(e.to_string()))?;
        log::info!("SPI channel {channel} opened at {speed} Hz (Mode 0, MSB first)");
        self.spi[channel as usize] = Some(spi);
        Ok(())
    }

    fn spi_transfer(&mut self, channel: u8, buf: &mut [u8]) -> Result<usize, IoError> {
        let channel = channel & 1;
        let spi = self.spi[channel as usize]
            .as_mut()
            .ok_or(IoError::SpiChannelNotSetup(channel))?;
        let tx = buf.to_vec();
        let transferred = spi
            .transfer(buf, &tx)
            .map_err(|e| IoError::Spi(e.to_string()))?;
        log::trace!("SPI channel {channel} transferred {transferred} bytes");
        Ok(transferred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pwm_channel_mapping() {
        assert_eq!(pwm_channel(12), Some(Channel::Pwm0));
        assert_eq!(pwm_channel(18), Some(Channel::Pwm0));
        assert_eq!(pwm_channel(13), Some(Channel::Pwm1));
        assert_eq!(pwm_channel(19), Some(Channel::Pwm1));
        assert_eq!(pwm_channel(17), None);
    }

    #[test]
    fn test_alt_function_selection() {
        assert_eq!(rppal_mode(18, PinMode::Pwm).unwrap(), Mode::Alt5);
        assert_eq!(rppal_mode(12, PinMode::Pwm).unwrap(), Mode::Alt0);
        assert_eq!(rppal_mode(4, PinMode::Clock).unwrap(), Mode::Alt0);
        assert_eq!(rppal_mode(17, PinMode::Output).unwrap(), Mode::Output);
        assert!(rppal_mode(17, PinMode::Pwm).is_err());
        assert!(rppal_mode(18, PinMode::Clock).is_err());
    }

    #[test]
    fn test_uninitialized_host_errors() {
        let mut host = RppalHost::new();
        assert!(matches!(
            host.digital_read(17),
            Err(IoError::NotInitialized)
        ));
        assert!(matches!(
            host.pwm_write(18, 512),
            Err(IoError::NotInitialized)
        ));
    }

    #[test]
    fn test_spi_transfer_requires_setup() {
        let mut host = RppalHost::new();
        let mut buf = [0u8; 4];
        assert!(matches!(
            host.spi_transfer(0, &mut buf),
            Err(IoError::SpiChannelNotSetup(0))
        ));
    }
}
