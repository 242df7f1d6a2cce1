//! Integration tests for the Raspberry Pi host backend
//!
//! These tests verify that the rppal-backed host wires up correctly behind
//! the facade.
//!
//! Note: tests that touch pins require actual Raspberry Pi hardware. Run
//! with `--ignored` and set `RPI_HARDWARE_TEST=1` to enable them; everything
//! else runs anywhere.

#[cfg(feature = "raspberry-pi")]
mod raspberry_pi_tests {
    use pi_gpio_rs::{setup_gpio, setup_phys, HostIo, IoError, Level, RppalHost, SpiHost};
    use std::env;

    /// Check if hardware tests should be run
    fn should_run_hardware_tests() -> bool {
        env::var("RPI_HARDWARE_TEST").unwrap_or_default() == "1"
    }

    #[test]
    fn test_host_construction_is_lazy() {
        // new() must not open any device; only init does
        let mut host = RppalHost::new();
        assert!(matches!(
            host.digital_write(17, Level::High),
            Err(IoError::NotInitialized)
        ));
    }

    #[test]
    fn test_spi_transfer_without_setup_fails() {
        let mut host = RppalHost::default();
        let mut buf = [0xFFu8; 3];
        assert!(matches!(
            host.spi_transfer(1, &mut buf),
            Err(IoError::SpiChannelNotSetup(1))
        ));
        // channel index wraps like the spidev chip selects do
        assert!(matches!(
            host.spi_transfer(3, &mut buf),
            Err(IoError::SpiChannelNotSetup(1))
        ));
    }

    #[test]
    #[ignore = "Requires Raspberry Pi hardware"]
    fn test_setup_and_blink() {
        if !should_run_hardware_tests() {
            return;
        }

        let mut pi = setup_gpio().expect("GPIO device should open on Pi hardware");
        pi.pin_mode_output(17).unwrap();
        pi.digital_write(17, Level::High).unwrap();
        pi.digital_write(17, Level::Low).unwrap();
    }

    #[test]
    #[ignore = "Requires Raspberry Pi hardware"]
    fn test_physical_numbering_on_hardware() {
        if !should_run_hardware_tests() {
            return;
        }

        // physical position 11 is BCM 17
        let mut pi = setup_phys().expect("GPIO device should open on Pi hardware");
        pi.pin_mode_input(11).unwrap();
        pi.pull_down(11).unwrap();
        let level = pi.digital_read(11).unwrap();
        assert_eq!(level, Level::Low);
    }

    #[test]
    #[ignore = "Requires Raspberry Pi hardware with MISO-MOSI loopback"]
    fn test_spi_loopback() {
        if !should_run_hardware_tests() {
            return;
        }

        let mut pi = setup_gpio().expect("GPIO device should open on Pi hardware");
        pi.spi_setup(0, 1_000_000).unwrap();

        let mut buf = [0xDE, 0xAD, 0xBE, 0xEF];
        let n = pi.spi_transfer(0, &mut buf).unwrap();
        assert_eq!(n, 4);
        // with MISO wired to MOSI the device echoes what was sent
        assert_eq!(buf, [0xDE, 0xAD, 0xBE, 0xEF]);
    }
}
