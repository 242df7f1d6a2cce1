//! Unit tests for the logging functionality in the `pi-gpio-rs` crate.

use pi_gpio_rs::logging::{init_logger, log_debug, log_error, log_info, log_warn};

/// Tests that the logging helpers do not panic once the logger is up.
#[test]
fn test_logging_helpers() {
    init_logger();
    log_error("SPI bus reported an error");
    log_warn("Pin left in output mode");
    log_info("GPIO handle initialized");
    log_debug("digital_write(17, High)");
}
