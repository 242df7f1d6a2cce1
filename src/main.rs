use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use pi_gpio_rs::constants::SPI_SPEED_DEFAULT;
use pi_gpio_rs::{
    init_logger, log_info, setup, setup_gpio, setup_phys, setup_sys, Level, Pi, RppalHost,
};

#[derive(Parser)]
#[command(name = "pi-gpio-cli")]
#[command(about = "CLI tool for Raspberry Pi GPIO/SPI access")]
struct Cli {
    /// Pin numbering scheme
    #[arg(short, long, value_enum, default_value_t = Scheme::Bcm)]
    numbering: Scheme,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Scheme {
    Wiringpi,
    Bcm,
    Phys,
    Sys,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Input,
    Output,
    Pwm,
    Clock,
}

#[derive(Clone, Copy, ValueEnum)]
enum PullArg {
    Off,
    Down,
    Up,
}

#[derive(Subcommand)]
enum Commands {
    /// Set the electrical mode of a pin
    Mode { pin: u8, mode: ModeArg },
    /// Read the logic level of a pin
    Read { pin: u8 },
    /// Drive a pin low (0) or high (nonzero)
    Write { pin: u8, value: u8 },
    /// Configure the internal pull resistor of a pin
    Pull { pin: u8, pull: PullArg },
    /// Write a PWM duty value (0-1024) to a pin
    Pwm { pin: u8, value: u32 },
    /// Transfer hex-encoded bytes over an SPI channel and print the reply
    SpiTransfer {
        channel: u8,
        /// Clock speed in Hz
        #[arg(short, long, default_value_t = SPI_SPEED_DEFAULT)]
        speed: u32,
        /// Bytes to send, hex-encoded (e.g. "deadbeef")
        data: String,
    },
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let cli = Cli::parse();
    let mut pi: Pi<RppalHost> = match cli.numbering {
        Scheme::Wiringpi => setup()?,
        Scheme::Bcm => setup_gpio()?,
        Scheme::Phys => setup_phys()?,
        Scheme::Sys => setup_sys()?,
    };

    match cli.command {
        Commands::Mode { pin, mode } => {
            match mode {
                ModeArg::Input => pi.pin_mode_input(pin)?,
                ModeArg::Output => pi.pin_mode_output(pin)?,
                ModeArg::Pwm => pi.pin_mode_pwm(pin)?,
                ModeArg::Clock => pi.pin_mode_clock(pin)?,
            }
            log_info(&format!("Pin {pin} mode set"));
        }
        Commands::Read { pin } => {
            let level = pi.digital_read(pin)?;
            println!("{}", u8::from(level));
        }
        Commands::Write { pin, value } => {
            pi.digital_write(pin, Level::from(value))?;
            log_info(&format!("Pin {pin} driven to {value}"));
        }
        Commands::Pull { pin, pull } => {
            match pull {
                PullArg::Off => pi.pull_off(pin)?,
                PullArg::Down => pi.pull_down(pin)?,
                PullArg::Up => pi.pull_up(pin)?,
            }
            log_info(&format!("Pin {pin} pull configured"));
        }
        Commands::Pwm { pin, value } => {
            pi.pwm_write(pin, value)?;
            log_info(&format!("Pin {pin} PWM duty set to {value}"));
        }
        Commands::SpiTransfer {
            channel,
            speed,
            data,
        } => {
            let mut buf = hex::decode(&data).context("SPI data must be hex-encoded")?;
            pi.spi_setup(channel, speed)?;
            let n = pi.spi_transfer(channel, &mut buf)?;
            log_info(&format!("Transferred {n} bytes on channel {channel}"));
            println!("{}", hex::encode(&buf));
        }
    }

    Ok(())
}
