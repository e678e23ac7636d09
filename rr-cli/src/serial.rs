//! Serial port setup for the remote receiver

use crate::config::SerialConfig;
use anyhow::{Context, Result};
use serialport::SerialPort;

/// Open the remote's serial port (8N1)
pub fn open_serial_port(config: &SerialConfig) -> Result<Box<dyn SerialPort>> {
    log::info!(
        "Opening {} @ {} baud (timeout {:?})",
        config.port_name,
        config.baud_rate,
        config.timeout
    );
    serialport::new(&config.port_name, config.baud_rate)
        .data_bits(serialport::DataBits::Eight)
        .parity(serialport::Parity::None)
        .stop_bits(serialport::StopBits::One)
        .timeout(config.timeout)
        .open()
        .with_context(|| format!("Failed to open serial port {}", config.port_name))
}
