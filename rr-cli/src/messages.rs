//! Console messages

use crate::config::RemoteConfig;

/// Print the ready message with what to press next
pub fn print_ready(config: &RemoteConfig) {
    println!("✓ Remote radio running on {}", config.serial.port_name);
    println!("\nNext steps:");
    println!("  Press the power button to start {}", config.player.program);
    println!("  Press Ctrl+C to quit");
}
