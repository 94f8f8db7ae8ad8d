//! Pin assignments for the ILI9341 display on the demo board
//!
//! This module contains all GPIO pin assignments used in the hardware
//! configuration.

/// Pin configuration constants for the ILI9341 display
pub struct Pins;

#[allow(dead_code)]
impl Pins {
    // SPI Display pins
    /// Chip Select pin for SPI display (driven by the SPI peripheral)
    pub const CS: u8 = 4;
    /// Data/Command control pin (High for data, Low for command)
    pub const DC: u8 = 17;
    /// Reset pin for display
    pub const RST: u8 = 16;
    /// SPI Clock pin
    pub const SCK: u8 = 18;
    /// SPI Master Out Slave In
    pub const MOSI: u8 = 23;
    /// SPI Master In Slave Out (wired but unused, the panel is write-only)
    pub const MISO: u8 = 19;

    /// SPI clock in MHz. The controller accepts 10-33 MHz in practice;
    /// 26 MHz is a clean ESP32 APB divisor.
    pub const SPI_SPEED_MHZ: u32 = 26;
}
