//! ILI9341 TFT LCD Driver
//!
//! Drives the ILI9341 controller found on common 2.4"/2.8" 240x320 SPI
//! displays. The controller is write-only here: a data/command GPIO selects
//! whether the next SPI byte is an opcode or a parameter, and a reset GPIO
//! drives the documented power-on pulse.
//!
//! This driver is loosely modeled after the
//! [ili9341-rs](https://github.com/yuri91/ili9341-rs) crate but built for my
//! needs.
//!
//! ### Usage
//!
//! 1. configure an SPI device (mode 0, CS handled by the bus layer) and two
//!    output pins for data/command and reset,
//! 1. construct the driver with [`driver::Ili9341::new`], which performs the
//!    hardware reset and plays the panel's initialization sequence,
//! 1. draw with [`driver::Ili9341::write_pixel`] or
//!    [`driver::Ili9341::fill_window`], both in RGB565.

pub mod driver;
pub mod error;
pub mod interface;

pub mod cmd;
pub mod flag;
pub mod pins;

/// Panel width in portrait orientation, pixels
pub const PORTRAIT_WIDTH: u16 = 240;

/// Panel height in portrait orientation, pixels
pub const PORTRAIT_HEIGHT: u16 = 320;

/// Scan direction of the panel, which also decides the addressable
/// width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// 240x320, connector at the bottom
    #[default]
    Portrait,
    /// 240x320, connector at the top
    PortraitFlipped,
    /// 320x240, connector on the right
    Landscape,
    /// 320x240, connector on the left
    LandscapeFlipped,
}

impl Orientation {
    /// Addressable (width, height) for this orientation
    pub const fn size(self) -> (u16, u16) {
        match self {
            Orientation::Portrait | Orientation::PortraitFlipped => {
                (PORTRAIT_WIDTH, PORTRAIT_HEIGHT)
            }
            Orientation::Landscape | Orientation::LandscapeFlipped => {
                (PORTRAIT_HEIGHT, PORTRAIT_WIDTH)
            }
        }
    }

    /// Memory-access-control parameter byte for this orientation
    pub const fn madctl(self) -> u8 {
        match self {
            Orientation::Portrait => flag::Flag::MADCTL_PORTRAIT,
            Orientation::PortraitFlipped => flag::Flag::MADCTL_PORTRAIT_FLIPPED,
            Orientation::Landscape => flag::Flag::MADCTL_LANDSCAPE,
            Orientation::LandscapeFlipped => flag::Flag::MADCTL_LANDSCAPE_FLIPPED,
        }
    }
}

/// Byte order of the two RGB565 bytes on the wire.
///
/// The controller documents high-byte-first, but boards exist that are wired
/// through byte-swapping level shifters, so both orders are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorOrder {
    /// High byte first (the controller's documented convention)
    #[default]
    BigEndian,
    /// Low byte first
    LittleEndian,
}

impl ColorOrder {
    /// Split a raw RGB565 value into its on-wire byte pair
    pub const fn bytes(self, raw: u16) -> [u8; 2] {
        match self {
            ColorOrder::BigEndian => raw.to_be_bytes(),
            ColorOrder::LittleEndian => raw.to_le_bytes(),
        }
    }
}

/// Open-time panel configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Scan direction, decides width/height
    pub orientation: Orientation,
    /// Byte order of pixel data on the wire
    pub color_order: ColorOrder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_decides_dimensions() {
        assert_eq!(Orientation::Portrait.size(), (240, 320));
        assert_eq!(Orientation::PortraitFlipped.size(), (240, 320));
        assert_eq!(Orientation::Landscape.size(), (320, 240));
        assert_eq!(Orientation::LandscapeFlipped.size(), (320, 240));
    }

    #[test]
    fn madctl_bytes_match_panel_conventions() {
        assert_eq!(Orientation::Portrait.madctl(), 0x48);
        assert_eq!(Orientation::Landscape.madctl(), 0x28);
        assert_eq!(Orientation::PortraitFlipped.madctl(), 0x88);
        assert_eq!(Orientation::LandscapeFlipped.madctl(), 0xE8);
    }

    #[test]
    fn color_order_splits_red() {
        assert_eq!(ColorOrder::BigEndian.bytes(0xF800), [0xF8, 0x00]);
        assert_eq!(ColorOrder::LittleEndian.bytes(0xF800), [0x00, 0xF8]);
    }
}
