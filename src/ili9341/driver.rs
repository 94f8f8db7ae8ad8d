//! ILI9341 Panel Driver Implementation
//!
//! This module contains the main driver for the ILI9341 TFT controller. It
//! owns the display interface and provides the panel lifecycle plus the
//! drawing operations.
//!
//! ## Lifecycle
//!
//! - [`Ili9341::new`] - bundle the peripherals, drive the hardware reset
//!   pulse and play the initialization command sequence
//! - [`Ili9341::release`] - hand the peripherals back
//!
//! ## Drawing
//!
//! - [`Ili9341::set_address_window`] - select the frame-memory rectangle the
//!   next pixel data fills
//! - [`Ili9341::write_pixel`] - write one RGB565 pixel
//! - [`Ili9341::fill_window`] - flood a rectangle with one RGB565 color
//!
//! ## Critical Implementation Details
//!
//! ### Sleep-out delay
//!
//! After the sleep-out command the panel needs at least 800 ms to stabilize
//! its internal oscillator and power supply. Shortening this produces
//! corrupted output that is hard to trace back here, so the delay is fixed.
//!
//! ### Window end convention
//!
//! The address-window end coordinate is inclusive (`x + w - 1`), and the
//! bound check is strict (`x + w < width`), matching the panel's off-by-one
//! column/page end convention. A window touching the last column or row is
//! rejected as out of bounds.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::ili9341::error::DriverError;
use crate::ili9341::interface::DisplayInterface;
use crate::ili9341::{cmd::Cmd, flag::Flag, ColorOrder, Config, Orientation};

/// Settle time after the sleep-out command
const SLEEP_OUT_DELAY_MS: u32 = 800;
/// Settle time after the display-on command
const DISPLAY_ON_DELAY_MS: u32 = 10;

/// ILI9341 TFT Panel Driver
///
/// One instance per physical display; ownership of the SPI device and the
/// control pins guarantees there is never a second live handle to the same
/// panel, and that the device is released exactly once.
///
/// ## Type Parameters
///
/// - `SPI` - SPI device for communication
/// - `DC` - Data/Command output pin
/// - `RST` - Reset output pin
/// - `DELAY` - Delay provider for the reset and initialization timing
pub struct Ili9341<SPI, DC, RST, DELAY> {
    interface: DisplayInterface<SPI, DC, RST, DELAY>,
    width: u16,
    height: u16,
    orientation: Orientation,
    color_order: ColorOrder,
}

impl<SPI, DC, RST, DELAY> Ili9341<SPI, DC, RST, DELAY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// Create the driver: reset the panel and program the fixed
    /// initialization sequence.
    ///
    /// On any failure the peripherals are dropped with the partially
    /// constructed driver and no handle is returned.
    pub fn new(
        spi: SPI,
        dc: DC,
        rst: RST,
        delay: DELAY,
        config: Config,
    ) -> Result<Self, DriverError> {
        let (width, height) = config.orientation.size();
        let mut panel = Ili9341 {
            interface: DisplayInterface::new(spi, dc, rst, delay),
            width,
            height,
            orientation: config.orientation,
            color_order: config.color_order,
        };

        panel.interface.reset()?;
        panel.init()?;

        log::info!(
            "ILI9341 initialized: {}x{}, {:?}",
            panel.width,
            panel.height,
            panel.orientation
        );
        Ok(panel)
    }

    /// Program the panel's initialization registers.
    ///
    /// The order is fixed; a failing step aborts the sequence and the error
    /// is surfaced as-is, with no retry.
    fn init(&mut self) -> Result<(), DriverError> {
        // Software reset
        self.interface.cmd(Cmd::SW_RESET)?;

        // Exit sleep, then let the oscillator and power supply stabilize
        self.interface.cmd(Cmd::SLEEP_OUT)?;
        self.interface.delay.delay_ms(SLEEP_OUT_DELAY_MS);

        // 16 bits per pixel, one data transfer per pixel
        self.interface
            .cmd_with_data(Cmd::PIXEL_FORMAT_SET, &[Flag::PIXEL_FORMAT_16BPP])?;

        // Scan direction / orientation
        self.interface
            .cmd_with_data(Cmd::MEMORY_ACCESS_CONTROL, &[self.orientation.madctl()])?;

        // Gamma
        self.interface
            .cmd_with_data(Cmd::GAMMA3_CONTROL, &[Flag::GAMMA3_DEFAULT])?;

        // Display on
        self.interface.cmd(Cmd::DISPLAY_ON)?;
        self.interface.delay.delay_ms(DISPLAY_ON_DELAY_MS);

        Ok(())
    }

    /// Addressable width in pixels
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Addressable height in pixels
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Select the frame-memory rectangle subsequent pixel data will fill.
    ///
    /// Issues column-address-set, page-address-set and memory-write. Bounds
    /// are checked before any SPI traffic: a violating window returns
    /// [`DriverError::OutOfBounds`] with nothing sent.
    pub fn set_address_window(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
    ) -> Result<(), DriverError> {
        if w == 0
            || h == 0
            || u32::from(x) + u32::from(w) >= u32::from(self.width)
            || u32::from(y) + u32::from(h) >= u32::from(self.height)
        {
            return Err(DriverError::OutOfBounds);
        }

        let x_end = x + w - 1;
        let y_end = y + h - 1;

        // Window coordinates go out big-endian, high byte then low byte
        self.interface.cmd_with_data(
            Cmd::COLUMN_ADDR_SET,
            &[(x >> 8) as u8, x as u8, (x_end >> 8) as u8, x_end as u8],
        )?;
        self.interface.cmd_with_data(
            Cmd::PAGE_ADDR_SET,
            &[(y >> 8) as u8, y as u8, (y_end >> 8) as u8, y_end as u8],
        )?;
        self.interface.cmd(Cmd::RAM_WRITE)
    }

    /// Write a single RGB565 pixel.
    ///
    /// Sets a 1x1 address window, sends the two color bytes in the
    /// configured byte order, and reasserts memory-write to commit.
    pub fn write_pixel(&mut self, x: u16, y: u16, color: Rgb565) -> Result<(), DriverError> {
        self.set_address_window(x, y, 1, 1)?;
        self.interface
            .data(&self.color_order.bytes(color.into_storage()))?;
        self.interface.cmd(Cmd::RAM_WRITE)
    }

    /// Flood a rectangle with one RGB565 color.
    ///
    /// Streams `w * h` pixels into the window in chunks, then reasserts
    /// memory-write.
    pub fn fill_window(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        color: Rgb565,
    ) -> Result<(), DriverError> {
        self.set_address_window(x, y, w, h)?;
        let pattern = self.color_order.bytes(color.into_storage());
        self.interface
            .data_repeated(pattern, u32::from(w) * u32::from(h))?;
        self.interface.cmd(Cmd::RAM_WRITE)
    }

    /// Hand the peripherals back, consuming the driver.
    ///
    /// The SPI device handle is released by its own drop/ownership rules
    /// once the caller lets go of it.
    pub fn release(self) -> (SPI, DC, RST, DELAY) {
        self.interface.into_parts()
    }
}
