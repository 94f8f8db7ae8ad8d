//! Display interface using SPI
//!
//! Everything that reaches the panel goes through [`DisplayInterface::cmd`]
//! and [`DisplayInterface::data`]: the data/command line is set first, then a
//! single blocking SPI write carries the bytes.

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::ili9341::error::DriverError;

/// Reset line held low this long before releasing (panel power-on sequence)
const RESET_LOW_MS: u32 = 50;
/// Settle time after the reset line rises, before any command is sent
const RESET_HIGH_MS: u32 = 300;

/// The connection to the panel: SPI device plus the two control lines.
pub struct DisplayInterface<SPI, DC, RST, DELAY> {
    /// SPI device (mode 0, CS handled by the bus layer)
    spi: SPI,
    /// Data/Command Control Pin (High for data, Low for command)
    dc: DC,
    /// Pin for resetting
    rst: RST,
    /// Delay provider used by the reset and initialization timing
    pub(crate) delay: DELAY,
}

impl<SPI, DC, RST, DELAY> DisplayInterface<SPI, DC, RST, DELAY> {
    /// Bundle the peripherals; no bus traffic happens here
    pub fn new(spi: SPI, dc: DC, rst: RST, delay: DELAY) -> Self {
        DisplayInterface { spi, dc, rst, delay }
    }

    /// Hand the peripherals back, consuming the interface
    pub(crate) fn into_parts(self) -> (SPI, DC, RST, DELAY) {
        (self.spi, self.dc, self.rst, self.delay)
    }
}

impl<SPI, DC, RST, DELAY> DisplayInterface<SPI, DC, RST, DELAY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// Drive the hardware reset pulse.
    ///
    /// The panel's documented power-on sequence wants the line held low for
    /// 50 ms and a 300 ms settle after the rising edge; shortening either
    /// produces corrupted output later.
    pub(crate) fn reset(&mut self) -> Result<(), DriverError> {
        self.rst.set_low().map_err(|_| DriverError::Pin)?;
        self.delay.delay_ms(RESET_LOW_MS);
        self.rst.set_high().map_err(|_| DriverError::Pin)?;
        self.delay.delay_ms(RESET_HIGH_MS);
        Ok(())
    }

    /// Basic function for sending commands
    pub(crate) fn cmd(&mut self, command: u8) -> Result<(), DriverError> {
        // low for commands
        self.dc.set_low().map_err(|_| DriverError::Pin)?;

        match self.spi.write(&[command]) {
            Ok(()) => Ok(()),
            Err(e) => {
                log::error!("SPI write error for command 0x{:02X}: {:?}", command, e);
                Err(DriverError::Transaction)
            }
        }
    }

    /// Basic function for sending an array of u8-values of data over spi
    pub(crate) fn data(&mut self, data: &[u8]) -> Result<(), DriverError> {
        // high for data
        self.dc.set_high().map_err(|_| DriverError::Pin)?;
        self.spi.write(data).map_err(|_| DriverError::Transaction)
    }

    /// Basic function for sending a command and the data belonging to it.
    pub(crate) fn cmd_with_data(&mut self, command: u8, data: &[u8]) -> Result<(), DriverError> {
        self.cmd(command)?;
        self.data(data)
    }

    /// Stream the same two-byte pixel value `count` times.
    ///
    /// Chunked so large fills do not build a full frame buffer and do not
    /// starve the watchdog with one giant transaction.
    pub(crate) fn data_repeated(&mut self, pattern: [u8; 2], count: u32) -> Result<(), DriverError> {
        const CHUNK_PIXELS: usize = 32;

        let mut buffer = [0u8; CHUNK_PIXELS * 2];
        for pair in buffer.chunks_exact_mut(2) {
            pair.copy_from_slice(&pattern);
        }

        // high for data
        self.dc.set_high().map_err(|_| DriverError::Pin)?;

        let full_chunks = (count as usize) / CHUNK_PIXELS;
        let remainder = (count as usize) % CHUNK_PIXELS;

        for i in 0..full_chunks {
            // Allow other tasks to run and reset watchdog
            if i > 0 && i % 100 == 0 {
                std::hint::spin_loop();
            }

            self.spi
                .write(&buffer)
                .map_err(|_| DriverError::Transaction)?;
        }
        if remainder > 0 {
            self.spi
                .write(&buffer[0..remainder * 2])
                .map_err(|_| DriverError::Transaction)?;
        }

        log::debug!("Completed sending {} pixels of data", count);
        Ok(())
    }
}
