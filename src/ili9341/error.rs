//! Driver error taxonomy

use core::fmt;

/// Errors surfaced by the panel driver.
///
/// Bus/device setup failures belong to the platform layer that constructs
/// the SPI device and pins; by the time a handle exists, only these can
/// happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverError {
    /// An SPI transaction (command or data write) was rejected by the
    /// transport layer
    Transaction,
    /// The data/command or reset line could not be driven
    Pin,
    /// The requested window or pixel coordinate exceeds the panel extent
    OutOfBounds,
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::Transaction => write!(f, "SPI transaction failed"),
            DriverError::Pin => write!(f, "control pin could not be driven"),
            DriverError::OutOfBounds => write!(f, "coordinates exceed the panel extent"),
        }
    }
}

impl std::error::Error for DriverError {}
