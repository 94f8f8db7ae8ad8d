//! ILI9341 TFT LCD panel driver.
//!
//! The driver core is generic over [`embedded-hal`](https://github.com/rust-embedded/embedded-hal)
//! traits so it can be exercised on the host; the accompanying binary wires it
//! to the ESP-IDF HAL. See [`ili9341`] for the wire protocol details.

pub mod ili9341;

pub use crate::ili9341::cmd::Cmd;
pub use crate::ili9341::driver::Ili9341;
pub use crate::ili9341::error::DriverError;
pub use crate::ili9341::flag::Flag;
pub use crate::ili9341::pins::Pins;
pub use crate::ili9341::{ColorOrder, Config, Orientation};
