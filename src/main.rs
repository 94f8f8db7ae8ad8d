//! Smoke test for the ILI9341 panel driver.
//!
//! Brings the panel up over SPI2 and fills a 32x32 block at the origin with
//! red, which is enough to tell a wired-up display from a dead one.

// https://docs.esp-rs.org/esp-idf-svc/esp_idf_svc/
#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    use embedded_graphics::pixelcolor::Rgb565;
    use embedded_graphics::prelude::*;

    use esp_idf_svc::hal::delay::Delay;
    use esp_idf_svc::hal::gpio;
    use esp_idf_svc::hal::peripherals::Peripherals;
    use esp_idf_svc::hal::prelude::*;
    use esp_idf_svc::hal::spi;

    use tft_ili9341::{Config, Ili9341, Pins};

    // It is necessary to call this function once. Otherwise some patches to the runtime
    // implemented by esp-idf-sys might not link properly. See https://github.com/esp-rs/esp-idf-template/issues/71
    esp_idf_svc::sys::link_patches();

    // Bind the log crate to the ESP Logging facilities
    esp_idf_svc::log::EspLogger::initialize_default();

    let peripherals = Peripherals::take().expect("Could not take peripherals");
    let pins = peripherals.pins;

    log::info!("Configuring SPI at {} MHz, mode 0", Pins::SPI_SPEED_MHZ);
    let spi = spi::SpiDeviceDriver::new_single(
        peripherals.spi2,
        pins.gpio18,                    // SCK - Pins::SCK
        pins.gpio23,                    // MOSI - Pins::MOSI
        Option::<gpio::AnyIOPin>::None, // No MISO needed, the panel is write-only
        Some(pins.gpio4),               // CS - Pins::CS
        &spi::SpiDriverConfig::new(),
        &spi::SpiConfig::new()
            .baudrate(Pins::SPI_SPEED_MHZ.MHz().into())
            .data_mode(spi::config::MODE_0)
            .queue_size(7),
    )?;

    log::info!("Opening the panel");
    let mut panel = Ili9341::new(
        spi,
        gpio::PinDriver::output(pins.gpio17)?, // DC - Pins::DC
        gpio::PinDriver::output(pins.gpio16)?, // RST - Pins::RST
        Delay::default(),
        Config::default(),
    )?;

    log::info!("Filling a 32x32 block with red");
    panel.fill_window(0, 0, 32, 32, Rgb565::RED)?;

    // Same block again pixel by pixel, exercising the single-pixel path
    for x in 0..32 {
        for y in 0..32 {
            panel.write_pixel(x, y, Rgb565::RED)?;
        }
    }

    log::info!("Smoke test done, releasing the panel");
    let _parts = panel.release();

    Ok(())
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    eprintln!("The tft-ili9341 smoke test only runs on ESP-IDF targets.");
}
