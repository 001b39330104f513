use embedded_hal::spi::SpiBus;
use palette::Srgb;
use smart_leds::{RGB8, SmartLedsWrite};
use ws2812_spi::Ws2812;

use noise_alert::{IndicatorPanel, IndicatorPattern};

/// 5x5 WS2812 matrix behind an SPI-driven LED driver
///
/// This wrapper implements the IndicatorPanel trait required by the
/// controller. The matrix data line hangs off the SPI TX pin and the driver
/// encodes each WS2812 bit into the 3 MHz SPI stream, so no PIO program or
/// DMA channel is needed.
pub struct Ws2812Matrix<SPI: SpiBus<u8>> {
    driver: Ws2812<SPI>,
}

impl<SPI: SpiBus<u8>> Ws2812Matrix<SPI> {
    /// Create a new matrix driver over an SPI bus clocked at 3 MHz
    pub fn new(spi: SPI) -> Self {
        Self {
            driver: Ws2812::new(spi),
        }
    }
}

// Implement the IndicatorPanel trait required by the controller
impl<SPI: SpiBus<u8>> IndicatorPanel for Ws2812Matrix<SPI> {
    fn write(&mut self, pattern: &IndicatorPattern) {
        // Convert 0.0-1.0 float components to 8-bit channel values
        let pixels = pattern.iter().map(|cell: &Srgb| RGB8 {
            r: (cell.red * 255.0) as u8,
            g: (cell.green * 255.0) as u8,
            b: (cell.blue * 255.0) as u8,
        });
        let _ = self.driver.write(pixels);
    }
}
