use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use ssd1306::Ssd1306;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;

use noise_alert::{StatusFrame, StatusScreen};

/// Status display implementation for a 128x64 SSD1306 OLED
///
/// This wrapper implements the StatusScreen trait required by the
/// controller, drawing each frame into the buffered graphics layer and
/// flushing the whole buffer over the bus in one burst.
pub struct OledScreen<DI: WriteOnlyDataCommand> {
    display: Ssd1306<DI, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>,
}

impl<DI: WriteOnlyDataCommand> OledScreen<DI> {
    /// Create a new screen wrapper over an initialized display
    pub fn new(
        display: Ssd1306<DI, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>,
    ) -> Self {
        Self { display }
    }
}

// Implement the StatusScreen trait required by the controller
impl<DI: WriteOnlyDataCommand> StatusScreen for OledScreen<DI> {
    fn render(&mut self, frame: &StatusFrame) {
        self.display.clear_buffer();

        let text = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        let border = PrimitiveStyle::with_stroke(BinaryColor::On, 1);

        // A lone line sits mid-screen; a pair stacks in the upper half.
        let first_line_y = if frame.line2.is_some() { 20 } else { 30 };
        let _ = Text::with_baseline(
            frame.line1.as_str(),
            Point::new(10, first_line_y),
            text,
            Baseline::Top,
        )
        .draw(&mut self.display);

        if let Some(line2) = &frame.line2 {
            let _ = Text::with_baseline(line2.as_str(), Point::new(10, 40), text, Baseline::Top)
                .draw(&mut self.display);
        }

        let _ = Rectangle::new(Point::new(0, 0), Size::new(128, 64))
            .into_styled(border)
            .draw(&mut self.display);
        if frame.double_border {
            let _ = Rectangle::new(Point::new(1, 1), Size::new(126, 62))
                .into_styled(border)
                .draw(&mut self.display);
        }

        let _ = self.display.flush();
    }
}
