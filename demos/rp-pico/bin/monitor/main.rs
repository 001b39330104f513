#![no_std]
#![no_main]

use core::cell::RefCell;

use critical_section::Mutex;
use embedded_hal::spi::MODE_0;
use fugit::RateExtU32;
use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::{
    Clock, I2C, Sio, Timer,
    adc::{Adc, AdcPin},
    clocks::init_clocks_and_plls,
    gpio::{FunctionI2C, FunctionSioInput, FunctionSpi, Interrupt, Pin, PullUp, bank0::Gpio5},
    pac::{self, interrupt},
    pwm::Slices,
    spi::Spi,
    watchdog::Watchdog,
};
use rtt_target::{rprintln, rtt_init_print};
use ssd1306::{I2CDisplayInterface, Ssd1306, prelude::*};

use rp_pico_demo::analog::AdcSampler;
use rp_pico_demo::buzzer::PwmTone;
use rp_pico_demo::matrix::Ws2812Matrix;
use rp_pico_demo::screen::OledScreen;
use rp_pico_demo::status_led::PwmStatusLed;
use rp_pico_demo::time::HardwareTimer;

use noise_alert::{AlertController, ModeToggle, Tuning};

/// Debounce window for the mode button, matching the default tuning
const DEBOUNCE_MICROS: u32 = 500_000;

/// Mode button input with the edge interrupt bound to it
type ButtonPin = Pin<Gpio5, FunctionSioInput, PullUp>;

/// Mode toggle shared between the main loop and the button interrupt
static MODE: ModeToggle = ModeToggle::new(DEBOUNCE_MICROS);

/// Button pin and a timer handle, handed to the interrupt during setup.
/// The timer stamps each edge for the debounce window.
static BUTTON: Mutex<RefCell<Option<(ButtonPin, Timer)>>> = Mutex::new(RefCell::new(None));

#[interrupt]
fn IO_IRQ_BANK0() {
    critical_section::with(|cs| {
        if let Some((button, timer)) = BUTTON.borrow_ref_mut(cs).as_mut() {
            if button.interrupt_status(Interrupt::EdgeLow) {
                let _ = MODE.on_edge(timer.get_counter_low());
                button.clear_interrupt(Interrupt::EdgeLow);
            }
        }
    });
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== Noise Alert Monitor ===");
    rprintln!("Starting initialization...");

    // Get peripherals
    let mut pac = pac::Peripherals::take().unwrap();

    // Set up watchdog driver
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure clocks (125 MHz)
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    rprintln!(
        "System clock configured: {} Hz",
        clocks.system_clock.freq().to_Hz()
    );

    // Set up the Single Cycle IO (for GPIO access)
    let sio = Sio::new(pac.SIO);

    // Set the pins to their default state
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    // Analog inputs: microphone on ADC2 (GPIO28), joystick vertical axis
    // on ADC0 (GPIO26)
    let adc = Adc::new(pac.ADC, &mut pac.RESETS);
    let microphone = AdcPin::new(pins.gpio28.into_floating_input()).unwrap();
    let joystick = AdcPin::new(pins.gpio26.into_floating_input()).unwrap();
    let sampler = AdcSampler::new(adc, microphone, joystick);

    rprintln!("ADC configured on GPIO28 (microphone), GPIO26 (joystick)");

    let mut pwm_slices = Slices::new(pac.PWM, &mut pac.RESETS);

    // Buzzer on GPIO10 (PWM5 A). The tone wrapper owns the whole slice so
    // it can retune the wrap value per frequency.
    pwm_slices.pwm5.channel_a.output_to(pins.gpio10);
    let tone = PwmTone::new(pwm_slices.pwm5);

    // Status LED on GPIO13 (PWM6 B), wrap 4096 to match the status range
    pwm_slices.pwm6.set_top(4_096u16);
    pwm_slices.pwm6.enable();
    let mut led_channel = pwm_slices.pwm6.channel_b;
    led_channel.output_to(pins.gpio13);
    let status_led = PwmStatusLed::new(led_channel);

    rprintln!("PWM configured on GPIO10 (buzzer), GPIO13 (status LED)");

    // Matrix data on GPIO7 (SPI0 TX) at 3 MHz; the bus needs a clock pin
    // even though the WS2812 chain never sees it
    let mosi = pins.gpio7.into_function::<FunctionSpi>();
    let sck = pins.gpio6.into_function::<FunctionSpi>();
    let spi = Spi::<_, _, _, 8>::new(pac.SPI0, (mosi, sck)).init(
        &mut pac.RESETS,
        clocks.peripheral_clock.freq(),
        3.MHz(),
        MODE_0,
    );
    let panel = Ws2812Matrix::new(spi);

    rprintln!("LED matrix configured on GPIO7");

    // OLED on I2C1: SDA GPIO14, SCL GPIO15, 400 kHz
    let sda: Pin<_, FunctionI2C, PullUp> = pins.gpio14.reconfigure();
    let scl: Pin<_, FunctionI2C, PullUp> = pins.gpio15.reconfigure();
    let i2c = I2C::i2c1(
        pac.I2C1,
        sda,
        scl,
        400.kHz(),
        &mut pac.RESETS,
        &clocks.system_clock,
    );
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().unwrap();
    let screen = OledScreen::new(display);

    rprintln!("Display configured on I2C1 (GPIO14/GPIO15)");

    // Create hardware timer; Timer is Copy, so the interrupt keeps its
    // own handle for edge timestamps
    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let clock = HardwareTimer::new(timer);

    // Mode button on GPIO5, falling edge into the shared toggle
    let button = pins.gpio5.into_pull_up_input();
    button.set_interrupt_enabled(Interrupt::EdgeLow, true);
    critical_section::with(|cs| BUTTON.borrow(cs).replace(Some((button, timer))));
    unsafe { pac::NVIC::unmask(pac::Interrupt::IO_IRQ_BANK0) };

    rprintln!("=== Hardware Ready ===");

    // Create the controller; all outputs start quiet
    let mut controller = AlertController::new(
        sampler,
        tone,
        status_led,
        panel,
        screen,
        &clock,
        &MODE,
        Tuning::default(),
    )
    .unwrap();

    loop {
        if let Some(report) = controller.poll() {
            rprintln!(
                "alert cycle done: sound {}, volume {}",
                report.sound,
                report.volume
            );
        }
    }
}
