//! WT32-SC01 board bring-up
//!
//! | Signal        | GPIO |
//! |---------------|------|
//! | LCD SCK       | 14   |
//! | LCD MOSI      | 13   |
//! | LCD CS        | 15   |
//! | LCD DC        | 21   |
//! | LCD RST       | 22   |
//! | LCD backlight | 23   |
//! | Touch SDA     | 18   |
//! | Touch SCL     | 19   |

use esp_hal::delay::Delay;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::peripherals::Peripherals;
use esp_hal::spi::master::{Config as SpiConfig, Spi};
use esp_hal::spi::Mode;
use esp_hal::time::Rate;
use esp_hal::Blocking;

use scrollscope_drivers::st7796::{NATIVE_HEIGHT, NATIVE_WIDTH};
use scrollscope_drivers::{Ft6336, St7796, St7796Config};

use crate::config::{SPI_FREQUENCY_MHZ, TOUCH_I2C_KHZ};

pub type Display = St7796<
    Spi<'static, Blocking>,
    Output<'static>,
    Output<'static>,
    Output<'static>,
    Delay,
>;

pub type Touch = Ft6336<I2c<'static, Blocking>>;

/// Peripherals the render loop owns
pub struct Board {
    pub display: Display,
    pub touch: Touch,
    pub backlight: Output<'static>,
}

impl Board {
    /// Claim the LCD and touch peripherals
    ///
    /// Drivers are constructed but not initialized.
    pub fn new(peripherals: Peripherals) -> Self {
        let spi = Spi::new(
            peripherals.SPI2,
            SpiConfig::default()
                .with_frequency(Rate::from_mhz(SPI_FREQUENCY_MHZ))
                .with_mode(Mode::_0),
        )
        .unwrap()
        .with_sck(peripherals.GPIO14)
        .with_mosi(peripherals.GPIO13);

        let cs = Output::new(peripherals.GPIO15, Level::High, OutputConfig::default());
        let dc = Output::new(peripherals.GPIO21, Level::Low, OutputConfig::default());
        let rst = Output::new(peripherals.GPIO22, Level::High, OutputConfig::default());
        let backlight = Output::new(peripherals.GPIO23, Level::Low, OutputConfig::default());

        let display = St7796::new(spi, cs, dc, rst, Delay::new(), St7796Config::default());

        let i2c = I2c::new(
            peripherals.I2C0,
            I2cConfig::default().with_frequency(Rate::from_khz(TOUCH_I2C_KHZ)),
        )
        .unwrap()
        .with_sda(peripherals.GPIO18)
        .with_scl(peripherals.GPIO19);

        let touch = Ft6336::new(i2c, NATIVE_WIDTH, NATIVE_HEIGHT);

        Self {
            display,
            touch,
            backlight,
        }
    }
}
