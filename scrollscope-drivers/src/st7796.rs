//! ST7796S TFT Display Driver
//!
//! Driver for 320x480 ST7796S panels over a 4-wire SPI bus (SCK, MOSI, CS,
//! D/C) in 16-bit RGB565 mode.
//!
//! Chip select is driven by the driver rather than an `SpiDevice`, so a
//! batch keeps the panel selected for a whole frame: the address window
//! and pixel data for hundreds of single-pixel writes go out in one
//! transaction.

use embedded_graphics_core::pixelcolor::{IntoStorage, Rgb565};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;
use scrollscope_display::{DisplayError, Orientation, PixelDisplay};

/// Panel dimensions in the native (portrait) orientation
pub const NATIVE_WIDTH: u16 = 320;
pub const NATIVE_HEIGHT: u16 = 480;

/// Pixels per SPI write when streaming a run
const CHUNK_PIXELS: usize = 64;

/// ST7796S commands
#[allow(dead_code)]
mod cmd {
    pub const SWRESET: u8 = 0x01;
    pub const SLPOUT: u8 = 0x11;
    pub const INVOFF: u8 = 0x20;
    pub const INVON: u8 = 0x21;
    pub const DISPOFF: u8 = 0x28;
    pub const DISPON: u8 = 0x29;
    pub const CASET: u8 = 0x2A;
    pub const RASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const MADCTL: u8 = 0x36;
    pub const COLMOD: u8 = 0x3A;
    pub const DIC: u8 = 0xB4;
    pub const DFC: u8 = 0xB6;
    pub const PWR2: u8 = 0xC1;
    pub const PWR3: u8 = 0xC2;
    pub const VCMPCTL: u8 = 0xC5;
    pub const PGC: u8 = 0xE0;
    pub const NGC: u8 = 0xE1;
    pub const DOCA: u8 = 0xE8;
    pub const CSCON: u8 = 0xF0;
}

/// MADCTL bits
mod madctl {
    pub const MY: u8 = 0x80;
    pub const MX: u8 = 0x40;
    pub const MV: u8 = 0x20;
    pub const BGR: u8 = 0x08;
}

/// 16 bits per pixel
const COLMOD_RGB565: u8 = 0x55;

/// Delay after reset, sleep-out and power setup
const SETTLE_MS: u32 = 120;

/// Panel options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct St7796Config {
    /// Panel wired with blue and red swapped
    pub bgr: bool,
    /// IPS panels need inverted colors
    pub invert_colors: bool,
    /// Orientation applied at init
    pub orientation: Orientation,
}

impl Default for St7796Config {
    fn default() -> Self {
        Self {
            bgr: true,
            invert_colors: false,
            orientation: Orientation::Portrait,
        }
    }
}

/// ST7796S SPI driver
pub struct St7796<SPI, CS, DC, RST, DELAY> {
    spi: SPI,
    cs: CS,
    dc: DC,
    rst: RST,
    delay: DELAY,
    config: St7796Config,
    orientation: Orientation,
    /// Open batches; CS is asserted while non-zero
    batch_depth: u8,
    initialized: bool,
}

impl<SPI, CS, DC, RST, DELAY> St7796<SPI, CS, DC, RST, DELAY>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new ST7796S driver
    pub fn new(spi: SPI, cs: CS, dc: DC, rst: RST, delay: DELAY, config: St7796Config) -> Self {
        Self {
            spi,
            cs,
            dc,
            rst,
            delay,
            config,
            orientation: config.orientation,
            batch_depth: 0,
            initialized: false,
        }
    }

    /// Release the bus and pins
    pub fn release(self) -> (SPI, CS, DC, RST, DELAY) {
        (self.spi, self.cs, self.dc, self.rst, self.delay)
    }

    /// Pulse the reset line
    fn hardware_reset(&mut self) -> Result<(), DisplayError> {
        self.rst.set_high().map_err(|_| DisplayError::Communication)?;
        self.delay.delay_ms(1);
        self.rst.set_low().map_err(|_| DisplayError::Communication)?;
        self.delay.delay_ms(10);
        self.rst.set_high().map_err(|_| DisplayError::Communication)?;
        self.delay.delay_ms(SETTLE_MS);
        Ok(())
    }

    /// Send a command byte followed by its parameters
    fn command(&mut self, command: u8, params: &[u8]) -> Result<(), DisplayError> {
        self.dc.set_low().map_err(|_| DisplayError::Communication)?;
        self.spi
            .write(&[command])
            .map_err(|_| DisplayError::Communication)?;

        if !params.is_empty() {
            self.data(params)?;
        }
        Ok(())
    }

    /// Send data bytes
    fn data(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        self.dc.set_high().map_err(|_| DisplayError::Communication)?;
        self.spi.write(bytes).map_err(|_| DisplayError::Communication)
    }

    /// Run `f` inside a batch, closing it even if `f` fails
    fn transaction<F>(&mut self, f: F) -> Result<(), DisplayError>
    where
        F: FnOnce(&mut Self) -> Result<(), DisplayError>,
    {
        self.begin_batch()?;
        let result = f(self);
        let closed = self.end_batch();
        result.and(closed)
    }

    /// Power-up register sequence
    fn init_sequence(&mut self) -> Result<(), DisplayError> {
        self.command(cmd::SWRESET, &[])?;
        self.delay.delay_ms(SETTLE_MS);
        self.command(cmd::SLPOUT, &[])?;
        self.delay.delay_ms(SETTLE_MS);

        // Unlock extended command set
        self.command(cmd::CSCON, &[0xC3])?;
        self.command(cmd::CSCON, &[0x96])?;

        self.command(cmd::MADCTL, &[madctl_for(self.orientation, self.config.bgr)])?;
        self.command(cmd::COLMOD, &[COLMOD_RGB565])?;
        // 1-dot inversion
        self.command(cmd::DIC, &[0x01])?;
        self.command(cmd::DFC, &[0x80, 0x02, 0x3B])?;
        self.command(cmd::DOCA, &[0x40, 0x8A, 0x00, 0x00, 0x29, 0x19, 0xA5, 0x33])?;
        self.command(cmd::PWR2, &[0x06])?;
        self.command(cmd::PWR3, &[0xA7])?;
        self.command(cmd::VCMPCTL, &[0x18])?;
        self.delay.delay_ms(SETTLE_MS);

        self.command(
            cmd::PGC,
            &[
                0xF0, 0x09, 0x0B, 0x06, 0x04, 0x15, 0x2F, 0x54, 0x42, 0x3C, 0x17, 0x14, 0x18, 0x1B,
            ],
        )?;
        self.command(
            cmd::NGC,
            &[
                0xE0, 0x09, 0x0B, 0x06, 0x04, 0x03, 0x2B, 0x43, 0x42, 0x3B, 0x16, 0x14, 0x17, 0x1B,
            ],
        )?;
        self.delay.delay_ms(SETTLE_MS);

        // Lock extended command set
        self.command(cmd::CSCON, &[0x3C])?;
        self.command(cmd::CSCON, &[0x69])?;

        let inversion = if self.config.invert_colors {
            cmd::INVON
        } else {
            cmd::INVOFF
        };
        self.command(inversion, &[])?;
        self.command(cmd::DISPON, &[])
    }
}

/// MADCTL value for an orientation
fn madctl_for(orientation: Orientation, bgr: bool) -> u8 {
    let rotation = match orientation {
        Orientation::Portrait => madctl::MX,
        Orientation::Landscape => madctl::MV,
        Orientation::PortraitInverted => madctl::MY,
        Orientation::LandscapeInverted => madctl::MX | madctl::MY | madctl::MV,
    };
    if bgr {
        rotation | madctl::BGR
    } else {
        rotation
    }
}

/// Big-endian start/end pair for CASET/RASET
fn address_range(start: u16, end: u16) -> [u8; 4] {
    let [s_hi, s_lo] = start.to_be_bytes();
    let [e_hi, e_lo] = end.to_be_bytes();
    [s_hi, s_lo, e_hi, e_lo]
}

impl<SPI, CS, DC, RST, DELAY> PixelDisplay for St7796<SPI, CS, DC, RST, DELAY>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    fn init(&mut self) -> Result<(), DisplayError> {
        self.cs.set_high().map_err(|_| DisplayError::Communication)?;
        self.hardware_reset()?;
        self.transaction(|panel| panel.init_sequence())?;
        self.initialized = true;
        Ok(())
    }

    fn width(&self) -> u16 {
        if self.orientation.is_landscape() {
            NATIVE_HEIGHT
        } else {
            NATIVE_WIDTH
        }
    }

    fn height(&self) -> u16 {
        if self.orientation.is_landscape() {
            NATIVE_WIDTH
        } else {
            NATIVE_HEIGHT
        }
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn set_orientation(&mut self, orientation: Orientation) -> Result<(), DisplayError> {
        let value = madctl_for(orientation, self.config.bgr);
        self.transaction(|panel| panel.command(cmd::MADCTL, &[value]))?;
        self.orientation = orientation;
        Ok(())
    }

    fn begin_batch(&mut self) -> Result<(), DisplayError> {
        if self.batch_depth == 0 {
            self.cs.set_low().map_err(|_| DisplayError::Communication)?;
        }
        self.batch_depth = self.batch_depth.saturating_add(1);
        Ok(())
    }

    fn end_batch(&mut self) -> Result<(), DisplayError> {
        match self.batch_depth {
            0 => Ok(()),
            1 => {
                self.batch_depth = 0;
                // Deselect even if the final flush failed
                let flushed = self.spi.flush().map_err(|_| DisplayError::Communication);
                self.cs.set_high().map_err(|_| DisplayError::Communication)?;
                flushed
            }
            _ => {
                self.batch_depth -= 1;
                Ok(())
            }
        }
    }

    fn set_window(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    ) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        if width == 0
            || height == 0
            || u32::from(x) + u32::from(width) > u32::from(self.width())
            || u32::from(y) + u32::from(height) > u32::from(self.height())
        {
            return Err(DisplayError::InvalidCoordinates);
        }

        self.transaction(|panel| {
            panel.command(cmd::CASET, &address_range(x, x + width - 1))?;
            panel.command(cmd::RASET, &address_range(y, y + height - 1))?;
            panel.command(cmd::RAMWR, &[])
        })
    }

    fn write_run(&mut self, color: Rgb565, count: u32) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        if count == 0 {
            return Ok(());
        }

        let [hi, lo] = color.into_storage().to_be_bytes();
        let mut chunk = [0u8; CHUNK_PIXELS * 2];
        for pixel in chunk.chunks_exact_mut(2) {
            pixel[0] = hi;
            pixel[1] = lo;
        }

        self.transaction(|panel| {
            let mut remaining = count as usize;
            while remaining > 0 {
                let pixels = remaining.min(CHUNK_PIXELS);
                panel.data(&chunk[..pixels * 2])?;
                remaining -= pixels;
            }
            Ok(())
        })
    }

    fn write_pixel(&mut self, x: u16, y: u16, color: Rgb565) -> Result<(), DisplayError> {
        let bytes = color.into_storage().to_be_bytes();
        self.transaction(|panel| {
            panel.set_window(x, y, 1, 1)?;
            panel.data(&bytes)
        })
    }
}
