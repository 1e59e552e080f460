//! FT6336U capacitive touch controller
//!
//! Polled over I2C. Reports up to two contacts; only the first is used.
//! Coordinates come in the panel's native portrait frame and are rotated
//! to match the display orientation.

use embedded_hal::i2c::I2c;
use scrollscope_display::{DisplayError, Orientation, TouchPanel, TouchPoint};

/// FT6336 I2C address
pub const FT6336_ADDR: u8 = 0x38;

/// FT6336 registers
pub mod reg {
    /// Number of active contacts (low nibble)
    pub const TD_STATUS: u8 = 0x02;
    /// First contact: event flag and X high nibble
    pub const P1_XH: u8 = 0x03;
    /// Touch detection threshold
    pub const TH_GROUP: u8 = 0x80;
    /// Chip identifier
    pub const CHIP_ID: u8 = 0xA3;
    /// Interrupt mode (0 = polling)
    pub const G_MODE: u8 = 0xA4;
}

/// Accepted chip identifiers: FT6206, FT6236, FT6336U
const CHIP_IDS: [u8; 3] = [0x06, 0x36, 0x64];

/// Default detection threshold
const DEFAULT_THRESHOLD: u8 = 0x16;

/// Contact event flags (bits 7:6 of P1_XH)
const EVENT_PRESS_DOWN: u8 = 0;
const EVENT_CONTACT: u8 = 2;

/// FT6336 driver
pub struct Ft6336<I2C> {
    i2c: I2C,
    orientation: Orientation,
    native_width: u16,
    native_height: u16,
    initialized: bool,
}

impl<I2C: I2c> Ft6336<I2C> {
    /// Create a driver for a panel of `native_width x native_height` (portrait)
    pub fn new(i2c: I2C, native_width: u16, native_height: u16) -> Self {
        Self {
            i2c,
            orientation: Orientation::Portrait,
            native_width,
            native_height,
            initialized: false,
        }
    }

    /// Probe the controller and switch it to polling mode
    ///
    /// Fails with `NotDetected` if nothing answers or the chip ID is
    /// not an FT62x6/FT6336.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        let mut id = [0u8; 1];
        self.i2c
            .write_read(FT6336_ADDR, &[reg::CHIP_ID], &mut id)
            .map_err(|_| DisplayError::NotDetected)?;
        if !CHIP_IDS.contains(&id[0]) {
            return Err(DisplayError::NotDetected);
        }

        self.write_register(reg::G_MODE, 0x00)?;
        self.write_register(reg::TH_GROUP, DEFAULT_THRESHOLD)?;
        self.initialized = true;
        Ok(())
    }

    /// Follow the display's orientation
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(FT6336_ADDR, &[register, value])
            .map_err(|_| DisplayError::Communication)
    }
}

/// Decode `TD_STATUS..=P1_YL` into a native-frame contact
pub fn decode_touch(regs: &[u8; 5]) -> Option<TouchPoint> {
    let contacts = regs[0] & 0x0F;
    if contacts == 0 || contacts > 2 {
        return None;
    }

    let event = regs[1] >> 6;
    if event != EVENT_PRESS_DOWN && event != EVENT_CONTACT {
        return None;
    }

    let x = (u16::from(regs[1] & 0x0F) << 8) | u16::from(regs[2]);
    let y = (u16::from(regs[3] & 0x0F) << 8) | u16::from(regs[4]);
    Some(TouchPoint::new(x, y))
}

impl<I2C: I2c> TouchPanel for Ft6336<I2C> {
    fn poll_touch(&mut self) -> Result<Option<TouchPoint>, DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }

        let mut regs = [0u8; 5];
        self.i2c
            .write_read(FT6336_ADDR, &[reg::TD_STATUS], &mut regs)
            .map_err(|_| DisplayError::Communication)?;

        Ok(decode_touch(&regs).map(|point| {
            point.map_orientation(self.orientation, self.native_width, self.native_height)
        }))
    }
}
