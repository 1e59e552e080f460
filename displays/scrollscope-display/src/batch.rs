//! Scoped write transaction
//!
//! A `Batch` brackets a group of pixel writes with `begin_batch` /
//! `end_batch`. Dropping an open batch still closes it, so an early `?`
//! return never leaves the bus mid-transfer.

use core::ops::{Deref, DerefMut};

use crate::backend::{DisplayError, PixelDisplay};

/// Open write transaction on a display
pub struct Batch<'a, D: PixelDisplay + ?Sized> {
    display: &'a mut D,
    open: bool,
}

impl<'a, D: PixelDisplay + ?Sized> Batch<'a, D> {
    /// Open a transaction
    pub fn begin(display: &'a mut D) -> Result<Self, DisplayError> {
        display.begin_batch()?;
        Ok(Self {
            display,
            open: true,
        })
    }

    /// Close the transaction and report the close result
    pub fn finish(mut self) -> Result<(), DisplayError> {
        self.open = false;
        self.display.end_batch()
    }
}

impl<D: PixelDisplay + ?Sized> Deref for Batch<'_, D> {
    type Target = D;

    fn deref(&self) -> &D {
        self.display
    }
}

impl<D: PixelDisplay + ?Sized> DerefMut for Batch<'_, D> {
    fn deref_mut(&mut self) -> &mut D {
        self.display
    }
}

impl<D: PixelDisplay + ?Sized> Drop for Batch<'_, D> {
    fn drop(&mut self) {
        if self.open {
            // Error already being propagated by the caller
            let _ = self.display.end_batch();
        }
    }
}
