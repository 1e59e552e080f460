//! `embedded-graphics` adapter
//!
//! Lets fonts and primitives from `embedded-graphics` draw onto any
//! `PixelDisplay`. Everything outside the panel is clipped.

use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{Dimensions, OriginDimensions, Size};
use embedded_graphics_core::pixelcolor::Rgb565;
use embedded_graphics_core::primitives::Rectangle;
use embedded_graphics_core::Pixel;

use crate::backend::{DisplayError, PixelDisplay};

/// Draw target over a pixel display
pub struct Canvas<'a, D: PixelDisplay + ?Sized> {
    display: &'a mut D,
}

impl<'a, D: PixelDisplay + ?Sized> Canvas<'a, D> {
    /// Wrap a display
    pub fn new(display: &'a mut D) -> Self {
        Self { display }
    }
}

impl<D: PixelDisplay + ?Sized> OriginDimensions for Canvas<'_, D> {
    fn size(&self) -> Size {
        Size::new(
            u32::from(self.display.width()),
            u32::from(self.display.height()),
        )
    }
}

impl<D: PixelDisplay + ?Sized> DrawTarget for Canvas<'_, D> {
    type Color = Rgb565;
    type Error = DisplayError;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if self.display.contains(point.x, point.y) {
                self.display
                    .write_pixel(point.x as u16, point.y as u16, color)?;
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.size.width == 0 || area.size.height == 0 {
            return Ok(());
        }

        self.display.fill_rect(
            area.top_left.x as u16,
            area.top_left.y as u16,
            area.size.width as u16,
            area.size.height as u16,
            color,
        )
    }
}
