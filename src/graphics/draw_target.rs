//! embedded-graphics 适配
//!
//! 为帧缓冲区和驱动实现 [`DrawTarget`]，超出屏幕的像素按 embedded-graphics 的惯例直接丢弃

use core::convert::Infallible;

use embedded_graphics_core::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
};

use super::color::Color;
use super::framebuffer::Framebuffer;
use crate::common::error::DisplayError;
use crate::drivers::ssd1306::Ssd1306;
use crate::drivers::transport::Transport;

impl From<BinaryColor> for Color {
    fn from(color: BinaryColor) -> Self {
        match color {
            BinaryColor::Off => Color::Black,
            BinaryColor::On => Color::White,
        }
    }
}

impl From<Color> for BinaryColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => BinaryColor::Off,
            Color::White => BinaryColor::On,
        }
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }
}

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // 越界像素丢弃
            let _ = self.set_pixel(point.x, point.y, color.into());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.into());
        Ok(())
    }
}

impl<T: Transport> OriginDimensions for Ssd1306<T> {
    fn size(&self) -> Size {
        OriginDimensions::size(self.framebuffer())
    }
}

/// 与其他绘制接口一样，未初始化时返回 `NotInitialized`
impl<T: Transport> DrawTarget for Ssd1306<T> {
    type Color = BinaryColor;
    type Error = DisplayError<T::Error>;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.canvas()?
            .draw_iter(pixels)
            .map_err(|never: Infallible| match never {})
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.into())
    }
}
