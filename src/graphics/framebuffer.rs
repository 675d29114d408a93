//! 帧缓冲区管理（1bit/像素，按页打包）
//!
//! 缓冲区由 `height / 8` 页组成，每页 `width` 字节，每字节纵向存放 8 个像素：
//! 像素 `(x, y)` 位于第 `(y / 8) * width + x` 字节的第 `y % 8` 位

use alloc::vec;
use alloc::vec::Vec;

use super::color::Color;
use crate::common::error::{GraphicsError, GraphicsResult};

/// 帧缓冲区
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u16,
    height: u16,
    buffer: Vec<u8>,
    /// 持久反色标志，影响之后的每一次像素写入
    inverted: bool,
}

impl Framebuffer {
    /// 创建新的帧缓冲区（全黑）
    ///
    /// `height` 不是 8 的整数倍或超过 255 页时返回 `InvalidParams`
    pub fn new(width: u16, height: u16) -> GraphicsResult<Self> {
        if width == 0 || height == 0 || height % 8 != 0 {
            return Err(GraphicsError::InvalidParams);
        }
        if height / 8 > u8::MAX as u16 {
            return Err(GraphicsError::InvalidParams);
        }

        let size = width as usize * height as usize / 8;
        Ok(Self {
            width,
            height,
            buffer: vec![Color::Black.as_byte(); size],
            inverted: false,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// 页数
    pub fn pages(&self) -> u8 {
        (self.height / 8) as u8
    }

    /// 缓冲区大小（字节）
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// 坐标是否落在缓冲区内
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    /// 第 `page` 页的数据切片
    pub fn page(&self, page: u8) -> Option<&[u8]> {
        if page >= self.pages() {
            return None;
        }
        let start = page as usize * self.width as usize;
        self.buffer.get(start..start + self.width as usize)
    }

    fn locate(&self, x: i32, y: i32) -> GraphicsResult<(usize, u8)> {
        if !self.contains(x, y) {
            return Err(GraphicsError::OutOfBounds);
        }
        let (x, y) = (x as usize, y as usize);
        Ok(((y >> 3) * self.width as usize + x, 1 << (y & 0x07)))
    }

    /// 设置像素
    ///
    /// 反色标志置位时先对颜色取反再写入
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> GraphicsResult<()> {
        let (index, mask) = self.locate(x, y)?;

        if color.apply_inversion(self.inverted).is_on() {
            self.buffer[index] |= mask;
        } else {
            self.buffer[index] &= !mask;
        }
        Ok(())
    }

    /// 读取像素（缓冲区中存储的原始值，不考虑反色标志）
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        let (index, mask) = self.locate(x, y).ok()?;
        Some(Color::from(self.buffer[index] & mask != 0))
    }

    /// 整屏填充
    pub fn fill(&mut self, color: Color) {
        self.buffer.fill(color.as_byte());
    }

    /// 以原始颜色码整屏填充，非 0/1 的值返回 `InvalidParams` 且不修改缓冲区
    pub fn fill_raw(&mut self, color: u8) -> GraphicsResult<()> {
        let color = Color::try_from(color)?;
        self.fill(color);
        Ok(())
    }

    /// 缓冲区逐字节取反，并翻转反色标志
    ///
    /// 连续调用两次恢复原状
    pub fn toggle_invert(&mut self) {
        self.buffer.iter_mut().for_each(|byte| *byte = !*byte);
        self.inverted = !self.inverted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn framebuffer() -> Framebuffer {
        Framebuffer::new(128, 64).unwrap()
    }

    #[test]
    fn size_is_one_bit_per_pixel() {
        let fb = framebuffer();

        assert_eq!(fb.buffer_size(), 1024);
        assert_eq!(fb.pages(), 8);
        assert!(fb.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn height_must_be_a_whole_number_of_pages() {
        assert_eq!(Framebuffer::new(128, 60), Err(GraphicsError::InvalidParams));
        assert_eq!(Framebuffer::new(0, 64), Err(GraphicsError::InvalidParams));
        assert_eq!(Framebuffer::new(8, 2048), Err(GraphicsError::InvalidParams));

        let tallest = Framebuffer::new(8, 2040).unwrap();
        assert_eq!(tallest.pages(), 255);
        assert!(tallest.page(254).is_some());
    }

    #[test]
    fn pixel_addressing_is_page_major() {
        let mut fb = framebuffer();

        fb.set_pixel(5, 0, Color::White).unwrap();
        fb.set_pixel(5, 9, Color::White).unwrap();
        fb.set_pixel(127, 63, Color::White).unwrap();

        assert_eq!(fb.buffer()[5], 0b0000_0001);
        assert_eq!(fb.buffer()[128 + 5], 0b0000_0010);
        assert_eq!(fb.buffer()[1023], 0b1000_0000);

        fb.set_pixel(5, 0, Color::Black).unwrap();
        assert_eq!(fb.buffer()[5], 0);
    }

    #[test]
    fn out_of_bounds_writes_are_rejected_without_side_effects() {
        let mut fb = framebuffer();
        fb.set_pixel(3, 3, Color::White).unwrap();
        let before = fb.clone();

        assert_eq!(fb.set_pixel(128, 0, Color::White), Err(GraphicsError::OutOfBounds));
        assert_eq!(fb.set_pixel(0, 64, Color::White), Err(GraphicsError::OutOfBounds));
        assert_eq!(fb.set_pixel(-1, 0, Color::White), Err(GraphicsError::OutOfBounds));
        assert_eq!(fb.set_pixel(0, -1, Color::White), Err(GraphicsError::OutOfBounds));
        assert_eq!(fb, before);
    }

    #[test]
    fn fill_sets_every_pixel() {
        let mut fb = framebuffer();

        fb.fill(Color::White);
        for y in 0..64 {
            for x in 0..128 {
                assert_eq!(fb.get_pixel(x, y), Some(Color::White));
            }
        }

        fb.fill(Color::Black);
        for y in 0..64 {
            for x in 0..128 {
                assert_eq!(fb.get_pixel(x, y), Some(Color::Black));
            }
        }
    }

    #[test]
    fn fill_raw_rejects_unknown_codes() {
        let mut fb = framebuffer();
        fb.fill(Color::White);

        assert_eq!(fb.fill_raw(7), Err(GraphicsError::InvalidParams));
        assert!(fb.buffer().iter().all(|&b| b == 0xFF));

        fb.fill_raw(0).unwrap();
        assert!(fb.buffer().iter().all(|&b| b == 0x00));
    }

    #[test]
    fn toggle_invert_twice_restores_the_buffer() {
        let mut fb = framebuffer();
        for i in 0..40 {
            fb.set_pixel(i * 3, i, Color::White).unwrap();
        }
        let original = fb.clone();

        fb.toggle_invert();
        assert_ne!(fb.buffer(), original.buffer());
        assert!(fb.is_inverted());

        fb.toggle_invert();
        assert_eq!(fb, original);
    }

    #[test]
    fn inversion_flag_negates_later_writes() {
        let mut fb = framebuffer();
        fb.toggle_invert();

        fb.set_pixel(10, 10, Color::White).unwrap();
        assert_eq!(fb.get_pixel(10, 10), Some(Color::Black));

        fb.set_pixel(10, 10, Color::Black).unwrap();
        assert_eq!(fb.get_pixel(10, 10), Some(Color::White));
    }

    #[test]
    fn page_slices_cover_one_band() {
        let mut fb = framebuffer();
        fb.set_pixel(0, 8, Color::White).unwrap();

        let page = fb.page(1).unwrap();
        assert_eq!(page.len(), 128);
        assert_eq!(page[0], 0x01);
        assert!(fb.page(8).is_none());
    }
}
