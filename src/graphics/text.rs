//! 文字渲染（基于点阵字体）
//!
//! 字符从光标位置开始绘制，前景与背景像素都会写入，因此文字总会覆盖其包围盒内的旧内容

use super::color::Color;
use super::fonts::GlyphTable;
use super::framebuffer::Framebuffer;
use crate::common::error::{GraphicsError, GraphicsResult};

/// 字符串的像素尺寸
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StringSize {
    pub width: u32,
    pub height: u32,
}

/// 文本光标（像素坐标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub x: i32,
    pub y: i32,
}

impl Cursor {
    /// 移动光标，不绘制任何内容
    pub fn goto(&mut self, fb: &Framebuffer, x: i32, y: i32) -> GraphicsResult<()> {
        if !fb.contains(x, y) {
            return Err(GraphicsError::OutOfBounds);
        }
        self.x = x;
        self.y = y;
        Ok(())
    }

    /// 绘制单个字符并右移光标一个字宽
    ///
    /// 字符放不下时返回 `OutOfBounds`，缓冲区和光标都保持不变
    pub fn put_char<F: GlyphTable + ?Sized>(
        &mut self,
        fb: &mut Framebuffer,
        ch: char,
        font: &F,
        color: Color,
    ) -> GraphicsResult<()> {
        let width = font.glyph_width() as i32;
        let height = font.glyph_height() as i32;

        if self.x + width > fb.width() as i32 || self.y + height > fb.height() as i32 {
            return Err(GraphicsError::OutOfBounds);
        }

        let glyph = font.glyph(ch);
        for row in 0..glyph.height {
            for col in 0..glyph.width {
                let pixel = if glyph.is_set(col, row) {
                    color
                } else {
                    color.invert()
                };
                fb.set_pixel(self.x + col as i32, self.y + row as i32, pixel)?;
            }
        }

        self.x += width;
        Ok(())
    }

    /// 逐个绘制字符，遇到第一个失败的字符即停止
    pub fn put_string<F: GlyphTable + ?Sized>(
        &mut self,
        fb: &mut Framebuffer,
        text: &str,
        font: &F,
        color: Color,
    ) -> GraphicsResult<()> {
        for ch in text.chars() {
            self.put_char(fb, ch, font, color)?;
        }
        Ok(())
    }
}

/// 计算字符串尺寸
pub fn measure_string<F: GlyphTable + ?Sized>(text: &str, font: &F) -> StringSize {
    StringSize {
        width: font.glyph_width() as u32 * text.chars().count() as u32,
        height: font.glyph_height() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::fonts::{FONT_7X10, FONT_11X18, Glyph};

    fn blank() -> Framebuffer {
        Framebuffer::new(128, 64).unwrap()
    }

    #[test]
    fn char_matches_the_glyph_and_advances_the_cursor() {
        let mut fb = blank();
        let mut cursor = Cursor::default();
        cursor.goto(&fb, 0, 0).unwrap();

        cursor.put_char(&mut fb, 'A', &FONT_7X10, Color::White).unwrap();

        let glyph = FONT_7X10.glyph('A');
        for y in 0..64 {
            for x in 0..128 {
                let expected = x < 7 && y < 10 && glyph.is_set(x as u8, y as u8);
                assert_eq!(fb.get_pixel(x, y), Some(Color::from(expected)), "pixel ({x}, {y})");
            }
        }
        assert_eq!(cursor, Cursor { x: 7, y: 0 });
    }

    #[test]
    fn background_is_painted_with_the_inverse_color() {
        let mut fb = blank();
        fb.fill(Color::White);
        let mut cursor = Cursor::default();

        cursor.put_char(&mut fb, ' ', &FONT_7X10, Color::White).unwrap();

        for y in 0..10 {
            for x in 0..7 {
                assert_eq!(fb.get_pixel(x, y), Some(Color::Black));
            }
        }
        assert_eq!(fb.get_pixel(7, 0), Some(Color::White));
    }

    #[test]
    fn char_that_does_not_fit_is_rejected() {
        let mut fb = blank();
        let mut cursor = Cursor::default();

        // 121 + 7 == 128，刚好放下
        cursor.goto(&fb, 121, 54).unwrap();
        cursor.put_char(&mut fb, 'x', &FONT_7X10, Color::White).unwrap();

        cursor.goto(&fb, 122, 0).unwrap();
        let before = fb.clone();
        assert_eq!(
            cursor.put_char(&mut fb, 'x', &FONT_7X10, Color::White),
            Err(GraphicsError::OutOfBounds)
        );
        assert_eq!(cursor.x, 122);
        assert_eq!(fb, before);

        cursor.goto(&fb, 0, 55).unwrap();
        assert_eq!(
            cursor.put_char(&mut fb, 'x', &FONT_7X10, Color::White),
            Err(GraphicsError::OutOfBounds)
        );
    }

    #[test]
    fn string_stops_at_the_first_failing_character() {
        let mut fb = blank();
        let mut cursor = Cursor::default();
        cursor.goto(&fb, 100, 0).unwrap();

        // 11 像素宽：100、111 可以放下，122 放不下
        let result = cursor.put_string(&mut fb, "abcd", &FONT_11X18, Color::White);

        assert_eq!(result, Err(GraphicsError::OutOfBounds));
        assert_eq!(cursor.x, 122);
    }

    #[test]
    fn goto_rejects_coordinates_outside_the_screen() {
        let fb = blank();
        let mut cursor = Cursor::default();

        assert_eq!(cursor.goto(&fb, 128, 0), Err(GraphicsError::OutOfBounds));
        assert_eq!(cursor.goto(&fb, 0, 64), Err(GraphicsError::OutOfBounds));
        assert_eq!(cursor.goto(&fb, -3, 0), Err(GraphicsError::OutOfBounds));
        assert_eq!(cursor, Cursor::default());
    }

    #[test]
    fn string_size_is_width_times_length() {
        assert_eq!(measure_string("Hello", &FONT_7X10), StringSize { width: 35, height: 10 });
        assert_eq!(measure_string("", &FONT_11X18), StringSize { width: 0, height: 18 });
    }

    struct Checker;

    impl GlyphTable for Checker {
        fn glyph_width(&self) -> u8 {
            2
        }

        fn glyph_height(&self) -> u8 {
            2
        }

        fn glyph(&self, _ch: char) -> Glyph<'_> {
            Glyph {
                width: 2,
                height: 2,
                rows: &[0x8000, 0x4000],
            }
        }
    }

    #[test]
    fn custom_glyph_tables_are_supported() {
        let mut fb = blank();
        let mut cursor = Cursor::default();

        cursor.put_string(&mut fb, "ab", &Checker, Color::White).unwrap();

        assert_eq!(fb.get_pixel(0, 0), Some(Color::White));
        assert_eq!(fb.get_pixel(1, 0), Some(Color::Black));
        assert_eq!(fb.get_pixel(1, 1), Some(Color::White));
        assert_eq!(fb.get_pixel(2, 0), Some(Color::White));
        assert_eq!(cursor.x, 4);
    }
}
