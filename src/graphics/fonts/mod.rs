//! 点阵字体
//!
//! 内置 7x10、11x18、16x26 三种 ASCII 字体。字模每行一个 `u16`，最高位对应最左列，
//! 字符按 `字符码 - 32` 连续排列。

mod font_11x18;
mod font_16x26;
mod font_7x10;

/// 第一个可打印字符（空格）
pub const FIRST_PRINTABLE: u8 = 0x20;
/// 最后一个可打印字符（`~`）
pub const LAST_PRINTABLE: u8 = 0x7E;

/// 单个字符的点阵
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph<'a> {
    pub width: u8,
    pub height: u8,
    pub rows: &'a [u16],
}

impl Glyph<'_> {
    /// 第 `row` 行第 `col` 列是否为前景
    pub fn is_set(&self, col: u8, row: u8) -> bool {
        self.rows
            .get(row as usize)
            .is_some_and(|bits| col < 16 && bits & (0x8000 >> col) != 0)
    }
}

/// 字形查找接口
///
/// 字符集之外的字符如何处理由实现方决定
pub trait GlyphTable {
    fn glyph_width(&self) -> u8;

    fn glyph_height(&self) -> u8;

    fn glyph(&self, ch: char) -> Glyph<'_>;
}

/// 等宽 ASCII 字体定义
#[derive(Debug, Clone, Copy)]
pub struct FontDef {
    width: u8,
    height: u8,
    data: &'static [u16],
}

impl FontDef {
    /// `data` 需包含 95 个字符、每个字符 `height` 行
    pub const fn new(width: u8, height: u8, data: &'static [u16]) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// 字符在字模表中的序号，字符集之外的字符用 `?` 代替
    fn index_of(ch: char) -> usize {
        let code = match u8::try_from(ch) {
            Ok(code) if (FIRST_PRINTABLE..=LAST_PRINTABLE).contains(&code) => code,
            _ => b'?',
        };
        (code - FIRST_PRINTABLE) as usize
    }
}

impl GlyphTable for FontDef {
    fn glyph_width(&self) -> u8 {
        self.width
    }

    fn glyph_height(&self) -> u8 {
        self.height
    }

    fn glyph(&self, ch: char) -> Glyph<'_> {
        let height = self.height as usize;
        let start = Self::index_of(ch) * height;
        Glyph {
            width: self.width,
            height: self.height,
            rows: self.data.get(start..start + height).unwrap_or(&[]),
        }
    }
}

pub static FONT_7X10: FontDef = FontDef::new(7, 10, &font_7x10::FONT_7X10_DATA);

pub static FONT_11X18: FontDef = FontDef::new(11, 18, &font_11x18::FONT_11X18_DATA);

pub static FONT_16X26: FontDef = FontDef::new(16, 26, &font_16x26::FONT_16X26_DATA);
