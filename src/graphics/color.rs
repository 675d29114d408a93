//! 颜色定义

use crate::common::error::GraphicsError;

/// 单色屏颜色
///
/// 语义颜色而非硬件电平：`White` 表示点亮像素，`Black` 表示熄灭
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    #[default]
    Black,
    White,
}

impl Color {
    /// 整字节填充值
    pub fn as_byte(self) -> u8 {
        match self {
            Color::Black => 0x00,
            Color::White => 0xFF,
        }
    }

    /// 取反色
    pub fn invert(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// 按反色标志计算实际写入的颜色
    pub fn apply_inversion(self, inverted: bool) -> Self {
        if inverted { self.invert() } else { self }
    }

    /// 对应像素位是否置 1
    pub fn is_on(self) -> bool {
        self == Color::White
    }
}

impl From<bool> for Color {
    fn from(on: bool) -> Self {
        if on { Color::White } else { Color::Black }
    }
}

/// 原始颜色码：0 为黑，1 为白，其余值无效
impl TryFrom<u8> for Color {
    type Error = GraphicsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(Color::Black),
            0x01 => Ok(Color::White),
            _ => Err(GraphicsError::InvalidParams),
        }
    }
}
