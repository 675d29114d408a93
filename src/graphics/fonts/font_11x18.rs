//! 11x18 点阵字模，每行一个 `u16`，最高位为最左列
//!
//! 由 DejaVu Sans Mono（Bitstream Vera 许可）按该尺寸栅格化生成
#[rustfmt::skip]
pub(super) static FONT_11X18_DATA: [u16; 1710] = [
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // space
    0x0000, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0400, 0x0400, 0x0400, 0x0400, 0x0000, 0x0000, 0x0600, 0x0400, 0x0000, 0x0000, 0x0000, 0x0000, // !
    0x0000, 0x1B00, 0x1B00, 0x1B00, 0x1B00, 0x1100, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // "
    0x0000, 0x0480, 0x0C80, 0x0C80, 0x0980, 0x7FE0, 0x1900, 0x1900, 0x1300, 0xFFC0, 0x3200, 0x3200, 0x2600, 0x2400, 0x0000, 0x0000, 0x0000, 0x0000, // #
    0x0000, 0x0400, 0x0600, 0x1F80, 0x3400, 0x3400, 0x3400, 0x1E00, 0x0F80, 0x04C0, 0x04C0, 0x04C0, 0x3F80, 0x1F00, 0x0400, 0x0400, 0x0000, 0x0000, // $
    0x0000, 0x0000, 0x7800, 0x4400, 0xC400, 0x4C00, 0x39C0, 0x0600, 0x3980, 0x47C0, 0x0440, 0x0460, 0x06C0, 0x0380, 0x0000, 0x0000, 0x0000, 0x0000, // %
    0x0000, 0x1F00, 0x3000, 0x3000, 0x3000, 0x1800, 0x3800, 0x6C40, 0x6660, 0x4340, 0x43C0, 0x61C0, 0x33C0, 0x1E40, 0x0000, 0x0000, 0x0000, 0x0000, // &
    0x0000, 0x0400, 0x0400, 0x0400, 0x0400, 0x0400, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // quote
    0x0000, 0x0200, 0x0600, 0x0400, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0400, 0x0600, 0x0600, 0x0300, 0x0000, 0x0000, // (
    0x0000, 0x0800, 0x0C00, 0x0400, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0400, 0x0C00, 0x0C00, 0x1800, 0x0000, 0x0000, // )
    0x0000, 0x0400, 0x2480, 0x3580, 0x0E00, 0x1F00, 0x3580, 0x0400, 0x0400, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // *
    0x0000, 0x0000, 0x0000, 0x0000, 0x0400, 0x0400, 0x0400, 0x7FC0, 0x7FC0, 0x0400, 0x0400, 0x0400, 0x0400, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // +
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0600, 0x0E00, 0x0C00, 0x0C00, 0x0800, 0x0000, 0x0000, // ,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1F00, 0x1F00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // -
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0400, 0x0E00, 0x0400, 0x0000, 0x0000, 0x0000, 0x0000, // .
    0x0000, 0x0080, 0x0180, 0x0100, 0x0300, 0x0200, 0x0600, 0x0400, 0x0C00, 0x0C00, 0x1800, 0x1800, 0x3000, 0x3000, 0x6000, 0x0000, 0x0000, 0x0000, // /
    0x0000, 0x1F00, 0x3B80, 0x3180, 0x2080, 0x60C0, 0x64C0, 0x6EC0, 0x64C0, 0x60C0, 0x2080, 0x3180, 0x3B80, 0x1F00, 0x0000, 0x0000, 0x0000, 0x0000, // 0
    0x0000, 0x1E00, 0x3E00, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x1F80, 0x1F80, 0x0000, 0x0000, 0x0000, 0x0000, // 1
    0x0000, 0x3F00, 0x3380, 0x0180, 0x0180, 0x0180, 0x0180, 0x0300, 0x0600, 0x0C00, 0x1800, 0x3000, 0x3F80, 0x3F80, 0x0000, 0x0000, 0x0000, 0x0000, // 2
    0x0000, 0x3F00, 0x2380, 0x0180, 0x0180, 0x0180, 0x0F00, 0x0F00, 0x0180, 0x0080, 0x00C0, 0x0180, 0x7F80, 0x3F00, 0x0000, 0x0000, 0x0000, 0x0000, // 3
    0x0000, 0x0300, 0x0700, 0x0700, 0x0B00, 0x1B00, 0x1300, 0x3300, 0x6300, 0x7FC0, 0x7FC0, 0x0300, 0x0300, 0x0100, 0x0000, 0x0000, 0x0000, 0x0000, // 4
    0x0000, 0x3F80, 0x3F00, 0x3000, 0x3000, 0x3C00, 0x3F00, 0x0180, 0x0180, 0x0080, 0x0180, 0x0180, 0x7F80, 0x3E00, 0x0000, 0x0000, 0x0000, 0x0000, // 5
    0x0000, 0x0F80, 0x1880, 0x3000, 0x2000, 0x6600, 0x7F80, 0x7180, 0x60C0, 0x60C0, 0x20C0, 0x3080, 0x3B80, 0x1F00, 0x0000, 0x0000, 0x0000, 0x0000, // 6
    0x0000, 0x7FC0, 0x3F80, 0x0180, 0x0100, 0x0300, 0x0300, 0x0200, 0x0600, 0x0600, 0x0C00, 0x0C00, 0x0800, 0x1800, 0x0000, 0x0000, 0x0000, 0x0000, // 7
    0x0000, 0x1F00, 0x3180, 0x3180, 0x2080, 0x3180, 0x1F00, 0x1F00, 0x3180, 0x60C0, 0x60C0, 0x60C0, 0x3B80, 0x1F00, 0x0000, 0x0000, 0x0000, 0x0000, // 8
    0x0000, 0x1F00, 0x3380, 0x2180, 0x6080, 0x60C0, 0x61C0, 0x31C0, 0x3EC0, 0x0C80, 0x0080, 0x0180, 0x3F00, 0x3E00, 0x0000, 0x0000, 0x0000, 0x0000, // 9
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0E00, 0x0E00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0400, 0x0E00, 0x0400, 0x0000, 0x0000, 0x0000, 0x0000, // :
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0E00, 0x0E00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0600, 0x0E00, 0x0C00, 0x0C00, 0x0800, 0x0000, 0x0000, // ;
    0x0000, 0x0000, 0x0000, 0x0000, 0x0040, 0x03C0, 0x0F00, 0x7800, 0x6000, 0x3C00, 0x0780, 0x01C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // <
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x7FC0, 0x0000, 0x0000, 0x7FC0, 0x7FC0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // =
    0x0000, 0x0000, 0x0000, 0x0000, 0x4000, 0x7800, 0x1E00, 0x03C0, 0x00C0, 0x0780, 0x3C00, 0x7000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // >
    0x0000, 0x1F00, 0x3380, 0x0180, 0x0180, 0x0180, 0x0300, 0x0600, 0x0C00, 0x0C00, 0x0000, 0x0000, 0x0C00, 0x0400, 0x0000, 0x0000, 0x0000, 0x0000, // ?
    0x0000, 0x0000, 0x0F80, 0x38C0, 0x2040, 0x6240, 0x47C0, 0x4C40, 0xC840, 0xC840, 0xC840, 0x4FC0, 0x4740, 0x6000, 0x3000, 0x1F80, 0x0300, 0x0000, // @
    0x0000, 0x0E00, 0x0E00, 0x0E00, 0x1B00, 0x1B00, 0x1100, 0x3180, 0x3180, 0x3F80, 0x3F80, 0x60C0, 0x60C0, 0x4040, 0x0000, 0x0000, 0x0000, 0x0000, // A
    0x0000, 0x3F00, 0x3F80, 0x3080, 0x30C0, 0x3180, 0x3F80, 0x3F80, 0x30C0, 0x30C0, 0x30C0, 0x30C0, 0x3F80, 0x3F00, 0x0000, 0x0000, 0x0000, 0x0000, // B
    0x0000, 0x0F80, 0x18C0, 0x3000, 0x3000, 0x2000, 0x6000, 0x6000, 0x6000, 0x2000, 0x3000, 0x3000, 0x1DC0, 0x0F80, 0x0000, 0x0000, 0x0000, 0x0000, // C
    0x0000, 0x7E00, 0x7F00, 0x6180, 0x6180, 0x60C0, 0x60C0, 0x60C0, 0x60C0, 0x60C0, 0x6180, 0x6180, 0x7F00, 0x3C00, 0x0000, 0x0000, 0x0000, 0x0000, // D
    0x0000, 0x3FC0, 0x3F80, 0x3000, 0x3000, 0x3000, 0x3F80, 0x3F80, 0x3000, 0x3000, 0x3000, 0x3000, 0x3FC0, 0x3FC0, 0x0000, 0x0000, 0x0000, 0x0000, // E
    0x0000, 0x3FC0, 0x3F80, 0x3000, 0x3000, 0x3000, 0x3F80, 0x3F80, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x0000, 0x0000, 0x0000, 0x0000, // F
    0x0000, 0x0F80, 0x1880, 0x3000, 0x6000, 0x6000, 0x6000, 0x63C0, 0x63C0, 0x60C0, 0x20C0, 0x30C0, 0x19C0, 0x0F80, 0x0000, 0x0000, 0x0000, 0x0000, // G
    0x0000, 0x60C0, 0x60C0, 0x60C0, 0x60C0, 0x60C0, 0x7FC0, 0x7FC0, 0x60C0, 0x60C0, 0x60C0, 0x60C0, 0x60C0, 0x2080, 0x0000, 0x0000, 0x0000, 0x0000, // H
    0x0000, 0x3F80, 0x3F80, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x3F80, 0x3F80, 0x0000, 0x0000, 0x0000, 0x0000, // I
    0x0000, 0x1F80, 0x0F80, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0100, 0x0300, 0x7700, 0x3E00, 0x0000, 0x0000, 0x0000, 0x0000, // J
    0x0000, 0x60C0, 0x6180, 0x6300, 0x6600, 0x6C00, 0x7C00, 0x7C00, 0x6600, 0x6300, 0x6380, 0x6180, 0x60C0, 0x20C0, 0x0000, 0x0000, 0x0000, 0x0000, // K
    0x0000, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x3FC0, 0x3FC0, 0x0000, 0x0000, 0x0000, 0x0000, // L
    0x0000, 0x60C0, 0x71C0, 0x71C0, 0x71C0, 0x6AC0, 0x6AC0, 0x6EC0, 0x64C0, 0x60C0, 0x60C0, 0x60C0, 0x60C0, 0x4040, 0x0000, 0x0000, 0x0000, 0x0000, // M
    0x0000, 0x70C0, 0x70C0, 0x78C0, 0x68C0, 0x68C0, 0x6CC0, 0x64C0, 0x66C0, 0x62C0, 0x63C0, 0x63C0, 0x61C0, 0x2180, 0x0000, 0x0000, 0x0000, 0x0000, // N
    0x0000, 0x1F00, 0x3B80, 0x3180, 0x60C0, 0x60C0, 0x60C0, 0x60C0, 0x60C0, 0x60C0, 0x6080, 0x3180, 0x3B80, 0x1F00, 0x0000, 0x0000, 0x0000, 0x0000, // O
    0x0000, 0x3F00, 0x3F80, 0x30C0, 0x30C0, 0x30C0, 0x30C0, 0x3F80, 0x3E00, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x0000, 0x0000, 0x0000, 0x0000, // P
    0x0000, 0x1F00, 0x3B80, 0x3180, 0x60C0, 0x60C0, 0x60C0, 0x60C0, 0x60C0, 0x60C0, 0x20C0, 0x3180, 0x3B80, 0x1F00, 0x0300, 0x0180, 0x0000, 0x0000, // Q
    0x0000, 0x7F00, 0x7F80, 0x6180, 0x6180, 0x6180, 0x6180, 0x7F00, 0x7F00, 0x6180, 0x6180, 0x60C0, 0x60C0, 0x2040, 0x0000, 0x0000, 0x0000, 0x0000, // R
    0x0000, 0x1F80, 0x3180, 0x2000, 0x6000, 0x3000, 0x3C00, 0x1F00, 0x0180, 0x00C0, 0x00C0, 0x0080, 0x7380, 0x3F00, 0x0000, 0x0000, 0x0000, 0x0000, // S
    0x0000, 0x7FC0, 0x7FC0, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0400, 0x0000, 0x0000, 0x0000, 0x0000, // T
    0x0000, 0x60C0, 0x60C0, 0x60C0, 0x60C0, 0x60C0, 0x60C0, 0x60C0, 0x60C0, 0x60C0, 0x60C0, 0x2080, 0x3B80, 0x1F00, 0x0000, 0x0000, 0x0000, 0x0000, // U
    0x0000, 0x60C0, 0x60C0, 0x60C0, 0x2080, 0x3180, 0x3180, 0x1100, 0x1B00, 0x1B00, 0x1B00, 0x0E00, 0x0E00, 0x0E00, 0x0000, 0x0000, 0x0000, 0x0000, // V
    0x0000, 0xC060, 0xC060, 0x4040, 0x4440, 0x6EC0, 0x6EC0, 0x6AC0, 0x6AC0, 0x7AC0, 0x3B80, 0x3180, 0x3180, 0x3180, 0x0000, 0x0000, 0x0000, 0x0000, // W
    0x0000, 0x60C0, 0x3080, 0x3180, 0x1B00, 0x0F00, 0x0E00, 0x0E00, 0x0E00, 0x1B00, 0x3180, 0x3180, 0x60C0, 0x4040, 0x0000, 0x0000, 0x0000, 0x0000, // X
    0x0000, 0x60C0, 0x60C0, 0x3180, 0x3100, 0x1B00, 0x0E00, 0x0E00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0400, 0x0000, 0x0000, 0x0000, 0x0000, // Y
    0x0000, 0x3FC0, 0x3FC0, 0x0180, 0x0180, 0x0300, 0x0600, 0x0600, 0x0C00, 0x1800, 0x1800, 0x3000, 0x3FC0, 0x3FC0, 0x0000, 0x0000, 0x0000, 0x0000, // Z
    0x0600, 0x0F00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0F00, 0x0000, 0x0000, // [
    0x0000, 0x6000, 0x2000, 0x3000, 0x1000, 0x1800, 0x0800, 0x0C00, 0x0400, 0x0600, 0x0600, 0x0300, 0x0300, 0x0180, 0x0180, 0x0080, 0x0000, 0x0000, // backslash
    0x0C00, 0x1E00, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x1E00, 0x0000, 0x0000, // ]
    0x0000, 0x0E00, 0x0E00, 0x1B00, 0x3180, 0x60C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // ^
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xFFE0, // _
    0x1800, 0x0C00, 0x0400, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // `
    0x0000, 0x0000, 0x0000, 0x0000, 0x1F00, 0x3380, 0x0180, 0x0080, 0x1F80, 0x3080, 0x6080, 0x6180, 0x3380, 0x1E80, 0x0000, 0x0000, 0x0000, 0x0000, // a
    0x2000, 0x3000, 0x3000, 0x3000, 0x3F00, 0x3B80, 0x3080, 0x30C0, 0x30C0, 0x30C0, 0x30C0, 0x3080, 0x3980, 0x2F00, 0x0000, 0x0000, 0x0000, 0x0000, // b
    0x0000, 0x0000, 0x0000, 0x0000, 0x0F80, 0x1C80, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x3000, 0x1880, 0x0F80, 0x0000, 0x0000, 0x0000, 0x0000, // c
    0x0080, 0x0180, 0x0180, 0x0180, 0x1F80, 0x3B80, 0x2180, 0x6180, 0x6180, 0x6180, 0x6180, 0x2180, 0x3380, 0x1E80, 0x0000, 0x0000, 0x0000, 0x0000, // d
    0x0000, 0x0000, 0x0000, 0x0000, 0x0F00, 0x3980, 0x3080, 0x60C0, 0x7FC0, 0x7F80, 0x6000, 0x3000, 0x3980, 0x1F80, 0x0000, 0x0000, 0x0000, 0x0000, // e
    0x0180, 0x0780, 0x0400, 0x0C00, 0x3F80, 0x3F80, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0400, 0x0000, 0x0000, 0x0000, 0x0000, // f
    0x0000, 0x0000, 0x0000, 0x0000, 0x1E80, 0x3B80, 0x2180, 0x6180, 0x6180, 0x6180, 0x6180, 0x3180, 0x3F80, 0x1F80, 0x0180, 0x0180, 0x3F00, 0x0C00, // g
    0x2000, 0x3000, 0x3000, 0x3000, 0x3F00, 0x3B80, 0x3180, 0x3080, 0x3080, 0x3080, 0x3080, 0x3080, 0x3080, 0x2080, 0x0000, 0x0000, 0x0000, 0x0000, // h
    0x0400, 0x0600, 0x0400, 0x0000, 0x1C00, 0x1E00, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x3F80, 0x3F80, 0x0000, 0x0000, 0x0000, 0x0000, // i
    0x0200, 0x0600, 0x0200, 0x0000, 0x1E00, 0x1E00, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x3C00, 0x3000, // j
    0x0000, 0x3000, 0x3000, 0x3000, 0x3080, 0x3180, 0x3300, 0x3600, 0x3E00, 0x3600, 0x3300, 0x3180, 0x30C0, 0x30C0, 0x0000, 0x0000, 0x0000, 0x0000, // k
    0x3800, 0x3C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0780, 0x0380, 0x0000, 0x0000, 0x0000, 0x0000, // l
    0x0000, 0x0000, 0x0000, 0x0000, 0x5D80, 0x6EC0, 0x64C0, 0x64C0, 0x64C0, 0x64C0, 0x64C0, 0x64C0, 0x64C0, 0x4440, 0x0000, 0x0000, 0x0000, 0x0000, // m
    0x0000, 0x0000, 0x0000, 0x0000, 0x2F00, 0x3B80, 0x3180, 0x3080, 0x3080, 0x3080, 0x3080, 0x3080, 0x3080, 0x2080, 0x0000, 0x0000, 0x0000, 0x0000, // n
    0x0000, 0x0000, 0x0000, 0x0000, 0x1F00, 0x3B80, 0x3180, 0x60C0, 0x60C0, 0x60C0, 0x60C0, 0x3180, 0x3B80, 0x1F00, 0x0000, 0x0000, 0x0000, 0x0000, // o
    0x0000, 0x0000, 0x0000, 0x0000, 0x2F00, 0x3B80, 0x3080, 0x30C0, 0x30C0, 0x30C0, 0x30C0, 0x3080, 0x3980, 0x3F00, 0x3000, 0x3000, 0x3000, 0x2000, // p
    0x0000, 0x0000, 0x0000, 0x0000, 0x1E80, 0x3B80, 0x3180, 0x6180, 0x6080, 0x6080, 0x6180, 0x3180, 0x3380, 0x1E80, 0x0080, 0x0080, 0x0080, 0x0080, // q
    0x0000, 0x0000, 0x0000, 0x0000, 0x1BC0, 0x1FC0, 0x1C00, 0x1800, 0x1800, 0x1800, 0x1800, 0x1800, 0x1800, 0x1800, 0x0000, 0x0000, 0x0000, 0x0000, // r
    0x0000, 0x0000, 0x0000, 0x0000, 0x1F00, 0x3980, 0x3000, 0x3000, 0x1E00, 0x0780, 0x0180, 0x0180, 0x3380, 0x3F00, 0x0000, 0x0000, 0x0000, 0x0000, // s
    0x0000, 0x0800, 0x0C00, 0x0C00, 0x7F80, 0x3F80, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0C00, 0x0F80, 0x0780, 0x0000, 0x0000, 0x0000, 0x0000, // t
    0x0000, 0x0000, 0x0000, 0x0000, 0x2080, 0x3080, 0x3080, 0x3080, 0x3080, 0x3080, 0x3180, 0x3180, 0x3B80, 0x1E80, 0x0000, 0x0000, 0x0000, 0x0000, // u
    0x0000, 0x0000, 0x0000, 0x0000, 0x60C0, 0x2080, 0x3180, 0x3180, 0x1100, 0x1B00, 0x1B00, 0x0A00, 0x0E00, 0x0E00, 0x0000, 0x0000, 0x0000, 0x0000, // v
    0x0000, 0x0000, 0x0000, 0x0000, 0xC060, 0xC060, 0x4040, 0x64C0, 0x6EC0, 0x6AC0, 0x2A80, 0x3B80, 0x3180, 0x3180, 0x0000, 0x0000, 0x0000, 0x0000, // w
    0x0000, 0x0000, 0x0000, 0x0000, 0x2080, 0x3180, 0x1B00, 0x0E00, 0x0E00, 0x0E00, 0x1B00, 0x1100, 0x3180, 0x60C0, 0x0000, 0x0000, 0x0000, 0x0000, // x
    0x0000, 0x0000, 0x0000, 0x0000, 0x60C0, 0x20C0, 0x3080, 0x3180, 0x1100, 0x1B00, 0x0B00, 0x0E00, 0x0E00, 0x0600, 0x0C00, 0x0C00, 0x3800, 0x2000, // y
    0x0000, 0x0000, 0x0000, 0x0000, 0x3F80, 0x1F80, 0x0100, 0x0300, 0x0600, 0x0C00, 0x1800, 0x1000, 0x3F80, 0x3F80, 0x0000, 0x0000, 0x0000, 0x0000, // z
    0x0180, 0x0780, 0x0600, 0x0400, 0x0400, 0x0400, 0x0400, 0x0C00, 0x3800, 0x0C00, 0x0400, 0x0400, 0x0400, 0x0400, 0x0600, 0x0780, 0x0180, 0x0000, // {
    0x0400, 0x0400, 0x0400, 0x0400, 0x0400, 0x0400, 0x0400, 0x0400, 0x0400, 0x0400, 0x0400, 0x0400, 0x0400, 0x0400, 0x0400, 0x0400, 0x0400, 0x0400, // |
    0x3000, 0x3C00, 0x0C00, 0x0400, 0x0400, 0x0400, 0x0400, 0x0600, 0x0380, 0x0600, 0x0400, 0x0400, 0x0400, 0x0400, 0x0C00, 0x3C00, 0x3000, 0x0000, // }
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x3840, 0x7FC0, 0x0100, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // ~
];
