//! 16x26 点阵字模，每行一个 `u16`，最高位为最左列
//!
//! 由 DejaVu Sans Mono（Bitstream Vera 许可）按该尺寸栅格化生成
#[rustfmt::skip]
pub(super) static FONT_16X26_DATA: [u16; 2470] = [
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // space
    0x0000, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0000, 0x0000, 0x0180, 0x0180, 0x0180, 0x0180, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // !
    0x0000, 0x0660, 0x0E70, 0x0E70, 0x0E70, 0x0E70, 0x0E70, 0x0E70, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // "
    0x0000, 0x0108, 0x018C, 0x0318, 0x0318, 0x0318, 0x3FFE, 0x3FFF, 0x3FFE, 0x0630, 0x0630, 0x0C60, 0x7FFC, 0xFFFC, 0x7FFC, 0x18C0, 0x18C0, 0x18C0, 0x18C0, 0x1080, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // #
    0x0080, 0x0080, 0x0080, 0x01E0, 0x0FF8, 0x1C98, 0x1880, 0x1880, 0x1880, 0x1C80, 0x0FC0, 0x07F0, 0x00F8, 0x009C, 0x008C, 0x008C, 0x009C, 0x1CB8, 0x1FF0, 0x0180, 0x0080, 0x0080, 0x0080, 0x0000, 0x0000, 0x0000, // $
    0x0000, 0x0000, 0x1E00, 0x3F00, 0x6300, 0x6180, 0x6180, 0x6300, 0x3F0E, 0x1C78, 0x01C0, 0x0F00, 0x387C, 0x20CE, 0x0186, 0x0186, 0x0186, 0x00CE, 0x007C, 0x0010, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // %
    0x0000, 0x07E0, 0x0FE0, 0x0C00, 0x1C00, 0x1C00, 0x0C00, 0x0E00, 0x0E00, 0x1F00, 0x3B86, 0x3186, 0x70C6, 0x60E6, 0x6076, 0x703C, 0x301C, 0x3C7C, 0x1FEE, 0x0786, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // &
    0x0000, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // quote
    0x0020, 0x0060, 0x00C0, 0x00C0, 0x0180, 0x0180, 0x0380, 0x0380, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0380, 0x0180, 0x0180, 0x01C0, 0x00C0, 0x00E0, 0x0060, 0x0000, 0x0000, 0x0000, // (
    0x0400, 0x0600, 0x0300, 0x0300, 0x0180, 0x0180, 0x01C0, 0x01C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x01C0, 0x0180, 0x0180, 0x0380, 0x0300, 0x0700, 0x0600, 0x0000, 0x0000, 0x0000, // )
    0x0000, 0x0180, 0x0180, 0x1188, 0x1DB8, 0x07E0, 0x03C0, 0x07E0, 0x1DB8, 0x1188, 0x0180, 0x0180, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // *
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x7FFE, 0x3FFC, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // +
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x03C0, 0x03C0, 0x03C0, 0x0380, 0x0380, 0x0300, 0x0700, 0x0000, 0x0000, 0x0000, // ,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x07E0, 0x07E0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // -
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x03C0, 0x03C0, 0x03C0, 0x0180, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // .
    0x0000, 0x0018, 0x0018, 0x0038, 0x0030, 0x0070, 0x0060, 0x00E0, 0x00C0, 0x01C0, 0x0180, 0x0380, 0x0300, 0x0300, 0x0700, 0x0600, 0x0E00, 0x0C00, 0x1C00, 0x1800, 0x3800, 0x3000, 0x0000, 0x0000, 0x0000, 0x0000, // /
    0x0000, 0x07E0, 0x0FF0, 0x1C38, 0x1C38, 0x1818, 0x381C, 0x381C, 0x381C, 0x399C, 0x3BDC, 0x399C, 0x381C, 0x381C, 0x381C, 0x1818, 0x1C38, 0x0E70, 0x0FF0, 0x03C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // 0
    0x0000, 0x03C0, 0x0FC0, 0x1FC0, 0x01C0, 0x01C0, 0x01C0, 0x01C0, 0x01C0, 0x01C0, 0x01C0, 0x01C0, 0x01C0, 0x01C0, 0x01C0, 0x01C0, 0x01C0, 0x0FF8, 0x0FFC, 0x0FF8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // 1
    0x0000, 0x0FC0, 0x3FF0, 0x3878, 0x0038, 0x0018, 0x0018, 0x0018, 0x0038, 0x0070, 0x0060, 0x00E0, 0x01C0, 0x0380, 0x0700, 0x0E00, 0x1C00, 0x3FF8, 0x3FFC, 0x1FF8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // 2
    0x0000, 0x1FC0, 0x1FF0, 0x1078, 0x0038, 0x0018, 0x0018, 0x0038, 0x0070, 0x07E0, 0x07F0, 0x0038, 0x0018, 0x001C, 0x001C, 0x001C, 0x0038, 0x3878, 0x3FF0, 0x0FC0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // 3
    0x0000, 0x0070, 0x00F0, 0x00F0, 0x01F0, 0x0370, 0x0370, 0x0670, 0x0E70, 0x0C70, 0x1870, 0x1870, 0x3070, 0x3FFC, 0x3FFC, 0x0070, 0x0070, 0x0070, 0x0070, 0x0030, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // 4
    0x0000, 0x1FF0, 0x1FF0, 0x1800, 0x1800, 0x1800, 0x1800, 0x1B80, 0x1FE0, 0x1FF0, 0x0038, 0x0018, 0x001C, 0x001C, 0x001C, 0x0018, 0x0038, 0x3870, 0x3FE0, 0x1FC0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // 5
    0x0000, 0x03F0, 0x07F8, 0x0E00, 0x1C00, 0x1800, 0x3800, 0x39C0, 0x3FF0, 0x3FF8, 0x3C18, 0x381C, 0x381C, 0x381C, 0x381C, 0x181C, 0x1C18, 0x1E38, 0x0FF0, 0x03C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // 6
    0x0000, 0x3FFC, 0x3FFC, 0x0018, 0x0038, 0x0030, 0x0030, 0x0070, 0x0060, 0x00E0, 0x00E0, 0x00C0, 0x01C0, 0x0180, 0x0380, 0x0380, 0x0300, 0x0700, 0x0700, 0x0600, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // 7
    0x0000, 0x07E0, 0x0FF0, 0x1C38, 0x1818, 0x381C, 0x1818, 0x1818, 0x0C30, 0x07E0, 0x0FF0, 0x1C38, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x1C38, 0x0FF0, 0x03C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // 8
    0x0000, 0x07C0, 0x0FF0, 0x1C38, 0x3838, 0x3818, 0x381C, 0x381C, 0x381C, 0x381C, 0x183C, 0x1FFC, 0x0FDC, 0x001C, 0x0018, 0x0018, 0x0038, 0x18F0, 0x1FE0, 0x0F80, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // 9
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0180, 0x03C0, 0x03C0, 0x03C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x03C0, 0x03C0, 0x03C0, 0x0180, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // :
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0180, 0x03C0, 0x03C0, 0x03C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x03C0, 0x03C0, 0x03C0, 0x0380, 0x0380, 0x0300, 0x0700, 0x0000, 0x0000, 0x0000, // ;
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x000E, 0x007C, 0x01F8, 0x0FC0, 0x3E00, 0x7800, 0x3C00, 0x0F80, 0x03F0, 0x007C, 0x001E, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // <
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x3FFC, 0x7FFE, 0x0000, 0x0000, 0x0000, 0x7FFE, 0x7FFE, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // =
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x7000, 0x3E00, 0x1F80, 0x03F0, 0x007C, 0x001E, 0x003C, 0x01F0, 0x0FC0, 0x3E00, 0x7800, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // >
    0x0000, 0x07E0, 0x0FF0, 0x1C38, 0x0038, 0x0018, 0x0038, 0x0030, 0x0070, 0x00E0, 0x01C0, 0x0180, 0x0380, 0x0380, 0x0100, 0x0000, 0x0180, 0x0380, 0x0380, 0x0180, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // ?
    0x0000, 0x0000, 0x00C0, 0x07F8, 0x0E1C, 0x180C, 0x3006, 0x3006, 0x61FE, 0x63FE, 0x630E, 0x6306, 0x6706, 0x6706, 0x6306, 0x630E, 0x61FE, 0x30F6, 0x3000, 0x1800, 0x1C00, 0x0F98, 0x03F8, 0x0000, 0x0000, 0x0000, // @
    0x0000, 0x0180, 0x03C0, 0x03C0, 0x03C0, 0x0660, 0x0660, 0x0660, 0x0E70, 0x0C30, 0x0C30, 0x1C38, 0x1C38, 0x1FF8, 0x3FFC, 0x381C, 0x300C, 0x300C, 0x700E, 0x6006, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // A
    0x0000, 0x1FC0, 0x3FF0, 0x3878, 0x381C, 0x381C, 0x381C, 0x3818, 0x3838, 0x3FE0, 0x3FF8, 0x381C, 0x381C, 0x380C, 0x380C, 0x380C, 0x381C, 0x3FF8, 0x3FF0, 0x1F80, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // B
    0x0000, 0x01F8, 0x07FC, 0x0E0C, 0x1C00, 0x1C00, 0x1800, 0x3800, 0x3800, 0x3800, 0x3800, 0x3800, 0x3800, 0x3800, 0x1800, 0x1C00, 0x1C00, 0x0F1C, 0x07FC, 0x01F0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // C
    0x0000, 0x3F00, 0x3FE0, 0x39F0, 0x3838, 0x3838, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x3818, 0x3838, 0x3838, 0x3FF0, 0x3FE0, 0x1E00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // D
    0x0000, 0x1FFC, 0x1FFC, 0x1800, 0x1800, 0x1800, 0x1800, 0x1800, 0x1800, 0x1FF8, 0x1FF8, 0x1800, 0x1800, 0x1800, 0x1800, 0x1800, 0x1800, 0x1FFC, 0x1FFC, 0x1FFC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // E
    0x0000, 0x1FFC, 0x1FFC, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1FF8, 0x1FF8, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x0800, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // F
    0x0000, 0x03F0, 0x07F8, 0x0E18, 0x1C00, 0x1800, 0x3800, 0x3800, 0x3000, 0x3000, 0x307C, 0x307C, 0x301C, 0x381C, 0x381C, 0x181C, 0x1C1C, 0x0E1C, 0x07F8, 0x01E0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // G
    0x0000, 0x300C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x3FFC, 0x3FFC, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x1008, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // H
    0x0000, 0x1FF8, 0x1FF8, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x1FF8, 0x1FF8, 0x1FF8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // I
    0x0000, 0x07F0, 0x07F0, 0x0030, 0x0030, 0x0030, 0x0030, 0x0030, 0x0030, 0x0030, 0x0030, 0x0030, 0x0030, 0x0030, 0x0030, 0x0070, 0x2070, 0x38E0, 0x3FE0, 0x0F80, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // J
    0x0000, 0x300E, 0x381C, 0x3838, 0x3870, 0x38E0, 0x39C0, 0x3B80, 0x3F00, 0x3F80, 0x3F80, 0x39C0, 0x38E0, 0x38E0, 0x3870, 0x3838, 0x3838, 0x381C, 0x380E, 0x1006, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // K
    0x0000, 0x1800, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1FFC, 0x1FFE, 0x1FFC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // L
    0x0000, 0x381C, 0x781E, 0x7C3E, 0x7C3E, 0x742E, 0x766E, 0x766E, 0x724E, 0x73CE, 0x73CE, 0x718E, 0x718E, 0x700E, 0x700E, 0x700E, 0x700E, 0x700E, 0x700E, 0x2004, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // M
    0x0000, 0x380C, 0x3C1C, 0x3C1C, 0x3E1C, 0x3E1C, 0x3E1C, 0x3B1C, 0x3B1C, 0x399C, 0x399C, 0x39DC, 0x38DC, 0x38DC, 0x387C, 0x387C, 0x387C, 0x383C, 0x383C, 0x1018, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // N
    0x0000, 0x07E0, 0x0FF0, 0x1C38, 0x1818, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x1818, 0x1C38, 0x1E78, 0x0FF0, 0x03C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // O
    0x0000, 0x1FE0, 0x1FF8, 0x187C, 0x181C, 0x180C, 0x180E, 0x180C, 0x181C, 0x183C, 0x1FF8, 0x1FF0, 0x1800, 0x1800, 0x1800, 0x1800, 0x1800, 0x1800, 0x1800, 0x1800, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // P
    0x0000, 0x07E0, 0x0FF0, 0x1C38, 0x1818, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x1818, 0x1C38, 0x1E78, 0x0FF0, 0x03E0, 0x0070, 0x0038, 0x0010, 0x0000, 0x0000, 0x0000, // Q
    0x0000, 0x3FC0, 0x3FF0, 0x3878, 0x3838, 0x3818, 0x381C, 0x3818, 0x3838, 0x3878, 0x3FE0, 0x3FE0, 0x3870, 0x3838, 0x3838, 0x381C, 0x381C, 0x380E, 0x380E, 0x1006, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // R
    0x0000, 0x07F0, 0x0FF8, 0x1C18, 0x3800, 0x3800, 0x3800, 0x3800, 0x1E00, 0x1FC0, 0x07F0, 0x00F8, 0x001C, 0x001C, 0x001C, 0x001C, 0x001C, 0x3838, 0x1FF0, 0x07C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // S
    0x0000, 0x7FFE, 0x7FFE, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // T
    0x0000, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x1818, 0x1C38, 0x0FF0, 0x03C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // U
    0x0000, 0x700E, 0x300C, 0x300C, 0x381C, 0x381C, 0x1818, 0x1818, 0x1C38, 0x0C30, 0x0C30, 0x0C30, 0x0E70, 0x0660, 0x0660, 0x07E0, 0x03C0, 0x03C0, 0x03C0, 0x0180, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // V
    0x0000, 0x6006, 0x6006, 0x6006, 0x6006, 0x6006, 0x718E, 0x73CE, 0x73CE, 0x33CC, 0x33CC, 0x324C, 0x366C, 0x366C, 0x3E7C, 0x1C38, 0x1C38, 0x1C38, 0x1C38, 0x0810, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // W
    0x0000, 0x300E, 0x381C, 0x1C1C, 0x1C38, 0x0E30, 0x0670, 0x0760, 0x03C0, 0x01C0, 0x03C0, 0x03C0, 0x0760, 0x0E70, 0x0C30, 0x1C38, 0x181C, 0x381C, 0x700E, 0x6006, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // X
    0x0000, 0x700E, 0x300C, 0x381C, 0x1818, 0x1C38, 0x0C70, 0x0E70, 0x07E0, 0x03C0, 0x03C0, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // Y
    0x0000, 0x1FFC, 0x1FFE, 0x001C, 0x001C, 0x0038, 0x0030, 0x0070, 0x00E0, 0x00C0, 0x01C0, 0x0380, 0x0300, 0x0700, 0x0E00, 0x0C00, 0x1C00, 0x1FFC, 0x3FFE, 0x1FFC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // Z
    0x01E0, 0x03E0, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x03E0, 0x03E0, 0x0000, 0x0000, 0x0000, // [
    0x0000, 0x3000, 0x3800, 0x1800, 0x1C00, 0x0C00, 0x0E00, 0x0600, 0x0600, 0x0300, 0x0300, 0x0380, 0x0180, 0x01C0, 0x00C0, 0x00E0, 0x0060, 0x0070, 0x0030, 0x0038, 0x0018, 0x0018, 0x0000, 0x0000, 0x0000, 0x0000, // backslash
    0x0780, 0x07C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x07C0, 0x07C0, 0x0000, 0x0000, 0x0000, // ]
    0x0000, 0x0180, 0x03C0, 0x07E0, 0x0E70, 0x1C38, 0x1818, 0x300C, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // ^
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x7FFE, 0x7FFE, // _
    0x0600, 0x0300, 0x0380, 0x0180, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // `
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0380, 0x1FF0, 0x1FF8, 0x1018, 0x0018, 0x0018, 0x07FC, 0x1FFC, 0x381C, 0x381C, 0x301C, 0x383C, 0x387C, 0x1FDC, 0x0788, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // a
    0x1800, 0x1800, 0x1800, 0x1800, 0x1800, 0x18C0, 0x1BF0, 0x1FF8, 0x1C18, 0x1C1C, 0x181C, 0x180C, 0x180C, 0x180C, 0x181C, 0x181C, 0x1C18, 0x1E38, 0x1BF0, 0x19E0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // b
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x00E0, 0x03F8, 0x07FC, 0x0E00, 0x1C00, 0x1C00, 0x1800, 0x1800, 0x1800, 0x1800, 0x1C00, 0x0C00, 0x0F0C, 0x07F8, 0x01F0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // c
    0x0018, 0x0018, 0x0018, 0x0018, 0x0018, 0x0318, 0x0FD8, 0x1FF8, 0x1838, 0x3838, 0x3818, 0x3018, 0x3018, 0x3018, 0x3818, 0x3818, 0x1838, 0x1C78, 0x0FD8, 0x0798, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // d
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0180, 0x07F0, 0x0FF8, 0x1C18, 0x181C, 0x380C, 0x3FFC, 0x3FFC, 0x3000, 0x3000, 0x3800, 0x1800, 0x1E1C, 0x0FF8, 0x03F0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // e
    0x0038, 0x00FC, 0x01C0, 0x0180, 0x0380, 0x0380, 0x1FFC, 0x1FF8, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0380, 0x0100, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // f
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0300, 0x0FD8, 0x1FF8, 0x1838, 0x3838, 0x3818, 0x3018, 0x3018, 0x3018, 0x3818, 0x3818, 0x1838, 0x1E78, 0x0FD8, 0x0318, 0x0018, 0x0038, 0x0830, 0x1FF0, 0x0FC0, 0x0000, // g
    0x1800, 0x1800, 0x1800, 0x1800, 0x1800, 0x18C0, 0x1BF0, 0x1FF8, 0x1C38, 0x1818, 0x1818, 0x1818, 0x1818, 0x1818, 0x1818, 0x1818, 0x1818, 0x1818, 0x1818, 0x1818, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // h
    0x0180, 0x0180, 0x0180, 0x0000, 0x0000, 0x0000, 0x1F80, 0x0F80, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x1FFC, 0x1FF8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // i
    0x00C0, 0x00C0, 0x00C0, 0x0000, 0x0000, 0x0000, 0x0FC0, 0x0FC0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x00C0, 0x01C0, 0x01C0, 0x1F80, 0x1E00, 0x0000, // j
    0x0800, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C00, 0x1C1C, 0x1C38, 0x1C70, 0x1CC0, 0x1D80, 0x1F80, 0x1FC0, 0x1CE0, 0x1C70, 0x1C30, 0x1C38, 0x1C1C, 0x1C0C, 0x0804, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // k
    0x1F00, 0x3F00, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0380, 0x01F8, 0x01F8, 0x0078, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // l
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0210, 0x3F7C, 0x3FFC, 0x318C, 0x318C, 0x318C, 0x318C, 0x318C, 0x318C, 0x318C, 0x318C, 0x318C, 0x318C, 0x318C, 0x2184, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // m
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x00C0, 0x1BF0, 0x1FF8, 0x1C38, 0x1818, 0x1818, 0x1818, 0x1818, 0x1818, 0x1818, 0x1818, 0x1818, 0x1818, 0x1818, 0x1818, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // n
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0180, 0x07E0, 0x1FF0, 0x1C38, 0x1818, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x381C, 0x1818, 0x1C38, 0x0FF0, 0x03C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // o
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x00C0, 0x1BF0, 0x1FF8, 0x1C18, 0x1C1C, 0x181C, 0x181C, 0x180C, 0x180C, 0x181C, 0x181C, 0x1C18, 0x1E38, 0x1BF0, 0x19E0, 0x1800, 0x1800, 0x1800, 0x1800, 0x1800, 0x0000, // p
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0100, 0x0FD8, 0x0FF8, 0x1C38, 0x1818, 0x3818, 0x3818, 0x3818, 0x3818, 0x3818, 0x3818, 0x1838, 0x1C78, 0x0FF8, 0x0798, 0x0018, 0x0018, 0x0018, 0x0018, 0x0018, 0x0000, // q
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0010, 0x067C, 0x07FE, 0x0780, 0x0700, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // r
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x01C0, 0x07F0, 0x0FF0, 0x1C00, 0x1C00, 0x1C00, 0x0F00, 0x07F0, 0x01F8, 0x0038, 0x0018, 0x0018, 0x1838, 0x1FF0, 0x07C0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // s
    0x0000, 0x0000, 0x0300, 0x0300, 0x0300, 0x0300, 0x3FF8, 0x3FF8, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0300, 0x0380, 0x01F8, 0x0078, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // t
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1818, 0x1818, 0x1818, 0x1818, 0x1818, 0x1818, 0x1818, 0x1818, 0x1818, 0x1818, 0x1C38, 0x1C78, 0x0FD8, 0x0798, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // u
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x300C, 0x381C, 0x1818, 0x1818, 0x1C38, 0x0C30, 0x0C30, 0x0E70, 0x0660, 0x0660, 0x07E0, 0x03C0, 0x03C0, 0x0180, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // v
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x6006, 0x6006, 0x6006, 0x700E, 0x318C, 0x318C, 0x33CC, 0x33CC, 0x3A5C, 0x1E78, 0x1E78, 0x1C38, 0x1C38, 0x0810, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // w
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x381C, 0x1C38, 0x0C30, 0x0660, 0x07E0, 0x03C0, 0x0180, 0x03C0, 0x07E0, 0x0E70, 0x0C30, 0x1818, 0x381C, 0x300C, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // x
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x300C, 0x380C, 0x181C, 0x1C18, 0x0C38, 0x0C30, 0x0E30, 0x0670, 0x0660, 0x0360, 0x03C0, 0x03C0, 0x01C0, 0x0180, 0x0180, 0x0380, 0x0700, 0x1E00, 0x1C00, 0x0000, // y
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1FF8, 0x0FF8, 0x0038, 0x0070, 0x00E0, 0x00C0, 0x0180, 0x0380, 0x0700, 0x0E00, 0x0C00, 0x1C00, 0x1FF8, 0x1FF8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // z
    0x0030, 0x00F8, 0x01C0, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0380, 0x1F00, 0x1F00, 0x0380, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x01C0, 0x00F8, 0x0030, 0x0000, 0x0000, // {
    0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, // |
    0x0800, 0x1F00, 0x0380, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x01C0, 0x00F8, 0x00F8, 0x01C0, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0380, 0x1F00, 0x0C00, 0x0000, 0x0000, // }
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1F00, 0x3FFE, 0x61FC, 0x0030, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // ~
];
