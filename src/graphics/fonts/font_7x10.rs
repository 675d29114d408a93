//! 7x10 点阵字模，每行一个 `u16`，最高位为最左列
#[rustfmt::skip]
pub(super) static FONT_7X10_DATA: [u16; 950] = [
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // space
    0x0000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x0000, 0x2000, 0x0000, 0x0000, // !
    0x0000, 0x5000, 0x5000, 0x5000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // "
    0x0000, 0x5000, 0x5000, 0xF800, 0x5000, 0xF800, 0x5000, 0x5000, 0x0000, 0x0000, // #
    0x0000, 0x2000, 0x7000, 0xA000, 0x7000, 0x2800, 0x7000, 0x2000, 0x0000, 0x0000, // $
    0x0000, 0x4800, 0xA800, 0x5000, 0x2000, 0x5000, 0xA800, 0x9000, 0x0000, 0x0000, // %
    0x0000, 0x4000, 0xA000, 0xA000, 0x4000, 0xA800, 0x9000, 0x6800, 0x0000, 0x0000, // &
    0x0000, 0x2000, 0x2000, 0x2000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // quote
    0x0000, 0x1000, 0x2000, 0x4000, 0x4000, 0x4000, 0x2000, 0x1000, 0x0000, 0x0000, // (
    0x0000, 0x4000, 0x2000, 0x1000, 0x1000, 0x1000, 0x2000, 0x4000, 0x0000, 0x0000, // )
    0x0000, 0x0000, 0x8800, 0x5000, 0xF800, 0x5000, 0x8800, 0x0000, 0x0000, 0x0000, // *
    0x0000, 0x0000, 0x2000, 0x2000, 0xF800, 0x2000, 0x2000, 0x0000, 0x0000, 0x0000, // +
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x3000, 0x2000, 0x4000, 0x0000, // ,
    0x0000, 0x0000, 0x0000, 0x0000, 0xF800, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // -
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x2000, 0x7000, 0x2000, 0x0000, // .
    0x0000, 0x0800, 0x0800, 0x1000, 0x2000, 0x4000, 0x8000, 0x8000, 0x0000, 0x0000, // /
    0x0000, 0x2000, 0x5000, 0x8800, 0x8800, 0x8800, 0x5000, 0x2000, 0x0000, 0x0000, // 0
    0x0000, 0x2000, 0x6000, 0xA000, 0x2000, 0x2000, 0x2000, 0xF800, 0x0000, 0x0000, // 1
    0x0000, 0x7000, 0x8800, 0x0800, 0x3000, 0x4000, 0x8000, 0xF800, 0x0000, 0x0000, // 2
    0x0000, 0xF800, 0x0800, 0x1000, 0x3000, 0x0800, 0x8800, 0x7000, 0x0000, 0x0000, // 3
    0x0000, 0x1000, 0x3000, 0x5000, 0x9000, 0xF800, 0x1000, 0x1000, 0x0000, 0x0000, // 4
    0x0000, 0xF800, 0x8000, 0xB000, 0xC800, 0x0800, 0x8800, 0x7000, 0x0000, 0x0000, // 5
    0x0000, 0x3000, 0x4000, 0x8000, 0xB000, 0xC800, 0x8800, 0x7000, 0x0000, 0x0000, // 6
    0x0000, 0xF800, 0x0800, 0x1000, 0x1000, 0x2000, 0x4000, 0x4000, 0x0000, 0x0000, // 7
    0x0000, 0x7000, 0x8800, 0x8800, 0x7000, 0x8800, 0x8800, 0x7000, 0x0000, 0x0000, // 8
    0x0000, 0x7000, 0x8800, 0x9800, 0x6800, 0x0800, 0x1000, 0x6000, 0x0000, 0x0000, // 9
    0x0000, 0x0000, 0x2000, 0x7000, 0x2000, 0x0000, 0x2000, 0x7000, 0x2000, 0x0000, // :
    0x0000, 0x0000, 0x2000, 0x7000, 0x2000, 0x0000, 0x3000, 0x2000, 0x4000, 0x0000, // ;
    0x0000, 0x0800, 0x1000, 0x2000, 0x4000, 0x2000, 0x1000, 0x0800, 0x0000, 0x0000, // <
    0x0000, 0x0000, 0x0000, 0xF800, 0x0000, 0xF800, 0x0000, 0x0000, 0x0000, 0x0000, // =
    0x0000, 0x4000, 0x2000, 0x1000, 0x0800, 0x1000, 0x2000, 0x4000, 0x0000, 0x0000, // >
    0x0000, 0x7000, 0x8800, 0x1000, 0x2000, 0x2000, 0x0000, 0x2000, 0x0000, 0x0000, // ?
    0x0000, 0x7000, 0x8800, 0x9800, 0xA800, 0xB000, 0x8000, 0x7000, 0x0000, 0x0000, // @
    0x0000, 0x2000, 0x5000, 0x8800, 0x8800, 0xF800, 0x8800, 0x8800, 0x0000, 0x0000, // A
    0x0000, 0xF000, 0x4800, 0x4800, 0x7000, 0x4800, 0x4800, 0xF000, 0x0000, 0x0000, // B
    0x0000, 0x7000, 0x8800, 0x8000, 0x8000, 0x8000, 0x8800, 0x7000, 0x0000, 0x0000, // C
    0x0000, 0xF000, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0xF000, 0x0000, 0x0000, // D
    0x0000, 0xF800, 0x8000, 0x8000, 0xF000, 0x8000, 0x8000, 0xF800, 0x0000, 0x0000, // E
    0x0000, 0xF800, 0x8000, 0x8000, 0xF000, 0x8000, 0x8000, 0x8000, 0x0000, 0x0000, // F
    0x0000, 0x7000, 0x8800, 0x8000, 0x8000, 0x9800, 0x8800, 0x7000, 0x0000, 0x0000, // G
    0x0000, 0x8800, 0x8800, 0x8800, 0xF800, 0x8800, 0x8800, 0x8800, 0x0000, 0x0000, // H
    0x0000, 0x7000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x7000, 0x0000, 0x0000, // I
    0x0000, 0x3800, 0x1000, 0x1000, 0x1000, 0x1000, 0x9000, 0x6000, 0x0000, 0x0000, // J
    0x0000, 0x8800, 0x9000, 0xA000, 0xC000, 0xA000, 0x9000, 0x8800, 0x0000, 0x0000, // K
    0x0000, 0x8000, 0x8000, 0x8000, 0x8000, 0x8000, 0x8000, 0xF800, 0x0000, 0x0000, // L
    0x0000, 0x8800, 0x8800, 0xD800, 0xA800, 0x8800, 0x8800, 0x8800, 0x0000, 0x0000, // M
    0x0000, 0x8800, 0x8800, 0xC800, 0xA800, 0x9800, 0x8800, 0x8800, 0x0000, 0x0000, // N
    0x0000, 0x7000, 0x8800, 0x8800, 0x8800, 0x8800, 0x8800, 0x7000, 0x0000, 0x0000, // O
    0x0000, 0xF000, 0x8800, 0x8800, 0xF000, 0x8000, 0x8000, 0x8000, 0x0000, 0x0000, // P
    0x0000, 0x7000, 0x8800, 0x8800, 0x8800, 0x8800, 0xA800, 0x7000, 0x0800, 0x0000, // Q
    0x0000, 0xF000, 0x8800, 0x8800, 0xF000, 0xA000, 0x9000, 0x8800, 0x0000, 0x0000, // R
    0x0000, 0x7000, 0x8800, 0x8000, 0x7000, 0x0800, 0x8800, 0x7000, 0x0000, 0x0000, // S
    0x0000, 0xF800, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x0000, 0x0000, // T
    0x0000, 0x8800, 0x8800, 0x8800, 0x8800, 0x8800, 0x8800, 0x7000, 0x0000, 0x0000, // U
    0x0000, 0x8800, 0x8800, 0x8800, 0x5000, 0x5000, 0x5000, 0x2000, 0x0000, 0x0000, // V
    0x0000, 0x8800, 0x8800, 0x8800, 0xA800, 0xA800, 0xD800, 0x8800, 0x0000, 0x0000, // W
    0x0000, 0x8800, 0x8800, 0x5000, 0x2000, 0x5000, 0x8800, 0x8800, 0x0000, 0x0000, // X
    0x0000, 0x8800, 0x8800, 0x5000, 0x2000, 0x2000, 0x2000, 0x2000, 0x0000, 0x0000, // Y
    0x0000, 0xF800, 0x0800, 0x1000, 0x2000, 0x4000, 0x8000, 0xF800, 0x0000, 0x0000, // Z
    0x0000, 0x7000, 0x4000, 0x4000, 0x4000, 0x4000, 0x4000, 0x7000, 0x0000, 0x0000, // [
    0x0000, 0x8000, 0x8000, 0x4000, 0x2000, 0x1000, 0x0800, 0x0800, 0x0000, 0x0000, // backslash
    0x0000, 0x7000, 0x1000, 0x1000, 0x1000, 0x1000, 0x1000, 0x7000, 0x0000, 0x0000, // ]
    0x0000, 0x2000, 0x5000, 0x8800, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // ^
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xF800, 0x0000, // _
    0x2000, 0x1000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // `
    0x0000, 0x0000, 0x0000, 0x7000, 0x0800, 0x7800, 0x8800, 0x7800, 0x0000, 0x0000, // a
    0x0000, 0x8000, 0x8000, 0xB000, 0xC800, 0x8800, 0xC800, 0xB000, 0x0000, 0x0000, // b
    0x0000, 0x0000, 0x0000, 0x7000, 0x8800, 0x8000, 0x8800, 0x7000, 0x0000, 0x0000, // c
    0x0000, 0x0800, 0x0800, 0x6800, 0x9800, 0x8800, 0x9800, 0x6800, 0x0000, 0x0000, // d
    0x0000, 0x0000, 0x0000, 0x7000, 0x8800, 0xF800, 0x8000, 0x7000, 0x0000, 0x0000, // e
    0x0000, 0x3000, 0x4800, 0x4000, 0xF000, 0x4000, 0x4000, 0x4000, 0x0000, 0x0000, // f
    0x0000, 0x0000, 0x0000, 0x7800, 0x8800, 0x8800, 0x7800, 0x0800, 0x8800, 0x7000, // g
    0x0000, 0x8000, 0x8000, 0xB000, 0xC800, 0x8800, 0x8800, 0x8800, 0x0000, 0x0000, // h
    0x0000, 0x2000, 0x0000, 0x6000, 0x2000, 0x2000, 0x2000, 0x7000, 0x0000, 0x0000, // i
    0x0000, 0x0800, 0x0000, 0x1800, 0x0800, 0x0800, 0x0800, 0x4800, 0x4800, 0x3000, // j
    0x0000, 0x8000, 0x8000, 0x8800, 0x9000, 0xE000, 0x9000, 0x8800, 0x0000, 0x0000, // k
    0x0000, 0x6000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x7000, 0x0000, 0x0000, // l
    0x0000, 0x0000, 0x0000, 0xD000, 0xA800, 0xA800, 0xA800, 0x8800, 0x0000, 0x0000, // m
    0x0000, 0x0000, 0x0000, 0xB000, 0xC800, 0x8800, 0x8800, 0x8800, 0x0000, 0x0000, // n
    0x0000, 0x0000, 0x0000, 0x7000, 0x8800, 0x8800, 0x8800, 0x7000, 0x0000, 0x0000, // o
    0x0000, 0x0000, 0x0000, 0xB000, 0xC800, 0x8800, 0xC800, 0xB000, 0x8000, 0x8000, // p
    0x0000, 0x0000, 0x0000, 0x6800, 0x9800, 0x8800, 0x9800, 0x6800, 0x0800, 0x0800, // q
    0x0000, 0x0000, 0x0000, 0xB000, 0xC800, 0x8000, 0x8000, 0x8000, 0x0000, 0x0000, // r
    0x0000, 0x0000, 0x0000, 0x7000, 0x8000, 0x7000, 0x0800, 0xF000, 0x0000, 0x0000, // s
    0x0000, 0x4000, 0x4000, 0xF000, 0x4000, 0x4000, 0x4800, 0x3000, 0x0000, 0x0000, // t
    0x0000, 0x0000, 0x0000, 0x8800, 0x8800, 0x8800, 0x9800, 0x6800, 0x0000, 0x0000, // u
    0x0000, 0x0000, 0x0000, 0x8800, 0x8800, 0x5000, 0x5000, 0x2000, 0x0000, 0x0000, // v
    0x0000, 0x0000, 0x0000, 0x8800, 0x8800, 0xA800, 0xA800, 0x5000, 0x0000, 0x0000, // w
    0x0000, 0x0000, 0x0000, 0x8800, 0x5000, 0x2000, 0x5000, 0x8800, 0x0000, 0x0000, // x
    0x0000, 0x0000, 0x0000, 0x8800, 0x8800, 0x9800, 0x6800, 0x0800, 0x8800, 0x7000, // y
    0x0000, 0x0000, 0x0000, 0xF800, 0x1000, 0x2000, 0x4000, 0xF800, 0x0000, 0x0000, // z
    0x0000, 0x1800, 0x2000, 0x1000, 0x6000, 0x1000, 0x2000, 0x1800, 0x0000, 0x0000, // {
    0x0000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x0000, 0x0000, // |
    0x0000, 0x6000, 0x1000, 0x2000, 0x1800, 0x2000, 0x1000, 0x6000, 0x0000, 0x0000, // }
    0x0000, 0x4800, 0xA800, 0x9000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // ~
];
