//! SSD1306 命令字节
//!
//! 命令经 I2C 以控制字节 [`CONTROL_COMMAND`] 逐字节发送，显存数据以 [`CONTROL_DATA`] 批量发送

/// 控制字节：后续为命令
pub const CONTROL_COMMAND: u8 = 0x00;
/// 控制字节：后续为显存数据
pub const CONTROL_DATA: u8 = 0x40;

// 基本命令
pub const DISPLAY_OFF: u8 = 0xAE;
pub const DISPLAY_ON: u8 = 0xAF;
/// 对比度，后跟 1 字节参数
pub const SET_CONTRAST: u8 = 0x81;
/// 显示跟随显存内容
pub const ENTIRE_DISPLAY_RESUME: u8 = 0xA4;
pub const NORMAL_DISPLAY: u8 = 0xA6;
pub const INVERT_DISPLAY: u8 = 0xA7;

// 寻址
/// 寻址模式，后跟 1 字节参数
pub const SET_MEMORY_ADDRESSING_MODE: u8 = 0x20;
/// 页寻址模式
pub const PAGE_ADDRESSING_MODE: u8 = 0x10;
/// 页起始地址，低 3 位为页号
pub const SET_PAGE_START: u8 = 0xB0;
/// 列地址低 4 位
pub const SET_LOW_COLUMN: u8 = 0x00;
/// 列地址高 4 位
pub const SET_HIGH_COLUMN: u8 = 0x10;

// 硬件配置
/// 显示起始行，低 6 位为行号
pub const SET_START_LINE: u8 = 0x40;
/// 段重映射：列 127 映射到 SEG0
pub const SEGMENT_REMAP: u8 = 0xA1;
/// 复用比，后跟 `行数 - 1`
pub const SET_MULTIPLEX_RATIO: u8 = 0xA8;
/// COM 扫描方向：从 COM[N-1] 到 COM0
pub const COM_SCAN_DEC: u8 = 0xC8;
/// 显示偏移，后跟 1 字节参数
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
/// COM 引脚配置，后跟 1 字节参数
pub const SET_COM_PINS: u8 = 0xDA;

// 时序与驱动
pub const SET_CLOCK_DIVIDER: u8 = 0xD5;
pub const SET_PRECHARGE: u8 = 0xD9;
pub const SET_VCOMH: u8 = 0xDB;
/// 电荷泵，后跟 [`CHARGE_PUMP_ENABLE`] 或 [`CHARGE_PUMP_DISABLE`]
pub const CHARGE_PUMP: u8 = 0x8D;
pub const CHARGE_PUMP_ENABLE: u8 = 0x14;
pub const CHARGE_PUMP_DISABLE: u8 = 0x10;

// 滚动
pub const RIGHT_HORIZONTAL_SCROLL: u8 = 0x26;
pub const LEFT_HORIZONTAL_SCROLL: u8 = 0x27;
pub const VERTICAL_AND_RIGHT_HORIZONTAL_SCROLL: u8 = 0x29;
pub const VERTICAL_AND_LEFT_HORIZONTAL_SCROLL: u8 = 0x2A;
pub const DEACTIVATE_SCROLL: u8 = 0x2E;
pub const ACTIVATE_SCROLL: u8 = 0x2F;
/// 垂直滚动区域，后跟固定行数与滚动行数
pub const SET_VERTICAL_SCROLL_AREA: u8 = 0xA3;
/// 占位字节
pub const DUMMY: u8 = 0x00;
