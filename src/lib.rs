//! SSD1306 单色 OLED 驱动
//!
//! 在内存中维护按页打包的帧缓冲区，提供直线、矩形、三角形、圆与文本等绘制原语，
//! 并通过寄存器寻址的 I2C 链路把缓冲区按页刷新到屏幕。
//!
//! 典型用法：
//! 1. 用 [`I2cTransport`] 包装一个 `embedded_hal::i2c::I2c` 实现
//! 2. 构造 [`Ssd1306`] 并调用 [`Ssd1306::init`]
//! 3. 在缓冲区中绘制，最后调用 [`Ssd1306::update_screen`]

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod common;
pub mod drivers;
pub mod graphics;

pub use common::config::{DisplayConfig, DisplaySize};
pub use common::error::{DisplayError, DisplayResult, GraphicsError, GraphicsResult};
pub use drivers::protocol::ScrollDirection;
pub use drivers::ssd1306::{DriverState, Ssd1306};
pub use drivers::transport::{I2cTransport, Transport, TransportError};
pub use graphics::color::Color;
pub use graphics::fonts::{FONT_7X10, FONT_11X18, FONT_16X26, FontDef, Glyph, GlyphTable};
pub use graphics::framebuffer::Framebuffer;
pub use graphics::text::StringSize;
