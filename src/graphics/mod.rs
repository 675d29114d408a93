//! 图形模块
//!
//! 帧缓冲区、光栅化、点阵字体与文本排版，不涉及任何总线访问

pub mod color;
#[cfg(feature = "graphics")]
pub mod draw_target;
pub mod fonts;
pub mod framebuffer;
pub mod primitives;
pub mod text;

pub use color::Color;
pub use framebuffer::Framebuffer;
pub use text::{Cursor, StringSize, measure_string};
