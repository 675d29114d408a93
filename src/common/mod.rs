// src/common/mod.rs

/// 公共模块定义
///
/// 本模块定义了驱动的配置与错误类型，供图形层和驱动层共用
pub mod config;
pub mod error;

pub use config::{DisplayConfig, DisplaySize};
pub use error::{DisplayError, DisplayResult, GraphicsError, GraphicsResult};
