// src/common/config.rs
use crate::common::error::GraphicsError;

/// 默认 7 位 I2C 地址（对应 8 位写地址 0x78）
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// 单次批量写入允许的最大负载字节数
pub const STAGING_CAPACITY: usize = 256;

/// 屏幕分辨率预设
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplaySize {
    Display128x64,
    Display128x32,
}

impl DisplaySize {
    pub const fn width(self) -> u16 {
        128
    }

    pub const fn height(self) -> u16 {
        match self {
            DisplaySize::Display128x64 => 64,
            DisplaySize::Display128x32 => 32,
        }
    }

    /// COM 引脚硬件配置（0xDA 命令的参数）
    pub const fn com_pins(self) -> u8 {
        match self {
            DisplaySize::Display128x64 => 0x12,
            DisplaySize::Display128x32 => 0x02,
        }
    }
}

/// 显示驱动配置
///
/// 除几何尺寸外，其余字段都直接对应初始化序列中的命令参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayConfig {
    /// 7 位 I2C 地址
    pub address: u8,
    pub size: DisplaySize,
    /// 对比度（0x81）
    pub contrast: u8,
    /// 时钟分频/振荡频率（0xD5）
    pub clock_divider: u8,
    /// 预充电周期（0xD9）
    pub precharge: u8,
    /// VCOMH 电平（0xDB）
    pub vcomh: u8,
    /// 探测设备的最大尝试次数
    pub probe_attempts: u8,
    /// 探测设备的总超时（毫秒）
    pub probe_timeout_ms: u32,
    /// 自动滚动的帧间隔字节
    pub scroll_interval: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            size: DisplaySize::Display128x64,
            contrast: 0xFF,
            clock_divider: 0xF0,
            precharge: 0x22,
            vcomh: 0x20,
            probe_attempts: 10,
            probe_timeout_ms: 2000,
            scroll_interval: 0x00,
        }
    }
}

impl DisplayConfig {
    pub fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    pub fn with_size(mut self, size: DisplaySize) -> Self {
        self.size = size;
        self
    }

    pub fn with_contrast(mut self, contrast: u8) -> Self {
        self.contrast = contrast;
        self
    }

    pub fn with_probe(mut self, attempts: u8, timeout_ms: u32) -> Self {
        self.probe_attempts = attempts;
        self.probe_timeout_ms = timeout_ms;
        self
    }

    pub fn with_scroll_interval(mut self, interval: u8) -> Self {
        self.scroll_interval = interval;
        self
    }

    pub fn width(&self) -> u16 {
        self.size.width()
    }

    pub fn height(&self) -> u16 {
        self.size.height()
    }

    /// 页数（每页 8 行）
    pub fn pages(&self) -> u8 {
        (self.height() / 8) as u8
    }

    /// 检查配置是否可用
    ///
    /// 地址必须是 7 位地址，探测至少尝试一次，且一页数据必须能放进暂存区
    pub fn validate(&self) -> Result<(), GraphicsError> {
        if self.address > 0x7F || self.probe_attempts == 0 {
            return Err(GraphicsError::InvalidParams);
        }
        if self.width() as usize > STAGING_CAPACITY || self.height() % 8 != 0 {
            return Err(GraphicsError::InvalidParams);
        }
        Ok(())
    }
}
