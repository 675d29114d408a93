//! SSD1306 命令序列
//!
//! 每个命令字节单独一次寄存器写入（控制字节 0x00），显存按页批量写入（控制字节 0x40）。
//! 这里只负责字节流本身，初始化状态由 [`super::ssd1306::Ssd1306`] 管理。

use log::{debug, trace};

use super::command::*;
use super::transport::{Transport, TransportError};
use crate::common::config::DisplayConfig;
use crate::common::error::{GraphicsError, GraphicsResult};
use crate::graphics::framebuffer::Framebuffer;

/// 水平滚动方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Right,
    Left,
}

impl ScrollDirection {
    fn horizontal_command(self) -> u8 {
        match self {
            ScrollDirection::Right => RIGHT_HORIZONTAL_SCROLL,
            ScrollDirection::Left => LEFT_HORIZONTAL_SCROLL,
        }
    }

    fn diagonal_command(self) -> u8 {
        match self {
            ScrollDirection::Right => VERTICAL_AND_RIGHT_HORIZONTAL_SCROLL,
            ScrollDirection::Left => VERTICAL_AND_LEFT_HORIZONTAL_SCROLL,
        }
    }
}

type LinkResult<E> = Result<(), TransportError<E>>;

/// 依次发送命令字节
pub fn send_commands<T: Transport>(
    transport: &mut T,
    address: u8,
    commands: &[u8],
) -> LinkResult<T::Error> {
    for &cmd in commands {
        transport.write_register(address, CONTROL_COMMAND, cmd)?;
    }
    Ok(())
}

/// 发送上电配置序列
pub fn configure<T: Transport>(transport: &mut T, config: &DisplayConfig) -> LinkResult<T::Error> {
    let multiplex = (config.height() - 1) as u8;
    let sequence = [
        DISPLAY_OFF,
        SET_MEMORY_ADDRESSING_MODE,
        PAGE_ADDRESSING_MODE,
        SET_PAGE_START,
        COM_SCAN_DEC,
        SET_LOW_COLUMN,
        SET_HIGH_COLUMN,
        SET_START_LINE,
        SET_CONTRAST,
        config.contrast,
        SEGMENT_REMAP,
        NORMAL_DISPLAY,
        SET_MULTIPLEX_RATIO,
        multiplex,
        ENTIRE_DISPLAY_RESUME,
        SET_DISPLAY_OFFSET,
        0x00,
        SET_CLOCK_DIVIDER,
        config.clock_divider,
        SET_PRECHARGE,
        config.precharge,
        SET_COM_PINS,
        config.size.com_pins(),
        SET_VCOMH,
        config.vcomh,
        CHARGE_PUMP,
        CHARGE_PUMP_ENABLE,
        DISPLAY_ON,
    ];

    debug!("configuring {}x{} panel", config.width(), config.height());
    send_commands(transport, config.address, &sequence)
}

/// 按页把帧缓冲区写入显存
pub fn flush<T: Transport>(
    transport: &mut T,
    address: u8,
    framebuffer: &Framebuffer,
) -> LinkResult<T::Error> {
    for page in 0..framebuffer.pages() {
        let Some(data) = framebuffer.page(page) else {
            break;
        };
        send_commands(
            transport,
            address,
            &[SET_PAGE_START + page, SET_LOW_COLUMN, SET_HIGH_COLUMN],
        )?;
        trace!("page {}: {} bytes", page, data.len());
        transport.write_register_bulk(address, CONTROL_DATA, data)?;
    }
    Ok(())
}

/// 滚动页范围检查：`start <= end < pages`
pub fn validate_scroll_range(start: u8, end: u8, pages: u8) -> GraphicsResult<()> {
    if start > end || end >= pages {
        return Err(GraphicsError::InvalidParams);
    }
    Ok(())
}

/// 水平滚动（调用方需先检查页范围）
pub fn scroll_horizontal<T: Transport>(
    transport: &mut T,
    config: &DisplayConfig,
    direction: ScrollDirection,
    start: u8,
    end: u8,
) -> LinkResult<T::Error> {
    debug!("scroll {:?}: pages {}..={}", direction, start, end);
    send_commands(
        transport,
        config.address,
        &[
            direction.horizontal_command(),
            DUMMY,
            start,
            config.scroll_interval,
            end,
            DUMMY,
            0xFF,
            ACTIVATE_SCROLL,
        ],
    )
}

/// 垂直加水平滚动，整屏作为滚动区域
pub fn scroll_diagonal<T: Transport>(
    transport: &mut T,
    config: &DisplayConfig,
    direction: ScrollDirection,
    start: u8,
    end: u8,
) -> LinkResult<T::Error> {
    debug!("diagonal scroll {:?}: pages {}..={}", direction, start, end);
    send_commands(
        transport,
        config.address,
        &[
            SET_VERTICAL_SCROLL_AREA,
            0x00,
            config.height() as u8,
            direction.diagonal_command(),
            DUMMY,
            start,
            config.scroll_interval,
            end,
            0x01,
            ACTIVATE_SCROLL,
        ],
    )
}

pub fn stop_scroll<T: Transport>(transport: &mut T, address: u8) -> LinkResult<T::Error> {
    debug!("scroll stopped");
    send_commands(transport, address, &[DEACTIVATE_SCROLL])
}

/// 硬件反色，不修改显存
pub fn invert<T: Transport>(transport: &mut T, address: u8, inverted: bool) -> LinkResult<T::Error> {
    let cmd = if inverted { INVERT_DISPLAY } else { NORMAL_DISPLAY };
    send_commands(transport, address, &[cmd])
}

pub fn display_on<T: Transport>(transport: &mut T, address: u8) -> LinkResult<T::Error> {
    debug!("display on");
    send_commands(transport, address, &[CHARGE_PUMP, CHARGE_PUMP_ENABLE, DISPLAY_ON])
}

pub fn display_off<T: Transport>(transport: &mut T, address: u8) -> LinkResult<T::Error> {
    debug!("display off");
    send_commands(transport, address, &[CHARGE_PUMP, CHARGE_PUMP_DISABLE, DISPLAY_OFF])
}

pub fn set_contrast<T: Transport>(transport: &mut T, address: u8, value: u8) -> LinkResult<T::Error> {
    send_commands(transport, address, &[SET_CONTRAST, value])
}
